use serde::{Deserialize, Serialize};

/// Explanation search family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationStrategy {
    /// Grow from the opposing unweakened branches.
    Constructive,
    /// Grow from everything opposing, weakening branches included.
    Destructive,
}

impl ExplanationStrategy {
    pub const ALL: [ExplanationStrategy; 2] =
        [ExplanationStrategy::Constructive, ExplanationStrategy::Destructive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constructive => "constructive",
            Self::Destructive => "destructive",
        }
    }
}

impl std::fmt::Display for ExplanationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExplanationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "constructive" => Ok(Self::Constructive),
            "destructive" => Ok(Self::Destructive),
            other => Err(format!("unknown explanation strategy: {other}")),
        }
    }
}
