use serde::{Deserialize, Serialize};

/// Branch ordering applied before the explanation search consumes branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingHeuristic {
    /// Ascending by the root's final weight.
    #[serde(rename = "weak to strong")]
    WeakToStrong,
    /// Descending by the root's final weight.
    #[serde(rename = "strong to weak")]
    StrongToWeak,
    /// Ascending by branch length.
    #[serde(rename = "small to large")]
    SmallToLarge,
}

impl RankingHeuristic {
    pub const ALL: [RankingHeuristic; 3] = [
        RankingHeuristic::WeakToStrong,
        RankingHeuristic::StrongToWeak,
        RankingHeuristic::SmallToLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeakToStrong => "weak to strong",
            Self::StrongToWeak => "strong to weak",
            Self::SmallToLarge => "small to large",
        }
    }
}

impl std::fmt::Display for RankingHeuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RankingHeuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weak to strong" | "weak_to_strong" => Ok(Self::WeakToStrong),
            "strong to weak" | "strong_to_weak" => Ok(Self::StrongToWeak),
            "small to large" | "small_to_large" => Ok(Self::SmallToLarge),
            other => Err(format!("unknown ranking heuristic: {other}")),
        }
    }
}
