//! The six branch categories relative to a target.

use serde::{Deserialize, Serialize};

/// Sign of a node's net influence on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Pro,
    Con,
}

impl Polarity {
    /// The path sign a node of this polarity carries toward the target.
    pub fn sign(self) -> i8 {
        match self {
            Self::Pro => 1,
            Self::Con => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Pro => Self::Con,
            Self::Con => Self::Pro,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BranchCategory {
    #[serde(rename = "pro-branches")]
    Pro,
    #[serde(rename = "con-branches")]
    Con,
    #[serde(rename = "unweakened pro-branches")]
    UnweakenedPro,
    #[serde(rename = "unweakened con-branches")]
    UnweakenedCon,
    #[serde(rename = "pro-weakening branches")]
    ProWeakening,
    #[serde(rename = "con-weakening branches")]
    ConWeakening,
}

impl BranchCategory {
    pub const ALL: [BranchCategory; 6] = [
        BranchCategory::Pro,
        BranchCategory::Con,
        BranchCategory::UnweakenedPro,
        BranchCategory::UnweakenedCon,
        BranchCategory::ProWeakening,
        BranchCategory::ConWeakening,
    ];

    /// Report label, e.g. "unweakened con-branches".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pro => "pro-branches",
            Self::Con => "con-branches",
            Self::UnweakenedPro => "unweakened pro-branches",
            Self::UnweakenedCon => "unweakened con-branches",
            Self::ProWeakening => "pro-weakening branches",
            Self::ConWeakening => "con-weakening branches",
        }
    }

    /// Id prefix; branch ids are `<prefix><1-based index>`.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Pro => "Pb",
            Self::Con => "Cb",
            Self::UnweakenedPro => "UnWPb",
            Self::UnweakenedCon => "UnWCb",
            Self::ProWeakening => "PWb",
            Self::ConWeakening => "CWb",
        }
    }

    pub fn branch_id(&self, index: usize) -> String {
        format!("{}{}", self.abbreviation(), index)
    }

    pub fn full(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Pro => Self::Pro,
            Polarity::Con => Self::Con,
        }
    }

    pub fn unweakened(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Pro => Self::UnweakenedPro,
            Polarity::Con => Self::UnweakenedCon,
        }
    }

    /// Branches attacking the unweakened branches of `polarity`.
    pub fn weakening(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Pro => Self::ProWeakening,
            Polarity::Con => Self::ConWeakening,
        }
    }
}

impl std::fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
