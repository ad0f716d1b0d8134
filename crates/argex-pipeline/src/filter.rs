//! Classification of a target by the weights recorded on the debate.

use serde::{Deserialize, Serialize};

use argex_core::errors::{ArgexError, ArgexResult, SearchError};
use argex_core::models::{Debate, Direction};

/// Why a recorded debate is, or is not, worth explaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterReason {
    Changed,
    NoChange,
    MissingWeight,
    TargetNotInNodes,
}

impl FilterReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Changed => "changed",
            Self::NoChange => "no_change",
            Self::MissingWeight => "missing_weight",
            Self::TargetNotInNodes => "target_not_in_nodes",
        }
    }

    pub fn of(debate: &Debate, target_id: &str) -> Self {
        match classify_recorded(debate, target_id) {
            Ok(Direction::Unchanged) => Self::NoChange,
            Ok(_) => Self::Changed,
            Err(ArgexError::Search(_)) => Self::TargetNotInNodes,
            Err(_) => Self::MissingWeight,
        }
    }
}

impl std::fmt::Display for FilterReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the target from its recorded initial and final weights.
pub fn classify_recorded(debate: &Debate, target_id: &str) -> ArgexResult<Direction> {
    let target = debate
        .argument(target_id)
        .ok_or_else(|| SearchError::TargetNotFound {
            target_id: target_id.to_string(),
        })?;
    let initial = target.require_initial()?;
    let final_weight = target.require_final()?;
    Ok(Direction::from_weights(initial, final_weight))
}

#[cfg(test)]
mod tests {
    use argex_core::errors::{WeightError, WeightKind};
    use argex_core::models::Argument;

    use super::*;

    fn debate(initial: Option<f64>, final_weight: Option<f64>) -> Debate {
        let mut argument = Argument::new("t", 0.0);
        argument.initial_weight = initial;
        argument.final_weight = final_weight;
        Debate::new(vec![argument], Vec::new())
    }

    #[test]
    fn reasons() {
        assert_eq!(FilterReason::of(&debate(Some(0.5), Some(0.6)), "t"), FilterReason::Changed);
        assert_eq!(FilterReason::of(&debate(Some(0.5), Some(0.5)), "t"), FilterReason::NoChange);
        assert_eq!(FilterReason::of(&debate(Some(0.5), None), "t"), FilterReason::MissingWeight);
        assert_eq!(FilterReason::of(&debate(None, Some(0.5)), "t"), FilterReason::MissingWeight);
        assert_eq!(
            FilterReason::of(&debate(Some(0.5), Some(0.6)), "u"),
            FilterReason::TargetNotInNodes
        );
    }

    #[test]
    fn classify_surfaces_the_missing_kind() {
        let err = classify_recorded(&debate(Some(0.5), None), "t").unwrap_err();
        assert!(matches!(
            err,
            ArgexError::Weight(WeightError::MissingWeight { kind: WeightKind::Final, .. })
        ));
        assert_eq!(
            classify_recorded(&debate(Some(0.5), Some(0.2)), "t").unwrap(),
            Direction::Weakening
        );
    }
}
