//! Target and debate id resolution for sub-debate files.
//!
//! Sub-debate files are named `<debate_id>_T<k>of<n>_<target_id>.json`.

use argex_core::models::Debate;

/// Text after the last `_`, without a trailing `.json`.
pub fn target_from_name(name: &str) -> Option<String> {
    let stem = name.strip_suffix(".json").unwrap_or(name);
    let (_, target) = stem.rsplit_once('_')?;
    if target.is_empty() {
        return None;
    }
    Some(target.to_string())
}

/// Text before the first `_`, or the whole stem for a full debate file.
pub fn debate_id_from_name(name: &str) -> String {
    let stem = name.strip_suffix(".json").unwrap_or(name);
    stem.split_once('_').map_or(stem, |(id, _)| id).to_string()
}

/// Fallback guess at a debate's target: its only argument, otherwise the
/// argument with the most incoming relations (first declared on ties).
pub fn infer_target_by_in_degree(debate: &Debate) -> Option<String> {
    match debate.arguments.as_slice() {
        [] => None,
        [only] => Some(only.id.clone()),
        arguments => {
            let mut best: Option<(&str, usize)> = None;
            for argument in arguments {
                let degree = debate.relations_into(&argument.id).count();
                if best.map_or(true, |(_, d)| degree > d) {
                    best = Some((&argument.id, degree));
                }
            }
            best.map(|(id, _)| id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use argex_core::models::{Argument, Relation};

    use super::*;

    #[test]
    fn target_comes_from_the_last_segment() {
        assert_eq!(target_from_name("1563_T2of3_1563.2.json").as_deref(), Some("1563.2"));
        assert_eq!(target_from_name("1563_T1of1_1563.0").as_deref(), Some("1563.0"));
        assert_eq!(target_from_name("1563.json"), None);
        assert_eq!(target_from_name("1563_.json"), None);
    }

    #[test]
    fn debate_id_is_the_first_segment() {
        assert_eq!(debate_id_from_name("1563_T2of3_1563.2.json"), "1563");
        assert_eq!(debate_id_from_name("1563.json"), "1563");
    }

    #[test]
    fn in_degree_picks_the_first_maximum() {
        let debate = Debate::new(
            vec![
                Argument::new("a", 0.5),
                Argument::new("b", 0.5),
                Argument::new("c", 0.5),
                Argument::new("d", 0.5),
            ],
            vec![
                Relation::new("c", "b", 1.0),
                Relation::new("d", "a", 1.0),
                Relation::new("b", "a", 0.0),
            ],
        );
        assert_eq!(infer_target_by_in_degree(&debate).as_deref(), Some("a"));

        let tie = Debate::new(
            vec![Argument::new("x", 0.5), Argument::new("y", 0.5)],
            Vec::new(),
        );
        assert_eq!(infer_target_by_in_degree(&tie).as_deref(), Some("x"));
        assert_eq!(infer_target_by_in_degree(&Debate::default()), None);
    }
}
