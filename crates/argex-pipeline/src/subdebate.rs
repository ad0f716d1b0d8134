//! One sub-debate per target of a full debate.
//!
//! The targets of debate `D` are the arguments attached to its root `D.0`
//! through a neutral relation; a debate without such arguments has the root
//! as its only target. A target's sub-debate keeps every argument with a
//! path of non-neutral relations into it, and the relations among them.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use argex_core::constants::ROOT_ARGUMENT_SUFFIX;
use argex_core::models::Debate;

use crate::unit::DebateUnit;

pub fn subdebate_targets(debate_id: &str, debate: &Debate) -> Vec<String> {
    let root = format!("{debate_id}{ROOT_ARGUMENT_SUFFIX}");
    let targets: Vec<String> = debate
        .relations_into(&root)
        .filter(|r| r.is_neutral())
        .map(|r| r.source_id.clone())
        .collect();
    if targets.is_empty() {
        vec![root]
    } else {
        targets
    }
}

/// `target` and everything reaching it backwards over non-neutral relations.
pub fn connected_arguments<'a>(target: &'a str, debate: &'a Debate) -> HashSet<&'a str> {
    let mut connected = HashSet::from([target]);
    let mut queue = VecDeque::from([target]);
    while let Some(current) = queue.pop_front() {
        for relation in debate.relations_into(current) {
            if !relation.is_neutral() && connected.insert(relation.source_id.as_str()) {
                queue.push_back(relation.source_id.as_str());
            }
        }
    }
    connected
}

/// Units named `<D>_T<k>of<n>_<target>`, in target order.
pub fn extract_subdebates(debate_id: &str, debate: &Debate) -> Vec<DebateUnit> {
    let targets = subdebate_targets(debate_id, debate);
    let n = targets.len();
    let units: Vec<DebateUnit> = targets
        .into_iter()
        .enumerate()
        .map(|(i, target_id)| {
            let members = connected_arguments(&target_id, debate);
            let sub = debate.restricted_to(&members);
            DebateUnit {
                name: format!("{debate_id}_T{}of{n}_{target_id}", i + 1),
                debate_id: debate_id.to_string(),
                target_id: target_id.clone(),
                debate: sub,
            }
        })
        .collect();
    debug!(debate_id, units = units.len(), "sub-debates extracted");
    units
}
