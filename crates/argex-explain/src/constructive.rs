use argex_branches::RankedBranchSet;
use argex_core::errors::ArgexResult;
use argex_core::models::{BranchCategory, Polarity};

use crate::explanation::ExplanationStage;
use crate::probe::RestrictionProbe;

/// Stages of a constructive explanation, or `None` once every branch of both
/// added categories has been tried.
pub(crate) fn search(
    probe: &mut RestrictionProbe<'_>,
    ranked: &RankedBranchSet,
    supporting: Polarity,
) -> ArgexResult<Option<Vec<ExplanationStage>>> {
    let opposing = supporting.opposite();

    let base_category = BranchCategory::unweakened(opposing);
    let base = ExplanationStage::with_branches(base_category, ranked.original(base_category));
    let mut nodes = base.node_ids.clone();

    let added_category = BranchCategory::full(supporting);
    let mut added = ExplanationStage::empty(added_category);
    if probe.holds(&nodes)? {
        return Ok(Some(vec![base, added]));
    }

    for branch in ranked.ranked(added_category) {
        added.push(branch);
        nodes.extend(branch.nodes.iter().cloned());
        if probe.holds(&nodes)? {
            return Ok(Some(vec![base, added]));
        }
    }

    let fallback_category = BranchCategory::weakening(opposing);
    let mut fallback = ExplanationStage::empty(fallback_category);
    for branch in ranked.ranked(fallback_category) {
        fallback.push(branch);
        nodes.extend(branch.nodes.iter().cloned());
        if probe.holds(&nodes)? {
            return Ok(Some(vec![base, added, fallback]));
        }
    }

    Ok(None)
}
