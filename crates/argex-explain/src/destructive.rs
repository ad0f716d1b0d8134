use argex_branches::RankedBranchSet;
use argex_core::errors::ArgexResult;
use argex_core::models::{BranchCategory, Polarity};

use crate::explanation::ExplanationStage;
use crate::probe::RestrictionProbe;

/// Stages of a destructive explanation, always three, or `None` when the
/// supporting branches run out.
pub(crate) fn search(
    probe: &mut RestrictionProbe<'_>,
    ranked: &RankedBranchSet,
    supporting: Polarity,
) -> ArgexResult<Option<Vec<ExplanationStage>>> {
    let opposing = supporting.opposite();

    let unweakened_category = BranchCategory::unweakened(opposing);
    let weakening_category = BranchCategory::weakening(opposing);
    let unweakened =
        ExplanationStage::with_branches(unweakened_category, ranked.original(unweakened_category));
    let weakening =
        ExplanationStage::with_branches(weakening_category, ranked.original(weakening_category));

    let mut nodes = unweakened.node_ids.clone();
    nodes.extend(weakening.node_ids.iter().cloned());

    let added_category = BranchCategory::full(supporting);
    let mut added = ExplanationStage::empty(added_category);
    if probe.holds(&nodes)? {
        return Ok(Some(vec![unweakened, weakening, added]));
    }

    for branch in ranked.ranked(added_category) {
        added.push(branch);
        nodes.extend(branch.nodes.iter().cloned());
        if probe.holds(&nodes)? {
            return Ok(Some(vec![unweakened, weakening, added]));
        }
    }

    Ok(None)
}
