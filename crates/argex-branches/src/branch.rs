//! Extracted branches.

use serde::{Deserialize, Serialize};

use argex_core::models::BranchCategory;

/// A rooted sub-tree collected relative to a target. `nodes[0]` is the root;
/// the rest follow traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub category: BranchCategory,
    pub nodes: Vec<String>,
}

impl Branch {
    pub fn new(category: BranchCategory, index: usize, nodes: Vec<String>) -> Self {
        Self {
            id: category.branch_id(index),
            category,
            nodes,
        }
    }

    pub fn root(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The six categories for one target, each in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchSet {
    pub target_id: String,
    pub pro: Vec<Branch>,
    pub con: Vec<Branch>,
    pub unweakened_pro: Vec<Branch>,
    pub unweakened_con: Vec<Branch>,
    pub pro_weakening: Vec<Branch>,
    pub con_weakening: Vec<Branch>,
}

impl BranchSet {
    pub fn empty(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, category: BranchCategory) -> &[Branch] {
        match category {
            BranchCategory::Pro => &self.pro,
            BranchCategory::Con => &self.con,
            BranchCategory::UnweakenedPro => &self.unweakened_pro,
            BranchCategory::UnweakenedCon => &self.unweakened_con,
            BranchCategory::ProWeakening => &self.pro_weakening,
            BranchCategory::ConWeakening => &self.con_weakening,
        }
    }

    pub fn get_mut(&mut self, category: BranchCategory) -> &mut Vec<Branch> {
        match category {
            BranchCategory::Pro => &mut self.pro,
            BranchCategory::Con => &mut self.con,
            BranchCategory::UnweakenedPro => &mut self.unweakened_pro,
            BranchCategory::UnweakenedCon => &mut self.unweakened_con,
            BranchCategory::ProWeakening => &mut self.pro_weakening,
            BranchCategory::ConWeakening => &mut self.con_weakening,
        }
    }

    /// Categories in report order with their branches.
    pub fn iter(&self) -> impl Iterator<Item = (BranchCategory, &[Branch])> + '_ {
        BranchCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total_branches(&self) -> usize {
        self.iter().map(|(_, b)| b.len()).sum()
    }

    /// Look a branch up by id across all categories.
    pub fn find(&self, id: &str) -> Option<&Branch> {
        self.iter().flat_map(|(_, b)| b.iter()).find(|b| b.id == id)
    }
}
