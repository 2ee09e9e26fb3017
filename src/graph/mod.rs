//! Action graph: the flattened form of a launch file.
//!
//! A launch file is a tree (includes nest their own action lists), but
//! dependencies cut across nesting, so the working representation is a flat
//! arena of nodes indexed by action id. Each node keeps a provenance link to
//! the include action that introduced it instead of a back-reference into a
//! recursive structure, which keeps traversal free of ownership cycles.
//!
//! [`build`] flattens and structurally validates; [`topological_order`],
//! [`dependents`] and [`independent_subset`] answer ordering and impact
//! queries over the result.

mod build;
mod resolve;

pub use build::{build, BuildError};
pub use resolve::{dependents, independent_subset, topological_order, ResolveError};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::LaunchActionId;

/// The kind of a flattened action. Includes remain graph nodes so that other
/// actions can depend on "the include completing", but their nested lists
/// have already been hoisted into the same graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionNodeKind {
    Arg,
    Node,
    Include,
}

impl ActionNodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arg => "arg",
            Self::Node => "node",
            Self::Include => "include",
        }
    }
}

/// One flattened action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionNode {
    pub id: LaunchActionId,
    pub name: String,
    pub kind: ActionNodeKind,
    /// Ids this action must run after, in declaration order.
    pub dependencies: Vec<LaunchActionId>,
    /// The include action that introduced this one, if any. Provenance only;
    /// nesting confers no dependency edge.
    pub included_by: Option<LaunchActionId>,
}

/// Flat arena of actions with the pre-order declaration sequence preserved.
///
/// Owned exclusively by the resolver invocation that built it; never shared
/// or mutated concurrently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionGraph {
    nodes: HashMap<LaunchActionId, ActionNode>,
    /// Action ids in first-seen pre-order of the source tree. Drives the
    /// deterministic tie-break in ordering queries.
    order: Vec<LaunchActionId>,
}

impl ActionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, keeping the first occupant on id collision.
    /// Returns false if the id was already present.
    pub fn insert(&mut self, node: ActionNode) -> bool {
        use std::collections::hash_map::Entry;

        match self.nodes.entry(node.id.clone()) {
            Entry::Vacant(e) => {
                self.order.push(node.id.clone());
                e.insert(node);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ActionNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionNode> {
        self.order.iter().map(|id| &self.nodes[id])
    }

    /// All `(dependent, dependency)` edges, dependents in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&LaunchActionId, &LaunchActionId)> {
        self.iter()
            .flat_map(|node| node.dependencies.iter().map(move |dep| (&node.id, dep)))
    }
}
