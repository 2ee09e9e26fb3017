//! Ordering and impact queries over a flattened [`ActionGraph`].

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::graph::{ActionGraph, ActionNode};
use crate::models::LaunchActionId;

/// Defects discovered only by traversal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The dependency relation contains a cycle. The payload is the actual
    /// back-edge walk (first and last element are the same action), not just
    /// a statement that some cycle exists.
    #[error("dependency cycle: {}", .0.join(" -> "))]
    Cycle(Vec<LaunchActionId>),

    /// A query named an id that is not in the graph.
    #[error("unknown action id '{0}'")]
    UnknownAction(LaunchActionId),
}

/// Visit state for the three-color depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Compute a dependency-respecting evaluation order over the whole graph.
///
/// Every action appears after all of its dependencies. Ties are broken by
/// first-seen pre-order declaration order, so the output is deterministic
/// and diff-friendly. No partial order is returned on failure.
pub fn topological_order(graph: &ActionGraph) -> Result<Vec<LaunchActionId>, ResolveError> {
    let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(graph.len());
    let mut path: Vec<&ActionNode> = Vec::new();
    let mut order: Vec<LaunchActionId> = Vec::with_capacity(graph.len());

    for node in graph.iter() {
        visit(graph, node, &mut marks, &mut path, &mut order)?;
    }

    Ok(order)
}

fn visit<'g>(
    graph: &'g ActionGraph,
    node: &'g ActionNode,
    marks: &mut HashMap<&'g str, Mark>,
    path: &mut Vec<&'g ActionNode>,
    order: &mut Vec<LaunchActionId>,
) -> Result<(), ResolveError> {
    match marks.get(node.id.as_str()) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => {
            // Back edge. Report the closed walk from the first occurrence of
            // this node on the current path back to itself.
            let start = path
                .iter()
                .position(|n| n.id == node.id)
                .unwrap_or_default();
            let mut cycle: Vec<LaunchActionId> =
                path[start..].iter().map(|n| n.id.clone()).collect();
            cycle.push(node.id.clone());
            return Err(ResolveError::Cycle(cycle));
        }
        None => {}
    }

    marks.insert(node.id.as_str(), Mark::InProgress);
    path.push(node);

    for dep in &node.dependencies {
        // The builder guarantees every referenced id exists.
        if let Some(dep_node) = graph.get(dep) {
            visit(graph, dep_node, marks, path, order)?;
        }
    }

    path.pop();
    marks.insert(node.id.as_str(), Mark::Done);
    order.push(node.id.clone());
    Ok(())
}

/// All actions whose dependency set transitively includes `id`.
///
/// Answers "what breaks if this action's configuration changes". Returns the
/// empty set for an action nothing depends on, and fails for an id absent
/// from the graph.
pub fn dependents(
    graph: &ActionGraph,
    id: &str,
) -> Result<BTreeSet<LaunchActionId>, ResolveError> {
    if !graph.contains(id) {
        return Err(ResolveError::UnknownAction(id.to_string()));
    }

    // Reverse adjacency: dependency -> dependents.
    let mut reverse: HashMap<&str, Vec<&LaunchActionId>> = HashMap::new();
    for (dependent, dependency) in graph.edges() {
        reverse.entry(dependency.as_str()).or_default().push(dependent);
    }

    let mut result = BTreeSet::new();
    let mut stack: Vec<&str> = vec![id];
    while let Some(current) = stack.pop() {
        if let Some(deps) = reverse.get(current) {
            for dependent in deps {
                if result.insert((*dependent).clone()) {
                    stack.push(dependent.as_str());
                }
            }
        }
    }

    Ok(result)
}

/// Actions with no dependencies, in declaration order. These are the valid
/// starting points for incremental evaluation.
pub fn independent_subset(graph: &ActionGraph) -> Vec<LaunchActionId> {
    graph
        .iter()
        .filter(|node| node.dependencies.is_empty())
        .map(|node| node.id.clone())
        .collect()
}
