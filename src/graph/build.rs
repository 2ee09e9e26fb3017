//! Flattening a launch file's nested action tree into an [`ActionGraph`].

use thiserror::Error;

use crate::graph::{ActionGraph, ActionNode, ActionNodeKind};
use crate::models::{LaunchAction, LaunchActionId, LaunchActionKind, LaunchFile};

/// Structural defects in a launch file's declared actions. Always fatal to
/// building that graph, never silently repaired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Two actions share an id after flattening (e.g. the same id reused
    /// across an include boundary). Overwriting either one would corrupt
    /// dependency resolution, so the build fails instead.
    #[error("duplicate action id '{0}' after flattening")]
    DuplicateId(LaunchActionId),

    /// An action depends on an id that does not exist anywhere in the
    /// flattened graph.
    #[error("action '{action}' depends on unknown action '{missing}'")]
    DanglingDependency {
        action: LaunchActionId,
        missing: LaunchActionId,
    },
}

/// Flatten `root` into a single action graph.
///
/// Include actions are inserted as nodes in their own right and their nested
/// lists hoisted recursively into the same graph, each nested action keeping
/// its locally declared dependencies plus a provenance link to the include
/// that introduced it. Dependency ids are resolved against the final
/// flattened mapping, so cross-boundary and forward references are legal.
///
/// No cycle detection happens here; that is
/// [`topological_order`](crate::graph::topological_order)'s job once a
/// structurally valid graph exists.
pub fn build(root: &LaunchFile) -> Result<ActionGraph, BuildError> {
    let mut graph = ActionGraph::new();
    flatten(&root.actions, None, &mut graph)?;

    // References can only be checked once every scope has been flattened.
    for node in graph.iter() {
        for dep in &node.dependencies {
            if !graph.contains(dep) {
                return Err(BuildError::DanglingDependency {
                    action: node.id.clone(),
                    missing: dep.clone(),
                });
            }
        }
    }

    Ok(graph)
}

fn flatten(
    actions: &[LaunchAction],
    included_by: Option<&LaunchActionId>,
    graph: &mut ActionGraph,
) -> Result<(), BuildError> {
    for action in actions {
        let kind = match &action.kind {
            LaunchActionKind::Arg => ActionNodeKind::Arg,
            LaunchActionKind::Node => ActionNodeKind::Node,
            LaunchActionKind::Include { .. } => ActionNodeKind::Include,
        };

        let inserted = graph.insert(ActionNode {
            id: action.id.clone(),
            name: action.name.clone(),
            kind,
            dependencies: action.dependencies.clone(),
            included_by: included_by.cloned(),
        });
        if !inserted {
            return Err(BuildError::DuplicateId(action.id.clone()));
        }

        if let LaunchActionKind::Include { actions: nested } = &action.kind {
            flatten(nested, Some(&action.id), graph)?;
        }
    }
    Ok(())
}
