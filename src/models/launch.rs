use serde::{Deserialize, Serialize};

/// Identifier for a launch file within a workspace.
pub type LaunchId = String;

/// Identifier for an action. Unique within the action graph it belongs to,
/// not globally.
pub type LaunchActionId = String;

/// A launch file as parsed from its source: a named, ordered list of actions.
///
/// Actions may nest (an include carries the included file's own action list),
/// so this is a tree-shaped source representation. The
/// [`graph`](crate::graph) module flattens it into a single action graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchFile {
    pub id: LaunchId,
    pub name: String,
    #[serde(default)]
    pub actions: Vec<LaunchAction>,
}

/// One declared action in a launch file.
///
/// `dependencies` lists the ids of actions this one must run after. Ids are
/// resolved against the fully flattened graph, so a nested action may depend
/// on an action from the including scope and vice versa, and declaration
/// order does not restrict what may be referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchAction {
    pub id: LaunchActionId,
    pub name: String,
    #[serde(flatten)]
    pub kind: LaunchActionKind,
    #[serde(default)]
    pub dependencies: Vec<LaunchActionId>,
}

/// What an action does.
///
/// - `Arg`: Declares a configurable argument.
/// - `Node`: Starts an executable node.
/// - `Include`: Pulls in another launch file; carries that file's nested
///   action list prior to flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LaunchActionKind {
    Arg,
    Node,
    Include {
        #[serde(default)]
        actions: Vec<LaunchAction>,
    },
}

impl LaunchActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arg => "arg",
            Self::Node => "node",
            Self::Include { .. } => "include",
        }
    }
}
