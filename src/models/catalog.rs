use serde::{Deserialize, Serialize};

/// Identifier for a configurable feature (launch file or argument).
///
/// Opaque, unique within its owning catalog, stable across sessions.
pub type FeatureId = String;

/// A configurable argument declared by a launch file.
///
/// `default_value` is empty when the argument has no default. `known_values`
/// is empty when the argument accepts any value; when non-empty, a non-empty
/// `default_value` must be one of its members (see
/// [`FeatureModelDescription::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgFeatureDescription {
    pub id: FeatureId,
    pub name: String,
    #[serde(default)]
    pub default_value: String,
    /// Allowed values, in declaration order. Empty means unconstrained.
    #[serde(default)]
    pub known_values: Vec<String>,
}

impl ArgFeatureDescription {
    /// Whether `value` is acceptable for this argument.
    ///
    /// Unconstrained arguments accept everything, including the empty string.
    pub fn allows(&self, value: &str) -> bool {
        self.known_values.is_empty() || self.known_values.iter().any(|v| v == value)
    }
}

/// A launch file as a configurable feature: its identity plus the arguments
/// it declares. Argument ids are unique within one launch feature
/// (caller-guaranteed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchFeatureDescription {
    pub id: FeatureId,
    pub name: String,
    #[serde(default)]
    pub args: Vec<ArgFeatureDescription>,
}

impl LaunchFeatureDescription {
    /// Look up an argument description by id.
    pub fn arg(&self, id: &str) -> Option<&ArgFeatureDescription> {
        self.args.iter().find(|a| a.id == id)
    }
}

/// Root of the feature catalog. Immutable once loaded; a new load replaces
/// any prior catalog and its derived instance wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureModelDescription {
    pub id: FeatureId,
    pub name: String,
    #[serde(default)]
    pub launch: Vec<LaunchFeatureDescription>,
}

impl FeatureModelDescription {
    /// Look up a launch feature description by id.
    pub fn launch_feature(&self, id: &str) -> Option<&LaunchFeatureDescription> {
        self.launch.iter().find(|l| l.id == id)
    }

    /// Check the catalog invariant: every argument with a non-empty default
    /// and a non-empty allowed-value set must default to an allowed value.
    ///
    /// Returns the ids of the first offending launch feature and argument.
    pub fn validate(&self) -> Result<(), (FeatureId, FeatureId)> {
        for launch in &self.launch {
            for arg in &launch.args {
                if !arg.default_value.is_empty() && !arg.allows(&arg.default_value) {
                    return Err((launch.id.clone(), arg.id.clone()));
                }
            }
        }
        Ok(())
    }
}
