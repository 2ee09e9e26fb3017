use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::FeatureId;

/// Tri-state selection of a feature.
///
/// `Unknown` is a first-class state (the user has not decided yet), distinct
/// from an explicit `False`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    True,
    False,
    #[default]
    Unknown,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Mutable state of one argument: whether it is selected and its current
/// value (empty = unresolved). Mutated only through the configuration
/// session's operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgFeatureInstance {
    pub selected: Selection,
    pub value: String,
}

/// Mutable state of one launch feature: selection plus per-argument state,
/// keyed by argument id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchFeatureInstance {
    pub selected: Selection,
    pub args: BTreeMap<FeatureId, ArgFeatureInstance>,
}

/// One user-parameterized configuration, derived from a
/// [`FeatureModelDescription`](crate::models::FeatureModelDescription).
///
/// `id` refers to the source description; `name` is independently editable.
/// Created whole by instantiation and replaced whole on the next catalog
/// load. There is no incremental merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureModelInstance {
    pub id: FeatureId,
    pub name: String,
    pub launch: BTreeMap<FeatureId, LaunchFeatureInstance>,
}
