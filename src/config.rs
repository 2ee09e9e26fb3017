//! Configuration instances: instantiating a feature model and editing it.
//!
//! [`instantiate`] and [`instantiate_model`] are pure mappings from catalog
//! descriptions to fresh instance state. [`ConfigSession`] owns one
//! description/instance pair and is the only mutation surface: selection
//! toggles and value edits go through it, are validated up front, and either
//! apply fully or not at all. Loading a new description replaces the instance
//! wholesale; callers that want to preserve user edits across a reload must
//! snapshot beforehand.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{
    ArgFeatureInstance, FeatureId, FeatureModelDescription, FeatureModelInstance,
    LaunchFeatureDescription, LaunchFeatureInstance, Selection,
};

/// User or caller input errors on the mutation surface. Always recoverable;
/// the failed call leaves the instance untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown launch feature '{0}'")]
    UnknownFeature(FeatureId),

    #[error("launch feature '{feature}' declares no argument '{arg}'")]
    UnknownArg { feature: FeatureId, arg: FeatureId },

    #[error("value '{value}' is not among the known values of argument '{arg}'")]
    InvalidValue { arg: FeatureId, value: String },
}

/// Name given to a fresh instance before the user renames it.
const DEFAULT_INSTANCE_NAME: &str = "Custom Configuration";

/// Build a fresh instance of one launch feature from its description.
///
/// Every argument starts at its default value (possibly empty) with
/// `selected` explicitly `False`. Pure and deterministic; argument id
/// uniqueness is caller-guaranteed and not validated here.
pub fn instantiate(desc: &LaunchFeatureDescription) -> LaunchFeatureInstance {
    let args = desc
        .args
        .iter()
        .map(|arg| {
            (
                arg.id.clone(),
                ArgFeatureInstance {
                    selected: Selection::False,
                    value: arg.default_value.clone(),
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    LaunchFeatureInstance {
        selected: Selection::False,
        args,
    }
}

/// Build a fresh instance of a whole feature model, one entry per launch
/// feature, keyed by the description's ids. Replaces, never merges.
pub fn instantiate_model(fm: &FeatureModelDescription) -> FeatureModelInstance {
    let launch = fm
        .launch
        .iter()
        .map(|desc| (desc.id.clone(), instantiate(desc)))
        .collect::<BTreeMap<_, _>>();

    FeatureModelInstance {
        id: fm.id.clone(),
        name: DEFAULT_INSTANCE_NAME.to_string(),
        launch,
    }
}

/// One active configuration session: the loaded catalog description plus the
/// instance the user is editing.
///
/// Explicitly owned by the caller so that independent sessions cannot
/// interfere with each other. All operations are synchronous and immediately
/// consistent.
#[derive(Debug, Clone)]
pub struct ConfigSession {
    model: FeatureModelDescription,
    instance: FeatureModelInstance,
}

impl ConfigSession {
    /// Start a session from a fully materialized catalog description.
    pub fn new(model: FeatureModelDescription) -> Self {
        let instance = instantiate_model(&model);
        Self { model, instance }
    }

    /// Replace the catalog and discard all instance state, including user
    /// edits. Replace-on-reload is wholesale by design.
    pub fn load_model(&mut self, model: FeatureModelDescription) {
        self.instance = instantiate_model(&model);
        self.model = model;
    }

    pub fn model(&self) -> &FeatureModelDescription {
        &self.model
    }

    pub fn instance(&self) -> &FeatureModelInstance {
        &self.instance
    }

    /// Rename the instance. The name is independent of the catalog's.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.instance.name = name.into();
    }

    /// Set the tri-state selection of a launch feature.
    pub fn select(&mut self, feature: &str, selected: Selection) -> Result<(), ConfigError> {
        let launch = self
            .instance
            .launch
            .get_mut(feature)
            .ok_or_else(|| ConfigError::UnknownFeature(feature.to_string()))?;
        launch.selected = selected;
        Ok(())
    }

    /// Set an argument's value, validating it against the argument's known
    /// values first. Does not touch the selection flag.
    pub fn set_arg_value(
        &mut self,
        feature: &str,
        arg: &str,
        value: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let value = value.into();
        let desc = self.arg_description(feature, arg)?;
        if !desc.allows(&value) {
            return Err(ConfigError::InvalidValue {
                arg: arg.to_string(),
                value,
            });
        }

        // Validation passed; the instance entry is guaranteed to exist
        // because instance and description are built from the same catalog.
        if let Some(state) = self
            .instance
            .launch
            .get_mut(feature)
            .and_then(|l| l.args.get_mut(arg))
        {
            state.value = value;
        }
        Ok(())
    }

    /// Restore an argument to its catalog default. No-op if already there.
    pub fn reset_to_default(&mut self, feature: &str, arg: &str) -> Result<(), ConfigError> {
        let default = self.arg_description(feature, arg)?.default_value.clone();
        if let Some(state) = self
            .instance
            .launch
            .get_mut(feature)
            .and_then(|l| l.args.get_mut(arg))
        {
            state.value = default;
        }
        Ok(())
    }

    fn arg_description(
        &self,
        feature: &str,
        arg: &str,
    ) -> Result<&crate::models::ArgFeatureDescription, ConfigError> {
        let launch = self
            .model
            .launch_feature(feature)
            .ok_or_else(|| ConfigError::UnknownFeature(feature.to_string()))?;
        launch.arg(arg).ok_or_else(|| ConfigError::UnknownArg {
            feature: feature.to_string(),
            arg: arg.to_string(),
        })
    }
}
