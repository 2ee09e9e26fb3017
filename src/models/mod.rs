//! Domain models for launchmap.
//!
//! # Core Concepts
//!
//! ## Descriptions (immutable catalog data)
//!
//! - [`FeatureModelDescription`]: Root of the feature catalog, listing which
//!   launch files exist and which arguments each one declares.
//! - [`LaunchFeatureDescription`] / [`ArgFeatureDescription`]: One configurable
//!   launch file and its arguments (default value, allowed values).
//! - [`LaunchFile`] / [`LaunchAction`]: A launch file's nested action list
//!   (arguments, nodes, includes) with explicit dependency edges, as supplied
//!   by whatever parsed the source file.
//!
//! ## Instances (mutable configuration state)
//!
//! - [`FeatureModelInstance`]: One user-parameterized configuration, created
//!   from a description and replaced wholesale on the next catalog load.
//! - [`LaunchFeatureInstance`] / [`ArgFeatureInstance`]: Selection state and
//!   current argument values, keyed by feature id.
//! - [`Selection`]: Explicit tri-state (true / false / unknown), never a
//!   nullable boolean.

mod catalog;
mod instance;
mod launch;

pub use catalog::*;
pub use instance::*;
pub use launch::*;
