//! Launch configuration model and dependency resolver for robotics
//! workspaces.
//!
//! The crate models a robot launch file as a hierarchy of configurable
//! actions (arguments, executable nodes, nested file includes) linked by
//! explicit dependency edges, and provides:
//!
//! - a feature catalog and instantiator ([`models`], [`config`]) turning an
//!   abstract feature-model description into a concrete, user-editable
//!   configuration;
//! - an action graph builder and dependency resolver ([`graph`]) flattening
//!   nested launch files into one graph, detecting structural defects and
//!   cycles, and deriving a deterministic evaluation order.
//!
//! The core performs no I/O and defines no concurrency primitives: callers
//! supply fully materialized descriptions and launch files and receive
//! values or typed errors back. It does not execute or simulate the software
//! the actions refer to.

pub mod config;
pub mod graph;
pub mod models;
pub mod render;

pub use config::{instantiate, instantiate_model, ConfigError, ConfigSession};
pub use graph::{
    build, dependents, independent_subset, topological_order, ActionGraph, ActionNode,
    ActionNodeKind, BuildError, ResolveError,
};
pub use models::{
    ArgFeatureDescription, ArgFeatureInstance, FeatureId, FeatureModelDescription,
    FeatureModelInstance, LaunchAction, LaunchActionId, LaunchActionKind,
    LaunchFeatureDescription, LaunchFeatureInstance, LaunchFile, LaunchId, Selection,
};
