//! Slipway - deployment target resolution for push-to-deploy pipelines
//!
//! Given a source repository that has just been pushed, Slipway decides
//! which of a closed set of build strategies applies - compiled project,
//! loose website, or plain file copy - and produces a fully parameterized
//! builder specification for the downstream execution stage. Ambiguous
//! layouts fail with typed, explainable errors because they surface
//! directly to end users as the reason their deployment failed.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod solution;
pub mod vsproject;

// Re-exports for convenience
pub use config::{effective_override, DeployConfig};
pub use error::{SlipwayError, SlipwayResult};
pub use models::{BuilderKind, BuilderSpec, ProjectDescriptor, SolutionDescriptor};
pub use resolver::{resolve, NoopNoticeSink, NoticeSink, StderrNoticeSink};
