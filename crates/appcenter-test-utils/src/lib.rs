//! Shared test utilities for the appcenter-artifacts workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`fake`] — [`FakeRemoteDir`], an in-memory agent directory
//! - [`workspace`] — [`TestWorkspace`], an on-disk agent workspace

pub mod fake;
pub mod workspace;

pub use fake::{FakeRemoteDir, FakeRemoteFile};
pub use workspace::TestWorkspace;

/// Path of the `xiola.apk` fixture, as the agent reports it.
pub const TEST_FILE_PATH: &str = "/agent/workspace/three/days/xiola.apk";

/// Size of the `xiola.apk` fixture in bytes.
pub const TEST_FILE_SIZE: u64 = 41;
