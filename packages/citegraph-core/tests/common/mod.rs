//! Common test utilities for citegraph-core
//!
//! Fixtures (dataset snippets) and a recording sink that logs every call
//! the loader makes.

#![allow(dead_code)]

mod fixtures;
mod recording_sink;

pub use fixtures::*;
pub use recording_sink::*;
