//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - Failing repository implementations for exercising error paths
//! - `TestAppStateBuilder` for constructing an `AppState` backed by memory

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
