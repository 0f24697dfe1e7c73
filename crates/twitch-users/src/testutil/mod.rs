//! Test utilities for the twitch-users crate
//!
//! This module provides builders and fixtures for testing. The HTTP mock
//! lives next to the trait it implements in `crate::http::mock`.

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
