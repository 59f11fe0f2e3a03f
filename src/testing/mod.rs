//! Testing utilities and mock implementations
//!
//! Mocks for exercising the roadmap flow without a backend or a browser.

pub mod mocks;

pub use mocks::*;
