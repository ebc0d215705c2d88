//! Collapse Scenario Suite
//!
//! Scenario tests for the collapsing header engine, run against the headless
//! toolkit from `collapse_core`.
//!
//! # Scenario Categories
//!
//! - **collapse**: ratio mapping, endpoints, snap-once and rubber-band
//! - **fade**: fade-out ratios and fade-in after collapse
//! - **overscroll**: short content padding and aborted ticks
//! - **constraints**: directional signs and missing roles
//! - **fonts**: font size per element kind

pub mod harness;
pub mod runner;
pub mod scenarios;

pub use harness::{ScenarioContext, ScenarioHarness, TestResult};
pub use runner::{RunResult, TestRunner};
