//! Scenario cases organized by category

pub mod collapse;
pub mod constraints;
pub mod fade;
pub mod fonts;
pub mod overscroll;

use crate::runner::TestSuite;

/// Create all scenario suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        collapse::suite(),
        fade::suite(),
        overscroll::suite(),
        constraints::suite(),
        fonts::suite(),
    ]
}
