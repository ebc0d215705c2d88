//! Collapse Core
//!
//! Scroll-linked collapsing header engine. A single vertical scroll offset is
//! mapped to a collapse ratio in `[0, 1]`, and every registered element
//! attribute is interpolated linearly between its expanded baseline and its
//! collapsed target.
//!
//! # Architecture
//!
//! - [`CollapsingHeader`] - registration API and scroll handler
//! - [`HeaderCollapseState`] - collapse range, overscroll guard, snap logic
//! - [`interpolate`] - per-attribute setters with directional constraint signs
//! - [`accessor`] - reads baselines from concrete elements
//! - [`ViewHost`] / [`ScrollSource`] - the host toolkit seam
//!
//! The engine is single-threaded and synchronous; every call happens on the
//! UI thread in response to a scroll notification.
//!
//! # Features
//!
//! - `headless` - in-memory toolkit implementing the host traits
//!
//! # Example
//!
//! ```ignore
//! use collapse_core::prelude::*;
//!
//! let mut header = CollapsingHeader::new(&host, header_view);
//! header.add_transforming_element(&host, avatar, [
//!     Transform::new(Attribute::Width, -32.0),
//!     Transform::new(Attribute::Height, -32.0),
//!     Transform::new(Attribute::CornerRadius, -16.0),
//! ])?;
//!
//! // scroll callback
//! header.collapse_with_scroll(&mut host, &mut scroll_view);
//! ```

pub mod accessor;
pub mod config;
pub mod constraints;
mod error;
pub mod geometry;
mod header;
pub mod host;
pub mod interpolate;
mod state;
mod transform;

#[cfg(any(test, feature = "headless"))]
pub mod headless;

pub use config::CollapseConfig;
pub use error::{CollapseError, Result};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use header::{CollapsingHeader, FadeInId, FadeOutId, TickOutcome, TransformingId};
pub use host::{
    ConstraintRole, ElementKind, FontSized, LayoutAttribute, LayoutConstraint, ScrollSource,
    ViewHost,
};
pub use state::{HeaderCollapseState, OverscrollGuard};
pub use transform::{Attribute, Transform, TransformCurve};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CollapseConfig;
    pub use crate::error::{CollapseError, Result};
    pub use crate::header::{CollapsingHeader, FadeInId, FadeOutId, TickOutcome, TransformingId};
    pub use crate::host::{
        ConstraintRole, ElementKind, FontSized, LayoutAttribute, LayoutConstraint, ScrollSource,
        ViewHost,
    };
    pub use crate::transform::{Attribute, Transform, TransformCurve};
}
