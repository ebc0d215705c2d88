//! Host toolkit abstraction
//!
//! The collapse engine never owns views. It talks to the hosting toolkit
//! through two narrow traits:
//!
//! - [`ViewHost`] - element geometry, rendering properties, fonts and the
//!   layout constraint graph
//! - [`ScrollSource`] - the scrollable content driving the collapse
//!
//! Elements and constraints are referred to by host-issued handles, the same
//! way layout nodes are addressed by id rather than by reference.

use std::fmt::Debug;
use std::hash::Hash;

use crate::geometry::{EdgeInsets, Rect};

// ============================================================================
// Layout Constraints
// ============================================================================

/// Attribute on one side of a layout constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutAttribute {
    Left,
    Right,
    Top,
    Bottom,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    LastBaseline,
    FirstBaseline,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    LeadingMargin,
    TrailingMargin,
    CenterXWithinMargins,
    CenterYWithinMargins,
    NotAnAttribute,
}

/// A constraint relating one element's attribute to another's
///
/// `item1.attr1 = multiplier * item2.attr2 + constant`. The constant is read
/// and written through [`ViewHost`]; only the endpoints live here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConstraint<E> {
    pub first_item: E,
    pub first_attribute: LayoutAttribute,
    /// `None` for size constraints on a single element
    pub second_item: Option<E>,
    pub second_attribute: LayoutAttribute,
}

impl<E: PartialEq + Copy> LayoutConstraint<E> {
    /// The attribute this constraint pins on `element`, if it touches it
    pub fn attribute_for(&self, element: E) -> Option<LayoutAttribute> {
        if self.first_item == element {
            Some(self.first_attribute)
        } else if self.second_item == Some(element) {
            Some(self.second_attribute)
        } else {
            None
        }
    }
}

/// Directional role of a constraint relative to a registered element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintRole {
    Top,
    TopMargin,
    Bottom,
    BottomMargin,
    Leading,
    LeadingMargin,
    Trailing,
    TrailingMargin,
    Width,
    Height,
}

impl ConstraintRole {
    /// Roles adjusted by horizontal position transforms
    pub const HORIZONTAL: [ConstraintRole; 4] = [
        ConstraintRole::Leading,
        ConstraintRole::LeadingMargin,
        ConstraintRole::Trailing,
        ConstraintRole::TrailingMargin,
    ];

    /// Roles adjusted by vertical position transforms
    pub const VERTICAL: [ConstraintRole; 4] = [
        ConstraintRole::Top,
        ConstraintRole::TopMargin,
        ConstraintRole::Bottom,
        ConstraintRole::BottomMargin,
    ];

    /// Classify a constraint attribute; attributes without a role are ignored
    pub fn from_attribute(attribute: LayoutAttribute) -> Option<Self> {
        match attribute {
            LayoutAttribute::Top => Some(ConstraintRole::Top),
            LayoutAttribute::TopMargin => Some(ConstraintRole::TopMargin),
            LayoutAttribute::Bottom => Some(ConstraintRole::Bottom),
            LayoutAttribute::BottomMargin => Some(ConstraintRole::BottomMargin),
            LayoutAttribute::Leading => Some(ConstraintRole::Leading),
            LayoutAttribute::LeadingMargin => Some(ConstraintRole::LeadingMargin),
            LayoutAttribute::Trailing => Some(ConstraintRole::Trailing),
            LayoutAttribute::TrailingMargin => Some(ConstraintRole::TrailingMargin),
            LayoutAttribute::Width => Some(ConstraintRole::Width),
            LayoutAttribute::Height => Some(ConstraintRole::Height),
            _ => None,
        }
    }

    /// Direction the constant moves as the collapse ratio grows
    ///
    /// Leading/top edges and sizes grow; trailing/bottom edges shrink.
    pub fn sign(self) -> f32 {
        match self {
            ConstraintRole::Top
            | ConstraintRole::TopMargin
            | ConstraintRole::Leading
            | ConstraintRole::LeadingMargin
            | ConstraintRole::Width
            | ConstraintRole::Height => 1.0,
            ConstraintRole::Bottom
            | ConstraintRole::BottomMargin
            | ConstraintRole::Trailing
            | ConstraintRole::TrailingMargin => -1.0,
        }
    }
}

// ============================================================================
// Fonts
// ============================================================================

/// Concrete element kind, used to pick the font capability
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// No font (containers, images)
    #[default]
    Plain,
    Label,
    /// Font lives on the button's title label
    Button,
    TextField,
    TextArea,
}

impl ElementKind {
    /// Whether elements of this kind carry a font
    pub fn has_font(self) -> bool {
        !matches!(self, ElementKind::Plain)
    }
}

/// Font size capability implemented per text-bearing element kind
pub trait FontSized {
    /// Current point size
    fn font_size(&self) -> f32;

    /// Re-derive the font at `size`, keeping its family
    fn set_font_size(&mut self, size: f32);
}

// ============================================================================
// Host Traits
// ============================================================================

/// View/element system of the hosting toolkit
pub trait ViewHost {
    /// Handle to an element
    type ElementId: Copy + Eq + Hash + Debug;
    /// Handle to a layout constraint
    type ConstraintId: Copy + Eq + Debug;
    /// Error raised when the host's view graph is malformed
    type Error: std::error::Error;

    /// Parent of `element`, `None` at the root
    fn superview(&self, element: Self::ElementId) -> Option<Self::ElementId>;

    /// Constraints installed on `element`
    fn installed_constraints(
        &self,
        element: Self::ElementId,
    ) -> Result<Vec<(Self::ConstraintId, LayoutConstraint<Self::ElementId>)>, Self::Error>;

    /// Current constant of a constraint
    fn constraint_constant(&self, constraint: Self::ConstraintId) -> Result<f32, Self::Error>;

    /// Overwrite a constraint's constant
    fn set_constraint_constant(&mut self, constraint: Self::ConstraintId, constant: f32);

    fn frame(&self, element: Self::ElementId) -> Rect;
    fn set_frame(&mut self, element: Self::ElementId, frame: Rect);

    fn opacity(&self, element: Self::ElementId) -> f32;
    fn set_opacity(&mut self, element: Self::ElementId, opacity: f32);

    fn corner_radius(&self, element: Self::ElementId) -> f32;
    fn set_corner_radius(&mut self, element: Self::ElementId, radius: f32);

    fn shadow_radius(&self, element: Self::ElementId) -> f32;
    fn set_shadow_radius(&mut self, element: Self::ElementId, radius: f32);

    fn shadow_opacity(&self, element: Self::ElementId) -> f32;
    fn set_shadow_opacity(&mut self, element: Self::ElementId, opacity: f32);

    /// Kind tag for `element`
    fn element_kind(&self, element: Self::ElementId) -> ElementKind;

    /// Font capability for text-bearing kinds
    fn font_sized(&self, element: Self::ElementId, kind: ElementKind) -> Option<&dyn FontSized>;

    /// Mutable font capability for text-bearing kinds
    fn font_sized_mut(
        &mut self,
        element: Self::ElementId,
        kind: ElementKind,
    ) -> Option<&mut dyn FontSized>;

    /// Invalidate constraints and layout, then lay out if needed
    fn request_layout(&mut self, element: Self::ElementId);
}

/// Scrollable content the header follows
pub trait ScrollSource {
    /// Vertical content offset (positive when scrolled down)
    fn content_offset_y(&self) -> f32;

    /// Height of the visible viewport
    fn viewport_height(&self) -> f32;

    /// Height of the scrollable content
    fn content_height(&self) -> f32;

    fn content_inset(&self) -> EdgeInsets;
    fn set_content_inset(&mut self, insets: EdgeInsets);
}
