//! Transformable attributes and per-element transforms
//!
//! A [`Transform`] pairs an [`Attribute`] with the total change it should
//! reach once the header is fully collapsed. The baseline value is read from
//! the element when it is registered.

/// Attributes that can be transformed while scrolling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Horizontal position (drives leading/trailing constraints)
    X,
    /// Vertical position (drives top/bottom constraints)
    Y,
    /// Width constraint
    Width,
    /// Height constraint
    Height,
    /// Element opacity
    Alpha,
    /// Layer corner radius
    CornerRadius,
    /// Layer shadow blur radius
    ShadowRadius,
    /// Layer shadow opacity
    ShadowOpacity,
    /// Point size of the element's font
    FontSize,
}

impl Attribute {
    /// All attributes in declaration order
    pub const ALL: [Attribute; 9] = [
        Attribute::X,
        Attribute::Y,
        Attribute::Width,
        Attribute::Height,
        Attribute::Alpha,
        Attribute::CornerRadius,
        Attribute::ShadowRadius,
        Attribute::ShadowOpacity,
        Attribute::FontSize,
    ];

    /// Whether this attribute is applied through layout constraints
    /// rather than written on the element directly
    pub fn is_constraint_driven(self) -> bool {
        matches!(
            self,
            Attribute::X | Attribute::Y | Attribute::Width | Attribute::Height
        )
    }
}

/// Curve kind recorded on a transform
///
/// Only linear interpolation is applied; the other kinds are carried so
/// callers can describe intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransformCurve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// An attribute to be transformed as the header collapses
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Which attribute to drive
    pub attribute: Attribute,
    /// Total change applied at full collapse
    pub target_delta: f32,
    /// Value read from the element at registration
    pub original_value: f32,
    /// Recorded curve (not evaluated)
    pub curve: TransformCurve,
}

impl Transform {
    /// Create a linear transform for `attribute` reaching `delta` at full collapse
    pub fn new(attribute: Attribute, delta: f32) -> Self {
        Self {
            attribute,
            target_delta: delta,
            original_value: 0.0,
            curve: TransformCurve::Linear,
        }
    }

    /// Record a curve on this transform
    pub fn with_curve(mut self, curve: TransformCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Value for this transform at collapse ratio `ratio`
    #[inline]
    pub fn value_at(&self, ratio: f32) -> f32 {
        self.original_value + ratio * self.target_delta
    }
}
