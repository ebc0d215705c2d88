//! Attribute interpolation
//!
//! Linear mapping from a collapse ratio to attribute values. Position and
//! size transforms move captured constraints; everything else is written on
//! the element through the [accessor](crate::accessor).

use crate::accessor::write_attribute;
use crate::constraints::{update_constraint, RoleConstraints};
use crate::host::{ConstraintRole, ViewHost};
use crate::transform::{Attribute, Transform};

/// Apply one transform to `element` at collapse ratio `ratio`
pub fn apply_transform<H: ViewHost + ?Sized>(
    host: &mut H,
    element: H::ElementId,
    transform: &Transform,
    constraints: &RoleConstraints<H::ConstraintId>,
    ratio: f32,
) {
    let delta = transform.target_delta;
    match transform.attribute {
        Attribute::X => {
            for role in ConstraintRole::HORIZONTAL {
                update_constraint(host, constraints, role, delta, ratio);
            }
        }
        Attribute::Y => {
            for role in ConstraintRole::VERTICAL {
                update_constraint(host, constraints, role, delta, ratio);
            }
        }
        Attribute::Width => {
            update_constraint(host, constraints, ConstraintRole::Width, delta, ratio);
        }
        Attribute::Height => {
            update_constraint(host, constraints, ConstraintRole::Height, delta, ratio);
        }
        attribute => {
            write_attribute(host, element, attribute, transform.value_at(ratio));
        }
    }
}

/// Opacity of a fade-out element at collapse ratio `ratio`
///
/// Reaches zero at `ratio == fade_ratio` and keeps decreasing past it. A
/// fade ratio of zero hides the element as soon as the header moves.
#[inline]
pub fn fade_out_alpha(fade_ratio: f32, ratio: f32) -> f32 {
    if fade_ratio > 0.0 {
        1.0 - ratio / fade_ratio
    } else if ratio > 0.0 {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::capture_constraints;
    use crate::geometry::Rect;
    use crate::headless::{HeadlessHost, ViewStyle};
    use crate::host::LayoutAttribute;

    #[test]
    fn test_fade_out_alpha() {
        assert_eq!(fade_out_alpha(1.0, 0.0), 1.0);
        assert_eq!(fade_out_alpha(1.0, 1.0), 0.0);
        assert_eq!(fade_out_alpha(0.5, 0.5), 0.0);
        assert_eq!(fade_out_alpha(0.5, 1.0), -1.0);
        assert_eq!(fade_out_alpha(0.0, 0.0), 1.0);
        assert_eq!(fade_out_alpha(0.0, 0.2), 0.0);
    }

    #[test]
    fn test_vertical_edges_move_toward_each_other() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let view = host.add_view(root, Rect::new(0.0, 20.0, 320.0, 160.0), ViewStyle::default());
        let top = host.pin(root, view, LayoutAttribute::Top, LayoutAttribute::Top, 20.0);
        let bottom = host.pin(root, view, LayoutAttribute::Bottom, LayoutAttribute::Bottom, 20.0);
        let captured = capture_constraints(&host, view).unwrap();

        let transform = Transform::new(Attribute::Y, 10.0);
        apply_transform(&mut host, view, &transform, &captured, 1.0);

        assert_eq!(host.constraint_constant(top).unwrap(), 30.0);
        assert_eq!(host.constraint_constant(bottom).unwrap(), 10.0);
    }

    #[test]
    fn test_size_transform_without_constraint_is_noop() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let view = host.add_view(root, Rect::new(0.0, 0.0, 50.0, 50.0), ViewStyle::default());
        let captured = capture_constraints(&host, view).unwrap();

        apply_transform(&mut host, view, &Transform::new(Attribute::Width, 30.0), &captured, 1.0);

        assert_eq!(host.frame(view).width(), 50.0);
    }

    #[test]
    fn test_direct_attributes_use_baseline() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let view = host.add_view(
            root,
            Rect::ZERO,
            ViewStyle {
                shadow_opacity: 0.5,
                ..ViewStyle::default()
            },
        );
        let captured = capture_constraints(&host, view).unwrap();

        let mut transform = Transform::new(Attribute::ShadowOpacity, -0.5);
        transform.original_value = 0.5;
        apply_transform(&mut host, view, &transform, &captured, 0.5);

        assert_eq!(host.shadow_opacity(view), 0.25);
    }
}
