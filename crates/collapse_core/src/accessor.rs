//! Attribute accessor
//!
//! Reads an abstract [`Attribute`] from a concrete element to seed transform
//! baselines, and writes the attributes that live on the element itself.
//! Font access is routed through the element's [`ElementKind`] tag.

use crate::host::{ElementKind, ViewHost};
use crate::transform::Attribute;

/// Current value of `attribute` on `element`
///
/// Elements without a font report a font size of `0`.
pub fn read_attribute<H: ViewHost + ?Sized>(
    host: &H,
    element: H::ElementId,
    attribute: Attribute,
) -> f32 {
    match attribute {
        Attribute::X => host.frame(element).x(),
        Attribute::Y => host.frame(element).y(),
        Attribute::Width => host.frame(element).width(),
        Attribute::Height => host.frame(element).height(),
        Attribute::Alpha => host.opacity(element),
        Attribute::CornerRadius => host.corner_radius(element),
        Attribute::ShadowRadius => host.shadow_radius(element),
        Attribute::ShadowOpacity => host.shadow_opacity(element),
        Attribute::FontSize => read_font_size(host, element),
    }
}

fn read_font_size<H: ViewHost + ?Sized>(host: &H, element: H::ElementId) -> f32 {
    let kind = host.element_kind(element);
    if !kind.has_font() {
        return 0.0;
    }
    host.font_sized(element, kind)
        .map(|font| font.font_size())
        .unwrap_or(0.0)
}

/// Write an element-level attribute
///
/// Constraint-driven attributes are not written here; returns `false` for
/// them and for font sizes on elements without a font.
pub fn write_attribute<H: ViewHost + ?Sized>(
    host: &mut H,
    element: H::ElementId,
    attribute: Attribute,
    value: f32,
) -> bool {
    match attribute {
        Attribute::X | Attribute::Y | Attribute::Width | Attribute::Height => false,
        Attribute::Alpha => {
            host.set_opacity(element, value);
            true
        }
        Attribute::CornerRadius => {
            host.set_corner_radius(element, value);
            true
        }
        Attribute::ShadowRadius => {
            host.set_shadow_radius(element, value);
            true
        }
        Attribute::ShadowOpacity => {
            host.set_shadow_opacity(element, value);
            true
        }
        Attribute::FontSize => write_font_size(host, element, value),
    }
}

fn write_font_size<H: ViewHost + ?Sized>(host: &mut H, element: H::ElementId, size: f32) -> bool {
    let kind = host.element_kind(element);
    if kind == ElementKind::Plain {
        return false;
    }
    match host.font_sized_mut(element, kind) {
        Some(font) => {
            font.set_font_size(size);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::headless::{HeadlessHost, ViewStyle};

    #[test]
    fn test_read_geometry_and_layer() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let view = host.add_view(
            root,
            Rect::new(16.0, 24.0, 80.0, 40.0),
            ViewStyle {
                opacity: 0.8,
                corner_radius: 6.0,
                shadow_radius: 3.0,
                shadow_opacity: 0.25,
            },
        );

        assert_eq!(read_attribute(&host, view, Attribute::X), 16.0);
        assert_eq!(read_attribute(&host, view, Attribute::Y), 24.0);
        assert_eq!(read_attribute(&host, view, Attribute::Width), 80.0);
        assert_eq!(read_attribute(&host, view, Attribute::Height), 40.0);
        assert_eq!(read_attribute(&host, view, Attribute::Alpha), 0.8);
        assert_eq!(read_attribute(&host, view, Attribute::CornerRadius), 6.0);
        assert_eq!(read_attribute(&host, view, Attribute::ShadowRadius), 3.0);
        assert_eq!(read_attribute(&host, view, Attribute::ShadowOpacity), 0.25);
        assert_eq!(read_attribute(&host, view, Attribute::FontSize), 0.0);
    }

    #[test]
    fn test_font_size_per_kind() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let label = host.add_label(root, Rect::new(0.0, 0.0, 100.0, 20.0), "Avenir", 17.0);
        let button = host.add_button(root, Rect::new(0.0, 30.0, 100.0, 20.0), "Avenir", 15.0);
        let field = host.add_text_field(root, Rect::new(0.0, 60.0, 100.0, 20.0), "Menlo", 13.0);
        let area = host.add_text_area(root, Rect::new(0.0, 90.0, 100.0, 60.0), "Menlo", 11.0);

        assert_eq!(read_attribute(&host, label, Attribute::FontSize), 17.0);
        assert_eq!(read_attribute(&host, button, Attribute::FontSize), 15.0);
        assert_eq!(read_attribute(&host, field, Attribute::FontSize), 13.0);
        assert_eq!(read_attribute(&host, area, Attribute::FontSize), 11.0);
    }

    #[test]
    fn test_write_font_keeps_family() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let button = host.add_button(root, Rect::new(0.0, 0.0, 100.0, 20.0), "Avenir", 15.0);

        assert!(write_attribute(&mut host, button, Attribute::FontSize, 12.0));
        let font = host.font(button).unwrap();
        assert_eq!(font.family, "Avenir");
        assert_eq!(font.size, 12.0);
    }

    #[test]
    fn test_write_skips_constraint_driven_and_fontless() {
        let mut host = HeadlessHost::new();
        let root = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));

        assert!(!write_attribute(&mut host, root, Attribute::Height, 10.0));
        assert!(!write_attribute(&mut host, root, Attribute::FontSize, 10.0));
        assert_eq!(host.frame(root).height(), 200.0);
    }
}
