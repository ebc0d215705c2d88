//! Collapsing header
//!
//! [`CollapsingHeader`] follows a scroll source and interpolates the header
//! and every registered element between the expanded and collapsed states.
//!
//! # Example
//!
//! ```ignore
//! use collapse_core::prelude::*;
//!
//! let mut header = CollapsingHeader::new(&host, header_view);
//! header.set_minimum_header_height(64.0);
//! header.set_collapsing_constraint(&host, header_height_constraint)?;
//!
//! header.add_transforming_element(
//!     &host,
//!     title,
//!     [
//!         Transform::new(Attribute::FontSize, -6.0),
//!         Transform::new(Attribute::Y, 12.0),
//!     ],
//! )?;
//! header.add_fade_out_element(subtitle, 0.5);
//! header.add_fade_in_element(&mut host, compact_title);
//!
//! // From the scroll callback
//! header.collapse_with_scroll(&mut host, &mut scroll_view);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::accessor::read_attribute;
use crate::config::CollapseConfig;
use crate::constraints::{capture_constraints, capture_list, CapturedConstraint, RoleConstraints};
use crate::error::{CollapseError, Result};
use crate::host::{ConstraintRole, ScrollSource, ViewHost};
use crate::interpolate::{apply_transform, fade_out_alpha};
use crate::state::{HeaderCollapseState, OverscrollGuard};
use crate::transform::Transform;

new_key_type! {
    /// Registration key for a transforming element
    pub struct TransformingId;
    /// Registration key for a fade-out element
    pub struct FadeOutId;
    /// Registration key for a fade-in element
    pub struct FadeInId;
}

/// An element with transforms and the constraints that position it
struct TransformingElement<E, C> {
    element: E,
    transforms: SmallVec<[Transform; 4]>,
    constraints: RoleConstraints<C>,
}

/// An element whose opacity falls as the header collapses
struct FadeOutElement<E> {
    element: E,
    ratio: f32,
}

/// What a scroll tick did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Short content with padding disabled; nothing changed
    Aborted,
    /// Attributes were interpolated at this offset
    Interpolated { offset: f32 },
    /// Offset already at a resting state; only fade-in elements updated
    Unchanged,
}

/// Scroll-linked collapsing header
pub struct CollapsingHeader<H: ViewHost> {
    header: H::ElementId,
    state: HeaderCollapseState,
    config: CollapseConfig,
    collapsing: SmallVec<[CapturedConstraint<H::ConstraintId>; 2]>,
    transforming: SlotMap<TransformingId, TransformingElement<H::ElementId, H::ConstraintId>>,
    fading_out: SlotMap<FadeOutId, FadeOutElement<H::ElementId>>,
    fading_in: SlotMap<FadeInId, H::ElementId>,
}

impl<H: ViewHost> CollapsingHeader<H> {
    /// Create a collapsing header for `header`
    ///
    /// The header's current height becomes the expanded height and never
    /// changes afterwards.
    pub fn new(host: &H, header: H::ElementId) -> Self {
        Self::with_config(host, header, CollapseConfig::default())
    }

    /// Create a collapsing header with explicit configuration
    pub fn with_config(host: &H, header: H::ElementId, config: CollapseConfig) -> Self {
        let header_height = host.frame(header).height();
        let mut state = HeaderCollapseState::new(header_height);
        state.set_minimum_header_height(config.minimum_header_height);

        tracing::debug!(
            "CollapsingHeader: header {:?} height {} min {} always_collapse {}",
            header,
            header_height,
            config.minimum_header_height,
            config.always_collapse
        );

        Self {
            header,
            state,
            config,
            collapsing: SmallVec::new(),
            transforming: SlotMap::with_key(),
            fading_out: SlotMap::with_key(),
            fading_in: SlotMap::with_key(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the collapsed height; the collapse range follows
    pub fn set_minimum_header_height(&mut self, height: f32) {
        self.config.minimum_header_height = height;
        self.state.set_minimum_header_height(height);
        tracing::debug!(
            "CollapsingHeader: minimum height {} (max offset {})",
            height,
            self.state.max_offset()
        );
    }

    /// Pad short content so the header can always collapse fully
    pub fn set_always_collapse(&mut self, always_collapse: bool) {
        self.config.always_collapse = always_collapse;
    }

    pub fn always_collapse(&self) -> bool {
        self.config.always_collapse
    }

    pub fn config(&self) -> &CollapseConfig {
        &self.config
    }

    /// Record the header constraint whose constant tracks the scroll offset
    pub fn set_collapsing_constraint(
        &mut self,
        host: &H,
        constraint: H::ConstraintId,
    ) -> std::result::Result<(), H::Error> {
        self.set_collapsing_constraints(host, &[constraint])
    }

    /// Record the header constraints whose constants track the scroll offset
    ///
    /// Replaces any previously recorded set.
    pub fn set_collapsing_constraints(
        &mut self,
        host: &H,
        constraints: &[H::ConstraintId],
    ) -> std::result::Result<(), H::Error> {
        self.collapsing = capture_list(host, constraints)?;
        tracing::debug!(
            "CollapsingHeader: {} collapsing constraint(s)",
            self.collapsing.len()
        );
        Ok(())
    }

    // =========================================================================
    // Element Registration
    // =========================================================================

    /// Register an element whose attributes follow the collapse
    ///
    /// Baselines are read from the element now; constraints pinning it are
    /// captured from its ancestor chain.
    pub fn add_transforming_element(
        &mut self,
        host: &H,
        element: H::ElementId,
        transforms: impl IntoIterator<Item = Transform>,
    ) -> std::result::Result<TransformingId, H::Error> {
        let constraints = capture_constraints(host, element)?;
        let transforms: SmallVec<[Transform; 4]> = transforms
            .into_iter()
            .map(|mut transform| {
                transform.original_value = read_attribute(host, element, transform.attribute);
                transform
            })
            .collect();

        tracing::debug!(
            "CollapsingHeader: transforming {:?} ({} transform(s), {} constraint(s))",
            element,
            transforms.len(),
            constraints.len()
        );

        Ok(self.transforming.insert(TransformingElement {
            element,
            transforms,
            constraints,
        }))
    }

    /// Register an element that fades out, reaching zero opacity at `ratio`
    ///
    /// Returns `false` and registers nothing when `ratio` is outside `[0, 1]`.
    pub fn add_fade_out_element(&mut self, element: H::ElementId, ratio: f32) -> bool {
        self.try_add_fade_out_element(element, ratio).is_ok()
    }

    /// Register a fade-out element, returning its key
    pub fn try_add_fade_out_element(
        &mut self,
        element: H::ElementId,
        ratio: f32,
    ) -> Result<FadeOutId> {
        if !(0.0..=1.0).contains(&ratio) {
            tracing::warn!(
                "CollapsingHeader: rejected fade-out ratio {} for {:?}",
                ratio,
                element
            );
            return Err(CollapseError::FadeRatioOutOfRange(ratio));
        }
        tracing::debug!("CollapsingHeader: fading out {:?} at {}", element, ratio);
        Ok(self.fading_out.insert(FadeOutElement { element, ratio }))
    }

    /// Register an element that appears once the header is fully collapsed
    ///
    /// The element is made transparent immediately.
    pub fn add_fade_in_element(&mut self, host: &mut H, element: H::ElementId) -> FadeInId {
        host.set_opacity(element, 0.0);
        tracing::debug!("CollapsingHeader: fading in {:?}", element);
        self.fading_in.insert(element)
    }

    // =========================================================================
    // Scroll Handling
    // =========================================================================

    /// Update the header for the scroll source's current offset
    pub fn collapse_with_scroll<S: ScrollSource + ?Sized>(
        &mut self,
        host: &mut H,
        scroll: &mut S,
    ) -> TickOutcome {
        let y = scroll.content_offset_y();
        let viewport_height = self.state.capture_viewport_height(scroll.viewport_height());
        let scrollable_height = scroll.content_height() - viewport_height;

        match self
            .state
            .overscroll_guard(scrollable_height, self.config.always_collapse)
        {
            OverscrollGuard::Proceed => {}
            OverscrollGuard::PadBottom(padding) => {
                scroll.set_content_inset(scroll.content_inset().with_bottom(padding));
            }
            OverscrollGuard::Abort => {
                tracing::trace!(
                    "CollapsingHeader: scrollable height {} too short, skipping tick",
                    scrollable_height
                );
                return TickOutcome::Aborted;
            }
        }

        let outcome = match self.state.target_offset(y) {
            Some(offset) => {
                self.scroll_header_to_offset(host, offset);
                TickOutcome::Interpolated { offset }
            }
            None => TickOutcome::Unchanged,
        };

        self.update_fade_in(host, y);

        host.request_layout(self.header);
        self.state.commit_offset(y);

        tracing::trace!("CollapsingHeader: y {} -> {:?}", y, outcome);
        outcome
    }

    /// Interpolate every registered attribute at `offset`
    fn scroll_header_to_offset(&self, host: &mut H, offset: f32) {
        let ratio = self.state.ratio_for(offset);

        for fade in self.fading_out.values() {
            host.set_opacity(fade.element, fade_out_alpha(fade.ratio, ratio));
        }

        for entry in self.transforming.values() {
            for transform in &entry.transforms {
                apply_transform(host, entry.element, transform, &entry.constraints, ratio);
            }
        }

        let frame = host.frame(self.header);
        host.set_frame(self.header, frame.with_y(-offset));

        for captured in &self.collapsing {
            host.set_constraint_constant(captured.constraint, captured.original_constant - offset);
        }
    }

    fn update_fade_in(&self, host: &mut H, y: f32) {
        if self.fading_in.is_empty() {
            return;
        }
        let opacity =
            self.state
                .fade_in_opacity(y, self.config.fade_in_rate, self.config.clamp_fade_in);
        for &element in self.fading_in.values() {
            host.set_opacity(element, opacity);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn header(&self) -> H::ElementId {
        self.header
    }

    pub fn state(&self) -> &HeaderCollapseState {
        &self.state
    }

    pub fn header_height(&self) -> f32 {
        self.state.header_height()
    }

    pub fn minimum_header_height(&self) -> f32 {
        self.state.minimum_header_height()
    }

    pub fn max_offset(&self) -> f32 {
        self.state.max_offset()
    }

    pub fn last_offset(&self) -> f32 {
        self.state.last_offset()
    }

    /// Collapse ratio at the last committed offset, clamped to `[0, 1]`
    ///
    /// A collapsed header always reports 1, including one whose minimum
    /// height leaves no range to collapse through.
    pub fn collapse_ratio(&self) -> f32 {
        if self.is_collapsed() {
            return 1.0;
        }
        let offset = self.state.last_offset().clamp(0.0, self.state.max_offset().max(0.0));
        self.state.ratio_for(offset)
    }

    /// Whether the last committed offset fully collapsed the header
    pub fn is_collapsed(&self) -> bool {
        !self.state.is_expanded_at(self.state.last_offset())
    }

    pub fn transforming_count(&self) -> usize {
        self.transforming.len()
    }

    pub fn fade_out_count(&self) -> usize {
        self.fading_out.len()
    }

    pub fn fade_in_count(&self) -> usize {
        self.fading_in.len()
    }

    /// Transforms registered for an element, with captured baselines
    pub fn transforms(&self, id: TransformingId) -> Option<&[Transform]> {
        self.transforming.get(id).map(|e| e.transforms.as_slice())
    }

    /// Constraint roles captured for an element
    pub fn captured_roles(&self, id: TransformingId) -> Option<Vec<ConstraintRole>> {
        self.transforming
            .get(id)
            .map(|e| e.constraints.roles().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::headless::{HeadlessHost, HeadlessScrollView, ViewId, ViewStyle};
    use crate::host::LayoutAttribute;
    use crate::transform::Attribute;

    struct Fixture {
        host: HeadlessHost,
        header: ViewId,
        scroll: HeadlessScrollView,
    }

    /// 200pt header over a 600pt viewport with plenty of content
    fn fixture() -> Fixture {
        let mut host = HeadlessHost::new();
        let header = host.add_root(Rect::new(0.0, 0.0, 320.0, 200.0));
        let scroll = HeadlessScrollView::new(600.0, 2000.0);
        Fixture {
            host,
            header,
            scroll,
        }
    }

    fn scroll_to(
        header: &mut CollapsingHeader<HeadlessHost>,
        f: &mut Fixture,
        y: f32,
    ) -> TickOutcome {
        f.scroll.set_offset(y);
        header.collapse_with_scroll(&mut f.host, &mut f.scroll)
    }

    #[test]
    fn test_height_scenario() {
        let mut f = fixture();
        let title = f.host.add_view(f.header, Rect::new(0.0, 0.0, 100.0, 80.0), ViewStyle::default());
        let height = f.host.size(title, LayoutAttribute::Height, 80.0);

        let mut header = CollapsingHeader::new(&f.host, f.header);
        assert_eq!(header.max_offset(), 140.0);
        header
            .add_transforming_element(&f.host, title, [Transform::new(Attribute::Height, -40.0)])
            .unwrap();

        assert_eq!(scroll_to(&mut header, &mut f, 70.0), TickOutcome::Interpolated { offset: 70.0 });
        assert_eq!(f.host.constraint_constant(height).unwrap(), 60.0);
        assert_eq!(header.collapse_ratio(), 0.5);
    }

    #[test]
    fn test_endpoints_restore_and_reach_target() {
        let mut f = fixture();
        let badge = f.host.add_view(
            f.header,
            Rect::new(0.0, 0.0, 40.0, 40.0),
            ViewStyle {
                opacity: 1.0,
                corner_radius: 4.0,
                shadow_radius: 2.0,
                shadow_opacity: 0.4,
            },
        );
        let label = f.host.add_label(f.header, Rect::new(0.0, 0.0, 100.0, 20.0), "Avenir", 24.0);

        let mut header = CollapsingHeader::new(&f.host, f.header);
        header
            .add_transforming_element(
                &f.host,
                badge,
                [
                    Transform::new(Attribute::CornerRadius, 16.0),
                    Transform::new(Attribute::ShadowRadius, -2.0),
                    Transform::new(Attribute::ShadowOpacity, -0.4),
                    Transform::new(Attribute::Alpha, -0.5),
                ],
            )
            .unwrap();
        header
            .add_transforming_element(&f.host, label, [Transform::new(Attribute::FontSize, -8.0)])
            .unwrap();

        scroll_to(&mut header, &mut f, 100.0);
        scroll_to(&mut header, &mut f, 140.0);
        assert_eq!(f.host.corner_radius(badge), 20.0);
        assert_eq!(f.host.shadow_radius(badge), 0.0);
        assert_eq!(f.host.shadow_opacity(badge), 0.0);
        assert_eq!(f.host.opacity(badge), 0.5);
        assert_eq!(f.host.font(label).unwrap().size, 16.0);

        scroll_to(&mut header, &mut f, -5.0);
        assert_eq!(f.host.corner_radius(badge), 4.0);
        assert_eq!(f.host.shadow_radius(badge), 2.0);
        assert_eq!(f.host.shadow_opacity(badge), 0.4);
        assert_eq!(f.host.opacity(badge), 1.0);
        assert_eq!(f.host.font(label).unwrap().size, 24.0);
    }

    #[test]
    fn test_header_frame_and_collapsing_constraints() {
        let mut f = fixture();
        let screen = f.host.add_root(Rect::new(0.0, 0.0, 320.0, 800.0));
        let top = f.host.pin(screen, f.header, LayoutAttribute::Top, LayoutAttribute::Top, 0.0);
        let height = f.host.size(f.header, LayoutAttribute::Height, 200.0);

        let mut header = CollapsingHeader::new(&f.host, f.header);
        header.set_collapsing_constraints(&f.host, &[top, height]).unwrap();

        scroll_to(&mut header, &mut f, 50.0);
        assert_eq!(f.host.frame(f.header).y(), -50.0);
        assert_eq!(f.host.constraint_constant(top).unwrap(), -50.0);
        assert_eq!(f.host.constraint_constant(height).unwrap(), 150.0);
        assert_eq!(f.host.frame(f.header).height(), 200.0);
    }

    #[test]
    fn test_snaps_once_to_collapsed() {
        let mut f = fixture();
        let mut header = CollapsingHeader::new(&f.host, f.header);

        scroll_to(&mut header, &mut f, 100.0);
        assert_eq!(
            scroll_to(&mut header, &mut f, 300.0),
            TickOutcome::Interpolated { offset: 140.0 }
        );
        assert!(header.is_collapsed());
        assert_eq!(f.host.frame(f.header).y(), -140.0);

        assert_eq!(scroll_to(&mut header, &mut f, 400.0), TickOutcome::Unchanged);
        assert_eq!(f.host.frame(f.header).y(), -140.0);
        assert_eq!(header.collapse_ratio(), 1.0);
    }

    #[test]
    fn test_rubber_band_restores_expanded() {
        let mut f = fixture();
        let mut header = CollapsingHeader::new(&f.host, f.header);

        scroll_to(&mut header, &mut f, 30.0);
        assert_eq!(
            scroll_to(&mut header, &mut f, -20.0),
            TickOutcome::Interpolated { offset: 0.0 }
        );
        assert_eq!(f.host.frame(f.header).y(), 0.0);
        assert_eq!(scroll_to(&mut header, &mut f, -25.0), TickOutcome::Unchanged);
    }

    #[test]
    fn test_fade_out_ratios() {
        let mut f = fixture();
        let full = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());
        let half = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());

        let mut header = CollapsingHeader::new(&f.host, f.header);
        assert!(header.add_fade_out_element(full, 1.0));
        assert!(header.add_fade_out_element(half, 0.5));

        scroll_to(&mut header, &mut f, 70.0);
        assert_eq!(f.host.opacity(full), 0.5);
        assert_eq!(f.host.opacity(half), 0.0);

        scroll_to(&mut header, &mut f, 105.0);
        assert_eq!(f.host.opacity(full), 0.25);
        assert_eq!(f.host.opacity(half), -0.5);
    }

    #[test]
    fn test_fade_out_rejects_out_of_range() {
        let mut f = fixture();
        let view = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());
        let mut header = CollapsingHeader::new(&f.host, f.header);

        assert!(!header.add_fade_out_element(view, 1.5));
        assert!(!header.add_fade_out_element(view, -0.1));
        assert_eq!(header.fade_out_count(), 0);
        assert!(matches!(
            header.try_add_fade_out_element(view, 2.0),
            Err(CollapseError::FadeRatioOutOfRange(_))
        ));
    }

    #[test]
    fn test_fade_in_after_collapse() {
        let mut f = fixture();
        let compact = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());

        let mut header = CollapsingHeader::new(&f.host, f.header);
        header.add_fade_in_element(&mut f.host, compact);
        assert_eq!(f.host.opacity(compact), 0.0);

        scroll_to(&mut header, &mut f, 100.0);
        assert_eq!(f.host.opacity(compact), 0.0);

        scroll_to(&mut header, &mut f, 200.0);
        assert!((f.host.opacity(compact) - 0.6).abs() < 1e-6);

        scroll_to(&mut header, &mut f, 500.0);
        assert!((f.host.opacity(compact) - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_fade_in_clamped_by_config() {
        let mut f = fixture();
        let compact = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());
        let config = CollapseConfig::default().with_clamped_fade_in(true);

        let mut header = CollapsingHeader::with_config(&f.host, f.header, config);
        header.add_fade_in_element(&mut f.host, compact);

        scroll_to(&mut header, &mut f, 500.0);
        assert_eq!(f.host.opacity(compact), 1.0);
    }

    #[test]
    fn test_short_content_padded() {
        let mut f = fixture();
        f.scroll = HeadlessScrollView::new(600.0, 700.0);
        let mut header = CollapsingHeader::new(&f.host, f.header);

        scroll_to(&mut header, &mut f, 50.0);
        assert_eq!(f.scroll.content_inset().bottom, 180.0);
        assert_eq!(f.host.frame(f.header).y(), -50.0);
    }

    #[test]
    fn test_short_content_aborts_without_padding() {
        let mut f = fixture();
        f.scroll = HeadlessScrollView::new(600.0, 700.0);
        let view = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());

        let mut header = CollapsingHeader::with_config(&f.host, f.header, CollapseConfig::no_padding());
        header.add_fade_out_element(view, 1.0);
        let layouts = f.host.layout_requests();

        assert_eq!(scroll_to(&mut header, &mut f, 50.0), TickOutcome::Aborted);
        assert_eq!(f.host.opacity(view), 1.0);
        assert_eq!(f.host.frame(f.header).y(), 0.0);
        assert_eq!(f.scroll.content_inset().bottom, 0.0);
        assert_eq!(header.last_offset(), 0.0);
        assert_eq!(f.host.layout_requests(), layouts);
    }

    #[test]
    fn test_viewport_height_captured_on_first_tick() {
        let mut f = fixture();
        let mut header = CollapsingHeader::new(&f.host, f.header);

        scroll_to(&mut header, &mut f, 10.0);
        // Viewport grows later; the first height keeps the range computation stable
        f.scroll.set_viewport_height(1900.0);
        scroll_to(&mut header, &mut f, 20.0);

        assert_eq!(header.state().scroll_viewport_height(), Some(600.0));
        assert_eq!(f.scroll.content_inset().bottom, 0.0);
    }

    #[test]
    fn test_same_offset_is_idempotent() {
        let mut f = fixture();
        let view = f.host.add_view(f.header, Rect::new(10.0, 10.0, 50.0, 50.0), ViewStyle::default());
        let leading = f.host.pin(f.header, view, LayoutAttribute::Leading, LayoutAttribute::Leading, 10.0);

        let mut header = CollapsingHeader::new(&f.host, f.header);
        header
            .add_transforming_element(
                &f.host,
                view,
                [
                    Transform::new(Attribute::X, 30.0),
                    Transform::new(Attribute::CornerRadius, 8.0),
                ],
            )
            .unwrap();

        scroll_to(&mut header, &mut f, 42.0);
        let first = (
            f.host.constraint_constant(leading).unwrap(),
            f.host.corner_radius(view),
        );
        scroll_to(&mut header, &mut f, 42.0);
        let second = (
            f.host.constraint_constant(leading).unwrap(),
            f.host.corner_radius(view),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_minimum_height_change_keeps_baselines() {
        let mut f = fixture();
        let view = f.host.add_view(
            f.header,
            Rect::ZERO,
            ViewStyle {
                corner_radius: 2.0,
                ..ViewStyle::default()
            },
        );

        let mut header = CollapsingHeader::new(&f.host, f.header);
        let id = header
            .add_transforming_element(&f.host, view, [Transform::new(Attribute::CornerRadius, 10.0)])
            .unwrap();
        header.set_minimum_header_height(100.0);

        assert_eq!(header.max_offset(), 100.0);
        assert_eq!(header.transforms(id).unwrap()[0].original_value, 2.0);

        scroll_to(&mut header, &mut f, 50.0);
        assert_eq!(f.host.corner_radius(view), 7.0);
    }

    #[test]
    fn test_captured_roles_reported() {
        let mut f = fixture();
        let view = f.host.add_view(f.header, Rect::ZERO, ViewStyle::default());
        f.host.pin(f.header, view, LayoutAttribute::Top, LayoutAttribute::Top, 0.0);

        let mut header = CollapsingHeader::new(&f.host, f.header);
        let id = header
            .add_transforming_element(&f.host, view, [Transform::new(Attribute::X, 10.0)])
            .unwrap();

        assert_eq!(header.captured_roles(id).unwrap(), vec![ConstraintRole::Top]);
        // X has nothing to move; the tick must still succeed
        scroll_to(&mut header, &mut f, 70.0);
        assert_eq!(header.transforming_count(), 1);
    }

    #[test]
    fn test_empty_range_queries_agree() {
        let mut f = fixture();
        let mut header = CollapsingHeader::new(&f.host, f.header);
        header.set_minimum_header_height(200.0);
        assert_eq!(header.max_offset(), 0.0);

        assert_eq!(scroll_to(&mut header, &mut f, 30.0), TickOutcome::Unchanged);
        assert!(header.is_collapsed());
        assert_eq!(header.collapse_ratio(), 1.0);
    }

    #[test]
    fn test_ratio_reaches_one_when_collapsed() {
        let mut f = fixture();
        let mut header = CollapsingHeader::new(&f.host, f.header);
        scroll_to(&mut header, &mut f, 35.0);
        assert!(!header.is_collapsed());
        assert_eq!(header.collapse_ratio(), 0.25);

        scroll_to(&mut header, &mut f, 400.0);
        assert!(header.is_collapsed());
        assert_eq!(header.collapse_ratio(), 1.0);
    }
}
