//! Headless toolkit
//!
//! An in-memory implementation of [`ViewHost`] and [`ScrollSource`] with no
//! rendering and no layout solver: frames change only when written, and
//! constraint constants are plain numbers. Enough to drive a
//! [`CollapsingHeader`](crate::CollapsingHeader) deterministically in tests.

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use crate::geometry::{EdgeInsets, Rect};
use crate::host::{
    ElementKind, FontSized, LayoutAttribute, LayoutConstraint, ScrollSource, ViewHost,
};

new_key_type! {
    pub struct ViewId;
    pub struct ConstraintKey;
}

/// Errors raised by the headless view graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeadlessError {
    #[error("Constraints unavailable on view {0:?}")]
    ConstraintsUnavailable(ViewId),

    #[error("Unknown view {0:?}")]
    UnknownView(ViewId),

    #[error("Unknown constraint {0:?}")]
    UnknownConstraint(ConstraintKey),
}

// ============================================================================
// Fonts and text-bearing kinds
// ============================================================================

/// Font family and point size
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessFont {
    pub family: String,
    pub size: f32,
}

impl HeadlessFont {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Label {
    pub font: HeadlessFont,
}

impl FontSized for Label {
    fn font_size(&self) -> f32 {
        self.font.size
    }

    fn set_font_size(&mut self, size: f32) {
        self.font = HeadlessFont::new(self.font.family.clone(), size);
    }
}

/// Button whose font lives on its title label
#[derive(Clone, Debug)]
pub struct Button {
    pub title_label: Label,
}

impl FontSized for Button {
    fn font_size(&self) -> f32 {
        self.title_label.font_size()
    }

    fn set_font_size(&mut self, size: f32) {
        self.title_label.set_font_size(size);
    }
}

#[derive(Clone, Debug)]
pub struct TextField {
    pub font: HeadlessFont,
}

impl FontSized for TextField {
    fn font_size(&self) -> f32 {
        self.font.size
    }

    fn set_font_size(&mut self, size: f32) {
        self.font = HeadlessFont::new(self.font.family.clone(), size);
    }
}

#[derive(Clone, Debug)]
pub struct TextArea {
    pub font: HeadlessFont,
}

impl FontSized for TextArea {
    fn font_size(&self) -> f32 {
        self.font.size
    }

    fn set_font_size(&mut self, size: f32) {
        self.font = HeadlessFont::new(self.font.family.clone(), size);
    }
}

#[derive(Clone, Debug)]
enum Content {
    Plain,
    Label(Label),
    Button(Button),
    TextField(TextField),
    TextArea(TextArea),
}

impl Content {
    fn kind(&self) -> ElementKind {
        match self {
            Content::Plain => ElementKind::Plain,
            Content::Label(_) => ElementKind::Label,
            Content::Button(_) => ElementKind::Button,
            Content::TextField(_) => ElementKind::TextField,
            Content::TextArea(_) => ElementKind::TextArea,
        }
    }

    fn font(&self) -> Option<&HeadlessFont> {
        match self {
            Content::Plain => None,
            Content::Label(l) => Some(&l.font),
            Content::Button(b) => Some(&b.title_label.font),
            Content::TextField(t) => Some(&t.font),
            Content::TextArea(t) => Some(&t.font),
        }
    }
}

// ============================================================================
// Views
// ============================================================================

/// Layer properties of a view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewStyle {
    pub opacity: f32,
    pub corner_radius: f32,
    pub shadow_radius: f32,
    pub shadow_opacity: f32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            corner_radius: 0.0,
            shadow_radius: 0.0,
            shadow_opacity: 0.0,
        }
    }
}

struct HeadlessView {
    parent: Option<ViewId>,
    frame: Rect,
    style: ViewStyle,
    content: Content,
    /// Constraints installed on this view
    installed: Vec<ConstraintKey>,
    /// Simulates a view whose constraint list can't be read
    detached: bool,
}

struct HeadlessConstraint {
    constraint: LayoutConstraint<ViewId>,
    constant: f32,
}

/// In-memory view graph
#[derive(Default)]
pub struct HeadlessHost {
    views: SlotMap<ViewId, HeadlessView>,
    constraints: SlotMap<ConstraintKey, HeadlessConstraint>,
    layout_requests: usize,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, parent: Option<ViewId>, frame: Rect, style: ViewStyle, content: Content) -> ViewId {
        self.views.insert(HeadlessView {
            parent,
            frame,
            style,
            content,
            installed: Vec::new(),
            detached: false,
        })
    }

    /// Add a view without a parent
    pub fn add_root(&mut self, frame: Rect) -> ViewId {
        self.insert(None, frame, ViewStyle::default(), Content::Plain)
    }

    /// Add a plain child view
    pub fn add_view(&mut self, parent: ViewId, frame: Rect, style: ViewStyle) -> ViewId {
        self.insert(Some(parent), frame, style, Content::Plain)
    }

    pub fn add_label(&mut self, parent: ViewId, frame: Rect, family: &str, size: f32) -> ViewId {
        let label = Label {
            font: HeadlessFont::new(family, size),
        };
        self.insert(Some(parent), frame, ViewStyle::default(), Content::Label(label))
    }

    pub fn add_button(&mut self, parent: ViewId, frame: Rect, family: &str, size: f32) -> ViewId {
        let button = Button {
            title_label: Label {
                font: HeadlessFont::new(family, size),
            },
        };
        self.insert(Some(parent), frame, ViewStyle::default(), Content::Button(button))
    }

    pub fn add_text_field(&mut self, parent: ViewId, frame: Rect, family: &str, size: f32) -> ViewId {
        let field = TextField {
            font: HeadlessFont::new(family, size),
        };
        self.insert(Some(parent), frame, ViewStyle::default(), Content::TextField(field))
    }

    pub fn add_text_area(&mut self, parent: ViewId, frame: Rect, family: &str, size: f32) -> ViewId {
        let area = TextArea {
            font: HeadlessFont::new(family, size),
        };
        self.insert(Some(parent), frame, ViewStyle::default(), Content::TextArea(area))
    }

    fn install(&mut self, owner: ViewId, constraint: LayoutConstraint<ViewId>, constant: f32) -> ConstraintKey {
        let key = self.constraints.insert(HeadlessConstraint {
            constraint,
            constant,
        });
        if let Some(view) = self.views.get_mut(owner) {
            view.installed.push(key);
        }
        key
    }

    /// Install `owner.owner_attr = item.item_attr + constant` on `owner`
    pub fn pin(
        &mut self,
        owner: ViewId,
        item: ViewId,
        owner_attr: LayoutAttribute,
        item_attr: LayoutAttribute,
        constant: f32,
    ) -> ConstraintKey {
        self.install(
            owner,
            LayoutConstraint {
                first_item: owner,
                first_attribute: owner_attr,
                second_item: Some(item),
                second_attribute: item_attr,
            },
            constant,
        )
    }

    /// Install a size constraint `view.attr = constant` on the view itself
    pub fn size(&mut self, view: ViewId, attr: LayoutAttribute, constant: f32) -> ConstraintKey {
        self.install(
            view,
            LayoutConstraint {
                first_item: view,
                first_attribute: attr,
                second_item: None,
                second_attribute: LayoutAttribute::NotAnAttribute,
            },
            constant,
        )
    }

    /// Make the view's constraint list unreadable
    pub fn detach_constraints(&mut self, view: ViewId) {
        if let Some(v) = self.views.get_mut(view) {
            v.detached = true;
        }
    }

    /// Font of a text-bearing view
    pub fn font(&self, view: ViewId) -> Option<&HeadlessFont> {
        self.views.get(view).and_then(|v| v.content.font())
    }

    pub fn style(&self, view: ViewId) -> Option<ViewStyle> {
        self.views.get(view).map(|v| v.style)
    }

    /// Number of layout passes requested so far
    pub fn layout_requests(&self) -> usize {
        self.layout_requests
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }
}

impl ViewHost for HeadlessHost {
    type ElementId = ViewId;
    type ConstraintId = ConstraintKey;
    type Error = HeadlessError;

    fn superview(&self, element: ViewId) -> Option<ViewId> {
        self.views.get(element).and_then(|v| v.parent)
    }

    fn installed_constraints(
        &self,
        element: ViewId,
    ) -> Result<Vec<(ConstraintKey, LayoutConstraint<ViewId>)>, HeadlessError> {
        let view = self
            .views
            .get(element)
            .ok_or(HeadlessError::UnknownView(element))?;
        if view.detached {
            return Err(HeadlessError::ConstraintsUnavailable(element));
        }
        view.installed
            .iter()
            .map(|&key| {
                self.constraints
                    .get(key)
                    .map(|c| (key, c.constraint))
                    .ok_or(HeadlessError::UnknownConstraint(key))
            })
            .collect()
    }

    fn constraint_constant(&self, constraint: ConstraintKey) -> Result<f32, HeadlessError> {
        self.constraints
            .get(constraint)
            .map(|c| c.constant)
            .ok_or(HeadlessError::UnknownConstraint(constraint))
    }

    fn set_constraint_constant(&mut self, constraint: ConstraintKey, constant: f32) {
        if let Some(c) = self.constraints.get_mut(constraint) {
            c.constant = constant;
        }
    }

    fn frame(&self, element: ViewId) -> Rect {
        self.views.get(element).map_or(Rect::ZERO, |v| v.frame)
    }

    fn set_frame(&mut self, element: ViewId, frame: Rect) {
        if let Some(v) = self.views.get_mut(element) {
            v.frame = frame;
        }
    }

    fn opacity(&self, element: ViewId) -> f32 {
        self.views.get(element).map_or(0.0, |v| v.style.opacity)
    }

    fn set_opacity(&mut self, element: ViewId, opacity: f32) {
        if let Some(v) = self.views.get_mut(element) {
            v.style.opacity = opacity;
        }
    }

    fn corner_radius(&self, element: ViewId) -> f32 {
        self.views.get(element).map_or(0.0, |v| v.style.corner_radius)
    }

    fn set_corner_radius(&mut self, element: ViewId, radius: f32) {
        if let Some(v) = self.views.get_mut(element) {
            v.style.corner_radius = radius;
        }
    }

    fn shadow_radius(&self, element: ViewId) -> f32 {
        self.views.get(element).map_or(0.0, |v| v.style.shadow_radius)
    }

    fn set_shadow_radius(&mut self, element: ViewId, radius: f32) {
        if let Some(v) = self.views.get_mut(element) {
            v.style.shadow_radius = radius;
        }
    }

    fn shadow_opacity(&self, element: ViewId) -> f32 {
        self.views.get(element).map_or(0.0, |v| v.style.shadow_opacity)
    }

    fn set_shadow_opacity(&mut self, element: ViewId, opacity: f32) {
        if let Some(v) = self.views.get_mut(element) {
            v.style.shadow_opacity = opacity;
        }
    }

    fn element_kind(&self, element: ViewId) -> ElementKind {
        self.views
            .get(element)
            .map_or(ElementKind::Plain, |v| v.content.kind())
    }

    fn font_sized(&self, element: ViewId, kind: ElementKind) -> Option<&dyn FontSized> {
        let view = self.views.get(element)?;
        match (kind, &view.content) {
            (ElementKind::Label, Content::Label(l)) => Some(l as &dyn FontSized),
            (ElementKind::Button, Content::Button(b)) => Some(b as &dyn FontSized),
            (ElementKind::TextField, Content::TextField(t)) => Some(t as &dyn FontSized),
            (ElementKind::TextArea, Content::TextArea(t)) => Some(t as &dyn FontSized),
            _ => None,
        }
    }

    fn font_sized_mut(&mut self, element: ViewId, kind: ElementKind) -> Option<&mut dyn FontSized> {
        let view = self.views.get_mut(element)?;
        match (kind, &mut view.content) {
            (ElementKind::Label, Content::Label(l)) => Some(l as &mut dyn FontSized),
            (ElementKind::Button, Content::Button(b)) => Some(b as &mut dyn FontSized),
            (ElementKind::TextField, Content::TextField(t)) => Some(t as &mut dyn FontSized),
            (ElementKind::TextArea, Content::TextArea(t)) => Some(t as &mut dyn FontSized),
            _ => None,
        }
    }

    fn request_layout(&mut self, _element: ViewId) {
        self.layout_requests += 1;
    }
}

// ============================================================================
// Scroll view
// ============================================================================

/// Scroll source with directly settable metrics
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessScrollView {
    offset_y: f32,
    viewport_height: f32,
    content_height: f32,
    content_inset: EdgeInsets,
}

impl HeadlessScrollView {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            offset_y: 0.0,
            viewport_height,
            content_height,
            content_inset: EdgeInsets::ZERO,
        }
    }

    pub fn set_offset(&mut self, y: f32) {
        self.offset_y = y;
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
    }
}

impl ScrollSource for HeadlessScrollView {
    fn content_offset_y(&self) -> f32 {
        self.offset_y
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn set_content_inset(&mut self, insets: EdgeInsets) {
        self.content_inset = insets;
    }
}
