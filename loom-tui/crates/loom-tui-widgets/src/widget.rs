//! Core widget trait and related types.
//!
//! Widgets draw in their own local frame: (0, 0) is their top-left corner.
//! The owning tree positions them through [`WidgetBase`], activates their
//! frame with [`render_widget`], and translates mouse events into local
//! coordinates with [`route_mouse_up`] before handing them over.

use loom_tui_buffer::Screen;
use loom_tui_core::{NodeId, Point, Rect};
use loom_tui_input::{KeyEvent, MouseEvent};

use crate::Theme;
use crate::event::{EventResult, EventSink};

/// State every widget carries: identity, parent link, geometry, enabled.
///
/// Coordinates are relative to the parent. The parent link is a handle
/// into the owning tree, never an owning pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBase {
    id: NodeId,
    parent: Option<NodeId>,
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    enabled: bool,
}

impl WidgetBase {
    /// Creates an enabled, parentless base with a fresh id.
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            id: NodeId::new(),
            parent: None,
            x,
            y,
            width,
            height,
            enabled: true,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Moves the widget within its parent.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The widget's rectangle in parent coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// What the owning tree tells a widget at draw time.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    /// Styles to draw with.
    pub theme: &'a Theme,
    /// The widget and every ancestor are active (focused).
    pub active: bool,
}

impl<'a> DrawContext<'a> {
    /// An inactive context.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            active: false,
        }
    }

    /// Returns a copy with `active` set.
    #[must_use]
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }
}

/// The core widget trait.
///
/// Event handlers receive coordinates in the widget's local frame and
/// report whether they consumed the event. Semantic results (menu
/// selections) go to the [`EventSink`].
pub trait Widget {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Returns a static string identifying the widget type.
    fn type_name(&self) -> &'static str;

    /// Draws the widget in its local frame.
    fn draw(&self, screen: &mut Screen, ctx: &DrawContext<'_>);

    /// Handles a mouse button release.
    fn on_mouse_up(&mut self, mouse: &MouseEvent, sink: &mut dyn EventSink) -> EventResult {
        let _ = (mouse, sink);
        EventResult::Ignored
    }

    /// Handles a key press while the widget has focus.
    fn on_keypress(&mut self, key: &KeyEvent, sink: &mut dyn EventSink) -> EventResult {
        let _ = (key, sink);
        EventResult::Ignored
    }

    /// The widget's rectangle in parent coordinates.
    fn bounds(&self) -> Rect {
        self.base().bounds()
    }

    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }
}

/// Draws `widget` with its bounds as the active local frame.
///
/// The frame is relative to whatever frame is active on `screen`, so
/// nested calls compose.
pub fn render_widget(widget: &dyn Widget, screen: &mut Screen, ctx: &DrawContext<'_>) {
    screen.push_viewport(widget.bounds());
    widget.draw(screen, ctx);
    screen.pop_viewport();
}

/// Delivers a mouse release to `widget`, whose parent's top-left corner
/// is at `parent_origin` in screen coordinates.
pub fn route_mouse_up(
    widget: &mut dyn Widget,
    mouse: &MouseEvent,
    parent_origin: Point,
    sink: &mut dyn EventSink,
) -> EventResult {
    let base = widget.base();
    let origin = parent_origin.offset(base.x(), base.y());
    let local = mouse.to_local(origin.x, origin.y);
    widget.on_mouse_up(&local, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuEvent;
    use loom_tui_core::Style;
    use loom_tui_input::MouseButton;

    struct Label {
        base: WidgetBase,
        text: &'static str,
        clicks: Vec<(i32, i32)>,
    }

    impl Widget for Label {
        fn base(&self) -> &WidgetBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn type_name(&self) -> &'static str {
            "Label"
        }

        fn draw(&self, screen: &mut Screen, _ctx: &DrawContext<'_>) {
            screen.put_string_at(0, 0, self.text, Style::default());
        }

        fn on_mouse_up(&mut self, mouse: &MouseEvent, _sink: &mut dyn EventSink) -> EventResult {
            self.clicks.push((mouse.column, mouse.row));
            EventResult::Handled
        }
    }

    fn label(x: i32, y: i32) -> Label {
        Label {
            base: WidgetBase::new(x, y, 6, 1),
            text: "abcdefgh",
            clicks: Vec::new(),
        }
    }

    #[test]
    fn test_base_defaults() {
        let base = WidgetBase::new(1, 2, 3, 4);
        assert!(base.is_enabled());
        assert_eq!(base.parent(), None);
        assert_eq!(base.bounds(), Rect::new(1, 2, 3, 4));
        assert_ne!(base.id(), WidgetBase::new(0, 0, 0, 0).id());
    }

    #[test]
    fn test_render_widget_translates_and_clips() {
        let theme = Theme::default();
        let mut screen = Screen::new(12, 3);
        render_widget(&label(3, 1), &mut screen, &DrawContext::new(&theme));

        assert_eq!(screen.row_text(1).unwrap(), "   abcdef   ");
        assert_eq!(screen.viewport_depth(), 0);
    }

    #[test]
    fn test_route_mouse_up_localizes() {
        let mut widget = label(3, 1);
        let mut sink: Vec<MenuEvent> = Vec::new();
        let mouse = MouseEvent::up(MouseButton::Left, 12, 6);

        let result = route_mouse_up(&mut widget, &mouse, Point::new(10, 5), &mut sink);
        assert_eq!(result, EventResult::Handled);
        assert_eq!(widget.clicks, vec![(-1, 0)]);
    }

    #[test]
    fn test_default_handlers_ignore() {
        struct Inert(WidgetBase);
        impl Widget for Inert {
            fn base(&self) -> &WidgetBase {
                &self.0
            }
            fn base_mut(&mut self) -> &mut WidgetBase {
                &mut self.0
            }
            fn type_name(&self) -> &'static str {
                "Inert"
            }
            fn draw(&self, _screen: &mut Screen, _ctx: &DrawContext<'_>) {}
        }

        let mut inert = Inert(WidgetBase::new(0, 0, 1, 1));
        let mut sink: Vec<MenuEvent> = Vec::new();
        assert!(inert.on_keypress(&KeyEvent::char('a'), &mut sink).is_ignored());
        assert!(inert
            .on_mouse_up(&MouseEvent::up(MouseButton::Left, 0, 0), &mut sink)
            .is_ignored());
    }
}
