use loom_tui_buffer::Screen;
use loom_tui_core::NodeId;
use loom_tui_input::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use tracing::{debug, trace};

use super::{MenuError, MenuId, MenuItemConfig, MenuItemState};
use crate::event::{EventResult, EventSink, MenuEvent};
use crate::mnemonic::MnemonicLabel;
use crate::widget::{DrawContext, Widget, WidgetBase};

const SIDE: char = '│';
const CHECK: char = '√';

/// Columns around the label: border, check column, gap, border.
const LABEL_PADDING: usize = 4;
/// Columns between the accelerator text and the right border.
const KEY_INSET: usize = 2;

/// One selectable row of a menu.
///
/// A menu item posts a [`MenuEvent`] with its id when selected by a
/// primary-button release on its row or by Enter while focused. Checkable
/// items flip their check mark on each selection. Disabled items ignore
/// input.
///
/// ```
/// use loom_tui_widgets::{MenuEvent, MenuId, MenuItem, MenuItemConfig};
///
/// let config = MenuItemConfig::new(MenuId(1100)).checkable(true);
/// let mut item = MenuItem::new(config, 0, 2, "&Word Wrap");
/// assert_eq!(item.width(), 13);
///
/// let mut events: Vec<MenuEvent> = Vec::new();
/// item.dispatch(&mut events).unwrap();
/// assert!(item.is_checked());
/// assert_eq!(events, vec![MenuEvent::new(MenuId(1100))]);
/// ```
#[derive(Debug, Clone)]
pub struct MenuItem {
    base: WidgetBase,
    id: MenuId,
    label: MnemonicLabel,
    key: Option<KeyEvent>,
    key_text: Option<String>,
    checkable: bool,
    checked: bool,
}

impl MenuItem {
    /// Creates an item at (x, y) in its menu, one row high and as wide as
    /// the label needs.
    pub fn new(config: MenuItemConfig, x: i32, y: i32, label: &str) -> Self {
        let label = MnemonicLabel::parse(label);
        let width = saturating_width(label.len() + LABEL_PADDING);

        let mut base = WidgetBase::new(x, y, width, 1);
        base.set_enabled(config.default_enabled);

        Self {
            base,
            id: config.id,
            label,
            key: None,
            key_text: None,
            checkable: config.checkable,
            checked: false,
        }
    }

    /// Builder form of [`MenuItem::set_key`].
    #[must_use]
    pub fn with_key(mut self, key: KeyEvent) -> Self {
        self.set_key(Some(key));
        self
    }

    #[inline]
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// The label without mnemonic markup.
    pub fn label(&self) -> &str {
        self.label.raw()
    }

    pub fn mnemonic(&self) -> &MnemonicLabel {
        &self.label
    }

    /// The global accelerator, if any.
    pub fn key(&self) -> Option<&KeyEvent> {
        self.key.as_ref()
    }

    /// The accelerator as drawn, e.g. `Alt-X`.
    pub fn key_text(&self) -> Option<&str> {
        self.key_text.as_deref()
    }

    /// Attaches or removes the global accelerator.
    ///
    /// Attaching widens the item so the accelerator text fits; the width
    /// never shrinks here.
    pub fn set_key(&mut self, key: Option<KeyEvent>) {
        self.key_text = key.as_ref().map(KeyEvent::accelerator_text);
        self.key = key;

        let needed = self.minimum_width();
        if needed > self.base.width() {
            self.base.set_width(needed);
        }
    }

    /// Smallest width that shows the label and accelerator.
    pub fn minimum_width(&self) -> u16 {
        let key_columns = self
            .key_text
            .as_ref()
            .map_or(0, |text| text.chars().count() + KEY_INSET);
        saturating_width(self.label.len() + LABEL_PADDING + key_columns)
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.base.width()
    }

    /// Sets the width chosen by the containing menu, never below
    /// [`MenuItem::minimum_width`].
    pub fn set_width(&mut self, width: u16) {
        self.base.set_width(width.max(self.minimum_width()));
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
    }

    #[inline]
    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Makes the item checkable or not. Turning it off clears the check.
    pub fn set_checkable(&mut self, checkable: bool) {
        self.checkable = checkable;
        if !checkable {
            self.checked = false;
        }
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the check mark. Only checkable items may be checked.
    pub fn set_checked(&mut self, checked: bool) -> Result<(), MenuError> {
        if checked && !self.checkable {
            return Err(MenuError::NotCheckable { id: self.id });
        }
        self.checked = checked;
        Ok(())
    }

    pub fn state(&self) -> MenuItemState {
        match (self.is_enabled(), self.checked) {
            (false, _) => MenuItemState::Disabled,
            (true, false) => MenuItemState::EnabledUnchecked,
            (true, true) => MenuItemState::EnabledChecked,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.base.parent()
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.base.set_parent(parent);
    }

    /// Returns true if local (column, row) is on the item.
    pub fn hit_test(&self, column: i32, row: i32) -> bool {
        row == 0 && column >= 0 && column < i32::from(self.width())
    }

    /// Returns true if `key` selects this item by its mnemonic: the
    /// letter alone (shift allowed) or with Alt.
    pub fn matches_mnemonic(&self, key: &KeyEvent) -> bool {
        let KeyCode::Char(c) = key.code else {
            return false;
        };
        let modifiers = key.modifiers - KeyModifiers::SHIFT;
        key.is_press()
            && (modifiers.is_empty() || modifiers == KeyModifiers::ALT)
            && self.label.matches(c)
    }

    /// Returns true if `key` is this item's global accelerator.
    pub fn matches_accelerator(&self, key: &KeyEvent) -> bool {
        key.is_press() && self.key.as_ref().is_some_and(|own| own.same_combination(key))
    }

    /// Selects the item: posts its [`MenuEvent`] and flips the check mark
    /// of checkable items.
    ///
    /// Fails without side effects if the item is disabled.
    pub fn dispatch(&mut self, sink: &mut dyn EventSink) -> Result<(), MenuError> {
        if !self.is_enabled() {
            debug!(id = %self.id, label = self.label(), "refusing to dispatch disabled menu item");
            return Err(MenuError::Disabled { id: self.id });
        }

        sink.post_menu_event(MenuEvent::new(self.id));
        if self.checkable {
            self.checked = !self.checked;
        }
        trace!(id = %self.id, checked = self.checked, "menu item dispatched");
        Ok(())
    }
}

fn saturating_width(columns: usize) -> u16 {
    u16::try_from(columns).unwrap_or(u16::MAX)
}

impl Widget for MenuItem {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "MenuItem"
    }

    fn draw(&self, screen: &mut Screen, ctx: &DrawContext<'_>) {
        let theme = ctx.theme;
        let background = theme.color_for("menu");
        let (item_style, mnemonic_style) = if ctx.active {
            (
                theme.color_for("menu.highlighted"),
                theme.color_for("menu.mnemonic.highlighted"),
            )
        } else if self.is_enabled() {
            (theme.color_for("menu"), theme.color_for("menu.mnemonic"))
        } else {
            let disabled = theme.color_for("menu.disabled");
            (disabled, disabled)
        };

        let width = i32::from(self.width());

        screen.v_line(0, 0, 1, SIDE, background);
        screen.v_line(width - 1, 0, 1, SIDE, background);
        screen.h_line(1, 0, self.width().saturating_sub(2), ' ', item_style);
        screen.put_string_at(2, 0, self.label(), item_style);

        if let Some(text) = &self.key_text {
            let len = text.chars().count() as i32;
            screen.put_string_at(width - len - KEY_INSET as i32, 0, text, item_style);
        }

        if let (Some(shortcut), Some(index)) = (self.label.shortcut(), self.label.shortcut_index())
        {
            screen.put_char_at(2 + index as i32, 0, shortcut, mnemonic_style);
        }

        if self.checked {
            screen.put_char_at(1, 0, CHECK, item_style);
        }
    }

    fn on_mouse_up(&mut self, mouse: &MouseEvent, sink: &mut dyn EventSink) -> EventResult {
        if !self.is_enabled() || !mouse.is_button1_release() || !self.hit_test(mouse.column, mouse.row)
        {
            return EventResult::Ignored;
        }
        self.dispatch(sink).is_ok().into()
    }

    fn on_keypress(&mut self, key: &KeyEvent, sink: &mut dyn EventSink) -> EventResult {
        if !self.is_enabled() || !key.is_activate() {
            return EventResult::Ignored;
        }
        self.dispatch(sink).is_ok().into()
    }
}
