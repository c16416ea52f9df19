//! Menu item behavior as seen by an application routing events to it.

use loom_tui::prelude::*;
use pretty_assertions::assert_eq;

fn release(column: u16, row: u16) -> MouseEvent {
    MouseEvent::up(MouseButton::Left, column, row)
}

fn render(item: &MenuItem, active: bool) -> Screen {
    let theme = Theme::default();
    let mut screen = Screen::new(item.width(), 1);
    render_widget(item, &mut screen, &DrawContext::new(&theme).with_active(active));
    screen
}

#[test]
fn disabled_cut_ignores_clicks() {
    let mut cut = MenuItem::new(MenuItemConfig::for_id(MenuId::CUT), 0, 0, "Cu&t");
    let mut posted: Vec<MenuEvent> = Vec::new();

    let result = cut.on_mouse_up(&release(2, 0), &mut posted);

    assert_eq!(result, EventResult::Ignored);
    assert!(posted.is_empty());
    assert_eq!(cut.state(), MenuItemState::Disabled);
    assert!(matches!(cut.dispatch(&mut posted), Err(MenuError::Disabled { .. })));
    assert!(posted.is_empty());
}

#[test]
fn enabling_cut_makes_it_selectable() {
    let mut cut = MenuItem::new(MenuItemConfig::for_id(MenuId::CUT), 0, 0, "Cu&t");
    let mut posted: Vec<MenuEvent> = Vec::new();

    cut.set_enabled(true);
    assert_eq!(cut.on_mouse_up(&release(2, 0), &mut posted), EventResult::Handled);
    assert_eq!(posted, vec![MenuEvent::new(MenuId::CUT)]);
}

#[test]
fn checkable_item_toggles_and_posts_each_time() {
    let config = MenuItemConfig::new(MenuId(2000)).checkable(true);
    let mut wrap = MenuItem::new(config, 0, 0, "&Word Wrap");
    let mut posted: Vec<MenuEvent> = Vec::new();

    let mut seen = vec![wrap.is_checked()];
    for _ in 0..3 {
        wrap.on_mouse_up(&release(0, 0), &mut posted);
        seen.push(wrap.is_checked());
    }

    assert_eq!(seen, vec![false, true, false, true]);
    assert_eq!(posted.len(), 3);
    assert!(posted.iter().all(|event| event.id == MenuId(2000)));
    assert_eq!(wrap.state(), MenuItemState::EnabledChecked);
    assert!(render(&wrap, false).row_text(0).unwrap().starts_with("│√"));
}

#[test]
fn accelerator_text_is_right_aligned() {
    let exit = MenuItem::new(MenuItemConfig::for_id(MenuId::EXIT), 0, 0, "Exit")
        .with_key(KeyEvent::alt('x'));

    assert_eq!(exit.width(), 15);
    assert_eq!(exit.key_text(), Some("Alt-X"));

    let screen = render(&exit, false);
    let row: Vec<char> = screen.row_text(0).unwrap().chars().collect();
    assert_eq!(row[8..13].iter().collect::<String>(), "Alt-X");
    assert_eq!(row[0], '│');
    assert_eq!(row[14], '│');
}

#[test]
fn hit_test_covers_exactly_one_row() {
    let item = MenuItem::new(MenuItemConfig::new(MenuId(2001)), 0, 0, "Save");
    let width = i32::from(item.width());

    assert!(!item.hit_test(-1, 0));
    assert!(item.hit_test(0, 0));
    assert!(item.hit_test(width - 1, 0));
    assert!(!item.hit_test(width, 0));
    assert!(!item.hit_test(0, -1));
    assert!(!item.hit_test(0, 1));
}

#[test]
fn clicks_are_routed_through_the_parent_frame() {
    let mut save = MenuItem::new(MenuItemConfig::new(MenuId(2002)), 0, 3, "Save");
    let mut posted: Vec<MenuEvent> = Vec::new();
    let menu_origin = Point::new(10, 2);

    // Row 4 is the menu's first row, one above the item.
    let missed = route_mouse_up(&mut save, &release(12, 4), menu_origin, &mut posted);
    let hit = route_mouse_up(&mut save, &release(12, 5), menu_origin, &mut posted);

    assert_eq!(missed, EventResult::Ignored);
    assert_eq!(hit, EventResult::Handled);
    assert_eq!(posted, vec![MenuEvent::new(MenuId(2002))]);
}

#[test]
fn only_checkable_items_can_be_checked() {
    let mut plain = MenuItem::new(MenuItemConfig::new(MenuId(2003)), 0, 0, "Plain");
    assert!(matches!(plain.set_checked(true), Err(MenuError::NotCheckable { .. })));
    assert!(!plain.is_checked());

    let mut toggle =
        MenuItem::new(MenuItemConfig::new(MenuId(2004)).checkable(true), 0, 0, "Toggle");
    toggle.set_checked(true).unwrap();
    toggle.set_checkable(false);
    assert!(!toggle.is_checked());
    assert_eq!(toggle.state(), MenuItemState::EnabledUnchecked);
}

#[test]
fn keyboard_selection_paths() {
    let mut open = MenuItem::new(MenuItemConfig::for_id(MenuId::OPEN_FILE), 0, 0, "&Open")
        .with_key(KeyEvent::ctrl('o'));
    let mut posted: Vec<MenuEvent> = Vec::new();

    assert!(open.matches_mnemonic(&KeyEvent::char('o')));
    assert!(open.matches_mnemonic(&KeyEvent::alt('O')));
    assert!(!open.matches_mnemonic(&KeyEvent::ctrl('o')));
    assert!(open.matches_accelerator(&KeyEvent::ctrl('o')));
    assert!(!open.matches_accelerator(&KeyEvent::char('o')));

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(open.on_keypress(&enter, &mut posted), EventResult::Handled);
    assert_eq!(posted, vec![MenuEvent::new(MenuId::OPEN_FILE)]);
}
