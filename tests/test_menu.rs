use space_explorer::menu::{Menu, MenuCommand, MenuItem, Screen};

fn playing() -> Menu {
    Menu { screen: Screen::Playing, selected: 0 }
}

#[test]
fn main_menu_play_starts_game() {
    let mut menu = Menu::default();
    assert_eq!(menu.items(), &[MenuItem::Play, MenuItem::Exit]);
    assert_eq!(menu.activate(), Some(MenuCommand::Start));
    assert_eq!(menu.screen, Screen::Playing);
}

#[test]
fn main_menu_exit_quits() {
    let mut menu = Menu::default();
    menu.select_prev();
    assert_eq!(menu.selected, 1);
    assert_eq!(menu.activate(), Some(MenuCommand::Quit));
}

#[test]
fn selection_wraps_both_ways() {
    let mut menu = playing();
    menu.toggle_pause();
    menu.select_next();
    menu.select_next();
    menu.select_next();
    assert_eq!(menu.selected, 0);
    menu.select_prev();
    assert_eq!(menu.items()[menu.selected], MenuItem::Exit);
}

#[test]
fn pause_resume_and_save() {
    let mut menu = playing();
    assert_eq!(menu.toggle_pause(), None);
    assert_eq!(menu.screen, Screen::Paused);

    menu.select_next();
    assert_eq!(menu.items()[menu.selected].label(), "SAVE GAME");
    assert_eq!(menu.activate(), Some(MenuCommand::Save));
    assert_eq!(menu.screen, Screen::Paused);

    assert_eq!(menu.toggle_pause(), Some(MenuCommand::Resume));
    assert_eq!(menu.screen, Screen::Playing);
    assert_eq!(menu.activate(), None);
}

#[test]
fn resume_item_returns_to_play() {
    let mut menu = playing();
    menu.toggle_pause();
    assert_eq!(menu.activate(), Some(MenuCommand::Resume));
    assert_eq!(menu.screen, Screen::Playing);
}

#[test]
fn game_over_offers_exit_only() {
    let mut menu = playing();
    menu.game_over();
    assert_eq!(menu.items(), &[MenuItem::Exit]);
    assert_eq!(menu.toggle_pause(), None);
    assert_eq!(menu.activate(), Some(MenuCommand::Quit));
}
