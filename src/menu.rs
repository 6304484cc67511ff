//! Screen flow: main menu → playing ⇄ paused, playing → game over.
//!
//! Only the state transitions live here; drawing the menus is the
//! front-end's job.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Resume,
    SaveGame,
    Exit,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play => "PLAY",
            MenuItem::Resume => "RESUME",
            MenuItem::SaveGame => "SAVE GAME",
            MenuItem::Exit => "EXIT",
        }
    }
}

/// What the front-end has to do after a menu interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Leave the main menu: load the save and start playing.
    Start,
    Resume,
    Save,
    Quit,
}

const MAIN_ITEMS: &[MenuItem] = &[MenuItem::Play, MenuItem::Exit];
const PAUSE_ITEMS: &[MenuItem] = &[MenuItem::Resume, MenuItem::SaveGame, MenuItem::Exit];
const GAME_OVER_ITEMS: &[MenuItem] = &[MenuItem::Exit];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub screen: Screen,
    pub selected: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Menu {
            screen: Screen::MainMenu,
            selected: 0,
        }
    }
}

impl Menu {
    pub fn items(&self) -> &'static [MenuItem] {
        match self.screen {
            Screen::MainMenu => MAIN_ITEMS,
            Screen::Paused => PAUSE_ITEMS,
            Screen::GameOver => GAME_OVER_ITEMS,
            Screen::Playing => &[],
        }
    }

    pub fn select_next(&mut self) {
        let n = self.items().len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    pub fn select_prev(&mut self) {
        let n = self.items().len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    fn go(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected = 0;
    }

    /// Pause key. Pauses while playing, resumes from the pause menu.
    pub fn toggle_pause(&mut self) -> Option<MenuCommand> {
        match self.screen {
            Screen::Playing => {
                self.go(Screen::Paused);
                None
            }
            Screen::Paused => {
                self.go(Screen::Playing);
                Some(MenuCommand::Resume)
            }
            _ => None,
        }
    }

    pub fn game_over(&mut self) {
        self.go(Screen::GameOver);
    }

    /// Activate the highlighted item.
    pub fn activate(&mut self) -> Option<MenuCommand> {
        let item = *self.items().get(self.selected)?;
        match item {
            MenuItem::Play => {
                self.go(Screen::Playing);
                Some(MenuCommand::Start)
            }
            MenuItem::Resume => {
                self.go(Screen::Playing);
                Some(MenuCommand::Resume)
            }
            // stays on the pause screen
            MenuItem::SaveGame => Some(MenuCommand::Save),
            MenuItem::Exit => Some(MenuCommand::Quit),
        }
    }
}
