//! Input contract between the polling front-end and the simulation.

/// Everything the simulation needs to know about the player's input for one
/// frame. Directions and boost are level-triggered (held); `fire` and
/// `pause` are edge-triggered and set only on the frame the key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
    pub fire: bool,
    pub pause: bool,
    pub quit: bool,
}

/// Logical controls, independent of any particular keyboard backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Boost,
    Fire,
    Pause,
    Quit,
}

impl Control {
    /// Map a character key to a control. Shifted WASD also reports boost via
    /// [`Control::implies_boost`]; unknown keys map to nothing.
    pub fn from_char(c: char) -> Option<Control> {
        match c {
            'w' | 'W' => Some(Control::Up),
            's' | 'S' => Some(Control::Down),
            'a' | 'A' => Some(Control::Left),
            'd' | 'D' => Some(Control::Right),
            ' ' => Some(Control::Fire),
            'q' | 'Q' => Some(Control::Quit),
            _ => None,
        }
    }

    /// Terminals report Shift+letter as the upper-case letter only.
    pub fn implies_boost(c: char) -> bool {
        matches!(c, 'W' | 'A' | 'S' | 'D')
    }
}

impl InputFrame {
    /// Build a frame from the set of controls currently held plus the
    /// controls whose key went down this frame.
    pub fn from_controls(held: &[Control], pressed: &[Control]) -> Self {
        let mut frame = InputFrame::default();
        for control in held {
            match control {
                Control::Up => frame.up = true,
                Control::Down => frame.down = true,
                Control::Left => frame.left = true,
                Control::Right => frame.right = true,
                Control::Boost => frame.boost = true,
                // edge-triggered, only honoured from `pressed`
                Control::Fire | Control::Pause | Control::Quit => {}
            }
        }
        for control in pressed {
            match control {
                Control::Fire => frame.fire = true,
                Control::Pause => frame.pause = true,
                Control::Quit => frame.quit = true,
                _ => {}
            }
        }
        frame
    }
}
