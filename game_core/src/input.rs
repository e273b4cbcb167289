//! Keyboard input handling

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
    Other,
}

impl Key {
    /// Map a host key name onto a game key
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" | "w" | "W" => Key::Up,
            "ArrowDown" | "Down" | "s" | "S" => Key::Down,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Discrete events delivered by the host once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

impl InputEvent {
    /// Whether this event asks the game loop to stop
    pub fn is_exit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(Key::Escape))
    }
}
