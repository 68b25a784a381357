//! Input messages delivered to the application model.

use crate::geom::Point;

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Tab,
    Backspace,
    /// A printable character.
    Char(char),
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Mouse moved.
    Move,
}

/// A message delivered to [`Model::update`](crate::app::Model::update).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    KeyDown(Key),
    /// A mouse event at a screen position.
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized.
    Resize { width: i32, height: i32 },
    /// A scheduled tick fired. `seq` identifies the schedule that
    /// requested it, so stale ticks can be ignored.
    Tick { seq: u64 },
    /// Request to quit (e.g. Ctrl+C from the driver).
    Quit,
}
