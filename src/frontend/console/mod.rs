use std::io;
use std::time::Duration;

pub const PROMPT: &str = "Enter time (HH:MM:SS): ";
pub const INVALID_INPUT: &str = "Invalid input";
pub const TITLE: &str = "Timer";
pub const FINISHED: &str = "Countdown finished";
pub const DONE: &str = "Countdown finished. Press any key to exit.";

/// One full-screen frame, described independently of any real terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Duration prompt with the text typed so far. `invalid` adds the fixed
    /// error line and hides the cursor.
    Prompt { input: String, invalid: bool },
    /// Live countdown body, either a `HH:MM:SS` string or the finished
    /// sentinel text. `flash` renders the whole frame in reverse video.
    Countdown { remaining: String, flash: bool },
    /// Static acknowledgment frame shown before exit.
    Done,
}

/// Vertical anchor for centered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
}

/// The terminal capabilities the session needs. The real implementation is
/// [`super::tui::TuiConsole`]; tests drive the session with a scripted fake.
pub trait Console {
    fn render(&mut self, screen: &Screen) -> io::Result<()>;

    /// Blocking line read, echoing into the prompt frame as the user types.
    fn read_line(&mut self) -> io::Result<String>;

    /// Zero-timeout check for a pending keypress. Never blocks.
    fn poll_key(&mut self) -> io::Result<bool>;

    /// Blocking wait for a single keypress.
    fn read_key(&mut self) -> io::Result<()>;

    fn sleep(&mut self, duration: Duration);

    /// Monotonic time since the console was opened.
    fn now(&self) -> Duration;
}
