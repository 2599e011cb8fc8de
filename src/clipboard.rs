// System clipboard access.
// Uses the terminal's OSC 52 escape sequence so it also works over SSH.

use std::fmt;
use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crossterm::{Command, execute};

/// Destination for copied text.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Sets the system clipboard: `ESC ] 52 ; c ; <base64> BEL`.
struct SetClipboard<'a>(&'a str);

impl Command for SetClipboard<'_> {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b]52;c;{}\x07", STANDARD.encode(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "OSC 52 requires ANSI support",
        ))
    }
}

/// Clipboard writing OSC 52 sequences to a terminal stream.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        execute!(self.out, SetClipboard(text))
    }
}

/// Clipboard that records copies in memory.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    pub copied: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl Clipboard for RecordingClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}
