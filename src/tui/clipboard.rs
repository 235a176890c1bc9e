//! Clipboard Access
//!
//! The terminal sets the system clipboard when it receives an OSC 52
//! sequence, which also works over SSH. Terminals that ignore OSC 52 fail
//! silently; only write errors are reported.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, IsTerminal, Write};

pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard backed by the controlling terminal
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdout is not a terminal",
            ));
        }
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()
    }
}

/// Build the escape sequence that places `text` on the clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
