//! The command message and the conventions AnyIconBar reads into it.
//!
//! The sender never rewrites a command. [`Command::entries`] only mirrors how
//! the receiver will interpret the text, which is handy when logging what is
//! about to go out.

use std::ffi::OsString;
use std::fmt;

use anyhow::{bail, Result};
use bytes::Bytes;

/// Named colors the receiver understands, lowercase.
pub const NAMED_COLORS: [&str; 11] = [
    "white",
    "red",
    "orange",
    "yellow",
    "green",
    "cyan",
    "blue",
    "purple",
    "black",
    "gray",
    "controlaccentcolor",
];

const QUIT: &str = "quit";

/// A command string, sent as its raw UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    text: String,
}

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Command { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The datagram payload.
    pub fn payload(&self) -> Bytes {
        Bytes::copy_from_slice(self.text.as_bytes())
    }

    /// True when the receiver will exit on this command. It trims the
    /// datagram before comparing, so `"quit\n"` counts too.
    pub fn is_quit(&self) -> bool {
        self.text.trim() == QUIT
    }

    /// Splits the text into icon entries the way the receiver does.
    ///
    /// The whole text is trimmed first. A comma turns it into a list whose
    /// pieces are trimmed of blanks, with empty pieces skipped. Pieces the
    /// receiver would reject (see [`Entry::parse`]) are left out.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let text = self.text.trim();
        if !text.contains(',') {
            return Entry::parse(text).into_iter().collect();
        }

        text.split(',')
            .map(|piece| piece.trim_matches(is_blank))
            .filter(|piece| !piece.is_empty())
            .filter_map(Entry::parse)
            .collect()
    }
}

impl TryFrom<OsString> for Command {
    type Error = anyhow::Error;

    fn try_from(arg: OsString) -> Result<Self> {
        match arg.into_string() {
            Ok(text) => Ok(Command::new(text)),
            Err(arg) => bail!("message is not valid UTF-8: {arg:?}"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Command::new(text)
    }
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Command::new(text)
    }
}

/// One `symbol` or `symbol#color` piece of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub symbol: &'a str,
    pub color: Option<&'a str>,
}

impl<'a> Entry<'a> {
    /// Reads one piece. Returns `None` for empty pieces and for `#` pieces
    /// that do not split into a symbol and a color.
    ///
    /// Leading `#`s never start a part, so `"#red"` and `"star.fill#"` are
    /// rejected while `"a##b"` is symbol `a` with color `#b`.
    pub fn parse(piece: &'a str) -> Option<Self> {
        if piece.is_empty() {
            return None;
        }
        if !piece.contains('#') {
            return Some(Entry {
                symbol: piece,
                color: None,
            });
        }

        let (symbol, color) = piece.trim_start_matches('#').split_once('#')?;
        let symbol = symbol.trim_matches(is_blank);
        let color = color.trim_matches(is_blank);
        if symbol.is_empty() || color.is_empty() {
            return None;
        }
        Some(Entry {
            symbol,
            color: Some(color),
        })
    }

    pub fn color_kind(&self) -> Option<ColorKind> {
        self.color.map(ColorKind::of)
    }
}

/// How the receiver will try to read a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    /// `RGB` or `RRGGBB`, with or without a leading `#`.
    Hex,
    Named,
    Unknown,
}

impl ColorKind {
    pub fn of(color: &str) -> Self {
        if let Some(rest) = color.strip_prefix('#') {
            // Anything after a second '#' is ignored by the receiver.
            let hex = rest.split('#').next().unwrap_or_default();
            return if is_short_or_long_hex(hex) {
                ColorKind::Hex
            } else {
                ColorKind::Unknown
            };
        }

        let leading = color
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(color.len());
        if is_short_or_long_hex(&color[..leading]) {
            return ColorKind::Hex;
        }

        let lower = color.to_ascii_lowercase();
        if NAMED_COLORS.contains(&lower.as_str()) {
            ColorKind::Named
        } else {
            ColorKind::Unknown
        }
    }
}

// Spaces and tabs, not line breaks.
fn is_blank(c: char) -> bool {
    c.is_whitespace()
        && !matches!(c, '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn is_short_or_long_hex(s: &str) -> bool {
    (s.len() == 3 || s.len() == 6) && s.chars().all(|c| c.is_ascii_hexdigit())
}
