//! Send a single command datagram to a running AnyIconBar.
//!
//! AnyIconBar listens for UDP datagrams on the loopback interface and treats
//! each one as a command: a color, an icon name, an `icon#color` pair, a
//! comma-separated list of those, or `quit`. This crate sends exactly one
//! such datagram and does not wait for an answer.

use std::net::Ipv4Addr;

pub mod command;
pub mod sender;

pub use command::Command;
pub use sender::{send, Endpoint};

pub const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
pub const DEFAULT_PORT: u16 = 1738;

/// Example messages shown in the usage text.
pub const EXAMPLES: [&str; 6] = [
    "red",
    "star.fill",
    "star.fill#red",
    "star.fill#fff",
    "'star.fill#red, star.circle.fill#e20808'",
    "quit",
];

/// Usage text printed when no message is given.
pub fn usage(program: &str) -> String {
    let mut out = format!("Usage: {program} <message>\nExamples:\n");
    for example in EXAMPLES {
        out.push_str(&format!("  {program} {example}\n"));
    }
    out
}
