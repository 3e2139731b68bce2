use std::fmt;
use std::net::{SocketAddr, SocketAddrV4};

use anyhow::{bail, Context, Result};
use log::debug;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use crate::command::Command;
use crate::{DEFAULT_HOST, DEFAULT_PORT};

/// Where a command is sent. Defaults to `127.0.0.1:1738`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint(SocketAddr);

impl Endpoint {
    pub fn new(addr: SocketAddr) -> Self {
        Endpoint(addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint(SocketAddr::V4(SocketAddrV4::new(DEFAULT_HOST, DEFAULT_PORT)))
    }
}

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Endpoint(addr)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Sends `command` to `dst` as one datagram and returns the bytes written.
///
/// The socket is created for this call only and closed before returning,
/// whether or not the send worked. Nothing is read back.
pub fn send(command: &Command, dst: Endpoint) -> Result<usize> {
    let payload = command.payload();

    let sock = Socket::new(Domain::for_address(dst.addr()), Type::DGRAM, Some(Protocol::UDP))
        .context("failed to create UDP socket")?;
    let addr = SockAddr::from(dst.addr());

    debug!("send({:?}) → {}", command.as_str(), dst);
    let n = sock
        .send_to(&payload, &addr)
        .with_context(|| format!("failed to send to {dst}"))?;
    if n != payload.len() {
        bail!("short send to {dst}: {n} of {} bytes", payload.len());
    }

    Ok(n)
}
