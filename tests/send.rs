use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, UdpSocket};
use std::time::Duration;

use anyhow::Result;
use anyiconbar_send::{send, Command, Endpoint};

fn bound(sock: UdpSocket) -> Result<(UdpSocket, Endpoint)> {
    sock.set_read_timeout(Some(Duration::from_secs(5)))?;
    let dst = Endpoint::from(sock.local_addr()?);
    Ok((sock, dst))
}

#[test]
fn each_message_is_exactly_one_datagram() -> Result<()> {
    let (rx, dst) = bound(UdpSocket::bind((Ipv4Addr::LOCALHOST, 0))?)?;
    let messages = [
        "red",
        "star.fill",
        "star.fill#fff",
        "star.fill#red, star.circle.fill#e20808",
        "  padded  ",
        "quit",
        "☆#e20808",
    ];

    let mut buf = [0u8; 1024];
    for msg in messages {
        send(&Command::from(msg), dst)?;

        let (amt, _) = rx.recv_from(&mut buf)?;
        assert_eq!(std::str::from_utf8(&buf[..amt])?, msg);
    }

    rx.set_read_timeout(Some(Duration::from_millis(200)))?;
    let err = rx.recv_from(&mut buf).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut));

    Ok(())
}

#[test]
fn sends_over_ipv6_loopback() -> Result<()> {
    // Hosts without IPv6 have nothing to test here.
    let Ok(sock) = UdpSocket::bind((Ipv6Addr::LOCALHOST, 0)) else {
        return Ok(());
    };
    let (rx, dst) = bound(sock)?;

    send(&Command::from("green"), dst)?;

    let mut buf = [0u8; 64];
    let (amt, _) = rx.recv_from(&mut buf)?;
    assert_eq!(&buf[..amt], b"green");

    Ok(())
}

#[test]
fn send_without_listener_succeeds() -> Result<()> {
    // Bind then drop to get a port that is very likely closed.
    let port = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0))?.local_addr()?.port();
    let dst = Endpoint::new((Ipv4Addr::LOCALHOST, port).into());

    assert_eq!(send(&Command::from("red"), dst)?, 3);

    Ok(())
}
