use anyhow::Result;

use echoping::{EchoSession, PingConfig, PingError, RawSocket, SystemResolver};

mod args;

/// Sends a single ICMP Echo Request and waits for the Echo Reply.
/// Raw sockets need root (or CAP_NET_RAW on Linux).
fn main() -> Result<()> {
    // Diagnostics via RUST_LOG, silent by default
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();

    // Exactly one argument: host name or IPv4 literal
    let args = args::parse()?;

    // 3s deadline, identifier and sequence 0
    let session = EchoSession::new(SystemResolver, PingConfig::default());

    // Resolve, open the raw socket, send once, wait once
    session
        .run(&args.host, RawSocket::open, |line| println!("{line}"))
        .map_err(with_privilege_hint)?;

    Ok(())
}

fn with_privilege_hint(err: PingError) -> anyhow::Error {
    if err.is_permission_denied() {
        anyhow::Error::new(err).context("raw ICMP sockets need root or CAP_NET_RAW")
    } else {
        err.into()
    }
}
