//! One echo exchange: resolve, send a single request, wait once, validate.

use std::fmt;
use std::io;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use log::debug;

use crate::checksum::checksum;
use crate::config::PingConfig;
use crate::error::PingError;
use crate::icmp::{EchoHeader, build_echo_request};
use crate::resolve::Resolve;
use crate::transport::Transport;

/// A resolved destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub addr: Ipv4Addr,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pinging {} [{}]", self.host, self.addr)
    }
}

/// A reply that passed checksum validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub addr: Ipv4Addr,
    pub elapsed: Duration,
    /// ICMP bytes received
    pub len: usize,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reply from {}, time={}ms", self.addr, self.elapsed.as_millis())
    }
}

pub struct EchoSession<R> {
    resolver: R,
    config: PingConfig,
}

impl<R: Resolve> EchoSession<R> {
    pub fn new(resolver: R, config: PingConfig) -> Self {
        EchoSession { resolver, config }
    }

    pub fn resolve(&self, host: &str) -> Result<Target, PingError> {
        let addr = self.resolver.resolve(host)?;
        debug!("resolved {host} to {addr}");
        Ok(Target { host: host.to_string(), addr })
    }

    /// One full ping of `host`.
    ///
    /// `open` acquires the transport for the resolved address and `report`
    /// receives each console line: the `Pinging` line once the transport is
    /// up, the `Reply` line only after the reply validates.
    pub fn run<T, F, W>(&self, host: &str, open: F, mut report: W) -> Result<Reply, PingError>
    where
        T: Transport,
        F: FnOnce(Ipv4Addr) -> io::Result<T>,
        W: FnMut(&dyn fmt::Display),
    {
        // Name lookup, fails before any socket exists
        let target = self.resolve(host)?;

        // Raw transport, released when `exchange` returns
        let transport = open(target.addr).map_err(PingError::Open)?;
        report(&target);

        // Send, single read, checksum
        let reply = self.exchange(transport, &target)?;
        report(&reply);

        Ok(reply)
    }

    /// Sends one Echo Request over `transport` and waits once for the reply.
    ///
    /// The transport is consumed and dropped before this returns, whichever
    /// way the exchange ends. No step is retried.
    pub fn exchange<T: Transport>(&self, mut transport: T, target: &Target) -> Result<Reply, PingError> {
        // Header with a zero checksum, summed, patched and re-encoded
        let request = build_echo_request(self.config.identifier, self.config.sequence);
        debug!("echo request {request:02x?}");

        let sent = transport.send(&request).map_err(PingError::Send)?;
        if sent != request.len() {
            return Err(PingError::Send(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {sent} of {} bytes", request.len()),
            )));
        }

        // Round trip is timed around the read only
        let mut buf = vec![0u8; self.config.capture_len];
        let start = Instant::now();
        let received = transport.recv(&mut buf, self.config.timeout);
        let elapsed = start.elapsed();

        let n = received.map_err(|e| match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => PingError::Timeout(self.config.timeout),
            _ => PingError::Receive(e),
        })?;
        let reply = &buf[..n.min(buf.len())];
        debug!("received {} bytes in {elapsed:?}", reply.len());

        // An intact message, checksum included, sums to zero
        let residual = checksum(reply);
        if residual != 0 {
            return Err(PingError::Checksum { residual });
        }
        if let Some(hdr) = EchoHeader::decode(reply) {
            debug!(
                "reply type={} code={} id={} seq={}{}",
                hdr.icmp_type,
                hdr.code,
                hdr.identifier,
                hdr.sequence,
                if hdr.is_echo_reply() { "" } else { " (not an echo reply)" }
            );
        }

        Ok(Reply {
            addr: target.addr,
            elapsed,
            len: reply.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() {
        let target = Target {
            host: "example.org".into(),
            addr: Ipv4Addr::new(192, 0, 2, 1),
        };
        assert_eq!(target.to_string(), "Pinging example.org [192.0.2.1]");

        let reply = Reply {
            addr: target.addr,
            elapsed: Duration::from_micros(12_700),
            len: 8,
        };
        assert_eq!(reply.to_string(), "Reply from 192.0.2.1, time=12ms");
    }
}
