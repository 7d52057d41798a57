use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

use log::debug;

use crate::error::PingError;

/// Maps a hostname or address literal to an IPv4 address.
pub trait Resolve {
    fn resolve(&self, host: &str) -> Result<Ipv4Addr, PingError>;
}

/// Resolver backed by the operating system (`getaddrinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl Resolve for SystemResolver {
    fn resolve(&self, host: &str) -> Result<Ipv4Addr, PingError> {
        let not_found = || PingError::Resolve { host: host.to_string() };

        if host.is_empty() {
            return Err(not_found());
        }
        if let Ok(ip) = host.parse::<Ipv4Addr>() {
            return Ok(ip);
        }

        // port is irrelevant for ICMP, the lookup just needs one
        let addrs = (host, 0).to_socket_addrs().map_err(|e| {
            debug!("lookup of {host} failed: {e}");
            not_found()
        })?;
        addrs
            .filter_map(|sa| match sa.ip() {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(not_found)
    }
}
