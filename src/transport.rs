//! Raw IPv4/ICMP transport.

use std::io::{self, Read};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use log::trace;
use socket2::{Domain, Protocol, Socket, Type};

const MIN_IPV4_HEADER: usize = 20;

/// A connected datagram channel carrying ICMP messages.
///
/// Implementations release their resources on drop.
pub trait Transport {
    /// Writes `packet` as one datagram, returning the bytes written.
    fn send(&mut self, packet: &[u8]) -> io::Result<usize>;

    /// Performs a single read that gives up after `timeout`.
    ///
    /// On success the ICMP message occupies `buf[..n]`.
    fn recv(&mut self, buf: &mut [u8], timeout: Duration) -> io::Result<usize>;
}

/// `SOCK_RAW` socket for protocol 1, bound to the wildcard address and
/// connected to a single peer.
pub struct RawSocket {
    sock: Socket,
    remote: Ipv4Addr,
}

impl RawSocket {
    pub fn open(remote: Ipv4Addr) -> io::Result<Self> {
        // AF_INET / SOCK_RAW / IPPROTO_ICMP; Type::RAW sits behind socket2's "all" feature
        let sock = Socket::new(Domain::IPV4, Type::from(libc::SOCK_RAW), Some(Protocol::ICMPV4))?;

        // Any local address
        sock.bind(&SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)).into())?;

        // Only datagrams from the peer are delivered; port is ignored for ICMP
        sock.connect(&SocketAddr::from((remote, 0)).into())?;
        trace!("raw socket connected to {remote}");
        Ok(RawSocket { sock, remote })
    }
}

impl Transport for RawSocket {
    fn send(&mut self, packet: &[u8]) -> io::Result<usize> {
        self.sock.send(packet)
    }

    fn recv(&mut self, buf: &mut [u8], timeout: Duration) -> io::Result<usize> {
        // Deadline for this one read
        self.sock.set_read_timeout(Some(timeout))?;

        let n = self.sock.read(buf)?;

        // The kernel includes the IP header on raw IPv4 reads
        Ok(strip_ipv4_header(buf, n))
    }
}

impl Drop for RawSocket {
    fn drop(&mut self) {
        trace!("closing raw socket to {}", self.remote);
    }
}

/// IPv4 raw sockets hand back the IP header as well; moves the payload to
/// the front of `buf` and returns its length.
fn strip_ipv4_header(buf: &mut [u8], n: usize) -> usize {
    if n < MIN_IPV4_HEADER || buf[0] >> 4 != 4 {
        return n;
    }
    let ihl = (buf[0] & 0x0F) as usize * 4;
    if ihl < MIN_IPV4_HEADER || ihl > n {
        return n;
    }
    buf.copy_within(ihl..n, 0);
    n - ihl
}
