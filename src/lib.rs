//! Single-shot ICMPv4 echo ("ping").
//!
//! One Echo Request is sent to the target, a single read waits for the
//! reply, and the reply is accepted only if its Internet checksum holds.

pub mod checksum;
pub mod config;
pub mod error;
pub mod icmp;
pub mod resolve;
pub mod session;
pub mod transport;

pub use config::PingConfig;
pub use error::PingError;
pub use resolve::{Resolve, SystemResolver};
pub use session::{EchoSession, Reply, Target};
pub use transport::{RawSocket, Transport};
