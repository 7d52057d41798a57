use std::io;
use std::time::Duration;

use thiserror::Error;

/// Every way a single echo exchange can fail. All of them end the run.
#[derive(Error, Debug)]
pub enum PingError {
    #[error("Ping request could not find host {host}. Please check the name and try again.")]
    Resolve { host: String },

    #[error("could not open raw ICMP socket: {0}")]
    Open(#[source] io::Error),

    #[error("failed to send echo request: {0}")]
    Send(#[source] io::Error),

    #[error("Request timed out after {}ms.", .0.as_millis())]
    Timeout(Duration),

    #[error("failed to receive echo reply: {0}")]
    Receive(#[source] io::Error),

    #[error("The checksum of the reply is incorrect (residual {residual:#06x}).")]
    Checksum { residual: u16 },
}

impl PingError {
    /// True when the socket could not be opened for lack of privileges.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            PingError::Open(e) => matches!(e.raw_os_error(), Some(libc::EPERM | libc::EACCES))
                || e.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}
