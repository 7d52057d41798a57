use std::time::Duration;

/// How long the single read waits for a reply.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Receive buffer size.
pub const DEFAULT_CAPTURE_LEN: usize = 1024;

/// Parameters of one echo exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingConfig {
    pub timeout: Duration,
    pub capture_len: usize,
    pub identifier: u16,
    pub sequence: u16,
}

impl Default for PingConfig {
    fn default() -> Self {
        PingConfig {
            timeout: DEFAULT_TIMEOUT,
            capture_len: DEFAULT_CAPTURE_LEN,
            identifier: 0,
            sequence: 0,
        }
    }
}

impl PingConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_identifier(mut self, identifier: u16) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn with_sequence(mut self, sequence: u16) -> Self {
        self.sequence = sequence;
        self
    }
}
