use serde::{Deserialize, Serialize};

/// Transport tuning for an [`Engine`](crate::Engine).
///
/// The defaults match what the service deployments expect: a generous idle
/// pool so repeated calls to the same host reuse sockets, and bounded
/// connect/request times so a stalled remote cannot block a caller forever.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Cap on idle pooled connections kept per remote host.
    pub max_idle_per_host: usize,
    /// TCP connect timeout, seconds.
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout (connect + send + read), seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 100,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
