//! The client engine: one round trip per call.
//!
//! An [`Engine`] owns the pooled HTTP client and the two resolved endpoint
//! URLs. Each `tokenize`/`convert` call encodes the field mapping, tags the
//! POST with a correlation id, flips the option query parameters on, sends,
//! checks the status and decodes the endpoint-appropriate reply shape. No
//! retries happen here; a single failed attempt goes straight back to the
//! caller, who owns retry policy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::LexicalRequest;
use crate::types::{ConvertedResult, TokenizedResult};
use crate::wire;

/// Trace header carried on every request. The value is an opaque decimal
/// integer the server echoes or ignores; collisions are harmless.
const X_REQUEST_HEADER: &str = "X-Request";

const TOKENIZE_PATH: &str = "/tokenize";
const CONVERT_PATH: &str = "/convert";

/// Correlation-id source owned by one [`Engine`].
///
/// A plain atomic counter: entropy-seeded by default so concurrent engines in
/// one process do not hand out overlapping ranges, and seedable so tests get
/// fully deterministic ids. No process-wide random state is touched per call.
#[derive(Debug)]
pub struct RequestIdSource {
    next: AtomicU64,
}

impl RequestIdSource {
    /// Start the counter at `seed`. Ids are then `seed`, `seed + 1`, ...
    pub fn seeded(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// Hand out the next id. Wraps on overflow, which is fine for a value
    /// that only needs to be distinct-ish within a trace window.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RequestIdSource {
    fn default() -> Self {
        Self::seeded(fastrand::u64(..))
    }
}

/// Client for the remote lexical-processing service.
///
/// Construction resolves the two fixed endpoints against `host:port` and
/// builds the pooled transport; after that the engine is immutable and safe
/// to share across tasks. Dropping it releases the connection pool.
#[derive(Debug)]
pub struct Engine {
    tokenize_url: Url,
    convert_url: Url,
    http: reqwest::Client,
    request_ids: RequestIdSource,
}

impl Engine {
    /// Connect-configure an engine for the service at `addr` (`host:port`)
    /// with default transport tuning.
    ///
    /// Fails only if the address is syntactically invalid or the HTTP client
    /// rejects its configuration; no network traffic happens here.
    pub fn new(addr: &str) -> Result<Self, ClientError> {
        Self::with_config(addr, &ClientConfig::default())
    }

    /// Same as [`Engine::new`] with explicit pool/timeout tuning.
    pub fn with_config(addr: &str, cfg: &ClientConfig) -> Result<Self, ClientError> {
        let tokenize_url = endpoint_url(addr, TOKENIZE_PATH)?;
        let convert_url = endpoint_url(addr, CONVERT_PATH)?;

        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(cfg.max_idle_per_host)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            tokenize_url,
            convert_url,
            http,
            request_ids: RequestIdSource::default(),
        })
    }

    /// Replace the correlation-id source, e.g. with a seeded one for tests.
    pub fn with_request_ids(mut self, source: RequestIdSource) -> Self {
        self.request_ids = source;
        self
    }

    /// Tokenize every field of `request` into word/stem/language/position
    /// streams.
    pub async fn tokenize(&self, request: &LexicalRequest) -> Result<TokenizedResult, ClientError> {
        let (url, body) = self.round_trip(&self.tokenize_url, request).await?;
        wire::decode_tokenized(&body).map_err(|source| decode_error(&url, &body, source))
    }

    /// Convert (strip markup / normalize) every field of `request`.
    pub async fn convert(&self, request: &LexicalRequest) -> Result<ConvertedResult, ClientError> {
        let (url, body) = self.round_trip(&self.convert_url, request).await?;
        wire::decode_converted(&body).map_err(|source| decode_error(&url, &body, source))
    }

    /// Shared protocol for both endpoints: encode, POST, check status, return
    /// the raw success body for the endpoint-specific decoder.
    async fn round_trip(
        &self,
        endpoint: &Url,
        request: &LexicalRequest,
    ) -> Result<(Url, Vec<u8>), ClientError> {
        let encoded = wire::encode(request).map_err(ClientError::Encode)?;

        let mut url = endpoint.clone();
        // An untouched query serializer still leaves a trailing '?' behind,
        // so only open it when at least one option is on.
        if request.stem_requested() || request.urls_requested() {
            let mut query = url.query_pairs_mut();
            if request.stem_requested() {
                query.append_pair("stem", "true");
            }
            if request.urls_requested() {
                query.append_pair("urls", "true");
            }
        }

        let request_id = self.request_ids.next_id();
        debug!(
            url = %url,
            request_id,
            fields = request.len(),
            "dispatching lexical request"
        );

        let response = self
            .http
            .post(url.clone())
            .header("Content-Type", "application/json")
            .header(X_REQUEST_HEADER, request_id.to_string())
            .body(encoded)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;

        if status != StatusCode::OK {
            warn!(url = %url, request_id, status = status.as_u16(), "lexical request rejected");
            return Err(ClientError::RemoteStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok((url, body.to_vec()))
    }
}

fn endpoint_url(addr: &str, path: &str) -> Result<Url, ClientError> {
    let raw = format!("http://{addr}{path}");
    let url = Url::parse(&raw)
        .map_err(|e| ClientError::Config(format!("invalid server address '{addr}': {e}")))?;
    // Url::parse will happily reinterpret "host:port" shapes where the host
    // part looks like a scheme; insist on a real host remaining.
    if url.host_str().is_none() {
        return Err(ClientError::Config(format!(
            "invalid server address '{addr}': no host"
        )));
    }
    Ok(url)
}

fn decode_error(url: &Url, body: &[u8], source: serde_json::Error) -> ClientError {
    ClientError::Decode {
        url: url.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    }
}
