//! Client for a remote lexical-processing HTTP service.
//!
//! The service does the actual language work (tokenization, stemming,
//! language detection, markup stripping, URL extraction); this crate only
//! carries requests to it and parses what comes back. You hand the engine a
//! set of named text fields, it POSTs them as one JSON object and gives you
//! a per-field result map:
//!
//! - **tokenize** — each field becomes an ordered token stream, every token
//!   with its surface form, detected language, source positions and
//!   (optionally) a stem.
//! - **convert** — each field comes back as cleaned/normalized text, again
//!   with an optional stemmed rendition.
//!
//! Stems and extracted URLs are opt-in per request; when you don't ask, the
//! service doesn't compute them and the corresponding members stay empty.
//!
//! The engine keeps a capped pool of reusable connections, so hammering one
//! server from many tasks amortizes the TCP setup cost. Calls are plain
//! `async` round trips — no retries, no hidden state, errors come back with
//! the endpoint, status and raw body attached.
//!
//! ## Quick example
//!
//! ```no_run
//! use lexproc::{Engine, LexicalRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lexproc::ClientError> {
//!     let engine = Engine::new("localhost:8101")?;
//!
//!     let mut request = LexicalRequest::new();
//!     request.insert("title", "Big cats sleep a lot").want_stem(true);
//!
//!     let result = engine.tokenize(&request).await?;
//!     for (field, out) in &result {
//!         for token in &out.tokens {
//!             println!("{field}: {} -> {} [{}] @ {:?}",
//!                 token.word, token.stem, token.language, token.positions);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod request;
pub mod types;

mod engine;
mod wire;

pub use crate::config::ClientConfig;
pub use crate::engine::{Engine, RequestIdSource};
pub use crate::error::ClientError;
pub use crate::request::LexicalRequest;
pub use crate::types::{ConvertedField, ConvertedResult, Token, TokenizedField, TokenizedResult};
