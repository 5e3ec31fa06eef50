use std::collections::BTreeMap;

/// A multi-field lexical request plus its per-call options.
///
/// Fields map a prefix (`"title"`, `"body"`, ...) to the raw text submitted
/// for processing. Inserting an existing prefix overwrites it — last write
/// wins, no error. The two options ride out-of-band as query parameters, not
/// inside the encoded body.
///
/// An empty request is legal (it encodes to `{}`), just useless; rejecting it
/// is a caller-layer concern, not the client's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalRequest {
    fields: BTreeMap<String, String>,
    want_stem: bool,
    want_urls: bool,
}

impl LexicalRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named text field. Overwrites any previous text under `key`.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), text.into());
        self
    }

    /// Ask the service to populate stem members in the reply.
    pub fn want_stem(&mut self, yes: bool) -> &mut Self {
        self.want_stem = yes;
        self
    }

    /// Ask the service to return URLs extracted from each field.
    pub fn want_urls(&mut self, yes: bool) -> &mut Self {
        self.want_urls = yes;
        self
    }

    pub fn stem_requested(&self) -> bool {
        self.want_stem
    }

    pub fn urls_requested(&self) -> bool {
        self.want_urls
    }

    /// The field mapping, ordered by key so encoded bytes are deterministic.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
