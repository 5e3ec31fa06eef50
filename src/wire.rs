//! JSON wire codec for the lexical-processing protocol.
//!
//! Pure and stateless: requests go out as a flat JSON object mapping field
//! prefix to raw text, replies come back as per-field objects. Keeping the
//! codec free of any I/O means every shape can be tested against literal
//! byte strings.

use crate::request::LexicalRequest;
use crate::types::{ConvertedResult, TokenizedResult};

/// Serialize the request's field mapping. The want-stem/want-urls options are
/// deliberately absent here; they travel as query parameters on the URL.
pub fn encode(request: &LexicalRequest) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(request.fields())
}

/// Parse a tokenize reply: `{"<field>": {"tokens": [...], "urls": [...]}}`.
///
/// Missing `tokens`/`urls` arrays decode to empty, so a service that omits
/// optional members does not break this client.
pub fn decode_tokenized(body: &[u8]) -> Result<TokenizedResult, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Parse a convert reply: `{"<field>": {"text": .., "stem": .., "urls": [...]}}`.
pub fn decode_converted(body: &[u8]) -> Result<ConvertedResult, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_empty_request_is_empty_object() {
        let req = LexicalRequest::new();
        assert_eq!(encode(&req).unwrap(), b"{}");
    }

    #[test]
    fn encode_is_flat_field_to_text() {
        let mut req = LexicalRequest::new();
        req.insert("body", "a cat sat").insert("title", "big cat");

        // Fields are btree-ordered, so the bytes are deterministic.
        assert_eq!(
            encode(&req).unwrap(),
            br#"{"body":"a cat sat","title":"big cat"}"#
        );
    }

    #[test]
    fn encode_ignores_options() {
        let mut plain = LexicalRequest::new();
        plain.insert("title", "big cat");

        let mut flagged = LexicalRequest::new();
        flagged.insert("title", "big cat").want_stem(true).want_urls(true);

        assert_eq!(encode(&plain).unwrap(), encode(&flagged).unwrap());
    }

    #[test]
    fn decode_tokenized_single_field() {
        let body = br#"{"title":{"tokens":[{"word":"cat","stem":"cat","language":"en","positions":[0,15]}],"urls":[]}}"#;

        let result = decode_tokenized(body).unwrap();
        assert_eq!(result.len(), 1);

        let field = &result["title"];
        assert_eq!(field.tokens.len(), 1);
        assert_eq!(field.tokens[0].word, "cat");
        assert_eq!(field.tokens[0].stem, "cat");
        assert_eq!(field.tokens[0].language, "en");
        assert_eq!(field.tokens[0].positions, vec![0, 15]);
        assert!(field.urls.is_empty());
    }

    #[test]
    fn decode_tokenized_preserves_token_order() {
        let body = br#"{"body":{"tokens":[{"word":"a"},{"word":"cat"},{"word":"sat"}]}}"#;

        let result = decode_tokenized(body).unwrap();
        let words: Vec<&str> = result["body"]
            .tokens
            .iter()
            .map(|t| t.word.as_str())
            .collect();
        assert_eq!(words, vec!["a", "cat", "sat"]);
    }

    #[test]
    fn decode_tokenized_tolerates_missing_arrays() {
        let result = decode_tokenized(br#"{"title":{}}"#).unwrap();
        assert!(result["title"].tokens.is_empty());
        assert!(result["title"].urls.is_empty());
    }

    #[test]
    fn decode_converted_single_field() {
        let body =
            br#"{"title":{"text":"hello world","stem":"hello world","urls":["http://x.test"]}}"#;

        let result = decode_converted(body).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result["title"].text, "hello world");
        assert_eq!(result["title"].stem, "hello world");
        assert_eq!(result["title"].urls, vec!["http://x.test".to_string()]);
    }

    #[test]
    fn decode_converted_without_stem_or_urls() {
        // want-stem/want-urls off: the service replies with bare text.
        let result = decode_converted(br#"{"title":{"text":"hello"}}"#).unwrap();
        assert_eq!(result["title"].text, "hello");
        assert!(result["title"].stem.is_empty());
        assert!(result["title"].urls.is_empty());
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(decode_tokenized(b"not json at all").is_err());
        assert!(decode_converted(b"<html>busy</html>").is_err());
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        // Valid JSON, but a field value must be an object.
        assert!(decode_tokenized(br#"{"title":[1,2,3]}"#).is_err());
        assert!(decode_converted(br#"{"title":"just a string"}"#).is_err());
    }

    #[test]
    fn roundtrip_result_keys_subset_of_request_keys() {
        let mut req = LexicalRequest::new();
        req.insert("title", "big cat").insert("body", "a cat sat");
        let _encoded = encode(&req).unwrap();

        // The service answered for only one of the two fields.
        let reply = br#"{"title":{"tokens":[{"word":"big"},{"word":"cat"}]}}"#;
        let result = decode_tokenized(reply).unwrap();

        assert!(result.keys().all(|k| req.fields().contains_key(k)));
    }
}
