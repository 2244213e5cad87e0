//! AWS4-HMAC-SHA256 request signing.
//!
//! # Overview
//! The service verifies every request by recomputing a signature over a
//! canonical form of it. Each step here must match the verifier byte for
//! byte:
//!
//! 1. canonical request: method, path, empty query string, the four
//!    canonical headers, the signed-header list and the payload digest,
//!    joined with `\n`;
//! 2. string to sign: algorithm, timestamp, credential scope and the digest
//!    of the canonical request;
//! 3. signing key: HMAC chain over date, region, service and terminator,
//!    seeded with `"AWS4" + secret`;
//! 4. signature: hex HMAC of the string to sign under that key.
//!
//! # Design
//! Every intermediate value is exposed so the reference vector can be
//! pinned at each step. Nothing is cached: a new `TimeStamp` means a new
//! key.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::http::HttpMethod;
use crate::operation::Operation;
use crate::timestamp::TimeStamp;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SERVICE_NAME: &str = "ProductAdvertisingAPI";
pub const AWS4_REQUEST: &str = "aws4_request";
pub const CONTENT_ENCODING: &str = "amz-1.0";
const KEY_PREFIX: &str = "AWS4";

/// Names of the signed headers, in signing order.
pub const SIGNED_HEADERS: [&str; 4] = ["content-encoding", "host", "x-amz-date", "x-amz-target"];

// ---------------------------------------------------------------------------
// Canonical headers
// ---------------------------------------------------------------------------

/// The four headers covered by the signature, bound to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaders {
    operation: Operation,
    timestamp: TimeStamp,
    values: [String; 4],
}

impl CanonicalHeaders {
    pub fn new(host: &str, operation: Operation, timestamp: TimeStamp) -> Self {
        Self {
            operation,
            timestamp,
            values: [
                CONTENT_ENCODING.to_string(),
                host.to_string(),
                timestamp.signing_instant(),
                operation.target(),
            ],
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn timestamp(&self) -> TimeStamp {
        self.timestamp
    }

    /// Header value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        SIGNED_HEADERS
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .map(|i| self.values[i].as_str())
    }

    /// `(name, value)` pairs in signing order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        SIGNED_HEADERS.into_iter().zip(self.values.iter().map(String::as_str))
    }

    /// `content-encoding;host;x-amz-date;x-amz-target`
    pub fn signed_headers(&self) -> String {
        SIGNED_HEADERS.join(";")
    }

    /// One `name:value` line per header.
    pub fn canonical_block(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ---------------------------------------------------------------------------
// Credentials and scope
// ---------------------------------------------------------------------------

/// Access key pair. Treated as opaque strings.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// `date/region/service/aws4_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScope {
    pub date: String,
    pub region: String,
}

impl fmt::Display for SigningScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{SERVICE_NAME}/{AWS4_REQUEST}", self.date, self.region)
    }
}

// ---------------------------------------------------------------------------
// Signer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
    region: String,
}

impl Signer {
    pub fn new(credentials: Credentials, region: impl Into<String>) -> Self {
        Self {
            credentials,
            region: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn scope(&self, timestamp: &TimeStamp) -> SigningScope {
        SigningScope {
            date: timestamp.signing_date(),
            region: self.region.clone(),
        }
    }

    pub fn canonical_request(headers: &CanonicalHeaders, payload: &[u8]) -> String {
        [
            HttpMethod::Post.as_str().to_string(),
            headers.operation().path(),
            String::new(),
            headers.canonical_block(),
            String::new(),
            headers.signed_headers(),
            sha256_hex(payload),
        ]
        .join("\n")
    }

    pub fn string_to_sign(&self, headers: &CanonicalHeaders, payload: &[u8]) -> String {
        let canonical = Self::canonical_request(headers, payload);
        trace!(%canonical, "canonical request");
        let string_to_sign = [
            ALGORITHM.to_string(),
            headers.timestamp().signing_instant(),
            self.scope(&headers.timestamp()).to_string(),
            sha256_hex(canonical.as_bytes()),
        ]
        .join("\n");
        trace!(%string_to_sign, "string to sign");
        string_to_sign
    }

    /// Four-stage HMAC chain keyed by `"AWS4" + secret`.
    pub fn derive_signing_key(&self, signing_date: &str) -> Vec<u8> {
        let seed = format!("{KEY_PREFIX}{}", self.credentials.secret_key);
        let date_key = hmac_sha256(seed.as_bytes(), signing_date.as_bytes());
        let region_key = hmac_sha256(&date_key, self.region.as_bytes());
        let service_key = hmac_sha256(&region_key, SERVICE_NAME.as_bytes());
        hmac_sha256(&service_key, AWS4_REQUEST.as_bytes())
    }

    /// Lowercase hex signature of the request.
    pub fn signature(&self, headers: &CanonicalHeaders, payload: &[u8]) -> String {
        let key = self.derive_signing_key(&headers.timestamp().signing_date());
        let string_to_sign = self.string_to_sign(headers, payload);
        hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()))
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self, headers: &CanonicalHeaders, payload: &[u8]) -> String {
        format!(
            "{ALGORITHM} Credential={}/{},SignedHeaders={},Signature={}",
            self.credentials.access_key,
            self.scope(&headers.timestamp()),
            headers.signed_headers(),
            self.signature(headers, payload),
        )
    }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// HMAC-SHA256 of `data` under `key`. HMAC takes keys of any length, so
/// the error arm only exists to satisfy the API.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    match HmacSha256::new_from_slice(key) {
        Ok(mut mac) => {
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Err(_) => Vec::new(),
    }
}
