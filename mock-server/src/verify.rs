//! Server-side AWS Signature V4 check.
//!
//! Recomputes the signature from the request as received, so any drift in
//! how the client canonicalizes or signs shows up as a 401.

use std::collections::HashMap;
use std::fmt;

use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const SERVICE: &str = "ProductAdvertisingAPI";
pub const TERMINATOR: &str = "aws4_request";

/// The key pair the server accepts.
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

/// Parsed `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureV4 {
    pub access_key: String,
    pub date: String,
    pub region: String,
    pub service: String,
    pub terminator: String,
    pub signed_headers: Vec<String>,
    pub signature: String,
}

impl SignatureV4 {
    pub fn scope(&self) -> String {
        format!("{}/{}/{}/{}", self.date, self.region, self.service, self.terminator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("missing header {0}")]
    MissingHeader(&'static str),
    #[error("malformed authorization: {0}")]
    Malformed(&'static str),
    #[error("the access key id {0} is not recognized")]
    UnknownAccessKey(String),
    #[error("credential scope {0} does not match the request")]
    BadScope(String),
    #[error("the request signature we calculated does not match the signature you provided")]
    SignatureMismatch,
}

impl VerifyError {
    /// Error code reported in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            VerifyError::MissingHeader(_) | VerifyError::Malformed(_) => "IncompleteSignature",
            VerifyError::UnknownAccessKey(_) => "UnrecognizedClient",
            VerifyError::BadScope(_) | VerifyError::SignatureMismatch => "InvalidSignature",
        }
    }
}

pub fn parse_authorization(header: &str) -> Result<SignatureV4, VerifyError> {
    let content = header
        .strip_prefix(ALGORITHM)
        .ok_or(VerifyError::Malformed("missing algorithm"))?
        .trim();

    let mut parts: HashMap<&str, &str> = HashMap::new();
    for part in content.split(',') {
        if let Some((key, value)) = part.trim().split_once('=') {
            parts.insert(key.trim(), value.trim());
        }
    }

    let credential = parts.get("Credential").ok_or(VerifyError::Malformed("missing Credential"))?;
    let signed_headers = parts
        .get("SignedHeaders")
        .ok_or(VerifyError::Malformed("missing SignedHeaders"))?;
    let signature = parts.get("Signature").ok_or(VerifyError::Malformed("missing Signature"))?;

    let credential_parts: Vec<&str> = credential.split('/').collect();
    if credential_parts.len() != 5 {
        return Err(VerifyError::Malformed("invalid credential format"));
    }

    Ok(SignatureV4 {
        access_key: credential_parts[0].to_string(),
        date: credential_parts[1].to_string(),
        region: credential_parts[2].to_string(),
        service: credential_parts[3].to_string(),
        terminator: credential_parts[4].to_string(),
        signed_headers: signed_headers.split(';').map(str::to_string).collect(),
        signature: signature.to_string(),
    })
}

/// Check the signature of a POST to `path` carrying `body`.
pub fn verify(
    credentials: &Credentials,
    path: &str,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<SignatureV4, VerifyError> {
    let authorization = header(headers, "authorization").ok_or(VerifyError::MissingHeader("Authorization"))?;
    let sig = parse_authorization(authorization)?;

    if sig.access_key != credentials.access_key {
        return Err(VerifyError::UnknownAccessKey(sig.access_key));
    }
    let amz_date = header(headers, "x-amz-date").ok_or(VerifyError::MissingHeader("X-Amz-Date"))?;
    if !amz_date.starts_with(&sig.date) || sig.service != SERVICE || sig.terminator != TERMINATOR {
        return Err(VerifyError::BadScope(sig.scope()));
    }

    let mut canonical_headers = Vec::with_capacity(sig.signed_headers.len());
    for name in &sig.signed_headers {
        let value = header(headers, name).ok_or(VerifyError::Malformed("signed header not present"))?;
        canonical_headers.push(format!("{}:{}", name.to_ascii_lowercase(), value.trim()));
    }

    let canonical_request = [
        "POST".to_string(),
        path.to_string(),
        String::new(),
        canonical_headers.join("\n"),
        String::new(),
        sig.signed_headers.join(";"),
        sha256_hex(body),
    ]
    .join("\n");
    let string_to_sign = [
        ALGORITHM.to_string(),
        amz_date.to_string(),
        sig.scope(),
        sha256_hex(canonical_request.as_bytes()),
    ]
    .join("\n");

    let date_key = hmac(format!("AWS4{}", credentials.secret_key).as_bytes(), sig.date.as_bytes());
    let region_key = hmac(&date_key, sig.region.as_bytes());
    let service_key = hmac(&region_key, sig.service.as_bytes());
    let signing_key = hmac(&service_key, sig.terminator.as_bytes());

    // Constant-time comparison of the raw MAC bytes.
    let provided = hex::decode(&sig.signature).map_err(|_| VerifyError::SignatureMismatch)?;
    let mut mac = HmacSha256::new_from_slice(&signing_key).map_err(|_| VerifyError::SignatureMismatch)?;
    mac.update(string_to_sign.as_bytes());
    mac.verify_slice(&provided).map_err(|_| VerifyError::SignatureMismatch)?;
    Ok(sig)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    match HmacSha256::new_from_slice(key) {
        Ok(mut mac) => {
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Err(_) => Vec::new(),
    }
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
