//! Request signer and response parser for the catalog API.
//!
//! # Design
//! `Client` carries the endpoint, partner tag and credentials and no
//! mutable state between calls. `build_request` produces a fully signed
//! `HttpRequest` and `parse_response` consumes the matching
//! `HttpResponse`; the round-trip in between is the caller's. `request`
//! chains the two through a caller-supplied `Transport`.

use tracing::{debug, warn};

use crate::entity::Response;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::marketplace::Marketplace;
use crate::operation::Operation;
use crate::query::Query;
use crate::signer::{CanonicalHeaders, Credentials, Signer};
use crate::timestamp::TimeStamp;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_PARTNER_TYPE: &str = "Associates";
pub const ACCEPT: &str = "application/json, text/javascript";
pub const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// API endpoint of one marketplace.
///
/// Host, region and language default to the marketplace's own; each can
/// be overridden, which is how tests point a client at a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    marketplace: Marketplace,
    scheme: String,
    host: String,
    region: String,
    language: String,
}

impl Server {
    pub fn new(marketplace: Marketplace) -> Self {
        Self {
            marketplace,
            scheme: DEFAULT_SCHEME.to_string(),
            host: marketplace.host(),
            region: marketplace.region().to_string(),
            language: marketplace.language().to_string(),
        }
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Host, with an optional `:port`. Signed as-is.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn marketplace(&self) -> Marketplace {
        self.marketplace
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn accept_language(&self) -> &str {
        &self.language
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.host, path)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new(Marketplace::default())
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    server: Server,
    partner_tag: String,
    signer: Signer,
}

impl Client {
    pub fn new(server: Server, partner_tag: &str, credentials: Credentials) -> Self {
        let signer = Signer::new(credentials, server.region());
        Self {
            server,
            partner_tag: partner_tag.to_string(),
            signer,
        }
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn partner_tag(&self) -> &str {
        &self.partner_tag
    }

    pub fn partner_type(&self) -> &str {
        DEFAULT_PARTNER_TYPE
    }

    /// A query for `operation` already carrying this client's marketplace,
    /// partner tag and partner type.
    pub fn query_for(&self, operation: Operation) -> Query {
        Query::for_operation(
            operation,
            self.server.marketplace().domain(),
            &self.partner_tag,
            DEFAULT_PARTNER_TYPE,
        )
    }

    /// Sign `query` as of `timestamp`.
    pub fn build_request(&self, query: &Query, timestamp: TimeStamp) -> Result<HttpRequest, ApiError> {
        let operation = query.operation();
        let payload = query.payload()?;
        let canonical = CanonicalHeaders::new(self.server.host(), operation, timestamp);
        let authorization = self.signer.authorization(&canonical, &payload);
        let body = String::from_utf8(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;

        let mut headers = vec![
            ("Accept".to_string(), ACCEPT.to_string()),
            ("Accept-Language".to_string(), self.server.accept_language().to_string()),
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
        ];
        headers.extend(canonical.iter().map(|(name, value)| (header_case(name), value.to_string())));
        headers.push(("Authorization".to_string(), authorization));

        let url = self.server.url(&operation.path());
        debug!(%operation, %url, x_amz_date = %timestamp, "signed request");
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url,
            headers,
            body,
        })
    }

    /// `build_request` stamped with the current time.
    pub fn sign_request(&self, query: &Query) -> Result<HttpRequest, ApiError> {
        self.build_request(query, TimeStamp::now())
    }

    pub fn parse_response(&self, response: HttpResponse) -> Result<Response, ApiError> {
        check_status(&response)?;
        Response::decode(response.body.as_bytes())
    }

    /// Sign, execute through `transport` and decode.
    ///
    /// Failures after signing are wrapped in `ApiError::Request` with the
    /// operation, URL and payload of the call.
    pub fn request<T: Transport>(&self, transport: &T, query: &Query) -> Result<Response, ApiError> {
        let request = self.sign_request(query)?;
        let wrap = |source: ApiError| ApiError::Request {
            operation: query.operation(),
            url: request.url.clone(),
            payload: request.body.clone(),
            source: Box::new(source),
        };
        let response = transport
            .execute(&request)
            .map_err(|e| wrap(ApiError::Transport(Box::new(e))))?;
        self.parse_response(response).map_err(wrap)
    }
}

/// Map a rejecting status to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status != 0 && response.status < 400 {
        return Ok(());
    }
    warn!(status = response.status, body = %response.body, "request rejected");
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

/// `x-amz-date` -> `X-Amz-Date`
fn header_case(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
