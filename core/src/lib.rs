//! Request builder and signer for the Product Advertising API v5.
//!
//! # Overview
//! Builds catalog queries (`GetItems`, `SearchItems`, `GetVariations`,
//! `GetBrowseNodes`), serializes them into the JSON body the service
//! expects, signs them with AWS Signature Version 4 and decodes the
//! response. The network round-trip is left to the caller
//! (host-does-IO pattern), so the whole crate is deterministic given a
//! `TimeStamp`.
//!
//! # Design
//! - `Query` validates every filter against the operation's allow-list and
//!   the filter's value domain. Refused assignments never reach the wire.
//! - `Client` is stateless: `build_request` produces a signed
//!   `HttpRequest`, `parse_response` consumes an `HttpResponse`.
//!   `request` chains them through a caller-supplied `Transport`.
//! - Types use owned `String` / `Vec` fields to keep the FFI mapping simple.
//! - Response entities are defined independently from the mock-server
//!   crate; integration tests catch schema drift.

pub mod client;
pub mod entity;
pub mod error;
pub mod filter;
pub mod http;
pub mod marketplace;
pub mod operation;
pub mod query;
pub mod resource;
pub mod signer;
pub mod timestamp;

pub use client::{Client, Server};
pub use entity::{Date, Item, Response};
pub use error::ApiError;
pub use filter::{Filter, FilterError, FilterValue};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use marketplace::Marketplace;
pub use operation::Operation;
pub use query::{payload_of, Query, SearchKind};
pub use resource::ResourceGroup;
pub use signer::{Credentials, Signer};
pub use timestamp::TimeStamp;
