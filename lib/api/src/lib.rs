//! # jsonorbit API
//!
//! HTTP surface for jsonorbit:
//!
//! - `GET  /health`
//! - `POST /visualize` - raw JSON body, returns the visualization payload
//! - `GET  /visualize?data=<encoded>` - document carried in the URL
//! - `POST /encode` - raw JSON body, returns the URL-safe `data` value
//!
//! Layout spacing can be overridden per request with the `horizontalSpacing`,
//! `verticalSpacing` and `radiusMultiplier` query parameters.

pub mod error;
pub mod rest;
pub mod transport;

pub use error::ApiError;
pub use rest::{configure, RestApi};
pub use transport::{decode_json_from_url, encode_json_for_url, validate_json_size, MAX_ENCODED_SIZE};
