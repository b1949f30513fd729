//! Typed Rust client for the Cellsynt SMS gateway HTTP API.
//!
//! The crate follows three layers: a domain layer of strong types and the
//! parameter mapping each message contributes, a transport layer for the
//! gateway's form body and `OK: ` / `Error: ` text answers, and a small client
//! layer that validates, posts and logs.
//!
//! ```rust,no_run
//! use cellsynt::{CellsyntClient, Credentials, Message, Originator, Recipient, TextMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cellsynt::CellsyntError> {
//!     let client = CellsyntClient::new(
//!         Credentials::new("username", "password")?,
//!         Originator::new("Shop")?,
//!     );
//!     let message = Message::Text(TextMessage::new(Recipient::one("+46703112233"), "hello"));
//!     let response = client.send_message(message).await?;
//!     println!("tracking ids: {:?}", response.tracking_ids);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod transport;

pub use client::{
    BoxError, BoxFuture, CellsyntClient, CellsyntClientBuilder, CellsyntError, Credentials,
    DEFAULT_ENDPOINT, FORM_CONTENT_TYPE, HttpResponse, HttpTransport,
};
pub use config::ClientConfig;
pub use domain::{
    BinaryMessage, Charset, CountryCode, Message, MessageType, Options, Originator,
    OriginatorType, Parameters, Password, Recipient, SendDefaults, SendResponse, TextMessage,
    TrackingId, Username, ValidationError,
};
