//! Domain layer: strong types with validation and invariants (no I/O).

mod params;
mod request;
mod response;
mod validation;
mod value;

pub(crate) use params::form_encode;
pub use params::Parameters;
pub use request::{
    ALLOW_CONCAT_ENABLED, ALLOW_CONCAT_FIELD, BinaryMessage, Message, Options, Recipient,
    SendDefaults, TextMessage,
};
pub use response::SendResponse;
pub use validation::ValidationError;
pub use value::{
    Charset, CountryCode, MessageType, Originator, OriginatorType, Password, TrackingId, Username,
};
