//! Transport layer: wire-format details (form encoding and response decoding).

mod send;

pub use send::{ResponseError, decode_send_response, encode_send_form};
