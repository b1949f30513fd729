use crate::domain::{CountryCode, Message, Parameters, SendResponse, TrackingId};

const OK_PREFIX: &str = "OK: ";
const ERROR_PREFIX: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("{message}")]
    Gateway { message: String },

    #[error("response error: {body}")]
    Unrecognized { body: String },
}

/// Build the form body for `message`.
///
/// The message's own parameters win; `defaults` (credentials and client
/// defaults) only fill keys the message leaves unset.
pub fn encode_send_form(
    defaults: &Parameters,
    message: &Message,
    fallback_country_code: Option<&CountryCode>,
) -> String {
    let mut params = message.parameters_with(fallback_country_code);
    params.fill_missing(defaults);
    params.to_query_string()
}

pub fn decode_send_response(body: &str) -> Result<SendResponse, ResponseError> {
    if let Some(ids) = body.strip_prefix(OK_PREFIX) {
        let tracking_ids = ids
            .trim()
            .split(',')
            .map(|id| TrackingId::from_wire(id.trim()))
            .collect();
        return Ok(SendResponse {
            success: true,
            tracking_ids,
        });
    }

    if let Some(message) = body.strip_prefix(ERROR_PREFIX) {
        return Err(ResponseError::Gateway {
            message: message.trim().to_owned(),
        });
    }

    Err(ResponseError::Unrecognized {
        body: body.to_owned(),
    })
}
