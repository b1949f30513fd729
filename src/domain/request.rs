use crate::domain::params::{Parameters, form_encode};
use crate::domain::value::{Charset, CountryCode, MessageType, Originator, OriginatorType};

/// Form field name for the concatenation limit (`allowconcat`).
pub const ALLOW_CONCAT_FIELD: &str = "allowconcat";

/// `allowconcat` value sent when concatenation is enabled: up to six parts.
pub const ALLOW_CONCAT_ENABLED: &str = "6";

const TEXT_FIELD: &str = "text";
const DATA_FIELD: &str = "data";
const UDH_FIELD: &str = "udh";

/// One or more destination numbers.
///
/// Entries are trimmed on construction and blank entries are dropped. Numbers
/// are normalized to the gateway's `00<country><number>` form when the
/// destination is formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    destinations: Vec<String>,
    country_code: Option<CountryCode>,
}

impl Recipient {
    /// Form field name used by Cellsynt (`destination`).
    pub const FIELD: &'static str = "destination";

    pub fn new<I, S>(destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            destinations: destinations
                .into_iter()
                .map(Into::into)
                .map(|phone: String| phone.trim().to_owned())
                .filter(|phone| !phone.is_empty())
                .collect(),
            country_code: None,
        }
    }

    pub fn one(destination: impl Into<String>) -> Self {
        Self::new([destination])
    }

    /// Country code used for numbers given without an international prefix.
    pub fn with_country_code(mut self, country_code: CountryCode) -> Self {
        self.country_code = Some(country_code);
        self
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn country_code(&self) -> Option<&CountryCode> {
        self.country_code.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Comma-joined, normalized destination list. Empty when there are no numbers.
    pub fn destination(&self) -> String {
        self.destination_with(None)
    }

    /// Like [`Recipient::destination`], completing local numbers with `fallback`
    /// when this recipient carries no country code of its own.
    pub fn destination_with(&self, fallback: Option<&CountryCode>) -> String {
        let country_code = self
            .country_code
            .as_ref()
            .or(fallback)
            .map(CountryCode::as_str)
            .unwrap_or_default();

        self.destinations
            .iter()
            .map(|phone| normalize_phone(phone, country_code))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn parameters(&self) -> Parameters {
        self.parameters_with(None)
    }

    pub(crate) fn parameters_with(&self, fallback: Option<&CountryCode>) -> Parameters {
        let mut params = Parameters::new();
        params.insert(Self::FIELD, self.destination_with(fallback));
        params
    }
}

fn normalize_phone(phone: &str, country_code: &str) -> String {
    if let Some(rest) = phone.strip_prefix('+') {
        format!("00{rest}")
    } else if phone.starts_with("00") {
        phone.to_owned()
    } else {
        format!("00{country_code}{}", phone.trim_start_matches('0'))
    }
}

/// Per-message originator overrides. Unset fields fall back to the client defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub originator_type: Option<OriginatorType>,
    pub originator: Option<Originator>,
}

impl Options {
    pub fn new(originator_type: OriginatorType, originator: Originator) -> Self {
        Self {
            originator_type: Some(originator_type),
            originator: Some(originator),
        }
    }

    pub fn parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        if let Some(originator_type) = self.originator_type {
            params.insert(OriginatorType::FIELD, originator_type.as_str());
        }
        if let Some(originator) = self.originator.as_ref() {
            params.insert(Originator::FIELD, form_encode(originator.as_str()));
        }
        params
    }
}

/// Payload shared by text, flash and unicode messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMessage {
    pub recipient: Recipient,
    pub text: String,
    /// `None` leaves the choice to the client default.
    pub charset: Option<Charset>,
    pub allow_concat: bool,
    pub options: Option<Options>,
}

impl TextMessage {
    pub fn new(recipient: Recipient, text: impl Into<String>) -> Self {
        Self {
            recipient,
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    pub fn with_allow_concat(mut self, allow_concat: bool) -> Self {
        self.allow_concat = allow_concat;
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    fn push_parameters(&self, params: &mut Parameters) {
        params.insert(TEXT_FIELD, form_encode(&self.text));
        if let Some(charset) = self.charset {
            params.insert(Charset::FIELD, charset.as_str());
        }
        if self.allow_concat {
            params.insert(ALLOW_CONCAT_FIELD, ALLOW_CONCAT_ENABLED);
        }
    }
}

/// Binary payload (settings, bookmarks, vCards).
///
/// `data` and `udh` hold hex text (e.g. `"334455FF"`) and are sent verbatim.
/// Use [`BinaryMessage::from_octets`] and [`BinaryMessage::with_udh_octets`] to
/// start from raw bytes. Either field may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryMessage {
    pub recipient: Recipient,
    pub data: String,
    pub udh: String,
    pub options: Option<Options>,
}

impl BinaryMessage {
    /// `data` is hex text, sent as given.
    pub fn new(recipient: Recipient, data: impl Into<String>) -> Self {
        Self {
            recipient,
            data: data.into(),
            ..Default::default()
        }
    }

    /// Hex-encode raw `octets` as the `data` payload.
    pub fn from_octets(recipient: Recipient, octets: impl AsRef<[u8]>) -> Self {
        Self::new(recipient, hex::encode_upper(octets))
    }

    pub fn with_udh(mut self, udh: impl Into<String>) -> Self {
        self.udh = udh.into();
        self
    }

    /// Hex-encode raw `octets` as the user data header.
    pub fn with_udh_octets(self, octets: impl AsRef<[u8]>) -> Self {
        self.with_udh(hex::encode_upper(octets))
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    fn push_parameters(&self, params: &mut Parameters) {
        params.insert(DATA_FIELD, self.data.as_str());
        params.insert(UDH_FIELD, self.udh.as_str());
    }
}

/// A message ready to be sent through [`crate::CellsyntClient::send_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Ordinary text message (GSM 03.38 alphabet unless a charset is given).
    Text(TextMessage),
    Binary(BinaryMessage),
    /// Text shown directly on screen instead of being stored in the inbox.
    Flash(TextMessage),
    /// Text outside the GSM alphabet; 70 characters per part.
    Unicode(TextMessage),
}

impl Message {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::Text(_) => MessageType::Text,
            Self::Binary(_) => MessageType::Binary,
            Self::Flash(_) => MessageType::Flash,
            Self::Unicode(_) => MessageType::Unicode,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        match self {
            Self::Text(message) | Self::Flash(message) | Self::Unicode(message) => {
                &message.recipient
            }
            Self::Binary(message) => &message.recipient,
        }
    }

    pub fn options(&self) -> Option<&Options> {
        match self {
            Self::Text(message) | Self::Flash(message) | Self::Unicode(message) => {
                message.options.as_ref()
            }
            Self::Binary(message) => message.options.as_ref(),
        }
    }

    /// Formatted destination list, see [`Recipient::destination`].
    pub fn destination(&self) -> String {
        self.recipient().destination()
    }

    /// Everything this message contributes to the wire: its own fields plus
    /// recipient and options. Own fields win on key collision.
    pub fn parameters(&self) -> Parameters {
        self.parameters_with(None)
    }

    pub(crate) fn parameters_with(
        &self,
        fallback_country_code: Option<&CountryCode>,
    ) -> Parameters {
        let mut params = self.recipient().parameters_with(fallback_country_code);
        if let Some(options) = self.options() {
            params.overlay(options.parameters());
        }
        params.overlay(self.own_parameters());
        params
    }

    fn own_parameters(&self) -> Parameters {
        let mut params = Parameters::new();
        params.insert(MessageType::FIELD, self.message_type().as_str());
        match self {
            Self::Text(message) | Self::Flash(message) | Self::Unicode(message) => {
                message.push_parameters(&mut params)
            }
            Self::Binary(message) => message.push_parameters(&mut params),
        }
        params
    }
}

impl From<BinaryMessage> for Message {
    fn from(value: BinaryMessage) -> Self {
        Self::Binary(value)
    }
}

/// Client-wide values used for every field a message leaves unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendDefaults {
    pub originator_type: Option<OriginatorType>,
    pub originator: Option<Originator>,
    pub charset: Option<Charset>,
    pub allow_concat: bool,
    /// Completes local numbers of recipients without their own country code.
    pub country_code: Option<CountryCode>,
}

impl Default for SendDefaults {
    fn default() -> Self {
        Self {
            originator_type: Some(OriginatorType::Alpha),
            originator: None,
            charset: Some(Charset::Utf8),
            allow_concat: true,
            country_code: None,
        }
    }
}

impl SendDefaults {
    pub fn parameters(&self) -> Parameters {
        let mut params = Options {
            originator_type: self.originator_type,
            originator: self.originator.clone(),
        }
        .parameters();
        if let Some(charset) = self.charset {
            params.insert(Charset::FIELD, charset.as_str());
        }
        if self.allow_concat {
            params.insert(ALLOW_CONCAT_FIELD, ALLOW_CONCAT_ENABLED);
        }
        params
    }
}
