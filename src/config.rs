//! Declarative client configuration.
//!
//! [`ClientConfig`] deserializes from any serde format, so credentials and
//! defaults can live in a config file or be assembled from the environment.
//! Wire tokens are used for the enums: `alpha` / `numeric` and `UTF-8` /
//! `ISO-8859-1`.

use std::time::Duration;

use serde::Deserialize;

use crate::client::{CellsyntClient, CellsyntClientBuilder, CellsyntError, Credentials};
use crate::domain::{Charset, CountryCode, Originator, OriginatorType, SendDefaults};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub username: String,
    pub password: String,
    #[serde(default = "default_originator_type")]
    pub originator_type: Option<OriginatorType>,
    #[serde(default)]
    pub originator: Option<String>,
    #[serde(default = "default_charset")]
    pub charset: Option<Charset>,
    #[serde(default = "default_allow_concat")]
    pub allow_concat: bool,
    #[serde(default)]
    pub default_country_code: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_originator_type() -> Option<OriginatorType> {
    Some(OriginatorType::Alpha)
}

fn default_charset() -> Option<Charset> {
    Some(Charset::Utf8)
}

fn default_allow_concat() -> bool {
    true
}

impl ClientConfig {
    /// Validate every field and return a builder ready for further overrides.
    pub fn into_builder(self) -> Result<CellsyntClientBuilder, CellsyntError> {
        let credentials = Credentials::new(self.username, self.password)?;
        let defaults = SendDefaults {
            originator_type: self.originator_type,
            originator: self.originator.map(Originator::new).transpose()?,
            charset: self.charset,
            allow_concat: self.allow_concat,
            country_code: self
                .default_country_code
                .map(CountryCode::new)
                .transpose()?,
        };

        let mut builder = CellsyntClient::builder(credentials).defaults(defaults);
        if let Some(endpoint) = self.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(builder)
    }

    /// Validate every field and build a client.
    pub fn into_client(self) -> Result<CellsyntClient, CellsyntError> {
        self.into_builder()?.build()
    }
}
