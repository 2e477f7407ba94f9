// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use meeting_search::*;
use meeting_search_typesense::*;
use observability::logging::LoggingConfig;
use secrecy::SecretString;
use serde::Deserialize as _;
use setty::derive;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Path of the YAML config file when `--config` is not given
pub const ENV_CONFIG_PATH: &str = "MEETING_SEARCH_CONFIG";

/// `MEETING_SEARCH_CONFIG__<section>__<key>=<yaml value>` overrides a single key
pub const ENV_CONFIG_OVERRIDE_PREFIX: &str = "MEETING_SEARCH_CONFIG__";

pub const ENV_CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub const DEFAULT_HTTP_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_HTTP_PORT: u16 = 3232;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(setty::Config, setty::Default, Debug, Clone)]
pub struct ServerConfig {
    /// Listening socket
    #[config(default)]
    pub http: HttpConfig,

    /// Search engine connection
    #[config(default)]
    pub typesense: TypesenseSection,

    /// Query shaping
    #[config(default)]
    pub search: SearchSection,

    #[config(default)]
    pub logging: LoggingConfig,
}

#[derive(setty::Config, setty::Default, Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    #[config(default = DEFAULT_HTTP_ADDRESS, combine(replace))]
    pub address: IpAddr,

    #[config(default = DEFAULT_HTTP_PORT)]
    pub port: u16,
}

#[derive(setty::Config, setty::Default, Debug, Clone)]
pub struct TypesenseSection {
    #[config(default = DEFAULT_TYPESENSE_URL)]
    #[serde(deserialize_with = "scalar_as_string")]
    pub url: String,

    /// Superseded by `TYPESENSE_API_KEY` when that is set
    #[config(default, combine(replace))]
    #[serde(deserialize_with = "optional_scalar_as_secret")]
    pub api_key: Option<SecretString>,

    #[config(default = DEFAULT_TYPESENSE_COLLECTION)]
    #[serde(deserialize_with = "scalar_as_string")]
    pub collection: String,

    #[config(default = DEFAULT_TYPESENSE_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Field names are validated against the meeting schema at startup
#[derive(setty::Config, setty::Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchSection {
    #[config(default = to_strings(&DEFAULT_QUERY_BY), combine(replace))]
    pub query_by: Vec<String>,

    #[config(default = to_strings(&DEFAULT_FACET_BY), combine(replace))]
    pub facet_by: Vec<String>,

    #[config(default = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    #[config(default = DEFAULT_MAX_FACET_VALUES)]
    pub max_facet_values: u32,

    #[config(default = to_strings(&DEFAULT_STOP_WORDS), combine(replace))]
    pub stop_words: Vec<String>,
}

fn to_strings<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl ServerConfig {
    /// Merges defaults, the optional YAML file and `<env_prefix><section>__<key>`
    /// variables, later sources winning
    pub fn load(path: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        use setty::format::*;
        use setty::source::*;

        let config = setty::Config::<Self>::new()
            .with_sources(path.map(File::<EmptyAsDefault<Yaml>>::new))
            .with_source(Env::<Yaml>::new(env_prefix, ENV_CONFIG_OVERRIDE_SEPARATOR))
            .extract()?;

        Ok(config)
    }

    /// An empty value leaves the configured key in place
    pub fn apply_api_key_override(&mut self, api_key: Option<String>) {
        if let Some(api_key) = api_key.filter(|k| !k.is_empty()) {
            self.typesense.api_key = Some(SecretString::from(api_key));
        }
    }

    pub fn meeting_search_config(
        &self,
    ) -> Result<MeetingSearchConfig, InvalidMeetingSearchConfigError> {
        MeetingSearchConfig::try_from_names(
            &self.search.query_by,
            &self.search.facet_by,
            self.search.page_size,
            self.search.max_facet_values,
            &self.search.stop_words,
        )
    }

    pub fn typesense_config(&self) -> Result<TypesenseConfig, ConfigError> {
        let section = &self.typesense;

        let url = url::Url::parse(&section.url).map_err(|source| ConfigError::InvalidUrl {
            url: section.url.clone(),
            source,
        })?;
        if section.collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        if section.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(TypesenseConfig {
            url,
            api_key: section.api_key.clone(),
            collection: section.collection.clone(),
            timeout_secs: section.timeout_secs,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads an empty or comment-only document as an empty mapping, so a blank
/// config file yields the defaults
struct EmptyAsDefault<Fmt> {
    _p: std::marker::PhantomData<Fmt>,
}

impl<Fmt> setty::format::Format for EmptyAsDefault<Fmt>
where
    Fmt: setty::format::Format,
{
    type ErrorDe = Fmt::ErrorDe;
    type ErrorSer = Fmt::ErrorSer;

    fn name() -> std::borrow::Cow<'static, str> {
        Fmt::name()
    }

    fn deserialize<T: serde::de::DeserializeOwned>(string: &str) -> Result<T, Self::ErrorDe> {
        match Fmt::deserialize::<Option<T>>(string)? {
            Some(value) => Ok(value),
            None => Fmt::deserialize("{}"),
        }
    }

    fn serialize<T: serde::ser::Serialize>(value: &T) -> Result<String, Self::ErrorSer> {
        Fmt::serialize(value)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Override variables are parsed as YAML, so `collection=2024` arrives as a
// number. Text fields take any scalar in its written form.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected};

    match setty::Value::deserialize(deserializer)? {
        setty::Value::String(s) => Ok(s),
        setty::Value::Number(n) => Ok(n.to_string()),
        setty::Value::Bool(b) => Ok(b.to_string()),
        setty::Value::Null => Err(D::Error::invalid_type(Unexpected::Unit, &"a string")),
        setty::Value::Array(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a string")),
        setty::Value::Object(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a string")),
    }
}

fn optional_scalar_as_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match setty::Value::deserialize(deserializer)? {
        setty::Value::Null => Ok(None),
        value => scalar_as_string(value)
            .map(|s| Some(SecretString::from(s)))
            .map_err(D::Error::custom),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration")]
    Load(#[from] setty::errors::ReadError),

    #[error("Invalid Typesense URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Typesense collection name must not be empty")]
    EmptyCollection,

    #[error("Typesense timeout must be at least one second")]
    ZeroTimeout,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
