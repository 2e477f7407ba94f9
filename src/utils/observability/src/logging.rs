// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use setty::derive;
use tracing_subscriber::EnvFilter;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_LOGGING_FILTER: &str = "info,tower_http=debug";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(setty::Config, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Text,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = UnknownLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownLogFormatError {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown log format '{value}', expected 'text' or 'json'")]
pub struct UnknownLogFormatError {
    pub value: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(setty::Config, setty::Default, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[config(default)]
    pub format: LogFormat,

    /// Used when `RUST_LOG` is not set
    #[config(default = DEFAULT_LOGGING_FILTER)]
    pub filter: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Installs the global subscriber. Returns `false` when one was already set,
/// which is the normal case under `test-log`.
pub fn init(config: &LoggingConfig) -> bool {
    // Logging may be already initialized when running under tests
    if tracing::dispatcher::has_been_set() {
        return false;
    }

    // Use configuration from RUST_LOG env var if provided
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let res = match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init(),
    };

    res.is_ok()
}
