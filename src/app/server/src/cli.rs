// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::IpAddr;
use std::path::PathBuf;

use observability::logging::LogFormat;

use crate::{ENV_CONFIG_PATH, ServerConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Keyword search over public meeting records backed by Typesense
#[derive(Debug, Default, clap::Parser)]
#[command(name = "meeting-search-server", version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, env = ENV_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Interface to listen on
    #[arg(long)]
    pub address: Option<IpAddr>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Log output format: text or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Flags take precedence over every other configuration source
    pub fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(address) = self.address {
            config.http.address = address;
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
