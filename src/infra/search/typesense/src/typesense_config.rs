// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_TYPESENSE_URL: &str = "http://localhost:8108";
pub const DEFAULT_TYPESENSE_COLLECTION: &str = "meetings";
pub const DEFAULT_TYPESENSE_TIMEOUT_SECS: u64 = 10;

/// Environment variable the API key is traditionally supplied through
pub const ENV_TYPESENSE_API_KEY: &str = "TYPESENSE_API_KEY";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct TypesenseConfig {
    pub url: url::Url,
    pub api_key: Option<SecretString>,
    pub collection: String,
    pub timeout_secs: u64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
