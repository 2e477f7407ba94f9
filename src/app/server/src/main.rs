// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::process::ExitCode;

use clap::Parser;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> ExitCode {
    let cli = meeting_search_server::Cli::parse();

    match meeting_search_server::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                error = ?e,
                error_msg = %e.reason(),
                backtrace = %e.backtrace(),
                "Server terminated with error"
            );
            // Logging may not be initialized yet if configuration failed
            eprintln!("{}", e.reason());
            ExitCode::FAILURE
        }
    }
}
