// SPDX-License-Identifier: Apache-2.0

//! `summary` subcommand: reports how many functions and table rows the
//! generated test contains, per width class and operator.

use clap::ArgMatches;

use crate::report_cli_error::report_cli_error_and_exit;
use crate::toolchain_config::ToolchainConfig;

pub fn handle_summary(_matches: &ArgMatches, _config: &Option<ToolchainConfig>) {
    log::info!("handle_summary");
    let mut counter = arithconst::CaseCounter::new();
    if let Err(e) = arithconst::generate_default(&mut counter) {
        report_cli_error_and_exit(
            "generation failed",
            Some("summary"),
            vec![("error", &e.to_string())],
        );
    }
    log::info!(
        "summary; functions: {} rows: {}",
        counter.total_functions(),
        counter.total_rows()
    );
    match serde_json::to_string_pretty(counter.counts()) {
        Ok(json) => println!("{}", json),
        Err(e) => report_cli_error_and_exit(
            "can't serialize summary",
            Some("summary"),
            vec![("error", &e.to_string())],
        ),
    }
}
