// SPDX-License-Identifier: Apache-2.0

use clap::ArgMatches;
use serde::Deserialize;

/// Output path used when neither the command line nor the toolchain config
/// names one; relative to the generator directory, the test lands in its
/// parent.
pub const DEFAULT_OUTPUT_PATH: &str = "../arithConst.go";

#[derive(Debug, Default, Deserialize)]
pub struct ToolchainConfig {
    /// Path to the `gofmt` binary used to format the generated source.
    pub gofmt_path: Option<String>,

    /// Where the generated test is written.
    pub output_path: Option<String>,

    /// Whether to run the generated source through `gofmt`.
    ///
    /// When unset, the source is formatted if `gofmt` can be found and written
    /// as-is otherwise.
    pub format: Option<bool>,
}

/// Helper for extracting the output path from the command line flag, if
/// specified, or the toolchain config if it's present and the cmdline flag
/// isn't specified.
pub fn get_output_path(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> String {
    if let Some(output) = matches.get_one::<String>("output") {
        output.to_string()
    } else if let Some(output) = config.as_ref().and_then(|c| c.output_path.as_ref()) {
        output.to_string()
    } else {
        DEFAULT_OUTPUT_PATH.to_string()
    }
}

pub fn get_gofmt_path(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> Option<String> {
    if let Some(path) = matches.get_one::<String>("gofmt_path") {
        Some(path.to_string())
    } else {
        config.as_ref().and_then(|c| c.gofmt_path.clone())
    }
}

/// Returns `Some(true|false)` if formatting was requested either way, `None`
/// if the choice is left to whether `gofmt` is available.
pub fn get_format(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> Option<bool> {
    if let Some(format) = matches.get_one::<String>("format") {
        Some(format == "true")
    } else {
        config.as_ref().and_then(|c| c.format)
    }
}
