// SPDX-License-Identifier: Apache-2.0

//! Command line driver that generates the constant-operand arithmetic test.
//!
//! Commands are given like:
//!
//! ```text
//! arithconst-driver <global-options> [<command> <command-args-and-options>]
//! ```
//!
//! Commands are:
//!
//! - generate (default when no command is given): writes the generated Go test
//!   to `../arithConst.go`, or the path given by `--output`.
//! - check: regenerates the test and fails if the file on disk differs.
//! - summary: prints per width class / operator function and row counts as
//!   JSON.
//!
//! Sample usage:
//!
//! ```shell
//! $ cargo run -p arithconst-driver
//! $ cargo run -p arithconst-driver -- generate --output /tmp/arithConst.go --format false
//! $ cargo run -p arithconst-driver -- check --output ../arithConst.go
//! ```

mod generate_cmd;
mod report_cli_error;
mod summary;
mod toolchain_config;
mod tools;

use clap::{Arg, ArgAction};
use report_cli_error::report_cli_error_and_exit;
use serde::Deserialize;

const TOOLCHAIN_FILENAME: &str = "arithconst-toolchain.toml";

#[derive(Deserialize)]
struct ArithConstToolchain {
    toolchain: toolchain_config::ToolchainConfig,
}

trait AppExt {
    fn add_bool_arg(self, long: &'static str, help: &'static str) -> Self;
    fn add_output_args(self) -> Self;
}

impl AppExt for clap::Command {
    /// Adds a boolean argument to the command -- the helper ensures we have a
    /// uniform style/handling for boolean arguments.
    fn add_bool_arg(self, long: &'static str, help: &'static str) -> Self {
        (self as clap::Command).arg(
            Arg::new(long)
                .long(long)
                .value_name("BOOL")
                .action(ArgAction::Set)
                .value_parser(["true", "false"])
                .num_args(1)
                .help(help),
        )
    }

    fn add_output_args(self) -> Self {
        (self as clap::Command)
            .arg(
                Arg::new("output")
                    .long("output")
                    .value_name("OUTPUT_PATH")
                    .help("Path of the generated Go test (default: ../arithConst.go)")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("gofmt_path")
                    .long("gofmt_path")
                    .value_name("GOFMT_PATH")
                    .help("Path to the gofmt binary (default: search PATH)")
                    .action(ArgAction::Set),
            )
            .add_bool_arg(
                "format",
                "Whether to run the output through gofmt (default: if gofmt is found)",
            )
    }
}

fn load_toolchain_config(
    toolchain_flag: Option<&String>,
) -> Option<toolchain_config::ToolchainConfig> {
    let mut toml_path: Option<String> = toolchain_flag.map(|s| s.to_string());

    // If there is no toolchain flag specified, but there is a toolchain file in
    // the current directory, use that.
    if toml_path.is_none() {
        if let Ok(cwd) = std::env::current_dir() {
            let cwd_toml_path = cwd.join(TOOLCHAIN_FILENAME);
            if cwd_toml_path.exists() {
                log::info!(
                    "Using {} in current directory: {}",
                    TOOLCHAIN_FILENAME,
                    cwd_toml_path.display()
                );
                toml_path = Some(cwd_toml_path.display().to_string());
            }
        }
    }

    let path = toml_path?;
    if !std::path::Path::new(&path).exists() {
        report_cli_error_and_exit(
            "toolchain toml file does not exist",
            None,
            vec![("path", &path)],
        );
    }
    let toml_str = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => report_cli_error_and_exit(
            "can't read toolchain toml file",
            None,
            vec![("path", &path), ("error", &e.to_string())],
        ),
    };
    match toml::from_str::<ArithConstToolchain>(&toml_str) {
        Ok(toolchain) => Some(toolchain.toolchain),
        Err(e) => report_cli_error_and_exit(
            "can't parse toolchain toml file",
            None,
            vec![("path", &path), ("error", &e.to_string())],
        ),
    }
}

fn main() {
    let _ = env_logger::try_init();

    log::info!(
        "arithconst-driver starting; version: {}",
        env!("CARGO_PKG_VERSION")
    );

    let command = clap::Command::new("arithconst-driver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates the constant-operand integer arithmetic test")
        .arg(
            Arg::new("toolchain")
                .long("toolchain")
                .value_name("TOOLCHAIN")
                .help("Path to an arithconst-toolchain.toml file")
                .action(ArgAction::Set),
        )
        .subcommand(clap::Command::new("version").about("Prints the version of the driver"))
        .subcommand(
            clap::Command::new("generate")
                .about("Generates the Go test and writes it to the output path")
                .add_output_args()
                .add_bool_arg("stdout", "Print the test to stdout instead of writing it"),
        )
        .subcommand(
            clap::Command::new("check")
                .about("Fails if the Go test at the output path is out of date")
                .add_output_args(),
        )
        .subcommand(
            clap::Command::new("summary")
                .about("Prints function and table row counts per width class as JSON"),
        );
    // Matches for `generate` with every flag at its default; used when the
    // driver is invoked without a subcommand.
    let default_generate = command
        .find_subcommand("generate")
        .cloned()
        .map(|c| c.no_binary_name(true).get_matches_from(Vec::<String>::new()));
    let matches = command.get_matches();

    let config = load_toolchain_config(matches.get_one::<String>("toolchain"));

    if let Some(matches) = matches.subcommand_matches("generate") {
        generate_cmd::handle_generate(matches, &config);
    } else if let Some(matches) = matches.subcommand_matches("check") {
        generate_cmd::handle_check(matches, &config);
    } else if let Some(matches) = matches.subcommand_matches("summary") {
        summary::handle_summary(matches, &config);
    } else if let Some(_matches) = matches.subcommand_matches("version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
    } else if let Some(default_generate) = default_generate {
        generate_cmd::handle_generate(&default_generate, &config);
    } else {
        report_cli_error_and_exit("Invalid subcommand", None, vec![]);
    }
}
