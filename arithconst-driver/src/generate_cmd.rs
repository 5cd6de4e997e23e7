// SPDX-License-Identifier: Apache-2.0

//! `generate` and `check` subcommands.

use anyhow::Context;
use clap::ArgMatches;

use crate::report_cli_error::{report_cli_error_and_exit, report_cli_warning};
use crate::toolchain_config::{get_format, get_gofmt_path, get_output_path, ToolchainConfig};
use crate::tools::{find_gofmt, run_gofmt};

/// Name recorded in the "Code generated by" header of the output.
pub const GENERATOR_NAME: &str = "arithconst-driver";

/// Generates the Go test and, depending on `format`, runs it through `gofmt`.
///
/// Any failure here is a defect in the generator and terminates the process.
/// If `gofmt` rejects the text the unformatted buffer is printed first so it
/// can be inspected.
fn render_source(format: Option<bool>, gofmt_path: Option<&str>, subcommand: &str) -> String {
    let raw = match arithconst::generate_go_source(GENERATOR_NAME) {
        Ok(raw) => raw,
        Err(e) => report_cli_error_and_exit(
            "generation failed",
            Some(subcommand),
            vec![("error", &e.to_string())],
        ),
    };

    if format == Some(false) {
        log::info!("formatting disabled; emitting generated text as-is");
        return raw;
    }
    let gofmt = match find_gofmt(gofmt_path) {
        Some(gofmt) => gofmt,
        None if format == Some(true) => report_cli_error_and_exit(
            "formatting requested but gofmt was not found",
            Some(subcommand),
            vec![("hint", "pass --gofmt_path or set toolchain.gofmt_path")],
        ),
        None => {
            log::warn!("gofmt not found; emitting generated text as-is");
            report_cli_warning(
                "gofmt not found; emitting generated text as-is",
                Some(subcommand),
                vec![("hint", "pass --format false to silence this warning")],
            );
            return raw;
        }
    };
    match run_gofmt(&raw, &gofmt) {
        Ok(formatted) => formatted,
        Err(e) => {
            println!("{}", raw);
            report_cli_error_and_exit(
                "gofmt rejected the generated source",
                Some(subcommand),
                vec![
                    ("gofmt", &gofmt.display().to_string()),
                    ("error", &e.to_string()),
                ],
            )
        }
    }
}

fn write_output(path: &std::path::Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Returns the 1-based line number of the first line where `a` and `b`
/// differ, or `None` if they are identical.
pub fn first_difference_line(a: &str, b: &str) -> Option<usize> {
    if a == b {
        return None;
    }
    let mut a_lines = a.split('\n');
    let mut b_lines = b.split('\n');
    let mut lineno = 1;
    loop {
        match (a_lines.next(), b_lines.next()) {
            (Some(x), Some(y)) if x == y => lineno += 1,
            _ => return Some(lineno),
        }
    }
}

pub fn handle_generate(matches: &ArgMatches, config: &Option<ToolchainConfig>) {
    log::info!("handle_generate");
    let format = get_format(matches, config);
    let gofmt_path = get_gofmt_path(matches, config);
    let source = render_source(format, gofmt_path.as_deref(), "generate");

    let to_stdout = matches
        .get_one::<String>("stdout")
        .map(|s| s == "true")
        .unwrap_or(false);
    if to_stdout {
        print!("{}", source);
        return;
    }

    let output_path = get_output_path(matches, config);
    if let Err(e) = write_output(std::path::Path::new(&output_path), &source) {
        report_cli_error_and_exit(
            "can't write output",
            Some("generate"),
            vec![("path", &output_path), ("error", &format!("{:#}", e))],
        );
    }
}

pub fn handle_check(matches: &ArgMatches, config: &Option<ToolchainConfig>) {
    log::info!("handle_check");
    let format = get_format(matches, config);
    let gofmt_path = get_gofmt_path(matches, config);
    let want = render_source(format, gofmt_path.as_deref(), "check");

    let output_path = get_output_path(matches, config);
    let got = match std::fs::read_to_string(&output_path) {
        Ok(got) => got,
        Err(e) => report_cli_error_and_exit(
            "can't read existing output",
            Some("check"),
            vec![("path", &output_path), ("error", &e.to_string())],
        ),
    };

    match first_difference_line(&got, &want) {
        None => println!("{} is up to date", output_path),
        Some(lineno) => report_cli_error_and_exit(
            "generated test is stale; rerun generate",
            Some("check"),
            vec![
                ("path", &output_path),
                ("first difference at line", &lineno.to_string()),
            ],
        ),
    }
}
