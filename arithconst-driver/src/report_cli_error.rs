// SPDX-License-Identifier: Apache-2.0

//! Uniform stderr reporting for the driver's subcommands.

use colored::{ColoredString, Colorize};

/// Renders the headline and `details` lines; detail keys are padded so the
/// values line up.
fn format_report(
    headline: ColoredString,
    subcommand: Option<&str>,
    details: &[(&str, &str)],
) -> Vec<String> {
    let subcommand_str = match subcommand {
        Some(subcommand) => format!("{}: ", subcommand),
        None => String::new(),
    };
    let mut lines = vec![format!(
        "{}: {}{}",
        env!("CARGO_PKG_NAME"),
        subcommand_str,
        headline
    )];
    let key_width = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in details {
        lines.push(format!("  {:width$}: {}", key, value, width = key_width));
    }
    lines
}

pub fn report_cli_warning(message: &str, subcommand: Option<&str>, details: Vec<(&str, &str)>) {
    for line in format_report(message.yellow(), subcommand, &details) {
        eprintln!("{}", line);
    }
}

/// Prints `message` and `details` to stderr and exits with status 1.
pub fn report_cli_error_and_exit(
    message: &str,
    subcommand: Option<&str>,
    details: Vec<(&str, &str)>,
) -> ! {
    for line in format_report(message.red().bold(), subcommand, &details) {
        eprintln!("{}", line);
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_report_aligns_detail_keys() {
        colored::control::set_override(false);
        let lines = format_report(
            "generated test is stale".normal(),
            Some("check"),
            &[("path", "../arithConst.go"), ("first difference at line", "12")],
        );
        assert_eq!(
            lines,
            vec![
                "arithconst-driver: check: generated test is stale".to_string(),
                "  path                    : ../arithConst.go".to_string(),
                "  first difference at line: 12".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_report_without_subcommand_or_details() {
        colored::control::set_override(false);
        let lines = format_report("Invalid subcommand".normal(), None, &[]);
        assert_eq!(lines, vec!["arithconst-driver: Invalid subcommand".to_string()]);
    }
}
