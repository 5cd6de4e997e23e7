// SPDX-License-Identifier: Apache-2.0

use cargo_metadata::MetadataCommand;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

const EXPECTED_SPDX_IDENTIFIER: &str = "// SPDX-License-Identifier: Apache-2.0";

fn check_spdx_identifier(file_path: &Path) -> bool {
    let file = fs::File::open(file_path).unwrap();
    let reader = io::BufReader::new(file);
    let ok = match reader.lines().next() {
        Some(Ok(line)) => line.starts_with(EXPECTED_SPDX_IDENTIFIER),
        _ => false,
    };
    if !ok {
        eprintln!("Missing SPDX identifier in file: {file_path:?}");
    }
    ok
}

fn find_missing_spdx_files(root: &Path) -> Vec<PathBuf> {
    let mut missing_spdx_files = Vec::new();
    let mut dir_worklist: Vec<PathBuf> = vec![root.into()];

    while let Some(dir) = dir_worklist.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();

            if path.is_dir() {
                // Reference material and build output are not ours to check.
                if entry.file_name() != "target"
                    && entry.file_name() != ".git"
                    && entry.file_name() != "examples"
                {
                    dir_worklist.push(path.clone());
                }
                continue;
            }

            // Golden files are compared literally against generator output.
            let path_str = path.as_os_str().to_str().unwrap();
            if path_str.contains(".golden.") {
                continue;
            }

            if let Some(extension) = path.extension() {
                if extension == "rs" && !check_spdx_identifier(&path) {
                    missing_spdx_files.push(path);
                }
            }
        }
    }
    missing_spdx_files
}

#[test]
fn test_finds_rust_file_missing_spdx_in_tempdir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let temp_dir_path = temp_dir.path();

    let has_spdx_file = temp_dir_path.join("has_spdx.rs");
    fs::write(has_spdx_file, "// SPDX-License-Identifier: Apache-2.0\n").unwrap();

    let missing_spdx_file = temp_dir_path.join("missing_spdx.rs");
    fs::write(missing_spdx_file.clone(), "").unwrap();

    let golden_file = temp_dir_path.join("small.golden.rs");
    fs::write(golden_file, "fn main() {}\n").unwrap();

    let missing_spdx_files = find_missing_spdx_files(temp_dir_path);
    assert_eq!(missing_spdx_files, vec![missing_spdx_file]);
}

#[test]
fn check_all_rust_files_for_spdx() {
    let metadata = MetadataCommand::new().exec().unwrap();
    let workspace_dir = metadata.workspace_root;
    let missing_spdx_files = find_missing_spdx_files(workspace_dir.as_std_path());
    assert!(
        missing_spdx_files.is_empty(),
        "The following files are missing SPDX identifiers: {:?}",
        missing_spdx_files
    );
}
