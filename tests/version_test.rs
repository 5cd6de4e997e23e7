// SPDX-License-Identifier: Apache-2.0

//! Test that every crate in the workspace carries the same version, so that a
//! release bumps them together.

use cargo_metadata::MetadataCommand;

#[test]
fn test_crate_versions_are_equal() {
    let _ = env_logger::builder().is_test(true).try_init();
    let metadata = MetadataCommand::new().exec().unwrap();
    let versions: Vec<(String, String)> = metadata
        .workspace_packages()
        .iter()
        .map(|p| (p.name.to_string(), p.version.to_string()))
        .collect();
    log::info!("workspace versions: {:?}", versions);
    assert_eq!(versions.len(), 3);
    let (first_name, first_version) = &versions[0];
    for (name, version) in &versions[1..] {
        assert_eq!(
            version, first_version,
            "{} is at {} but {} is at {}",
            name, version, first_name, first_version
        );
    }
}
