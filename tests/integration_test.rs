// tests/integration_test.rs
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn skill_version(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "skill-version", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_skill_version_help() {
    let output = skill_version(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("skill-version"));
    assert!(stdout.contains("Manage SemVer versions"));
}

#[test]
fn test_bump_command_end_to_end() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("VERSION"), "1.0.0\n").unwrap();
    let root = dir.path().to_str().unwrap();

    let output = skill_version(&["--root", root, "bump", "patch", "--pre-release", "alpha"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Root version:"));
    assert!(stdout.contains("1.0.1-alpha.1"));
    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION")).unwrap(),
        "1.0.1-alpha.1\n"
    );
}

#[test]
fn test_bump_command_rejects_unknown_label() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("VERSION"), "1.0.0\n").unwrap();
    let root = dir.path().to_str().unwrap();

    let output = skill_version(&["--root", root, "bump", "patch", "--pre-release", "gamma"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("gamma"));
    assert_eq!(fs::read_to_string(dir.path().join("VERSION")).unwrap(), "1.0.0\n");
}

#[test]
fn test_bump_command_rejects_unknown_level() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("VERSION"), "1.0.0\n").unwrap();
    let root = dir.path().to_str().unwrap();

    let output = skill_version(&["--root", root, "bump", "huge"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid bump level 'huge'"));
}

#[test]
fn test_version_parsing_and_bumping() {
    use skill_version::{format_version, Version, VersionBump, VersionBumper};

    let version = Version::parse("1.2.3").expect("Should parse version");
    let bumper = VersionBumper::default();

    let bumped = bumper.bump(&version, VersionBump::Minor, None).unwrap();
    assert_eq!(format_version(&bumped), "1.3.0");

    let major_bumped = bumper.bump(&version, VersionBump::Major, None).unwrap();
    assert_eq!(format_version(&major_bumped), "2.0.0");

    let patch_bumped = bumper.bump(&version, VersionBump::Patch, None).unwrap();
    assert_eq!(format_version(&patch_bumped), "1.2.4");
}
