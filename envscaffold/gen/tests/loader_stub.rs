//! Tests for the generated runtime configuration loader.
//!
//! The fast tests inspect the emitted source. The ignored tests drop it into
//! a throwaway crate and invoke cargo check/clippy on it.

use std::fs;
use std::process::Command;

use envscaffold_define::LoaderDescriptor;
use envscaffold_gen::codegen::emit_loader;
use tempfile::TempDir;

/// Writes a minimal binary crate that uses the generated `config.rs`.
fn write_host_crate(dir: &std::path::Path) {
    let src_dir = dir.join("src");
    fs::create_dir_all(&src_dir).expect("Failed to create src directory");

    fs::write(
        dir.join("Cargo.toml"),
        r#"[package]
name = "loader-host"
version = "0.1.0"
edition = "2024"

[dependencies]
dotenvy = "0.15.7"
tracing = "0.1"

[workspace]
"#,
    )
    .expect("Failed to write Cargo.toml");

    let loader = emit_loader().expect("Failed to emit loader");
    fs::write(src_dir.join("config.rs"), loader).expect("Failed to write config.rs");
    fs::write(
        src_dir.join("main.rs"),
        r#"mod config;

fn main() {
    let config = &*config::CONFIG;
    println!("{} {}", config.port, config.log_level);
    assert_eq!(config::Config::default().port, config::DEFAULT_PORT);
}
"#,
    )
    .expect("Failed to write main.rs");
}

fn run_cargo(dir: &std::path::Path, subcommand: &str, extra: &[&str]) {
    let output = Command::new("cargo")
        .arg(subcommand)
        .arg("--manifest-path")
        .arg(dir.join("Cargo.toml"))
        .args(extra)
        .output()
        .expect("Failed to run cargo");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "Generated loader failed `cargo {}`:\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
            subcommand,
            stdout,
            stderr
        );
    }
}

#[test]
fn loader_is_identical_across_calls() {
    assert_eq!(emit_loader().unwrap(), emit_loader().unwrap());
}

#[test]
fn loader_is_valid_rust() {
    let code = emit_loader().unwrap();
    assert!(syn::parse_file(&code).is_ok(), "Loader should parse:\n{code}");
}

#[test]
fn loader_contains_standard_defaults() {
    let code = emit_loader().unwrap();
    let descriptor = LoaderDescriptor::STANDARD;

    assert!(code.contains("\"3000\""));
    assert!(code.contains("\"info\""));
    for field in descriptor.fields() {
        assert!(code.contains(&format!("pub {}: String", field.field)));
        assert!(code.contains(&format!("\"{}\"", field.env_var)));
    }
}

#[test]
fn loader_warns_instead_of_exiting() {
    let code = emit_loader().unwrap();

    assert!(code.contains("dotenvy::from_path"));
    assert!(code.contains("tracing::warn!"));
    assert!(!code.contains("std::process::exit"));
    assert!(!code.contains(".expect("));
}

#[test]
fn loader_exposes_config_entry_points() {
    let code = emit_loader().unwrap();

    assert!(code.contains("pub struct Config"));
    assert!(code.contains("pub fn from_env() -> Self"));
    assert!(code.contains("pub static CONFIG: LazyLock<Config>"));
    assert!(code.contains("pub fn env_file_path() -> PathBuf"));
    assert!(code.contains("current_exe()"));
}

#[test]
fn loader_starts_with_generated_notice() {
    assert!(emit_loader().unwrap().starts_with("// This code was automatically generated by envscaffold-gen"));
}

/// Tests that the generated loader compiles inside a host crate.
#[test]
#[ignore = "slow: compiles generated code"]
fn generated_loader_compiles() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_host_crate(temp_dir.path());
    run_cargo(temp_dir.path(), "check", &[]);
}

/// Tests that the generated loader has no clippy warnings.
#[test]
#[ignore = "slow: runs clippy on generated code"]
fn generated_loader_passes_clippy() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_host_crate(temp_dir.path());
    run_cargo(temp_dir.path(), "clippy", &["--", "-D", "warnings"]);
}
