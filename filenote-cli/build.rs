//! Build script for filenote-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("filenote")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve path, URI, URL and text notations to filesystem paths")
        .long_about(
            "Command-line tool for converting path-like notations into filesystem paths, \
             rejecting URIs that do not name local files",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("case-sensitive")
                .long("case-sensitive")
                .help("Override filesystem case sensitivity for root matching")
                .value_name("BOOL")
                .global(true),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Filesystem root to match text against (repeatable)")
                .value_name("PATH")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve notations to filesystem paths")
                .long_about("Resolve each notation and print one path per line, or JSON"),
            Command::new("describe")
                .about("Show the supported notation formats")
                .long_about("List the notation formats the resolver accepts"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the merged configuration from files, environment and flags"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main filenote.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("filenote.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
