//! Build script for animatron-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates animatron.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use animatron_core::config::parse_config;

const SECTIONS: &[&str] = &["features", "axis", "head", "jitter", "breathing", "jaw", "speech"];
const AXES: &[&str] = &["rotation", "horizontal", "vertical"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Validate animatron.toml at compile time
///
/// The TOML checks catch structure and servo ranges with readable messages;
/// the file must then also pass the same parser and validator the firmware
/// runs at boot.
fn validate_config() {
    println!("cargo:rerun-if-changed=animatron.toml");

    let config_path = Path::new("animatron.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: animatron.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds animatron.toml at build time.               ║\n\
            ║  Please create one in the animatron-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read animatron.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in animatron.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_axes(&config, &mut errors);
    validate_jaw(&config, &mut errors);

    report("Invalid configuration", &errors);

    match parse_config(&config_content) {
        Ok(parsed) => {
            if let Err(e) = parsed.validate() {
                errors.push(format!("rejected by firmware: {:?}", e));
            }
        }
        Err(e) => errors.push(format!("rejected by firmware parser: {:?}", e)),
    }
    report("Configuration rejected at boot", &errors);

    println!("cargo:warning=animatron.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fail the build with a boxed list of errors, if any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Only known sections, each a table
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

/// Axis names are known and bounds are ordered
fn validate_axes(config: &toml::Value, errors: &mut Vec<String>) {
    let axes = match config.get("axis") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    for (name, axis) in axes {
        if !AXES.contains(&name.as_str()) {
            errors.push(format!("unknown axis [axis.{}]", name));
            continue;
        }

        let min = axis.get("min").and_then(|v| v.as_integer());
        let max = axis.get("max").and_then(|v| v.as_integer());
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                errors.push(format!("[axis.{}] min must not exceed max", name));
            }
            if let Some(neutral) = axis.get("neutral").and_then(|v| v.as_integer()) {
                if neutral < min || neutral > max {
                    errors.push(format!("[axis.{}] neutral must be within min..max", name));
                }
            }
        }

        for key in ["min", "max", "neutral"] {
            if let Some(toml::Value::Integer(angle)) = axis.get(key) {
                if *angle < 0 || *angle > 180 {
                    errors.push(format!("[axis.{}] {} must be 0-180", name, key));
                }
            }
        }

        if let Some(speed) = axis.get("speed").and_then(|v| v.as_float()) {
            if speed < 0.0 {
                errors.push(format!("[axis.{}] speed must not be negative", name));
            }
        }
    }
}

/// Jaw opens below its closed angle and steps at least one degree
fn validate_jaw(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(jaw) = config.get("jaw") else {
        return;
    };

    let closed = jaw.get("closed").and_then(|v| v.as_integer());
    let open = jaw.get("open").and_then(|v| v.as_integer());
    if let (Some(closed), Some(open)) = (closed, open) {
        if open >= closed {
            errors.push("[jaw] open must be below closed".to_string());
        }
    }

    if let Some(step) = jaw.get("step").and_then(|v| v.as_integer()) {
        if step <= 0 {
            errors.push("[jaw] step must be positive".to_string());
        }
    }
}
