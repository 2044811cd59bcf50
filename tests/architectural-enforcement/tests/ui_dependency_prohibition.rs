//! Integration Test: UI Dependency Prohibition
//!
//! **Policy**: `console-core` is pure form logic. It must be renderable by
//! any surface, so it must not reference ratatui, crossterm, or any other
//! terminal/UI framework - neither in code nor in its manifest.

use std::fs;
use std::path::{Path, PathBuf};

const FORBIDDEN: &[&str] = &["ratatui", "crossterm", "termion", "cursive", "egui", "iced"];

fn core_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../console/core")
}

/// Test that console-core sources never reference a UI framework
#[test]
fn test_no_ui_framework_in_core_sources() {
    let mut violations = Vec::new();

    for entry in walkdir::WalkDir::new(core_root().join("src"))
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let content = match fs::read_to_string(entry.path()) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for (idx, line) in content.lines().enumerate() {
            // Skip comments; a doc sentence may legitimately name a framework
            let code_part = line.split("//").next().unwrap_or(line);
            for name in FORBIDDEN {
                if code_part.contains(name) {
                    violations.push(format!(
                        "{}:{} - UI framework reference: {}",
                        entry.path().display(),
                        idx + 1,
                        line.trim()
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "console-core must stay UI-framework free:\n{}",
        violations.join("\n")
    );
}

/// Test that console-core's manifest declares no UI framework dependency
#[test]
fn test_no_ui_framework_in_core_manifest() {
    let manifest =
        fs::read_to_string(core_root().join("Cargo.toml")).expect("read console-core manifest");

    for name in FORBIDDEN {
        assert!(
            !manifest.contains(name),
            "console-core Cargo.toml must not depend on {name}"
        );
    }
}
