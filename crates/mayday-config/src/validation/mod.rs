//! Full configuration validation.
//!
//! Validates window dimensions, colors, and content locations, collecting
//! every error into a single `ConfigError`.

mod helpers;


use crate::schema::MaydayConfig;
use mayday_common::ConfigError;

use helpers::{validate_color, validate_min};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MaydayConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_content(&mut errors, config);
    validate_lifecycle(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &MaydayConfig) {
    validate_min(errors, "window.width", config.window.width, 600);
    validate_min(errors, "window.height", config.window.height, 500);
    validate_color(errors, "window.background", &config.window.background);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

fn validate_content(errors: &mut Vec<String>, config: &MaydayConfig) {
    if config.content.entry.trim().is_empty() {
        errors.push("content.entry must not be empty".into());
    }
    if let Some(dir) = &config.content.base_dir {
        if !dir.is_dir() {
            errors.push(format!(
                "content.base_dir = {} is not a directory",
                dir.display()
            ));
        }
    }
}

fn validate_lifecycle(errors: &mut Vec<String>, config: &MaydayConfig) {
    if let Some(program) = &config.lifecycle.relaunch_program {
        if program.as_os_str().is_empty() {
            errors.push("lifecycle.relaunch_program must not be empty when set".into());
        }
    }
}
