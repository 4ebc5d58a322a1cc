//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{IdmapError, IdmapResult};
use crate::ui;

const VALID_KEYS: &[&str] = &[
    "general.log_format",
    "mapping.salt",
    "mapping.seed_from_host",
    "mapping.passwd_path",
    "mapping.group_path",
];

/// Execute the config command
pub fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> IdmapResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force)?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value)?,
    }

    Ok(())
}

fn show_config(config: &Config) -> IdmapResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn init_config(manager: &ConfigManager, force: bool) -> IdmapResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default())?;
    ui::step_ok_detail("Configuration initialized", &path.display().to_string());

    Ok(())
}

fn set_value(manager: &ConfigManager, config: &Config, key: &str, value: &str) -> IdmapResult<()> {
    let mut config = config.clone();
    apply(&mut config, key, value).inspect_err(|e| {
        if let IdmapError::ConfigKeyUnknown(_) = e {
            ui::step_error_detail("Unknown config key", key);
            ui::remark("Valid keys:");
            for key in VALID_KEYS {
                ui::remark(key);
            }
        }
    })?;

    manager.save(&config)?;
    ui::step_ok(&format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply a dot-separated key assignment to a config
fn apply(config: &mut Config, key: &str, value: &str) -> IdmapResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => config.general.log_format = parse_log_format(value)?,
        ["mapping", "salt"] => config.mapping.salt = value.to_string(),
        ["mapping", "seed_from_host"] => config.mapping.seed_from_host = parse_bool(value)?,
        ["mapping", "passwd_path"] => config.mapping.passwd_path = value.into(),
        ["mapping", "group_path"] => config.mapping.group_path = value.into(),
        _ => return Err(IdmapError::ConfigKeyUnknown(key.to_string())),
    }

    Ok(())
}

fn parse_bool(value: &str) -> IdmapResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(IdmapError::invalid_value("boolean", value)),
    }
}

fn parse_log_format(value: &str) -> IdmapResult<String> {
    match value {
        "text" | "json" => Ok(value.to_string()),
        _ => Err(IdmapError::invalid_value("log_format", value)),
    }
}
