//! `garden config` - inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let settings = &config.settings;
    let value = match key {
        "output.no_color" => config.output.no_color.to_string(),
        "browse.default_sort" => config
            .browse
            .default_sort
            .map(|k| k.as_str().to_string())
            .unwrap_or_default(),
        "browse.recent_limit" => config.browse.recent_limit.to_string(),
        "catalog.dir" => config
            .catalog
            .dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default(),
        "settings.profile.name" => settings.profile.name.clone(),
        "settings.profile.email" => settings.profile.email.clone(),
        "settings.profile.company" => settings.profile.company.clone(),
        "settings.profile.bio" => settings.profile.bio.clone(),
        "settings.appearance.theme" => settings.appearance.theme.clone(),
        "settings.appearance.density" => settings.appearance.density.clone(),
        "settings.notifications.email" => settings.notifications.email.to_string(),
        "settings.notifications.push" => settings.notifications.push.to_string(),
        "settings.notifications.marketing" => settings.notifications.marketing.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────
