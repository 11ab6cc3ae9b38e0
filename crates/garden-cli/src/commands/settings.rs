//! `garden settings` - print the account and preference profile.

use crate::{
    cli::{SettingsArgs, SettingsSection},
    config::{AppConfig, SettingsConfig},
    error::CliResult,
    output::OutputManager,
};

const LABEL_WIDTH: usize = 14;

pub fn execute(args: SettingsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = &config.settings;

    if output.is_json() {
        match args.section {
            None => output.json(settings)?,
            Some(SettingsSection::General) => output.json(&settings.profile)?,
            Some(SettingsSection::Appearance) => output.json(&settings.appearance)?,
            Some(SettingsSection::Notifications) => output.json(&settings.notifications)?,
        }
        return Ok(());
    }

    let sections = match args.section {
        Some(section) => vec![section],
        None => vec![
            SettingsSection::General,
            SettingsSection::Appearance,
            SettingsSection::Notifications,
        ],
    };

    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        render(section, settings, &output)?;
    }
    Ok(())
}

fn render(section: SettingsSection, settings: &SettingsConfig, output: &OutputManager) -> CliResult<()> {
    match section {
        SettingsSection::General => {
            let p = &settings.profile;
            output.header("General")?;
            output.field("Name", &p.name, LABEL_WIDTH)?;
            output.field("Email", &p.email, LABEL_WIDTH)?;
            output.field("Company", &p.company, LABEL_WIDTH)?;
            output.field("Bio", &p.bio, LABEL_WIDTH)?;
        }
        SettingsSection::Appearance => {
            let a = &settings.appearance;
            output.header("Appearance")?;
            output.field("Theme", &a.theme, LABEL_WIDTH)?;
            output.field("Density", &a.density, LABEL_WIDTH)?;
        }
        SettingsSection::Notifications => {
            let n = &settings.notifications;
            output.header("Notifications")?;
            output.field("Email", on_off(n.email), LABEL_WIDTH)?;
            output.field("Push", on_off(n.push), LABEL_WIDTH)?;
            output.field("Marketing", on_off(n.marketing), LABEL_WIDTH)?;
        }
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
