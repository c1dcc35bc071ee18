//! Command handlers. Each returns the text to print on stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use aiwidget_color::{
    color_based_on_saturation, generate_color_variants, generate_css_variables, ColorScheme,
    HexColor,
};
use aiwidget_theme::{get_theme, ThemeInputs};
use anyhow::{Context, Result};

use crate::cli::{Cli, Commands};
use crate::config::{WidgetFileConfig, CONFIG_FILE_NAME};

pub fn run(cli: Cli) -> Result<String> {
    let config = cli
        .config
        .as_deref()
        .map(WidgetFileConfig::load_from_path)
        .transpose()?;

    match cli.command {
        Commands::Theme {
            accent,
            bot_bg,
            scheme,
            flat,
        } => theme(config.as_ref(), accent, bot_bg, scheme, flat),
        Commands::Variants { color } => Ok(variants(&color)),
        Commands::CssVars {
            color,
            scheme,
            selector,
        } => Ok(generate_css_variables(&color, scheme).to_css_block(&selector)),
        Commands::Label { color } => Ok(color_based_on_saturation(&color).to_string()),
        Commands::InitConfig { path, force } => init_config(path.as_deref(), force),
    }
}

fn theme(
    config: Option<&WidgetFileConfig>,
    accent: Option<HexColor>,
    bot_bg: Option<HexColor>,
    scheme: Option<ColorScheme>,
    flat: bool,
) -> Result<String> {
    let style = config.map(|config| &config.style);
    let inputs = ThemeInputs {
        accent_color: accent.or_else(|| style.map(|style| style.accent_color.clone())),
        bot_message_bg_color: bot_bg
            .or_else(|| style.map(|style| style.bot_message_bg_color.clone())),
    };
    tracing::info!(?inputs, "building theme");

    let bundle = get_theme(&inputs);

    if flat {
        let mut out = String::new();
        for scheme in scheme.map_or_else(|| ColorScheme::all().to_vec(), |scheme| vec![scheme]) {
            for (path, value) in bundle.for_scheme(scheme).flatten() {
                let _ = writeln!(out, "{scheme}.{path} = {value}");
            }
        }
        return Ok(out.trim_end().to_string());
    }

    let json = match scheme {
        Some(scheme) => serde_json::to_string_pretty(bundle.for_scheme(scheme)),
        None => serde_json::to_string_pretty(&bundle),
    };
    json.context("Failed to serialize theme")
}

fn variants(color: &HexColor) -> String {
    generate_color_variants(color)
        .iter()
        .map(|(step, color)| format!("{step}: {color}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn init_config(path: Option<&Path>, force: bool) -> Result<String> {
    let path = match path {
        Some(path) if path.is_dir() => path.join(CONFIG_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => Path::new(CONFIG_FILE_NAME).to_path_buf(),
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    let content = WidgetFileConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote default widget config");
    Ok(format!("Created {}", path.display()))
}
