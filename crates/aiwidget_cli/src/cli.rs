//! CLI argument definitions using clap derive macros.

use aiwidget_color::{ColorScheme, HexColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect the AI chat widget's generated colors and themes
#[derive(Parser, Debug)]
#[command(name = "aiwidget", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// widget.toml to read style defaults from (file or directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the light and dark themes as JSON
    Theme {
        /// Accent color, e.g. #742DDD
        #[arg(long, value_name = "HEX")]
        accent: Option<HexColor>,

        /// Background color of bot messages
        #[arg(long = "bot-bg", value_name = "HEX")]
        bot_bg: Option<HexColor>,

        /// Only print the theme for this scheme
        #[arg(long)]
        scheme: Option<ColorScheme>,

        /// Print `path = value` lines instead of JSON
        #[arg(long)]
        flat: bool,
    },

    /// Print the five variants of a color, lightest first
    Variants {
        /// Base color
        color: HexColor,
    },

    /// Print the primary CSS custom properties for an accent color
    CssVars {
        /// Accent color
        color: HexColor,

        #[arg(long, default_value_t = ColorScheme::Light)]
        scheme: ColorScheme,

        /// Selector of the generated rule
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Print the label color (#fff or #000) for a background
    Label {
        /// Background color
        color: HexColor,
    },

    /// Write a default widget.toml
    InitConfig {
        /// Target file or directory (default: ./widget.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
