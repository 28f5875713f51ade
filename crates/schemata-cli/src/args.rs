//! Command-line argument definitions for the Schemata CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which part of the catalog to render, where
//! the files go and in which format.

use clap::{Parser, ValueEnum};

use schemata::export::OutputFormat;

/// Which diagrams of the catalog to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// Every diagram
    #[default]
    All,
    /// Layered architecture, module interaction, data flow and console mockups
    Architecture,
    /// Main system, authentication, vehicle management and file operations flowcharts
    Flowcharts,
}

/// Output image format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Png,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => OutputFormat::Png,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

/// Command-line arguments for the Schemata diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram category to render
    #[arg(value_enum, default_value_t = Category::All)]
    pub category: Category,

    /// Directory the diagrams are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = Format::Png)]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the diagrams of the category and exit
    #[arg(long)]
    pub list: bool,
}
