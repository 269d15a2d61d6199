use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tokenkit::ExportFormat;

/// Derive, review and export design tokens.
#[derive(Parser, Debug)]
#[command(name = "tokenkit", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report contrast, consistency and completeness issues.
    Review(ThemeArg),

    /// Generate one format, or every configured format with --all.
    Export(ExportArgs),

    /// Print the 50..950 ramp derived from a base color.
    Scale(ScaleArgs),
}

#[derive(clap::Args, Debug)]
pub struct ThemeArg {
    /// Theme JSON file, or `-` for the built-in default theme.
    pub theme: String,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Theme JSON file, or `-` for the built-in default theme.
    pub theme: String,

    /// Output format.
    #[arg(value_enum, required_unless_present = "all")]
    pub format: Option<ExportFormat>,

    /// Generate every format listed in the config file.
    #[arg(long, conflicts_with = "format")]
    pub all: bool,

    /// Directory for generated files. Without one, a single format prints to stdout.
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ScaleArgs {
    /// Base color as `#RGB` or `#RRGGBB`.
    pub hex: String,
}
