mod cli;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command, ExportArgs};
use tokenkit::color::generate_color_scale;
use tokenkit::config::{self, AppConfig};
use tokenkit::review::{review_theme_with, Severity};
use tokenkit::{logging, ExportFormat, Theme};

fn load_theme_arg(arg: &str) -> Result<Theme> {
    if arg == "-" {
        tracing::debug!("using default theme");
        return Ok(Theme::default());
    }
    config::load_theme(Path::new(arg)).with_context(|| format!("cannot load theme {arg}"))
}

fn review(theme: &Theme, config: &AppConfig) -> ExitCode {
    let result = review_theme_with(theme, &config.review);
    for issue in result.issues() {
        let label = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        println!("{label}: {}", issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("  suggestion: {suggestion}");
        }
    }
    println!("{}", result.summary());

    if result.count(Severity::Error) > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn export(theme: &Theme, args: ExportArgs, config: &AppConfig) -> Result<()> {
    let formats = match args.format {
        Some(format) => vec![format],
        None => config.export.formats.clone(),
    };
    let out_dir: Option<PathBuf> = args.out_dir.or_else(|| config.export.out_dir.clone());

    // A single format with nowhere to go prints to stdout.
    let Some(out_dir) = out_dir else {
        if let [format] = formats.as_slice() {
            print!("{}", format.generate(theme)?);
            return Ok(());
        }
        return write_all(theme, &formats, Path::new("."));
    };
    write_all(theme, &formats, &out_dir)
}

fn write_all(theme: &Theme, formats: &[ExportFormat], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create output directory {}", out_dir.display()))?;
    for format in formats {
        let output = format.generate(theme)?;
        let path = out_dir.join(format.file_name());
        fs::write(&path, output).with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!(format = format.id(), path = %path.display(), "wrote export");
    }
    Ok(())
}

fn scale(hex: &str) -> Result<()> {
    let scale = generate_color_scale(hex)?;
    for (weight, value) in scale.iter() {
        println!("{weight:>4} {value}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_config();
    match cli.command {
        Command::Review(args) => Ok(review(&load_theme_arg(&args.theme)?, &config)),
        Command::Export(args) => {
            let theme = load_theme_arg(&args.theme)?;
            export(&theme, args, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Scale(args) => {
            scale(&args.hex)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tokenkit: {err:#}");
            ExitCode::FAILURE
        }
    }
}
