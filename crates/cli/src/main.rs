use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use iconsmith_generator::{Generator, GeneratorConfig, QuoteStyle};
use iconsmith_markup::OptimizerConfig;

use crate::flags::CaseModeFlag;
use crate::scanner::SvgScanner;

mod flags;
mod scanner;

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Generate constants from SVG icon files", long_about = None)]
#[command(version)]
struct Cli {
    /// Input directory containing SVG files
    #[arg(short, long, default_value = "src/assets/icons")]
    input: PathBuf,

    /// Output file path or pattern ({i} and {a,b} placeholders)
    #[arg(short, long, default_value = "src/components/Icon/paths.js")]
    output: String,

    /// Template string for naming convention
    #[arg(short, long, default_value = "")]
    template: String,

    /// Naming format
    #[arg(short, long, value_enum, default_value = "camelCase")]
    format: CaseModeFlag,

    /// Use single quotes in the output
    #[arg(short, long)]
    quote: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let working_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let base_dir = working_dir.join(&cli.input);
    if !base_dir.is_dir() {
        bail!("Input directory {} does not exist", base_dir.display());
    }

    let files = SvgScanner::new(&base_dir).scan();
    if files.is_empty() {
        bail!("No SVG files found under {}", base_dir.display());
    }

    let config = GeneratorConfig {
        base_dir,
        working_dir,
        output_template: cli.output,
        name_template: cli.template,
        case_mode: cli.format.as_domain(),
        quote: if cli.quote {
            QuoteStyle::Single
        } else {
            QuoteStyle::Double
        },
        optimizer: OptimizerConfig::default(),
    };

    let generator = Generator::new(config)?;
    let modules = generator.generate(&files);
    if modules.is_empty() {
        bail!("No constants could be generated");
    }

    for module in &modules {
        if let Some(parent) = module.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&module.path, &module.content)
            .with_context(|| format!("Failed to write {}", module.path.display()))?;
        log::info!(
            "Constants file successfully created: {}",
            module.path.display()
        );
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.target(env_logger::Target::Stderr).init();
}
