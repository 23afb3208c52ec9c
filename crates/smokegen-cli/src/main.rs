use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use smokegen_core::config::{self, CONFIG_FILE_NAME, SmokegenConfig};
use smokegen_core::parse::spec::ApiDocument;
use smokegen_core::{CodeGenerator, GeneratedFile, ops, parse};
use smokegen_playwright::PlaywrightGenerator;

#[derive(Parser)]
#[command(
    name = "smokegen",
    about = "Generate Playwright API smoke tests from an OpenAPI schema",
    version
)]
struct Cli {
    /// Defaults to `generate` when no subcommand is given.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one smoke-test file per schema operation
    Generate {
        /// Path to the schema file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory the generated tests are written to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a schema and report what would be generated
    Validate {
        /// Path to the schema file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate {
        input: None,
        output: None,
    }) {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "smokegen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SmokegenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_document(path: &Path) -> Result<ApiDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yml");

    let doc = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    Ok(doc)
}

/// Write generated files to disk under the given base directory, overwriting
/// unconditionally.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    if !input.exists() {
        anyhow::bail!("schema not found at {}", input.display());
    }

    let doc = load_document(&input)?;
    let files = PlaywrightGenerator.generate(&doc)?;

    fs::create_dir_all(&output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;
    write_files(&output, &files)?;

    let test_count = files.iter().filter(|f| f.path.ends_with(".spec.ts")).count();
    eprintln!("Generated {} test files in {}", test_count, output.display());
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("schema not found at {}", input.display());
    }

    let doc = load_document(&input)?;

    eprintln!("Valid schema: {}", input.display());
    eprintln!("  Servers: {}", doc.servers.len());
    eprintln!("  Paths: {}", doc.paths.len());
    eprintln!("  Operations: {}", ops::operations(&doc).count());
    Ok(())
}
