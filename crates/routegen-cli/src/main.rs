use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use routegen_core::assemble;
use routegen_core::manifest::{self, Manifest};
use routegen_core::route;

#[derive(Parser)]
#[command(name = "routegen", about = "OpenAPI 3.0 document generator from route strings", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an OpenAPI document from a manifest
    Generate {
        /// Path to the manifest file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },

    /// Check a manifest: parse it and every route string it contains
    Check {
        /// Path to the manifest file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Write a sample manifest to the current directory
    Init {
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

/// Default manifest file name for `init`.
const MANIFEST_FILE_NAME: &str = "routegen.yaml";

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            format,
        } => cmd_generate(input, output, format),

        Commands::Check { input } => cmd_check(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "routegen", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn load_manifest(path: &PathBuf) -> Result<Manifest> {
    Manifest::load(path).with_context(|| format!("failed to load manifest {}", path.display()))
}

fn cmd_generate(input: PathBuf, output: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let manifest = load_manifest(&input)?;
    let server_url = manifest.server_url.clone();
    let (routes, configs) = manifest.into_inputs();

    let doc = assemble::generate(&routes, &configs, &server_url)?;

    let rendered = match format {
        OutputFormat::Json => doc.to_json_pretty()?,
        OutputFormat::Yaml => doc.to_yaml()?,
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {} ({} paths)", path.display(), doc.paths.len());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn cmd_check(input: PathBuf) -> Result<()> {
    let manifest = load_manifest(&input)?;

    let mut parameter_count = 0;
    for entry in &manifest.endpoints {
        let route = route::parse_route(&entry.route)
            .with_context(|| format!("invalid route {:?}", entry.route))?;
        parameter_count += route.parameters.len();
    }

    eprintln!("Manifest OK: {}", input.display());
    eprintln!("  Server: {}", manifest.server_url);
    eprintln!("  Endpoints: {}", manifest.endpoints.len());
    eprintln!("  Inferred parameters: {parameter_count}");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let path = PathBuf::from(MANIFEST_FILE_NAME);

    if path.exists() && !force {
        anyhow::bail!("{} already exists. Use --force to overwrite.", path.display());
    }

    fs::write(&path, manifest::default_manifest_content())?;
    eprintln!("Created {}", path.display());
    Ok(())
}
