use clap::{Parser, Subcommand};
use simple_course::{config, generate, output, scan, types};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-course")]
#[command(about = "Static site generator for sequential tutorial courses")]
#[command(long_about = "\
Static site generator for sequential tutorial courses

Your filesystem is the data source. Filenames define reading order, a
front-matter tag assigns each article to a collection, and each collection's
index page drives its table of contents.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── index.md                     # Home page (lists all collections)
  ├── assets/                      # Static assets (favicons, images) → copied to output root
  ├── python/
  │   ├── index.md                 # Collection index (front matter: collection: python)
  │   ├── 01-intro.md              # Article (front matter: tags: python)
  │   └── 02-variables.md          # Ordered by filename, not by date
  └── flask-2/
      ├── index.md                 # Sections + group labels live here
      ├── 01.1-setup.md            # section_index / group_index place the article
      └── 02.1-routing.md

Front matter keys:
  Articles:  title, tags, section_index, group_index, unlisted, video_id, last_update
  Indexes:   title, collection, sections (each with a title and numbered groups)

Articles link to the next one in their collection automatically. Run
'simple-course gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-course-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML site from a previous scan
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: types::Manifest = serde_json::from_str(&manifest_content)?;
            generate::generate(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            generate::generate(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Persist the scan manifest as pretty JSON so the generate stage (and
/// humans) can inspect it.
fn write_manifest(
    manifest: &types::Manifest,
    temp_dir: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)?;
    Ok(())
}
