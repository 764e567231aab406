use clap::{Parser, Subcommand};
use ezcto_site::catalog::{self, CATALOG};
use ezcto_site::{build, config, output, select};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ezcto-site")]
#[command(about = "Landing page generator for meme-token projects")]
#[command(long_about = "\
Landing page generator for meme-token projects

A project file holds the project data and its style analysis:

  {
    \"data\": {
      \"projectName\": \"Moon Frog\", \"ticker\": \"FROG\",
      \"description\": \"...\",
      \"logoUrl\": \"https://...\", \"bannerUrl\": \"https://...\",
      \"posterUrls\": [\"https://...\"],                # optional
      \"social\": { \"twitter\": \"https://...\" },     # optional
      \"contractAddress\": \"0x...\",                   # optional
      \"content\": { \"headline\": \"...\", \"features\": [\"...\"],
                   \"tokenomics\": { \"totalSupply\": \"1B\", \"distribution\": \"...\" } }
    },
    \"analysis\": {
      \"narrativeType\": \"community | tech | culture | gaming\",
      \"layoutStyle\": \"minimal | playful | cyberpunk | retro\",
      \"vibe\": \"friendly | edgy | mysterious | energetic\",
      \"colorPalette\": { \"primary\": \"#...\", \"secondary\": \"#...\",
                        \"background\": \"#...\", \"text\": \"#...\", \"accent\": \"#...\" },
      \"targetAudience\": \"...\"
    }
  }

The analysis picks one of six layout templates; the narrative adds its own
sections and the layout style picks the hero design.

Run 'ezcto-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Seed the template selection jitter (overrides config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable template selection jitter
    #[arg(long, global = true)]
    no_jitter: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one project file to <output>/index.html
    Generate {
        /// Project JSON file
        #[arg(long)]
        project: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Render every project file under a directory, in parallel
    Build {
        /// Directory of project JSON files
        #[arg(long, default_value = "projects")]
        source: PathBuf,
        /// Output directory (one subdirectory per project)
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Show every template's score for a project without rendering
    Select {
        /// Project JSON file
        #[arg(long)]
        project: PathBuf,
    },
    /// List the template catalog
    Templates,
    /// Validate the catalog and, optionally, a project file
    Check {
        /// Project JSON file
        #[arg(long)]
        project: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Generate {
            project,
            output: out_dir,
        } => {
            let site_config = resolve_config(&cli)?;
            let (input, site, written) = build::generate_project(project, out_dir, &site_config)?;
            output::print_generate_output(&input, &site, &written);
        }
        Command::Build {
            source,
            output: out_dir,
        } => {
            let site_config = resolve_config(&cli)?;
            init_thread_pool(&site_config.processing);
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_build_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = build::build(source, out_dir, &site_config, Some(tx));
            printer.join().ok();
            let summary = result?;
            output::print_build_summary(&summary, out_dir);
        }
        Command::Select { project } => {
            let site_config = resolve_config(&cli)?;
            let input = build::load_project(project)?;
            let analysis = &input.analysis;
            let scores = select::select_with_config(
                analysis.vibe,
                analysis.narrative_type,
                analysis.layout_style,
                &site_config.selection,
            );
            output::print_scores(analysis, &scores);
        }
        Command::Templates => {
            output::print_catalog(CATALOG);
        }
        Command::Check { project } => {
            catalog::validate_catalog()?;
            resolve_config(&cli)?;
            match project {
                Some(path) => {
                    let input = build::load_project(path)?;
                    output::print_check_output(CATALOG.len(), Some((path.as_path(), &input)));
                }
                None => output::print_check_output(CATALOG.len(), None),
            }
            println!("==> All checks passed");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `config.toml` and apply the global selection flags on top.
fn resolve_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    let mut site_config = config::load_config(&cli.config)?;
    if let Some(seed) = cli.seed {
        site_config.selection.seed = Some(seed);
    }
    if cli.no_jitter {
        site_config.selection.jitter = false;
    }
    Ok(site_config)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
