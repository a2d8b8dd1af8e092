use appvet::cli::{AddonSource, ValidateOptions, list_locations, run_validate};
use appvet::validate::ValidationPhase;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = appvet::APP_NAME)]
#[command(version = appvet::VERSION)]
#[command(about = "Validate app manifests before running or packaging", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct AddonArgs {
    /// Addon directory holding the product tables
    #[arg(long, conflicts_with = "addon_version")]
    addon_dir: Option<PathBuf>,

    /// Installed addon version under ~/.fdk/addon
    #[arg(long)]
    addon_version: Option<String>,
}

impl AddonArgs {
    fn source(self) -> Result<AddonSource, String> {
        match (self.addon_dir, self.addon_version) {
            (Some(dir), _) => Ok(AddonSource::Dir(dir)),
            (None, Some(version)) => Ok(AddonSource::Version(version)),
            (None, None) => Err("either --addon-dir or --addon-version is required".into()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest of an app project
    Validate {
        /// Project directory containing manifest.json
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Validation phase
        #[arg(long, value_enum, default_value_t = ValidationPhase::Run)]
        phase: ValidationPhase,

        /// App type reported by the host tool
        #[arg(long, default_value = "")]
        app_type: String,

        /// Validator settings file (defaults to <project>/appvet.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        addon: AddonArgs,
    },
    /// List products and locations known to an addon
    Locations {
        /// Only show this product
        #[arg(long)]
        product: Option<String>,

        #[command(flatten)]
        addon: AddonArgs,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", appvet::APP_NAME, level)));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<bool, Box<dyn std::error::Error>> = match cli.command {
        Commands::Validate {
            project,
            phase,
            app_type,
            config,
            addon,
        } => addon.source().map_err(Into::into).and_then(|source| {
            let options = ValidateOptions::new(project, source)
                .with_settings(config)
                .with_context(&app_type, phase);
            run_validate(&options).map_err(Into::into)
        }),
        Commands::Locations { product, addon } => {
            addon.source().map_err(Into::into).and_then(|source| {
                list_locations(&source, product.as_deref())
                    .map(|()| true)
                    .map_err(Into::into)
            })
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("[{}] Error: {}", appvet::APP_NAME, e);
            process::exit(2);
        }
    }
}
