use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use astrostretch::models::{AppConfig, ConfigFormat, ParamOverrides};
use astrostretch::services::{run_batch, PreviewTarget, ProcessRequest, ProcessingService};
use tone_stretch::{OutputFormat, ToneCurve};

#[derive(Parser)]
#[command(name = "astrostretch")]
#[command(about = "Astrostretch - tone mapping and color stretch for linear astronomical images")]
struct Cli {
    /// Config file (YAML, or JSON with a .json extension). Overrides CONFIG_FILE.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stretch one image
    Process {
        /// Input raster (TIFF, PNG, JPEG)
        input: PathBuf,

        /// Output file (default: timestamped name in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output directory for generated names
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Preview PNG path (default: timestamped name in the output directory)
        #[arg(long, conflicts_with = "no_preview")]
        preview: Option<PathBuf>,

        /// Skip the preview
        #[arg(long)]
        no_preview: bool,

        /// Maximum preview width in pixels
        #[arg(long)]
        preview_width: Option<usize>,

        /// Output format: tiff or png
        #[arg(long)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// Stretch many images in parallel
    Batch {
        /// Input rasters
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Number of worker threads (default: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Skip previews
        #[arg(long)]
        no_preview: bool,

        /// Output format: tiff or png
        #[arg(long)]
        format: Option<OutputFormat>,

        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// Print the effective stretch parameters and check them
    Params {
        /// Read parameters from this file instead of the config
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key (e.g. params.gamma_red)
    Get { key: String },
    /// Set one value by dotted key; the value is parsed as JSON when possible
    Set { key: String, value: String },
    /// Check the configuration for errors
    Validate,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = AppConfig::resolve_path(cli.config.as_deref());
    let loaded = AppConfig::load(&config_path);
    let level = loaded
        .as_ref()
        .map(|c| c.tracing_level())
        .unwrap_or("info");
    init_logging(level);
    let config = AppConfig::or_default(&config_path, loaded);

    match cli.command {
        Some(Commands::Process {
            input,
            output,
            out_dir,
            preview,
            no_preview,
            preview_width,
            format,
            overrides,
        }) => {
            let mut request = build_request(&config, &overrides, out_dir, format)?;
            request.output = output;
            if let Some(width) = preview_width {
                request.preview_width = width;
            }
            if no_preview {
                request.preview = PreviewTarget::Disabled;
            } else if let Some(path) = preview {
                request.preview = PreviewTarget::Path(path);
            }
            request.validate()?;
            run_process_command(&input, &request)
        }
        Some(Commands::Batch {
            inputs,
            out_dir,
            jobs,
            no_preview,
            format,
            overrides,
        }) => {
            let mut request = build_request(&config, &overrides, out_dir, format)?;
            if no_preview {
                request.preview = PreviewTarget::Disabled;
            }
            run_batch_command(&inputs, &request, jobs)
        }
        Some(Commands::Params { file, overrides }) => {
            run_params_command(&config, file.as_deref(), &overrides)
        }
        Some(Commands::Config { action }) => run_config_command(&config_path, &config, action),
        None => {
            run_status_command(&config_path, &config);
            Ok(())
        }
    }
}

/// Logging for one-shot commands: `RUST_LOG` wins, else the configured level
fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("astrostretch={level},tone_stretch={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Configured request with CLI overrides applied and parameters validated
fn build_request(
    config: &AppConfig,
    overrides: &ParamOverrides,
    out_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> anyhow::Result<ProcessRequest> {
    let mut request = ProcessRequest::from_config(config);
    request.params = overrides.apply(&config.params);
    request
        .params
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid parameters: {e}"))?;
    if let Some(dir) = out_dir {
        request.output_dir = dir;
    }
    if let Some(format) = format {
        request.format = format;
    }
    Ok(request)
}

/// Stretch a single image and write its output and preview
fn run_process_command(input: &Path, request: &ProcessRequest) -> anyhow::Result<()> {
    let outcome = ProcessingService::new().process_file(input, request)?;

    println!("Processed {} ({}x{})", input.display(), outcome.width, outcome.height);
    println!("  Branch:  {}", outcome.report.branch);
    println!("  Output:  {}", outcome.output.display());
    if let Some(preview) = &outcome.preview {
        println!("  Preview: {}", preview.display());
    }
    let degenerate = outcome.report.degenerate_channels();
    if !degenerate.is_empty() {
        let names: Vec<String> = degenerate.iter().map(|c| c.to_string()).collect();
        println!("  Warning: no dynamic range in {}", names.join(", "));
    }
    Ok(())
}

/// Stretch many images in parallel; fails if any file failed
fn run_batch_command(
    inputs: &[PathBuf],
    request: &ProcessRequest,
    jobs: Option<usize>,
) -> anyhow::Result<()> {
    let report = run_batch(&ProcessingService::new(), inputs, request, jobs)?;

    for (input, result) in &report.results {
        match result {
            Ok(outcome) => println!("  ok   {} -> {}", input.display(), outcome.output.display()),
            Err(e) => println!("  FAIL {}: {e}", input.display()),
        }
    }
    println!(
        "\n{} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );

    if report.failed() > 0 {
        anyhow::bail!("{} of {} files failed", report.failed(), report.results.len());
    }
    Ok(())
}

/// Print effective parameters as YAML and report domain errors
fn run_params_command(
    config: &AppConfig,
    file: Option<&Path>,
    overrides: &ParamOverrides,
) -> anyhow::Result<()> {
    let base = match file {
        Some(path) => AppConfig::load_params(path)?,
        None => config.params.clone(),
    };
    let params = overrides.apply(&base);

    print!("{}", serde_yaml::to_string(&params)?);

    let jump = ToneCurve::new(&params).mid_discontinuity();
    if jump.abs() > f32::EPSILON {
        println!("\n# tone curve jumps by {jump:+.4} at mid_threshold");
    }

    let violations = params.violations();
    if !violations.is_empty() {
        eprintln!("\nParameters have errors:");
        for e in &violations {
            eprintln!("  - {e}");
        }
        anyhow::bail!("{} invalid parameter(s)", violations.len());
    }
    Ok(())
}

fn run_config_command(
    path: &Path,
    config: &AppConfig,
    action: ConfigAction,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let text = config
                .to_text(ConfigFormat::from_path(path))
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{text}");
        }
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => println!("{key} = {value}"),
            None => anyhow::bail!("Unknown configuration key: {key}"),
        },
        ConfigAction::Set { key, value } => {
            // Never overwrite an unreadable file with defaults
            let mut stored = if path.exists() {
                AppConfig::load(path)?
            } else {
                AppConfig::default()
            };
            stored.set(&key, &value)?;
            stored.save(path)?;
            let shown = stored.get(&key).map(|v| v.to_string()).unwrap_or(value);
            println!("Set {key} = {shown}");
        }
        ConfigAction::Validate => {
            let errors = config.validate();
            if errors.is_empty() {
                println!("Configuration is valid");
            } else {
                println!("Configuration has errors:");
                for e in &errors {
                    println!("  - {e}");
                }
                anyhow::bail!("{} configuration error(s)", errors.len());
            }
        }
        ConfigAction::Init { force } => {
            if AppConfig::create_default(path, force)? {
                println!("Created default configuration at {}", path.display());
            } else {
                println!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
        }
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: &Path, config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("Astrostretch v{VERSION}");
    println!("Tone mapping for linear astronomical images\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("defaults ({} not found)", config_path.display())
    };
    println!("  Source:     {source}");
    println!("  Log level:  {}", config.log_level);
    println!("  Output dir: {}", config.output_dir.display());
    println!("  Format:     {}", config.output_format);
    if config.preview.enabled {
        println!("  Preview:    up to {} px wide", config.preview.max_width);
    } else {
        println!("  Preview:    disabled");
    }

    let p = &config.params;
    println!("\nStretch Parameters:");
    println!(
        "  gamma        R {:.3}  G {:.3}  B {:.3}",
        p.gamma_red, p.gamma_green, p.gamma_blue
    );
    println!(
        "  multipliers  G {:.3}  B {:.3}",
        p.green_multiplier, p.blue_multiplier
    );
    println!(
        "  tone curve   dark {:.3} x{:.3}  mid {:.3} x{:.3}  bright x{:.3}",
        p.dark_threshold, p.dark_multiplier, p.mid_threshold, p.mid_boost, p.bright_multiplier
    );
    println!("  saturation   {:.3}", p.saturation_boost);

    let errors = config.validate();
    if !errors.is_empty() {
        println!("\nConfiguration Problems:");
        for e in &errors {
            println!("  - {e}");
        }
    }

    println!("\nCommands:");
    println!("  astrostretch process   Stretch one image");
    println!("  astrostretch batch     Stretch many images in parallel");
    println!("  astrostretch params    Show effective stretch parameters");
    println!("  astrostretch config    Show, get, set, validate or init the config");
    println!("\nRun 'astrostretch --help' for more details.");
}
