//! CLI entry point for treejson

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{error, info};
use treejson::tree::DEFAULT_COLOR_STEP;
use treejson::{
    BuilderConfig, ColorScheme, Error, LogFormat, LoggingConfig, OutputConfig, TreeBuilder,
    TreeStats, init_logging, write_json,
};

/// Placeholder for flags that were never given.
const UNSET: &str = "Unknown";

#[derive(Parser, Debug)]
#[command(name = "treejson")]
#[command(about = "Walk a directory tree and write it out as JSON for treemap visualizations")]
#[command(version)]
struct Args {
    /// Full path of the directory to scan
    #[arg(long = "repository", value_name = "PATH", default_value = UNSET)]
    repository: PathBuf,

    /// Full path of the output file
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = UNSET)]
    output: PathBuf,

    /// Skip entries whose file name matches pattern (can be used multiple times)
    #[arg(long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Do not skip the built-in prefixes (.git, build/, bin/, gradle/, ...)
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Do not annotate nodes with a depth color
    #[arg(long = "no-color")]
    no_color: bool,

    /// Lightness drop per tree level, in percent
    #[arg(
        long = "color-step",
        value_name = "PERCENT",
        default_value_t = DEFAULT_COLOR_STEP,
        value_parser = clap::value_parser!(u8).range(1..=100),
        conflicts_with = "no_color"
    )]
    color_step: u8,

    /// Indent the JSON document
    #[arg(long = "pretty")]
    pretty: bool,

    /// Log filter, e.g. "debug" or "treejson=trace" (overrides TREEJSON_LOG)
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log line format (overrides TREEJSON_LOG_FORMAT)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("treejson: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Defaults, then environment, then flags.
fn setup_logging(args: &Args) -> Result<(), Error> {
    let mut config = LoggingConfig::default().with_env_overrides()?;
    if let Some(level) = &args.log_level {
        config.level = level.clone();
    }
    if let Some(format) = args.log_format {
        config.format = format;
    }
    init_logging(&config)
}

fn run(args: &Args) -> Result<TreeStats, Error> {
    let repository = require_set(&args.repository, "--repository")?;
    let output = require_set(&args.output, "-o")?;

    let builder = TreeBuilder::new(builder_config(args))
        .map_err(|e| Error::Config(format!("invalid --exclude pattern: {}", e)))?;
    let tree = builder.build(repository)?;

    let stats = TreeStats::collect(&tree);
    info!(
        files = stats.files,
        directories = stats.directories,
        bytes = stats.total_bytes,
        max_depth = stats.max_depth,
        "tree built"
    );

    write_json(&tree, output, &OutputConfig { pretty: args.pretty })?;
    Ok(stats)
}

fn builder_config(args: &Args) -> BuilderConfig {
    let defaults = BuilderConfig::default();
    BuilderConfig {
        exclude_prefixes: if args.no_default_excludes {
            Vec::new()
        } else {
            defaults.exclude_prefixes
        },
        exclude_patterns: args.exclude.clone(),
        color: (!args.no_color).then(|| ColorScheme::new(args.color_step)),
    }
}

fn require_set<'a>(path: &'a Path, flag: &str) -> Result<&'a Path, Error> {
    if path.as_os_str() == UNSET {
        return Err(Error::Config(format!("{} is required", flag)));
    }
    Ok(path)
}
