//! storescout CLI
//!
//! Command-line interface for fetching app metadata and reviews from
//! mobile storefronts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use storescout_core::{Platform, SortOrder};

mod commands;
mod error;
mod spinner;

#[derive(Parser)]
#[command(name = "storescout")]
#[command(about = "Fetch app metadata and reviews from mobile storefronts", long_about = None)]
#[command(version)]
struct Cli {
    /// Suppress spinners and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Common arguments for commands that query a storefront.
#[derive(Args, Clone)]
struct QueryArgs {
    /// App identifier: package name (Play) or numeric app ID (App Store)
    app_id: String,

    /// Storefront to query (play, appstore)
    #[arg(short, long, default_value = "play")]
    platform: Platform,

    /// Language code for the storefront request
    #[arg(short, long, default_value = "en")]
    language: String,
}

/// Common arguments for output and export handling.
#[derive(Args, Clone)]
struct OutputArgs {
    /// Print the result as pretty JSON instead of a listing
    #[arg(long)]
    json: bool,

    /// Write the result to a timestamped JSON file
    #[arg(short, long)]
    export: bool,

    /// Directory for exported files (default: settings, then ./exports)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch app metadata from one country storefront
    Info {
        #[command(flatten)]
        query: QueryArgs,

        /// Country storefront to query
        #[arg(short, long, default_value = "us")]
        country: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch reviews from one country storefront
    Reviews {
        #[command(flatten)]
        query: QueryArgs,

        /// Country storefront to query
        #[arg(short, long, default_value = "us")]
        country: String,

        /// Maximum number of reviews to fetch
        #[arg(long)]
        count: Option<usize>,

        /// Sort order (newest, rating, helpfulness)
        #[arg(short, long)]
        sort: Option<SortOrder>,

        /// Keep only reviews with written text
        #[arg(long)]
        text_only: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Aggregate reviews across multiple country storefronts
    Aggregate {
        #[command(flatten)]
        query: QueryArgs,

        /// Countries to query (e.g., us,gb,jp); default from settings or platform
        #[arg(short, long, value_delimiter = ',')]
        countries: Option<Vec<String>>,

        /// Reviews to fetch per country
        #[arg(long)]
        count_per_country: Option<usize>,

        /// Sort order (newest, rating, helpfulness)
        #[arg(short, long)]
        sort: Option<SortOrder>,

        /// Keep only reviews with written text
        #[arg(long)]
        text_only: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported storefronts
    Platforms,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file and the effective values
    Show,

    /// Print the settings file path
    Path,

    /// Update and persist default settings
    Set {
        /// Default countries for aggregation (e.g., us,gb,jp)
        #[arg(long, value_delimiter = ',')]
        countries: Option<Vec<String>>,

        /// Default language code
        #[arg(long)]
        language: Option<String>,

        /// Default reviews per country
        #[arg(long)]
        count: Option<usize>,

        /// Default sort order
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Default export directory
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info {
            query,
            country,
            output,
        } => commands::run_info(
            query.app_id,
            query.platform,
            country,
            query.language,
            output.json,
            output.export,
            output.output_dir,
            cli.quiet,
        ),
        Commands::Reviews {
            query,
            country,
            count,
            sort,
            text_only,
            output,
        } => commands::run_reviews(
            query.app_id,
            query.platform,
            country,
            query.language,
            count,
            sort,
            text_only,
            output.json,
            output.export,
            output.output_dir,
            cli.quiet,
        ),
        Commands::Aggregate {
            query,
            countries,
            count_per_country,
            sort,
            text_only,
            output,
        } => commands::run_aggregate(
            query.app_id,
            query.platform,
            countries,
            query.language,
            count_per_country,
            sort,
            text_only,
            output.json,
            output.export,
            output.output_dir,
            cli.quiet,
        ),
        Commands::Platforms => {
            commands::run_platforms();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::run_config_path();
                Ok(())
            }
            ConfigAction::Set {
                countries,
                language,
                count,
                sort,
                export_dir,
            } => commands::run_config_set(countries, language, count, sort, export_dir),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                e,
            );
            ExitCode::FAILURE
        }
    }
}
