//! CLI subcommand implementations.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use storescout_core::{Review, ReviewSet, is_valid_country};
use storescout_scraper::Settings;

use crate::error::CliError;

mod aggregate;
mod config;
mod info;
mod platforms;
mod reviews;

pub(crate) use aggregate::run_aggregate;
pub(crate) use config::{run_config_path, run_config_set, run_config_show};
pub(crate) use info::run_info;
pub(crate) use platforms::run_platforms;
pub(crate) use reviews::run_reviews;

/// Export directory resolution: `--output-dir` flag, then the settings
/// file, then `./exports`.
fn resolve_export_dir(flag: Option<PathBuf>, settings: &Settings) -> PathBuf {
    flag.unwrap_or_else(|| settings.export_dir())
}

/// Reject country codes that are not two ASCII letters before any
/// network traffic happens.
fn check_countries(countries: &[String]) -> Result<(), CliError> {
    for country in countries {
        if !is_valid_country(country) {
            return Err(CliError::invalid_argument(format!(
                "Invalid country code \"{country}\" (expected two letters, e.g. us)"
            )));
        }
    }
    Ok(())
}

fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

/// Print a review set either as pretty JSON or as a human-readable listing
/// with a summary header.
fn print_review_set(set: &ReviewSet, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(set)?);
        return Ok(());
    }

    println!(
        "{} {} reviews ({} fetched, {} unique)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        set.final_count,
        set.raw_count,
        set.deduped_count,
    );
    println!(
        "  Countries: {}",
        set.countries_queried.join(", ").if_supports_color(Stdout, |t| t.cyan()),
    );
    for failure in &set.failed {
        println!(
            "  {} {}: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            failure.country,
            failure.message,
        );
    }
    println!();

    for review in &set.reviews {
        print_review(review);
    }

    if set.is_empty() {
        println!(
            "  {}",
            "No reviews found".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

fn print_review(review: &Review) {
    print!(
        "  {} {} {} {}",
        format_stars(review.rating).if_supports_color(Stdout, |t| t.yellow()),
        review.user_name.if_supports_color(Stdout, |t| t.bold()),
        review.date,
        format!("({})", review.source_country).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if review.thumbs_up > 0 {
        print!(
            " {}",
            format!("[+{}]", review.thumbs_up).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    if let Some(ref text) = review.text {
        println!("    {text}");
    }
    if let Some(ref reply) = review.reply_text {
        println!(
            "    {} {}",
            "\u{21B3}".if_supports_color(Stdout, |t| t.cyan()),
            reply,
        );
    }
    println!();
}

/// Write the review set to the export directory and report the path.
fn export_review_set(
    set: &ReviewSet,
    output_dir: Option<PathBuf>,
    settings: &Settings,
) -> Result<(), CliError> {
    let dir = resolve_export_dir(output_dir, settings);
    let path = storescout_export::write_review_set(set, &dir)?;
    println!(
        "{} Exported to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
