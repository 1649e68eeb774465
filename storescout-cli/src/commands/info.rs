use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use storescout_core::Platform;
use storescout_scraper::{Settings, create_source};

use crate::error::CliError;
use crate::spinner;

/// Run the info command: fetch and display app metadata from one
/// country storefront.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_info(
    app_id: String,
    platform: Platform,
    country: String,
    language: String,
    json: bool,
    export: bool,
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    super::check_countries(std::slice::from_ref(&country))?;

    let source = create_source(platform)?;

    let pb = spinner::start(format!("Fetching app info for {app_id}..."), quiet);
    let result = source.app_info(&app_id, &country, &language);
    pb.finish_and_clear();
    let info = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!(
            "{} {} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            info.title.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", platform.display_name()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        println!(
            "  {}  {}",
            "Developer:".if_supports_color(Stdout, |t| t.cyan()),
            info.developer,
        );
        if let Some(rating) = info.rating {
            println!(
                "  {}     {:.1}",
                "Rating:".if_supports_color(Stdout, |t| t.cyan()),
                rating,
            );
        }
        if let Some(count) = info.ratings_count {
            println!(
                "  {}    {}",
                "Ratings:".if_supports_color(Stdout, |t| t.cyan()),
                count,
            );
        }
        if let Some(count) = info.reviews_count {
            println!(
                "  {}    {}",
                "Reviews:".if_supports_color(Stdout, |t| t.cyan()),
                count,
            );
        }
        if let Some(ref installs) = info.installs {
            println!(
                "  {}   {}",
                "Installs:".if_supports_color(Stdout, |t| t.cyan()),
                installs,
            );
        }
        if let Some(ref description) = info.description {
            println!();
            println!("  {}", summarize(description));
        }
    }

    if export {
        let settings = Settings::load();
        let dir = super::resolve_export_dir(output_dir, &settings);
        let path = storescout_export::write_app_info(&info, &dir)?;
        println!(
            "{} Exported to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    Ok(())
}

/// First 300 characters of the description, cut at a char boundary.
fn summarize(description: &str) -> String {
    const MAX: usize = 300;
    if description.chars().count() <= MAX {
        return description.to_string();
    }
    let prefix: String = description.chars().take(MAX).collect();
    format!("{}\u{2026}", prefix.trim_end())
}

#[cfg(test)]
mod tests {
    use super::summarize;

    #[test]
    fn test_short_description_unchanged() {
        assert_eq!(summarize("A tiny app."), "A tiny app.");
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "x".repeat(500);
        let result = summarize(&long);
        assert_eq!(result.chars().count(), 301);
        assert!(result.ends_with('\u{2026}'));
    }
}
