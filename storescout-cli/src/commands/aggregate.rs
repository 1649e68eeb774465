use std::path::PathBuf;

use storescout_core::{Platform, SortOrder};
use storescout_scraper::{AggregateOptions, Settings, aggregate_reviews, create_source};

use crate::error::CliError;
use crate::spinner;

/// Run the aggregate command: fetch reviews across several country
/// storefronts and merge them into one deduplicated set.
///
/// Country list resolution: `--countries` flag, then the settings file,
/// then the platform's default set.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_aggregate(
    app_id: String,
    platform: Platform,
    countries: Option<Vec<String>>,
    language: String,
    count_per_country: Option<usize>,
    sort: Option<SortOrder>,
    text_only: bool,
    json: bool,
    export: bool,
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load();

    let mut options = AggregateOptions::new(platform);
    if let Some(list) = countries.or_else(|| settings.countries.clone()) {
        options.countries = list;
    }
    super::check_countries(&options.countries)?;
    options.language = language;
    options.count_per_country = count_per_country.unwrap_or(settings.count);
    options.sort = sort.unwrap_or(settings.sort);
    options.text_only = text_only;

    let source = create_source(platform)?;

    let pb = spinner::start(
        format!(
            "Aggregating reviews for {app_id} across {} countries...",
            options.countries.len()
        ),
        quiet,
    );
    let result = aggregate_reviews(source.as_ref(), &app_id, &options);
    pb.finish_and_clear();
    let set = result?;

    super::print_review_set(&set, json)?;

    if export {
        super::export_review_set(&set, output_dir, &settings)?;
    }

    Ok(())
}
