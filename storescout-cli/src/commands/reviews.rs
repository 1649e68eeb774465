use std::path::PathBuf;

use storescout_core::{Platform, SortOrder};
use storescout_scraper::{AggregateOptions, Settings, aggregate_reviews, create_source};

use crate::error::CliError;
use crate::spinner;

/// Run the reviews command: fetch reviews from a single country
/// storefront. This is an aggregation over one country, so the same
/// normalize/dedup/filter pipeline applies.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_reviews(
    app_id: String,
    platform: Platform,
    country: String,
    language: String,
    count: Option<usize>,
    sort: Option<SortOrder>,
    text_only: bool,
    json: bool,
    export: bool,
    output_dir: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    super::check_countries(std::slice::from_ref(&country))?;

    let settings = Settings::load();

    let mut options = AggregateOptions::new(platform);
    options.countries = vec![country.clone()];
    options.language = language;
    options.count_per_country = count.unwrap_or(settings.count);
    options.sort = sort.unwrap_or(settings.sort);
    options.text_only = text_only;

    let source = create_source(platform)?;

    let pb = spinner::start(
        format!("Fetching reviews for {app_id} ({country})..."),
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
