use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use storescout_core::SortOrder;
use storescout_scraper::{Settings, settings_path};

use crate::error::CliError;

/// Show the settings file and the effective values.
pub(crate) fn run_config_show() {
    let path = settings_path();

    println!(
        "{}",
        "storescout configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    if path.exists() {
        println!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        println!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!();

    let settings = Settings::load();

    let countries = match &settings.countries {
        Some(list) => list.join(", "),
        None => "(platform default)".to_string(),
    };
    println!(
        "  {}  {}",
        "countries:".if_supports_color(Stdout, |t| t.cyan()),
        countries,
    );
    println!(
        "  {}   {}",
        "language:".if_supports_color(Stdout, |t| t.cyan()),
        settings.language,
    );
    println!(
        "  {}      {}",
        "count:".if_supports_color(Stdout, |t| t.cyan()),
        settings.count,
    );
    println!(
        "  {}       {}",
        "sort:".if_supports_color(Stdout, |t| t.cyan()),
        settings.sort,
    );
    println!(
        "  {} {}",
        "export_dir:".if_supports_color(Stdout, |t| t.cyan()),
        settings.export_dir().display(),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Update and persist default settings. Only the supplied fields change.
pub(crate) fn run_config_set(
    countries: Option<Vec<String>>,
    language: Option<String>,
    count: Option<usize>,
    sort: Option<SortOrder>,
    export_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    if countries.is_none()
        && language.is_none()
        && count.is_none()
        && sort.is_none()
        && export_dir.is_none()
    {
        return Err(CliError::invalid_argument(
            "Nothing to set: pass at least one of --countries, --language, --count, --sort, --export-dir",
        ));
    }

    let mut settings = Settings::load();

    if let Some(list) = countries {
        super::check_countries(&list)?;
        settings.countries = Some(list);
    }
    if let Some(language) = language {
        settings.language = language;
    }
    if let Some(count) = count {
        settings.count = count;
    }
    if let Some(sort) = sort {
        settings.sort = sort;
    }
    if let Some(dir) = export_dir {
        settings.export_dir = Some(dir);
    }

    settings.save()?;

    println!(
        "{} Settings saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}
