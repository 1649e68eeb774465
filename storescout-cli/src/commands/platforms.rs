use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use storescout_core::{Platform, default_countries};

/// Run the platforms command.
pub(crate) fn run_platforms() {
    println!("Supported storefronts:");
    println!();

    for platform in Platform::all() {
        println!(
            "  {} [{}]",
            platform.short_name().if_supports_color(Stdout, |t| t.bold()),
            platform
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
        println!("    Aliases: {}", platform.aliases().join(", "));
        println!("    App ID: {}", platform.identifier_hint());
        println!(
            "    Default countries: {}",
            default_countries(*platform).join(", "),
        );
        println!();
    }
}
