use crate::platform::Platform;

/// Default country set for Google Play multi-country aggregation.
const PLAY_DEFAULT_COUNTRIES: &[&str] = &["us", "kr", "jp", "gb", "de", "fr", "in", "br"];

/// Default country set for App Store multi-country aggregation.
const APP_STORE_DEFAULT_COUNTRIES: &[&str] = &["us", "gb", "ca", "au", "de", "fr", "jp", "kr"];

/// The default country list queried when the caller doesn't supply one.
///
/// Both lists cover the eight largest storefront markets for the platform;
/// the order is also the processing order during aggregation.
pub fn default_countries(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::PlayStore => PLAY_DEFAULT_COUNTRIES,
        Platform::AppStore => APP_STORE_DEFAULT_COUNTRIES,
    }
}

/// Check that a country code is a two-letter ASCII code.
///
/// Storefront endpoints take ISO 3166-1 alpha-2 codes; anything else gets
/// rejected before a request is built.
pub fn is_valid_country(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_countries_have_eight_entries() {
        assert_eq!(default_countries(Platform::PlayStore).len(), 8);
        assert_eq!(default_countries(Platform::AppStore).len(), 8);
    }

    #[test]
    fn test_default_countries_start_with_us() {
        assert_eq!(default_countries(Platform::PlayStore)[0], "us");
        assert_eq!(default_countries(Platform::AppStore)[0], "us");
    }

    #[test]
    fn test_default_countries_are_valid() {
        for platform in Platform::all() {
            for code in default_countries(*platform) {
                assert!(is_valid_country(code), "invalid default country {code}");
            }
        }
    }

    #[test]
    fn test_is_valid_country() {
        assert!(is_valid_country("us"));
        assert!(is_valid_country("GB"));
        assert!(!is_valid_country("usa"));
        assert!(!is_valid_country("u"));
        assert!(!is_valid_country(""));
        assert!(!is_valid_country("u1"));
    }
}
