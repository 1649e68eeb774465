use serde::{Deserialize, Serialize};

/// Storefront identifiers.
///
/// This enum centralizes storefront identity — short names, display names,
/// and aliases — in one place, replacing ad-hoc string matching throughout
/// the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Google Play Store
    #[serde(rename = "play")]
    PlayStore,
    /// Apple App Store
    #[serde(rename = "appstore")]
    AppStore,
}

/// All platform variants in registration order.
const ALL_PLATFORMS: &[Platform] = &[Platform::PlayStore, Platform::AppStore];

impl Platform {
    /// Canonical short name used for CLI arguments and export filenames.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::PlayStore => "play",
            Self::AppStore => "appstore",
        }
    }

    /// Full display name for the storefront.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PlayStore => "Google Play Store",
            Self::AppStore => "Apple App Store",
        }
    }

    /// Alternative names accepted when parsing (checked case-insensitively).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::PlayStore => &["play", "gplay", "googleplay", "playstore", "android"],
            Self::AppStore => &["appstore", "itunes", "apple", "ios"],
        }
    }

    /// What an app identifier looks like on this storefront.
    pub fn identifier_hint(&self) -> &'static str {
        match self {
            Self::PlayStore => "package name (e.g., com.instagram.android)",
            Self::AppStore => "numeric app ID (e.g., 284882215)",
        }
    }

    /// All supported platforms.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Error returned when a platform name fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown platform '{}' (expected one of: play, appstore)",
            self.0
        )
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        for platform in ALL_PLATFORMS {
            if platform
                .aliases()
                .iter()
                .any(|alias| *alias == lower.as_str())
            {
                return Ok(*platform);
            }
        }
        Err(PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
