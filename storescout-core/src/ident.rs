/// Check that a string looks like a Google Play package name.
///
/// Requires at least two dot-separated segments, each non-empty and made of
/// alphanumerics or underscores (e.g., "com.instagram.android").
pub fn is_valid_package_name(app_id: &str) -> bool {
    let parts: Vec<&str> = app_id.split('.').collect();
    if parts.len() < 2 {
        return false;
    }
    parts
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
}

/// Check that a string is a numeric App Store identifier (e.g., "284882215").
///
/// The App Store review feeds are keyed by the numeric ID from the store
/// URL, not the app name.
pub fn is_numeric_app_id(app_id: &str) -> bool {
    !app_id.is_empty() && app_id.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_package_names() {
        assert!(is_valid_package_name("com.instagram.android"));
        assert!(is_valid_package_name("com.google.android.youtube"));
        assert!(is_valid_package_name("a.b"));
        assert!(is_valid_package_name("org.my_app.v2"));
    }

    #[test]
    fn test_invalid_package_names() {
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("instagram"));
        assert!(!is_valid_package_name("com."));
        assert!(!is_valid_package_name(".android"));
        assert!(!is_valid_package_name("com..app"));
        assert!(!is_valid_package_name("com.my app"));
        assert!(!is_valid_package_name("com.app-name"));
    }

    #[test]
    fn test_numeric_app_ids() {
        assert!(is_numeric_app_id("284882215"));
        assert!(is_numeric_app_id("1"));
        assert!(!is_numeric_app_id(""));
        assert!(!is_numeric_app_id("284882215x"));
        assert!(!is_numeric_app_id("com.instagram.android"));
    }
}
