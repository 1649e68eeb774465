use super::*;

#[test]
fn test_parse_short_names() {
    assert_eq!("play".parse::<Platform>().unwrap(), Platform::PlayStore);
    assert_eq!("appstore".parse::<Platform>().unwrap(), Platform::AppStore);
}

#[test]
fn test_parse_aliases() {
    assert_eq!("android".parse::<Platform>().unwrap(), Platform::PlayStore);
    assert_eq!("gplay".parse::<Platform>().unwrap(), Platform::PlayStore);
    assert_eq!("ios".parse::<Platform>().unwrap(), Platform::AppStore);
    assert_eq!("itunes".parse::<Platform>().unwrap(), Platform::AppStore);
}

#[test]
fn test_parse_case_insensitive() {
    assert_eq!("Play".parse::<Platform>().unwrap(), Platform::PlayStore);
    assert_eq!("APPSTORE".parse::<Platform>().unwrap(), Platform::AppStore);
}

#[test]
fn test_parse_unknown() {
    let err = "steam".parse::<Platform>().unwrap_err();
    assert_eq!(err, PlatformParseError("steam".to_string()));
}

#[test]
fn test_short_names_are_aliases() {
    // Every short name must round-trip through FromStr.
    for platform in Platform::all() {
        let parsed: Platform = platform.short_name().parse().unwrap();
        assert_eq!(parsed, *platform);
    }
}

#[test]
fn test_display_matches_short_name() {
    assert_eq!(Platform::PlayStore.to_string(), "play");
    assert_eq!(Platform::AppStore.to_string(), "appstore");
}
