use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("http://from-file:5000".to_string());
    raw.logging.level = Some("info".to_string());

    let overrides = ConfigOverrides {
        api_base_url: Some("https://admin.example.com/backend".to_string()),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(
        settings.api.base_url.as_str(),
        "https://admin.example.com/backend/"
    );
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_point_at_local_backend() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    let expected = format!("{}/", default_api_base_url().trim_end_matches('/'));
    assert_eq!(settings.api.base_url.as_str(), expected);
    assert!(settings.api.request_timeout.is_none());
    assert_eq!(settings.ui.page_size.get(), DEFAULT_PAGE_SIZE);
    assert_eq!(settings.ui.locale, Locale::En);
    assert!(settings.session.token_path.ends_with(".novacore/token"));
}

#[test]
fn rejects_non_http_base_url() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("ftp://example.com".to_string());
    let err = Settings::from_raw(raw).expect_err("ftp is not allowed");
    assert!(matches!(err, LoadError::Invalid { key: "api.base_url", .. }));
}

#[test]
fn rejects_zero_page_size() {
    let mut raw = RawSettings::default();
    raw.apply_overrides(&ConfigOverrides {
        page_size: Some(0),
        ..Default::default()
    });
    let err = Settings::from_raw(raw).expect_err("zero page size");
    assert!(matches!(err, LoadError::Invalid { key: "ui.page_size", .. }));
}

#[test]
fn rejects_unknown_locale() {
    let mut raw = RawSettings::default();
    raw.ui.locale = Some("klingon".to_string());
    let err = Settings::from_raw(raw).expect_err("unknown locale");
    assert!(matches!(err, LoadError::Invalid { key: "ui.locale", .. }));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ConfigOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn timeout_must_be_positive() {
    let mut raw = RawSettings::default();
    raw.api.request_timeout_seconds = Some(0);
    assert!(Settings::from_raw(raw.clone()).is_err());

    raw.api.request_timeout_seconds = Some(15);
    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.api.request_timeout, Some(Duration::from_secs(15)));
}

#[test]
fn config_file_values_are_layered() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("console.toml");
    std::fs::write(
        &path,
        "[api]\nbase_url = \"http://cms.internal:8080\"\n\n[ui]\nlocale = \"fa\"\npage_size = 25\n",
    )
    .expect("write config");

    let settings = load(Some(&path), &ConfigOverrides::default()).expect("settings");
    assert_eq!(settings.api.base_url.as_str(), "http://cms.internal:8080/");
    assert_eq!(settings.ui.locale, Locale::Fa);
    assert_eq!(settings.ui.page_size.get(), 25);
}
