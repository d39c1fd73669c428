use std::io::Write;

use sls::{OnError, ScraperConfig};

#[test]
fn empty_yaml_yields_defaults() {
    let conf: ScraperConfig = serde_yaml::from_str("{}").unwrap();
    let defaults = ScraperConfig::default();

    assert_eq!(conf.user_agent, defaults.user_agent);
    assert_eq!(conf.base_url, defaults.base_url);
    assert_eq!(conf.timeout, 30);
    assert_eq!(conf.throttle, None);
    assert!(matches!(conf.on_fetch_error, OnError::SkipAndLog));
}

#[test]
fn partial_yaml_keeps_remaining_defaults() {
    let conf: ScraperConfig = serde_yaml::from_str(
        r#"
timeout: 5
throttle: 1.5
baseUrl: "https://shop.example.com/s?k="
"#,
    )
    .unwrap();

    assert_eq!(conf.timeout, 5);
    assert_eq!(conf.throttle, Some(1.5));
    assert_eq!(conf.base_url, "https://shop.example.com/s?k=");
    assert_eq!(conf.user_agent, ScraperConfig::default().user_agent);
}

#[test]
fn negative_throttle_fails_validation() {
    let conf = ScraperConfig {
        throttle: Some(-1.0),
        ..Default::default()
    };
    assert!(conf.validate().is_err());

    let conf = ScraperConfig {
        throttle: Some(f32::NAN),
        ..Default::default()
    };
    assert!(conf.validate().is_err());

    assert!(ScraperConfig::default().validate().is_ok());
}

#[test]
fn negative_throttle_is_rejected_at_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "throttle: -1.0").unwrap();

    let err = ScraperConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("throttle"));
}
