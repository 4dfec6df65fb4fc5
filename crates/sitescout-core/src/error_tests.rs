//! Error module tests

use crate::error::Error;

#[test]
fn test_error_codes_are_grouped_by_range() {
    assert_eq!(
        Error::SourceUnavailable("service".into(), "down".into()).code(),
        "E001"
    );
    assert_eq!(
        Error::BlogApi {
            status: 503,
            message: "unavailable".into()
        }
        .code(),
        "E101"
    );
    assert_eq!(Error::BlogApiNotConfigured.code(), "E102");
    assert_eq!(Error::ConfigError("bad".into()).code(), "E600");
    assert_eq!(Error::InvalidInput("bad".into()).code(), "E800");
    assert_eq!(Error::Other("x".into()).code(), "E9999");
}

#[test]
fn test_catalog_parse_error_from_serde() {
    let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
        .unwrap_err()
        .into();
    assert_eq!(err.code(), "E002");
    assert!(err.to_string().contains("catalog"));
    assert!(err.suggestion().is_some());
}

#[test]
fn test_blog_api_error_message_and_suggestion() {
    let err = Error::BlogApi {
        status: 502,
        message: "bad gateway".into(),
    };
    assert_eq!(err.to_string(), "Blog API returned HTTP 502: bad gateway");
    assert!(err.suggestion().is_some());
    assert!(err.is_transient());

    let not_found = Error::BlogApi {
        status: 404,
        message: "missing".into(),
    };
    assert!(not_found.suggestion().is_none());
    assert!(!not_found.is_transient());
}

#[test]
fn test_not_configured_suggests_config_command() {
    let suggestion = Error::BlogApiNotConfigured.suggestion().unwrap();
    assert!(suggestion.contains("blog.api_base_url"));
}
