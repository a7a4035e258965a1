use crate::config::{Config, StatusCodePolicy};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let lookup = lookup_from(&[]);
    let config = Config::from_lookup(&lookup, Path::new("/srv/app")).unwrap();

    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.json_limit_bytes, 16 * 1024);
    assert_eq!(config.server.status_code_policy, StatusCodePolicy::Strict);
    assert_eq!(
        config.model.model_path,
        PathBuf::from("/srv/app/model_mobil.json")
    );
    assert!(config.observability.enabled);
}

#[test]
fn test_config_overrides() {
    let lookup = lookup_from(&[
        ("HOST", "0.0.0.0"),
        ("PORT", "8080"),
        ("WORKERS", "2"),
        ("JSON_LIMIT_BYTES", "1024"),
        ("STATUS_CODE_POLICY", "legacy"),
        ("MODEL_PATH", "/models/harga.onnx"),
        ("OBSERVABILITY_ENABLED", "false"),
        ("RUST_LOG", "carprice=debug"),
    ]);
    let config = Config::from_lookup(&lookup, Path::new("/srv/app")).unwrap();

    assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.server.workers, 2);
    assert_eq!(config.server.json_limit_bytes, 1024);
    assert_eq!(config.server.status_code_policy, StatusCodePolicy::Legacy);
    assert_eq!(config.model.model_path, PathBuf::from("/models/harga.onnx"));
    assert!(!config.observability.enabled);
    assert_eq!(config.observability.log_filter, "carprice=debug");
}

#[test]
fn test_invalid_port_is_an_error() {
    let lookup = lookup_from(&[("PORT", "eighty")]);
    let err = Config::from_lookup(&lookup, Path::new("/srv/app")).unwrap_err();
    assert!(format!("{:#}", err).contains("PORT"));
}

#[test]
fn test_invalid_policy_is_an_error() {
    let lookup = lookup_from(&[("STATUS_CODE_POLICY", "sometimes")]);
    assert!(Config::from_lookup(&lookup, Path::new("/srv/app")).is_err());
}

#[test]
fn test_invalid_observability_flag_is_an_error() {
    let lookup = lookup_from(&[("OBSERVABILITY_ENABLED", "nope")]);
    let err = Config::from_lookup(&lookup, Path::new("/srv/app")).unwrap_err();
    assert!(format!("{:#}", err).contains("OBSERVABILITY_ENABLED"));
}
