use super::*;

#[test]
fn development_env_uses_local_node() {
    assert_eq!(api_path(BuildEnv::Development), "http://localhost:6481/");
}

#[test]
fn production_env_uses_relative_root() {
    assert_eq!(api_path(BuildEnv::Production), "/");
}

#[test]
fn build_env_parse_only_recognizes_development() {
    assert_eq!(BuildEnv::parse(Some("development")), BuildEnv::Development);
    assert_eq!(BuildEnv::parse(Some("production")), BuildEnv::Production);
    assert_eq!(BuildEnv::parse(Some("Development")), BuildEnv::Production);
    assert_eq!(BuildEnv::parse(None), BuildEnv::Production);
}

#[test]
fn resolve_keeps_absolute_api_path() {
    let url = resolve_base_url(DEVELOPMENT_API_PATH, "not-a-url").unwrap();
    assert_eq!(url, "http://localhost:6481/");
}

#[test]
fn resolve_adds_trailing_slash_to_absolute_path() {
    let url = resolve_base_url("https://node.example/api", DEFAULT_ORIGIN).unwrap();
    assert_eq!(url, "https://node.example/api/");
}

#[test]
fn resolve_joins_relative_root_onto_origin() {
    let url = resolve_base_url(PRODUCTION_API_PATH, "http://10.0.0.2:6481/").unwrap();
    assert_eq!(url, "http://10.0.0.2:6481/");
}

#[test]
fn resolve_joins_nested_relative_path() {
    let url = resolve_base_url("/skyhash", "http://10.0.0.2:6481").unwrap();
    assert_eq!(url, "http://10.0.0.2:6481/skyhash/");
}

#[test]
fn resolve_rejects_relative_origin() {
    let err = resolve_base_url("/", "localhost:6481").unwrap_err();
    assert_eq!(err, ApiError::InvalidBaseUrl("localhost:6481".into()));
}
