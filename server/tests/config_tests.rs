use roster_server::ServerConfig;

fn with_base(base: &str) -> ServerConfig {
    ServerConfig {
        base_path: base.to_string(),
        ..ServerConfig::default()
    }
}

#[test]
fn defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.base_path(), "/api/v1");
}

#[test]
fn base_path_is_normalized() {
    assert_eq!(with_base("api/v1").base_path(), "/api/v1");
    assert_eq!(with_base("/api/v1/").base_path(), "/api/v1");
    assert_eq!(with_base("  /api  ").base_path(), "/api");
}

#[test]
fn root_base_path_is_empty() {
    assert_eq!(with_base("/").base_path(), "");
    assert_eq!(with_base("").base_path(), "");
}

#[test]
fn bind_addr_joins_host_and_port() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 3000,
        ..ServerConfig::default()
    };
    assert_eq!(config.bind_addr(), "127.0.0.1:3000");
}
