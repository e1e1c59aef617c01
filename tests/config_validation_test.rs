use envelope_api::config::{AppConfig, AuthSection, LogFormat, ServerConfig};
use envelope_api::Error;
use std::io::Write;

#[test]
fn missing_port_is_reported() {
    let config = AppConfig::default();

    let err = config.validate().unwrap_err();
    assert_eq!(err.missing_keys(), ["server.port"]);
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn all_missing_keys_are_reported_together() {
    let config = AppConfig {
        server: ServerConfig {
            host: " ".into(),
            port: None,
            cors: false,
        },
        auth: AuthSection {
            username: String::new(),
            password: String::new(),
            token: "token".into(),
        },
        ..Default::default()
    };

    match config.validate() {
        Err(Error::MissingConfig(keys)) => {
            assert_eq!(
                keys,
                vec!["server.port", "server.host", "auth.username", "auth.password"]
            );
        }
        other => panic!("Unexpected validation result: {other:?}"),
    }
}

#[test]
fn complete_config_is_valid() {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: Some(8080),
            cors: false,
        },
        ..Default::default()
    };

    config.validate().expect("config should be valid");
    assert_eq!(config.listen_addr().unwrap(), "127.0.0.1:8080");
}

#[test]
fn auth_defaults_match_builtin_login() {
    let credentials = AuthSection::default().credentials();

    assert!(credentials.matches("admin", "password123"));
    assert!(!credentials.matches("admin", "wrong"));
    assert_eq!(credentials.token, "fake-jwt-token");
}

#[test]
fn load_from_file_applies_sections() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
host = "127.0.0.1"
port = 4100
cors = true

[logging]
format = "text"

[auth]
username = "root"
password = "hunter2"

[docs]
enabled = false
"#
    )
    .unwrap();

    let config = AppConfig::load_from(file.path()).expect("file config should load");

    assert_eq!(config.server.port, Some(4100));
    assert!(config.server.cors);
    assert_eq!(config.logging.format, LogFormat::Text);
    assert_eq!(config.logging.level, "info");
    assert!(!config.docs.enabled);

    let credentials = config.auth.credentials();
    assert!(credentials.matches("root", "hunter2"));
    assert_eq!(credentials.token, "fake-jwt-token");
}
