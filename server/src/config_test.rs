use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig { bind: DEFAULT_BIND, port: DEFAULT_PORT });
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn reads_port_and_bind() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 3001 "), ("COMANDA_BIND", "127.0.0.1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("COMANDA_BIND", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind, DEFAULT_BIND);
}

#[test]
fn rejects_invalid_values() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("COMANDA_BIND", "localhost")])),
        Err(ConfigError::InvalidBind("localhost".to_owned()))
    );
}

#[test]
fn accepts_ipv6_bind() {
    let config = ServerConfig::from_lookup(lookup(&[("COMANDA_BIND", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:9000");
}
