use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = ServerConfig::from_lookup(lookup(&[("PORTAL_HOST", " 127.0.0.1 "), ("PORT", "8080")])).expect("config");
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_host_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("PORTAL_HOST", "  ")])).expect("config");
    assert_eq!(config.host, DEFAULT_HOST);
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() })
    );
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
