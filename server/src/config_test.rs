use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("http")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref v) if v == "http"));
    assert_eq!(err.to_string(), "invalid PORT 'http'");
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let cfg = ServerConfig { port: 3000 };
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}
