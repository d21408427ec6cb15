//! Setting-key vocabulary of the [`SettingsModel`](crate::SettingsModel).
//!
//! The importer writes these keys, the exporter reads them back. The
//! configuration-management layer addresses individual settings through
//! the same strings, so they are part of the public contract.

pub const AUTH: &str = "auth";
pub const CA: &str = "ca";
pub const CERT: &str = "cert";
pub const CIPHER: &str = "cipher";
pub const COMP_LZO: &str = "comp-lzo";
pub const DEV: &str = "dev";
pub const DEV_TYPE: &str = "dev-type";
pub const FLOAT: &str = "float";
pub const FRAGMENT: &str = "fragment";
pub const KEY: &str = "key";
pub const KEYSIZE: &str = "keysize";
pub const LOCAL_IP: &str = "local-ip";
pub const MSSFIX: &str = "mssfix";
pub const PING: &str = "ping";
pub const PING_EXIT: &str = "ping-exit";
pub const PING_RESTART: &str = "ping-restart";
pub const PORT: &str = "port";
pub const PROTO_TCP: &str = "proto-tcp";
pub const PROXY_PORT: &str = "proxy-port";
pub const PROXY_RETRY: &str = "proxy-retry";
pub const PROXY_SERVER: &str = "proxy-server";
pub const PROXY_TYPE: &str = "proxy-type";
pub const PROXY_USERNAME: &str = "http-proxy-username";
pub const REMOTE: &str = "remote";
pub const REMOTE_CERT_TLS: &str = "remote-cert-tls";
pub const REMOTE_IP: &str = "remote-ip";
pub const REMOTE_RANDOM: &str = "remote-random";
pub const RENEG_SECONDS: &str = "reneg-seconds";
pub const STATIC_KEY: &str = "static-key";
pub const STATIC_KEY_DIRECTION: &str = "static-key-direction";
pub const TA: &str = "ta";
pub const TA_DIR: &str = "ta-dir";
/// Legacy flag predating `dev-type`; only consulted by the exporter.
pub const TAP_DEV: &str = "tap-dev";
pub const TLS_REMOTE: &str = "tls-remote";
pub const TUN_MTU: &str = "tun-mtu";

/// Secret-key names (stored in the secrets map, not the data map).
pub const SECRET_CERT_PASS: &str = "cert-pass";
pub const SECRET_PASSWORD: &str = "password";
pub const SECRET_PROXY_PASSWORD: &str = "http-proxy-password";
