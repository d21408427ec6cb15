use std::collections::BTreeMap;
use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Authentication mode inferred from the directives present in a
/// configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionType {
    /// Certificate-based TLS.
    Tls,
    /// Username/password only.
    Password,
    /// Username/password on top of client certificates.
    PasswordTls,
    /// Pre-shared static key.
    StaticKey,
}

impl ConnectionType {
    /// Types that carry a TLS control channel and therefore accept
    /// `tls-remote`, `remote-cert-tls` and `tls-auth` on export.
    pub fn is_tls_capable(self) -> bool {
        matches!(self, ConnectionType::Tls | ConnectionType::PasswordTls)
    }

    /// Types that authenticate with a username/password pair.
    pub fn uses_password(self) -> bool {
        matches!(self, ConnectionType::Password | ConnectionType::PasswordTls)
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionType::Tls => "tls",
            ConnectionType::Password => "password",
            ConnectionType::PasswordTls => "password-tls",
            ConnectionType::StaticKey => "static-key",
        };
        write!(f, "{name}")
    }
}

/// Ownership of a secret value: who is responsible for supplying it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretFlags {
    /// The settings storage holds the secret itself.
    #[default]
    None,
    /// An external secret agent owns the value; the storage only keeps
    /// the flag.
    AgentOwned,
}

/// One imported `route` directive in the current route model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub dest: Ipv4Addr,
    pub prefix: u8,
    pub next_hop: Ipv4Addr,
    /// Route metric; the exporter substitutes 50 when unset.
    pub metric: Option<u32>,
}

/// A non-fatal problem found while importing: the directive was
/// recognized but its arguments were invalid, so it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number in the source file.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Structured translation target/source: a string key/value map, a
/// separate secrets map with per-secret ownership flags, an ordered
/// route list and one connection-type classification.
///
/// The import and export drivers only touch it through the narrow
/// accessor surface below; storage layout is an implementation detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsModel {
    data: BTreeMap<String, String>,
    secrets: BTreeMap<String, String>,
    secret_flags: BTreeMap<String, SecretFlags>,
    routes: Vec<Route>,
    connection_type: Option<ConnectionType>,
}

impl SettingsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Store a value under `key`, overwriting any previous value.
    /// Empty values are rejected; every stored value is non-empty.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.data.insert(key.to_string(), value);
        }
    }

    pub fn add_secret(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.insert(key.to_string(), value);
        }
    }

    pub fn secret(&self, key: &str) -> Option<&str> {
        self.secrets.get(key).map(String::as_str)
    }

    /// Set ownership flags for a secret. Valid without a stored value:
    /// an agent-owned secret exists only as its flag.
    pub fn set_secret_flags(&mut self, key: &str, flags: SecretFlags) {
        self.secret_flags.insert(key.to_string(), flags);
    }

    pub fn secret_flags(&self, key: &str) -> SecretFlags {
        self.secret_flags.get(key).copied().unwrap_or_default()
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn route(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn connection_type(&self) -> Option<ConnectionType> {
        self.connection_type
    }

    pub fn set_connection_type(&mut self, ctype: ConnectionType) {
        self.connection_type = Some(ctype);
    }

    /// Iterate over the data map in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
