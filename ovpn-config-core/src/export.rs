//! Export driver: reconstruct configuration text from a
//! [`SettingsModel`] in one fixed, deterministic directive order.
//!
//! [`render`] builds everything in memory; [`export`] writes it out.
//! Nothing touches the filesystem until the whole rendering has
//! succeeded, so a failed export leaves no partial output behind.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::keys;
use crate::model::{ConnectionType, SettingsModel};
use crate::value;

/// Failures that abort an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The model has no `remote` value to write.
    #[error("connection was incomplete (missing gateway)")]
    MissingGateway,
    #[error("could not write configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Fully rendered export artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The configuration file text.
    pub config: String,
    /// Sibling HTTP proxy credential file (path, contents), present
    /// when a proxy username is set.
    pub auth_file: Option<(PathBuf, String)>,
    /// Non-fatal problems, e.g. a static-key profile without a key.
    pub warnings: Vec<String>,
}

/// Render the configuration text that [`export`] would write to
/// `path` (the destination path shapes the proxy auth-file name).
pub fn render(path: &Path, model: &SettingsModel) -> Result<Rendered, ExportError> {
    let gateways = model
        .get(keys::REMOTE)
        .filter(|v| !v.is_empty())
        .ok_or(ExportError::MissingGateway)?;
    let ctype = model
        .connection_type()
        .unwrap_or(ConnectionType::Tls);

    let mut out = String::new();
    let mut warnings = Vec::new();

    out.push_str("client\n");

    for entry in gateways.split([' ', ',']).filter(|e| !e.is_empty()) {
        let (host, port, proto) = split_gateway(entry);
        match (port, proto) {
            (Some(port), Some(proto)) => out.push_str(&format!("remote {host} {port} {proto}\n")),
            (Some(port), None) => out.push_str(&format!("remote {host} {port}\n")),
            (None, Some(proto)) => {
                // a recorded protocol forces its well-known port
                let port = if proto == "udp" { "1194" } else { "443" };
                out.push_str(&format!("remote {host} {port} {proto}\n"));
            }
            (None, None) => out.push_str(&format!("remote {host}\n")),
        }
    }

    if flag(model, keys::REMOTE_RANDOM) {
        out.push_str("remote-random\n");
    }

    let cacert = (ctype != ConnectionType::StaticKey)
        .then(|| model.get(keys::CA))
        .flatten();
    let user_cert = ctype.is_tls_capable().then(|| model.get(keys::CERT)).flatten();
    let private_key = ctype.is_tls_capable().then(|| model.get(keys::KEY)).flatten();

    match (cacert, user_cert, private_key) {
        // one shared PKCS#12 bundle collapses back into a single line
        (Some(ca), Some(cert), Some(pkey)) if ca == cert && ca == pkey => {
            out.push_str(&format!("pkcs12 {ca}\n"));
        }
        (cacert, user_cert, private_key) => {
            if let Some(ca) = cacert {
                out.push_str(&format!("ca {ca}\n"));
            }
            if let Some(cert) = user_cert {
                out.push_str(&format!("cert {cert}\n"));
            }
            if let Some(pkey) = private_key {
                out.push_str(&format!("key {pkey}\n"));
            }
        }
    }

    if ctype.uses_password() {
        out.push_str("auth-user-pass\n");
    }

    if ctype == ConnectionType::StaticKey {
        match model.get(keys::STATIC_KEY) {
            Some(static_key) => match model.get(keys::STATIC_KEY_DIRECTION) {
                Some(direction) => out.push_str(&format!("secret {static_key} {direction}\n")),
                None => out.push_str(&format!("secret {static_key}\n")),
            },
            None => warnings
                .push("invalid static key configuration (missing static key)".to_string()),
        }
    }

    if let Some(reneg) = model.get(keys::RENEG_SECONDS) {
        out.push_str(&format!("reneg-sec {}\n", parse_or_zero(reneg)));
    }
    if let Some(cipher) = model.get(keys::CIPHER) {
        out.push_str(&format!("cipher {cipher}\n"));
    }
    if let Some(keysize) = model.get(keys::KEYSIZE) {
        out.push_str(&format!("keysize {}\n", parse_or_zero(keysize)));
    }
    if flag(model, keys::COMP_LZO) {
        out.push_str("comp-lzo yes\n");
    }
    if flag(model, keys::FLOAT) {
        out.push_str("float\n");
    }
    if flag(model, keys::MSSFIX) {
        out.push_str("mssfix\n");
    }
    if let Some(mtu) = model.get(keys::TUN_MTU) {
        out.push_str(&format!("tun-mtu {}\n", parse_or_zero(mtu)));
    }
    if let Some(size) = model.get(keys::FRAGMENT) {
        out.push_str(&format!("fragment {}\n", parse_or_zero(size)));
    }

    let device_type = model.get(keys::DEV_TYPE);
    let device_default = if flag(model, keys::TAP_DEV) { "tap" } else { "tun" };
    let device = model
        .get(keys::DEV)
        .or(device_type)
        .unwrap_or(device_default);
    out.push_str(&format!("dev {device}\n"));
    if let Some(device_type) = device_type {
        out.push_str(&format!("dev-type {device_type}\n"));
    }
    out.push_str(&format!(
        "proto {}\n",
        if flag(model, keys::PROTO_TCP) { "tcp" } else { "udp" }
    ));
    if let Some(port) = model.get(keys::PORT) {
        out.push_str(&format!("port {port}\n"));
    }

    for (tag, key) in [
        ("ping", keys::PING),
        ("ping-exit", keys::PING_EXIT),
        ("ping-restart", keys::PING_RESTART),
    ] {
        if let Some(secs) = model.get(key) {
            out.push_str(&format!("{tag} {secs}\n"));
        }
    }

    if let (Some(local), Some(peer)) = (model.get(keys::LOCAL_IP), model.get(keys::REMOTE_IP)) {
        out.push_str(&format!("ifconfig {local} {peer}\n"));
    }

    if ctype.is_tls_capable() {
        if let Some(tls_remote) = model.get(keys::TLS_REMOTE) {
            out.push_str(&format!("tls-remote \"{tls_remote}\"\n"));
        }
        if let Some(kind) = model.get(keys::REMOTE_CERT_TLS) {
            out.push_str(&format!("remote-cert-tls {kind}\n"));
        }
        if let Some(ta) = model.get(keys::TA) {
            match model.get(keys::TA_DIR) {
                Some(direction) => out.push_str(&format!("tls-auth {ta} {direction}\n")),
                None => out.push_str(&format!("tls-auth {ta}\n")),
            }
        }
    }

    let auth_file = render_proxy(path, model, &mut out);

    for route in model.routes() {
        out.push_str(&format!(
            "route {} {} {} {}\n",
            route.dest,
            value::prefix_to_netmask(route.prefix),
            route.next_hop,
            route.metric.unwrap_or(50)
        ));
    }

    out.push_str(
        "nobind\n\
         auth-nocache\n\
         script-security 2\n\
         persist-key\n\
         persist-tun\n\
         user openvpn\n\
         group openvpn\n",
    );

    Ok(Rendered {
        config: out,
        auth_file,
        warnings,
    })
}

/// Render the model to `path`, plus the sibling proxy auth file when
/// one is called for. Nothing is written if rendering fails.
pub fn export(path: &Path, model: &SettingsModel) -> Result<Rendered, ExportError> {
    let rendered = render(path, model)?;
    fs::write(path, &rendered.config)?;
    if let Some((auth_path, contents)) = &rendered.auth_file {
        fs::write(auth_path, contents)?;
    }
    Ok(rendered)
}

fn render_proxy(
    path: &Path,
    model: &SettingsModel,
    out: &mut String,
) -> Option<(PathBuf, String)> {
    let proxy_type = model.get(keys::PROXY_TYPE)?;
    let server = model.get(keys::PROXY_SERVER)?;
    let proxy_port = model.get(keys::PROXY_PORT)?;

    match proxy_type {
        "http" => {
            let username = model.get(keys::PROXY_USERNAME);
            let auth_path = auth_file_path(path);
            match username {
                Some(_) => out.push_str(&format!(
                    "http-proxy {server} {proxy_port} {}\n",
                    auth_path.display()
                )),
                None => out.push_str(&format!("http-proxy {server} {proxy_port}\n")),
            }
            if flag(model, keys::PROXY_RETRY) {
                out.push_str("http-proxy-retry\n");
            }
            username.map(|user| {
                let pass = model.secret(keys::SECRET_PROXY_PASSWORD).unwrap_or("");
                (auth_path, format!("{user}\n{pass}\n"))
            })
        }
        "socks" => {
            out.push_str(&format!("socks-proxy {server} {proxy_port}\n"));
            if flag(model, keys::PROXY_RETRY) {
                out.push_str("socks-proxy-retry\n");
            }
            None
        }
        _ => None,
    }
}

/// `<dest-dir>/<dest-file-name>-httpauthfile`, next to the exported
/// configuration.
fn auth_file_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    path.with_file_name(format!("{file_name}-httpauthfile"))
}

fn flag(model: &SettingsModel, key: &str) -> bool {
    model.get(key) == Some("yes")
}

fn parse_or_zero(s: &str) -> i64 {
    s.parse().unwrap_or(0)
}

/// Split one accumulated gateway entry `host[:port[:proto]]`; empty
/// positional slots count as absent.
fn split_gateway(entry: &str) -> (&str, Option<&str>, Option<&str>) {
    let (host, rest) = match entry.split_once(':') {
        Some((host, rest)) => (host, Some(rest)),
        None => (entry, None),
    };
    let (port, proto) = match rest {
        Some(rest) => match rest.split_once(':') {
            Some((port, proto)) => (nonempty(port), nonempty(proto)),
            None => (nonempty(rest), None),
        },
        None => (None, None),
    };
    (host, port, proto)
}

fn nonempty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
