//! Translation between OpenVPN client configuration files and a
//! structured key/value settings representation.
//!
//! The crate covers both directions:
//!
//! - [`import`] reads a configuration file (shell-like quoting, inline
//!   certificate blocks, dozens of independent directives) and produces
//!   a [`SettingsModel`] plus non-fatal [`Diagnostic`]s.
//! - [`export`] reconstructs a configuration file from a
//!   [`SettingsModel`] in a fixed, deterministic directive order.
//!
//! Supporting pieces:
//!
//! - [`tokenizer`] — OpenVPN's own line-splitting/quoting grammar
//! - [`value`] — bounded-integer, port, protocol and IPv4 validators
//! - [`blob`] — inline `<ca>`/`<cert>`/`<key>`/`<tls-auth>` block
//!   extraction to `.pem` files
//! - [`keys`] — the setting-key vocabulary shared by both directions

pub mod blob;
pub mod export;
pub mod import;
pub mod keys;
pub mod model;
pub mod tokenizer;
pub mod value;

pub use export::{export, render, ExportError, Rendered};
pub use import::{import, import_with_options, ImportError, ImportOptions, ImportResult};
pub use model::{ConnectionType, Diagnostic, Route, SecretFlags, SettingsModel};
pub use tokenizer::{tokenize, SyntaxError};
