//! Extraction of inline certificate/key blocks.
//!
//! A blob is a run of lines bounded by a start tag (`<ca>`) and the
//! matching end tag (`</ca>`). The extractor walks the line cursor
//! from the start tag to the end tag, reassembles the enclosed PEM
//! material and writes it to `<cert-dir>/<basename>-<key>.pem`; the
//! importer then stores that path instead of the inline content.

use std::fs;
use std::path::{Path, PathBuf};

/// One inline block kind and the setting key it materializes into.
#[derive(Debug, Clone, Copy)]
pub struct BlobSpec {
    pub key: &'static str,
    pub start_tag: &'static str,
    pub end_tag: &'static str,
}

/// Supported inline blocks, in dispatch order.
pub const BLOB_SPECS: &[BlobSpec] = &[
    BlobSpec { key: crate::keys::CA, start_tag: "<ca>", end_tag: "</ca>" },
    BlobSpec { key: crate::keys::CERT, start_tag: "<cert>", end_tag: "</cert>" },
    BlobSpec { key: crate::keys::KEY, start_tag: "<key>", end_tag: "</key>" },
    BlobSpec { key: crate::keys::TA, start_tag: "<tls-auth>", end_tag: "</tls-auth>" },
];

/// Find the blob kind whose start tag equals `tag`.
pub fn spec_for_tag(tag: &str) -> Option<&'static BlobSpec> {
    BLOB_SPECS.iter().find(|spec| spec.start_tag == tag)
}

/// Result of consuming one inline block.
#[derive(Debug)]
pub enum BlobOutcome {
    /// Block written to disk; store this path under the blob's key.
    Extracted(PathBuf),
    /// End tag never appeared; the rest of the input was consumed and
    /// nothing is stored.
    MissingEndTag,
    /// Directory or file I/O failed; nothing is stored.
    WriteFailed(String),
}

/// Walk the cursor from the start-tag line at `lines[*cursor]` to the
/// matching end tag and return the reassembled content.
///
/// Blank lines and lines opening with `#`/`;` inside the block are
/// stepped over and excluded from the content. On return the cursor
/// rests on the end-tag line, or past the end of input when the end
/// tag is missing (in which case `None` is returned).
pub fn collect(lines: &[&str], cursor: &mut usize, spec: &BlobSpec) -> Option<String> {
    let mut content = String::new();

    loop {
        *cursor += 1;
        let line = lines.get(*cursor)?;
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if *line == spec.end_tag {
            return Some(content);
        }
        content.push_str(line);
        content.push('\n');
    }
}

/// Consume the block starting at `lines[*cursor]` (the start-tag line)
/// and materialize it as `<cert-dir>/<basename>-<key>.pem`.
pub fn extract(
    lines: &[&str],
    cursor: &mut usize,
    spec: &BlobSpec,
    basename: &str,
    cert_dir: &Path,
) -> BlobOutcome {
    let Some(content) = collect(lines, cursor, spec) else {
        return BlobOutcome::MissingEndTag;
    };

    let path = cert_dir.join(format!("{basename}-{}.pem", spec.key));
    if let Err(err) = ensure_cert_dir(cert_dir) {
        return BlobOutcome::WriteFailed(err);
    }
    match fs::write(&path, &content) {
        Ok(()) => BlobOutcome::Extracted(path),
        Err(err) => BlobOutcome::WriteFailed(format!(
            "failed to write {}: {err}",
            path.display()
        )),
    }
}

fn ensure_cert_dir(dir: &Path) -> Result<(), String> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(format!("{} exists and is not a directory", dir.display()));
    }
    fs::create_dir_all(dir)
        .map_err(|err| format!("failed to create {}: {err}", dir.display()))
}
