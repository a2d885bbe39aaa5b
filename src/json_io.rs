//! Reading the flat comment array and writing the regrouped document.

use crate::config::OutputOptions;
use crate::fork::Comment;
use crate::regroup::Document;
use crate::util::{create_with_backoff, open_with_backoff, remove_with_backoff, replace_file_atomic_backoff};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const READ_BUF_BYTES: usize = 256 * 1024;
const WRITE_BUF_BYTES: usize = 256 * 1024;

/// Read a JSON array of comment objects. Fails on a missing file, invalid JSON,
/// a non-array top level, or any element that is not an object.
pub fn read_comments(path: &Path) -> Result<Vec<Comment>> {
    if !path.exists() {
        bail!("input file '{}' not found", path.display());
    }
    let f = open_with_backoff(path).with_context(|| format!("open {}", path.display()))?;
    let r = BufReader::with_capacity(READ_BUF_BYTES, f);
    let comments: Vec<Comment> = serde_json::from_reader(r)
        .with_context(|| format!("parse {} as a JSON array of comment objects", path.display()))?;
    tracing::debug!("read {} comments from {}", comments.len(), path.display());
    Ok(comments)
}

/// Serialize `doc` into any writer. Non-ASCII text is written as raw UTF-8.
pub fn write_document_to<W: Write>(w: W, doc: &Document, opts: &OutputOptions) -> Result<()> {
    if opts.pretty {
        let indent = vec![b' '; opts.indent];
        let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(&indent));
        doc.serialize(&mut ser)?;
    } else {
        let mut ser = Serializer::new(w);
        doc.serialize(&mut ser)?;
    }
    Ok(())
}

fn tmp_path_for(out: &Path) -> PathBuf {
    let name = out.file_name().and_then(|s| s.to_str()).unwrap_or("output.json");
    out.with_file_name(format!(".{name}.tmp"))
}

/// Write `doc` to `out`. The bytes go to a hidden sibling temp file first and are
/// promoted only after a successful flush, so a failure never leaves partial output.
pub fn write_document(out: &Path, doc: &Document, opts: &OutputOptions) -> Result<()> {
    let tmp = tmp_path_for(out);
    let written = (|| -> Result<()> {
        let f = create_with_backoff(&tmp).with_context(|| format!("create {}", tmp.display()))?;
        let mut w = BufWriter::with_capacity(WRITE_BUF_BYTES, f);
        write_document_to(&mut w, doc, opts)?;
        w.flush().with_context(|| format!("flush {}", tmp.display()))?;
        Ok(())
    })();

    let promoted = written.and_then(|()| replace_file_atomic_backoff(&tmp, out));
    if let Err(e) = promoted {
        let _ = remove_with_backoff(&tmp);
        return Err(e).with_context(|| format!("write {}", out.display()));
    }
    Ok(())
}
