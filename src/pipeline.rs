use crate::config::OutputOptions;
use crate::fork::Fork;
use crate::json_io::{read_comments, write_document};
use crate::regroup::{CommentRegrouper, ForkSummary};
use anyhow::{Context, Result};
use std::path::Path;

impl CommentRegrouper {
    /// Read `input`, regroup, and write the document to `output`.
    /// Returns per-fork counts of what was converted.
    pub fn convert_file(&self, input: &Path, output: &Path, out_opts: &OutputOptions) -> Result<ForkSummary> {
        let comments = read_comments(input)?;
        let doc = self.build_document(&comments);
        let summary = self.summarize(&comments);

        tracing::info!(
            "{} comments -> {} threads (easy={}, main={}, owner={}), thread id {}",
            summary.total,
            doc.data.threads.len(),
            summary.count(Fork::Easy),
            summary.count(Fork::Main),
            summary.count(Fork::Owner),
            self.options().thread_id,
        );

        write_document(output, &doc, out_opts)
            .with_context(|| format!("converting {} -> {}", input.display(), output.display()))?;
        Ok(summary)
    }
}
