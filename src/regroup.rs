//! The regrouping core: flat comment list in, fork-grouped viewer document out.
//! Pure and single-pass; no I/O happens here.

use crate::config::RegroupOptions;
use crate::fork::{classify, Comment, Fork};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status the viewer expects in `meta.status`.
pub const STATUS_OK: u16 = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub data: Data,
    pub meta: Meta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub global_comments: Vec<GlobalComment>,
    pub threads: Vec<Thread>,
}

/// Aggregate record: number of `main` comments under the thread id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalComment {
    pub count: usize,
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub comment_count: usize,
    pub comments: Vec<Comment>,
    pub fork: Fork,
    pub id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub status: u16,
}

/// Per-fork comment counts, used for logging and quick inspection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForkSummary {
    pub total: usize,
    pub per_fork: BTreeMap<Fork, usize>,
}

impl ForkSummary {
    pub fn count(&self, fork: Fork) -> usize {
        self.per_fork.get(&fork).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CommentRegrouper {
    pub(crate) opts: RegroupOptions,
}

impl CommentRegrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: RegroupOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn thread_id(mut self, id: impl Into<String>) -> Self { self.opts = self.opts.with_thread_id(id); self }

    pub fn options(&self) -> &RegroupOptions {
        &self.opts
    }

    pub fn classify(&self, comment: &Comment) -> Fork {
        classify(comment)
    }

    /// Group comments into one thread per fork present.
    ///
    /// Comments are stable-sorted by fork, then split into runs of equal fork, so
    /// threads come out in `easy`, `main`, `owner` order and each thread keeps the
    /// input order of its comments. Forks with no comments produce no thread.
    pub fn group(&self, comments: &[Comment]) -> Vec<Thread> {
        let mut tagged: Vec<(Fork, &Comment)> = comments.iter().map(|c| (classify(c), c)).collect();
        // sort_by_key is stable
        tagged.sort_by_key(|(fork, _)| *fork);

        let mut threads: Vec<Thread> = Vec::new();
        for (fork, comment) in tagged {
            if let Some(t) = threads.last_mut().filter(|t| t.fork == fork) {
                t.comments.push(comment.clone());
                continue;
            }
            threads.push(Thread {
                comment_count: 0,
                comments: vec![comment.clone()],
                fork,
                id: self.opts.thread_id.clone(),
            });
        }
        for t in threads.iter_mut() {
            t.comment_count = t.comments.len();
        }
        threads
    }

    /// Build the full viewer document. The `main` count is taken over the input
    /// list directly, independent of grouping.
    pub fn build_document(&self, comments: &[Comment]) -> Document {
        let main_count = comments.iter().filter(|c| classify(c) == Fork::Main).count();
        Document {
            data: Data {
                global_comments: vec![GlobalComment { count: main_count, id: self.opts.thread_id.clone() }],
                threads: self.group(comments),
            },
            meta: Meta { status: STATUS_OK },
        }
    }

    pub fn summarize(&self, comments: &[Comment]) -> ForkSummary {
        let mut s = ForkSummary { total: comments.len(), ..Default::default() };
        for c in comments {
            *s.per_fork.entry(classify(c)).or_insert(0) += 1;
        }
        s
    }
}
