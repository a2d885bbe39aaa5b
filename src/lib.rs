mod config;
mod fork;
mod regroup;
mod pipeline;

mod json_io;
mod util;

pub use crate::config::{OutputOptions, RegroupOptions, DEFAULT_THREAD_ID};
pub use crate::fork::{classify, commands_of, Comment, Fork, ANONYMOUS_COMMAND};
pub use crate::regroup::{CommentRegrouper, Data, Document, ForkSummary, GlobalComment, Meta, Thread, STATUS_OK};

// I/O helpers so binaries can read/write without going through convert_file.
pub use crate::json_io::{read_comments, write_document, write_document_to};

// Logging setup and robust file ops.
pub use crate::util::{init_tracing_once, level_for_verbosity, open_with_backoff, create_with_backoff, remove_with_backoff, replace_file_atomic_backoff};
