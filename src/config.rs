/// Thread id the target viewer format expects when nothing else is configured.
pub const DEFAULT_THREAD_ID: &str = "1693580826";

/// Options for the regrouping core. Passed in explicitly; the core never
/// reads globals or the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegroupOptions {
    pub thread_id: String, // stamped on every thread and on globalComments[0]
}

impl Default for RegroupOptions {
    fn default() -> Self {
        Self { thread_id: DEFAULT_THREAD_ID.to_string() }
    }
}

impl RegroupOptions {
    pub fn with_thread_id(mut self, id: impl Into<String>) -> Self {
        self.thread_id = id.into();
        self
    }
}

/// How the output document is written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub pretty: bool,   // indented multi-line JSON; false writes a single line
    pub indent: usize,  // spaces per level when pretty
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { pretty: true, indent: 4 }
    }
}

impl OutputOptions {
    pub fn with_pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }
    pub fn compact() -> Self {
        Self::default().with_pretty(false)
    }
}
