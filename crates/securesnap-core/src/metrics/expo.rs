//! Prometheus text exposition (version 0.0.4).

use std::fmt::Write;
use std::sync::Arc;

use super::counter::RequestCounter;

/// Content type for the rendered exposition body.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Helper to escape HELP text (label-value quoting rules do not apply there).
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Renders a counter family into the text exposition format.
///
/// Stateless over the shared counter: every call re-reads the current values.
#[derive(Clone)]
pub struct MetricsExporter {
    counter: Arc<RequestCounter>,
}

impl MetricsExporter {
    pub fn new(counter: Arc<RequestCounter>) -> Self {
        Self { counter }
    }

    /// Render the current counter state.
    ///
    /// Emits one `# HELP` and one `# TYPE` line for the family, then one data
    /// line per observed label, sorted by label. With no observations yet the
    /// body is the two header lines and nothing else.
    pub fn render(&self) -> String {
        let name = self.counter.name();
        let key = self.counter.label_key();

        let mut out = String::new();
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(self.counter.help()));
        let _ = writeln!(out, "# TYPE {} counter", name);
        for (label, val) in self.counter.snapshot() {
            let _ = writeln!(out, "{}{{{}=\"{}\"}} {}", name, key, escape_label(&label), val);
        }
        out
    }
}
