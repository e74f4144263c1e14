use super::memory::lock;
use super::{FormSource, Notifier, ResultSink};
use crate::models::page::{ContainerId, FieldId};
use crate::models::response::Rendering;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

/// Page backed by the process's standard streams: renderings go to stdout,
/// alerts to stderr.
#[derive(Debug, Default)]
pub struct TerminalPage {
    fields: Mutex<HashMap<FieldId, String>>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&self, field: FieldId, value: impl Into<String>) {
        lock(&self.fields).insert(field, value.into());
    }
}

/// Writes one container update as `[container]` followed by the rendering text.
pub fn write_rendering<W: Write>(
    out: &mut W,
    container: ContainerId,
    rendering: &Rendering,
) -> io::Result<()> {
    writeln!(out, "[{}]\n{}", container, rendering.to_text())?;
    out.flush()
}

impl FormSource for TerminalPage {
    fn field_value(&self, field: FieldId) -> String {
        lock(&self.fields).get(&field).cloned().unwrap_or_default()
    }
}

impl ResultSink for TerminalPage {
    fn replace_content(&self, container: ContainerId, rendering: Rendering) {
        if let Err(e) = write_rendering(&mut io::stdout().lock(), container, &rendering) {
            warn!("Failed to write {} to stdout: {}", container, e);
        }
    }
}

impl Notifier for TerminalPage {
    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rendering_is_written_under_its_container() {
        let rendering = Rendering::new("Diagnostics Status", &json!({"version": "v1"}));
        let mut out = Vec::new();

        write_rendering(&mut out, ContainerId::DiagResult, &rendering).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[diagResult]\nDiagnostics Status\n{\n  \"version\": \"v1\"\n}\n"
        );
    }

    #[test]
    fn write_failures_are_reported() {
        let rendering = Rendering::new("Diagnostics Status", &json!({}));

        let err = write_rendering(&mut BrokenPipe, ContainerId::DiagResult, &rendering)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
