//! Diagnostic collection for marshal and unmarshal operations.

/// An append-only list of human-readable diagnostics.
///
/// Codec operations are total: questionable input degrades to a usable value
/// plus a message here instead of an error. Every appended message is also
/// emitted as a `tracing` debug event, so diagnostics reach the logs even
/// when the caller never drains the sink.
#[derive(Debug, Clone, Default)]
pub struct WarningSink {
    entries: Vec<String>,
}

impl WarningSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic message.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(warning = %message, "codec diagnostic");
        self.entries.push(message);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Consumes the sink, returning the collected messages.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a WarningSink {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
