//! Controlled text binding for editor widgets
//!
//! A widget keeps its own edit buffer. It resynchronizes from the
//! document only when the document value changed for some other reason
//! than the widget's own last edit, so typing never resets the caret.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBinding {
    buffer: String,
    last_emitted: Option<String>,
}

impl TextBinding {
    pub fn new(canonical: &str) -> Self {
        Self {
            buffer: canonical.to_string(),
            last_emitted: None,
        }
    }

    /// Current text shown by the widget
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Record a local edit; returns the value to send to the session
    pub fn edit(&mut self, value: &str) -> String {
        self.buffer = value.to_string();
        self.last_emitted = Some(self.buffer.clone());
        self.buffer.clone()
    }

    /// Reconcile with the document value
    ///
    /// Returns true when the buffer was replaced.
    pub fn sync(&mut self, canonical: &str) -> bool {
        if self.last_emitted.as_deref() == Some(canonical) || self.buffer == canonical {
            return false;
        }
        self.buffer = canonical.to_string();
        self.last_emitted = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_edit_does_not_resync() {
        let mut binding = TextBinding::new("");
        let sent = binding.edit("Bonjour");
        assert_eq!(sent, "Bonjour");
        // The widget keeps typing before the document catches up
        binding.edit("Bonjour à");
        assert!(!binding.sync("Bonjour à"));
        assert_eq!(binding.value(), "Bonjour à");
    }

    #[test]
    fn test_external_change_resyncs() {
        let mut binding = TextBinding::new("Ancien");
        binding.edit("Ancien texte");
        assert!(binding.sync("Importé"));
        assert_eq!(binding.value(), "Importé");
        assert!(!binding.sync("Importé"));
    }
}
