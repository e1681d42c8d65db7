//! Form field value objects

use crate::document::DocumentType;

/// Maximum accepted length of a document number
pub const MAX_DOCUMENT_LEN: usize = 15;

/// Type-safe field values; each variant filters its own input
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Digits only (phone number)
    Digits(String),
    /// Letters and digits only, capped at [`MAX_DOCUMENT_LEN`] (document
    /// number; letters cover passport formats)
    Alphanumeric(String),
    /// One of the twelve government document types
    DocumentSelect(Option<DocumentType>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Read-only fields render but ignore input
    pub read_only: bool,
}

impl FormField {
    /// Create a new free-text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            read_only: false,
        }
    }

    /// Create a new digits-only field
    pub fn digits(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Digits(String::new()),
            read_only: false,
        }
    }

    /// Create a new alphanumeric field
    pub fn alphanumeric(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Alphanumeric(String::new()),
            read_only: false,
        }
    }

    /// Create a new document-type select field
    pub fn document_select(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::DocumentSelect(None),
            read_only: false,
        }
    }

    /// Get the text value (empty string for the select field)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) | FieldValue::Alphanumeric(s) => s,
            FieldValue::DocumentSelect(_) => "",
        }
    }

    /// Get the selected document type (None for text fields)
    pub fn as_document_type(&self) -> Option<DocumentType> {
        match &self.value {
            FieldValue::DocumentSelect(t) => *t,
            _ => None,
        }
    }

    /// Whether the field holds no value
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) | FieldValue::Alphanumeric(s) => {
                s.is_empty()
            }
            FieldValue::DocumentSelect(t) => t.is_none(),
        }
    }

    /// Push a character, subject to the variant's input filter.
    /// Returns true when the value actually changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.read_only {
            return false;
        }
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Digits(s) => {
                if c.is_ascii_digit() {
                    s.push(c);
                    true
                } else {
                    false
                }
            }
            FieldValue::Alphanumeric(s) => {
                if c.is_ascii_alphanumeric() && s.len() < MAX_DOCUMENT_LEN {
                    s.push(c);
                    true
                } else {
                    false
                }
            }
            FieldValue::DocumentSelect(_) => false,
        }
    }

    /// Remove the last character. Returns true when the value changed.
    pub fn pop_char(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) | FieldValue::Alphanumeric(s) => {
                s.pop().is_some()
            }
            FieldValue::DocumentSelect(_) => false,
        }
    }

    /// Assign a whole string, applying the same filter as keyed input.
    /// Used for link seeding and lookup results.
    pub fn assign(&mut self, raw: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = raw.to_string(),
            FieldValue::Digits(s) => *s = raw.chars().filter(char::is_ascii_digit).collect(),
            FieldValue::Alphanumeric(s) => {
                *s = raw
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .take(MAX_DOCUMENT_LEN)
                    .collect();
            }
            FieldValue::DocumentSelect(_) => {}
        }
    }

    /// Select a document type. Returns true when the selection changed.
    pub fn select_document(&mut self, t: Option<DocumentType>) -> bool {
        if self.read_only {
            return false;
        }
        match &mut self.value {
            FieldValue::DocumentSelect(current) if *current != t => {
                *current = t;
                true
            }
            _ => false,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) | FieldValue::Alphanumeric(s) => s.clear(),
            FieldValue::DocumentSelect(t) => *t = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Digits(s) | FieldValue::Alphanumeric(s) => s.clone(),
            FieldValue::DocumentSelect(t) => match t {
                Some(t) => t.label().to_string(),
                None => "Seleccione tipo de documento".to_string(),
            },
        }
    }
}
