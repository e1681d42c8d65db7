//! Intake form state and field-level validation

use regex::Regex;
use std::sync::OnceLock;

use super::field::FormField;
use crate::document::DocumentType;
use crate::link::TableLink;

/// Focusable positions on the intake page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TableNumber,
    DocumentType,
    DocumentNumber,
    Email,
    Phone,
    Buttons,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::TableNumber,
    Focus::DocumentType,
    Focus::DocumentNumber,
    Focus::Email,
    Focus::Phone,
    Focus::Buttons,
];

/// Buttons on the action row
pub const BUTTON_CONSULT: usize = 0;
pub const BUTTON_SUBMIT: usize = 1;

/// Email validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// Raw input carried separators or more than one `@`
    MultipleAddresses,
    /// Cleaned value does not look like `local@domain.tld`
    InvalidShape,
}

impl EmailError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MultipleAddresses => "only one email address permitted",
            Self::InvalidShape => "enter a valid email address",
        }
    }
}

/// Collapse internal whitespace and strip list separators
pub fn clean_email(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != ';')
        .collect()
}

fn email_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("static pattern")
    })
}

/// Validate a raw email input. Empty input is always valid.
pub fn validate_email(raw: &str) -> Result<(), EmailError> {
    if raw.is_empty() {
        return Ok(());
    }

    let cleaned = clean_email(raw);
    let had_separator = raw.contains(',') || raw.contains(';');
    if had_separator || cleaned.matches('@').count() > 1 {
        return Err(EmailError::MultipleAddresses);
    }

    if email_shape().is_match(&cleaned) {
        Ok(())
    } else {
        Err(EmailError::InvalidShape)
    }
}

/// The intake form. Legal name and email are derived fields: they are
/// populated by a successful lookup and cleared whenever the document type
/// or number changes, never entered independently before a lookup.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub table_number: FormField,
    /// Opaque table identifier from the link; never edited
    pub table_id: String,
    pub document_type: FormField,
    pub document_number: FormField,
    pub legal_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub focus: Focus,
    /// Which button is selected on the action row (0=Consultar, 1=Solicitar)
    pub selected_button: usize,
}

impl IntakeForm {
    /// Create an empty form seeded from the parsed table link
    pub fn new(link: &TableLink) -> Self {
        let mut table_number = FormField::text("numeroMesa", "Número de Mesa");
        if let Some(n) = &link.table_number {
            table_number.assign(n);
        }
        table_number.read_only = link.locks_table_number();

        let mut legal_name = FormField::text("razonSocial", "Razón Social");
        legal_name.read_only = true;

        // Email opens read-only; a successful lookup unlocks it
        let mut email = FormField::text("email", "Correo Electrónico");
        email.read_only = true;

        let focus = if table_number.read_only {
            Focus::DocumentType
        } else {
            Focus::TableNumber
        };

        Self {
            table_number,
            table_id: link.table_id.clone().unwrap_or_default(),
            document_type: FormField::document_select("tipoDocumento", "Tipo de Documento"),
            document_number: FormField::alphanumeric("numeroDocumento", "Número de Documento"),
            legal_name,
            email,
            phone: FormField::digits("telefono", "Teléfono (10 dígitos)"),
            focus,
            selected_button: BUTTON_CONSULT,
        }
    }

    /// Reset after a successful submission. The link seeding (and its
    /// read-only lock) is re-asserted, so a locked table stays locked.
    pub fn reset(&mut self, link: &TableLink) {
        *self = Self::new(link);
    }

    fn is_focusable(&self, focus: Focus) -> bool {
        match focus {
            Focus::TableNumber => !self.table_number.read_only,
            Focus::Email => !self.email.read_only,
            _ => true,
        }
    }

    /// Move focus to the next focusable position (wraps around)
    pub fn next_focus(&mut self) {
        let mut idx = FOCUS_ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        for _ in 0..FOCUS_ORDER.len() {
            idx = (idx + 1) % FOCUS_ORDER.len();
            if self.is_focusable(FOCUS_ORDER[idx]) {
                self.focus = FOCUS_ORDER[idx];
                return;
            }
        }
    }

    /// Move focus to the previous focusable position (wraps around)
    pub fn prev_focus(&mut self) {
        let mut idx = FOCUS_ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        for _ in 0..FOCUS_ORDER.len() {
            idx = (idx + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
            if self.is_focusable(FOCUS_ORDER[idx]) {
                self.focus = FOCUS_ORDER[idx];
                return;
            }
        }
    }

    /// Field currently under focus, if any
    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            Focus::TableNumber => Some(&mut self.table_number),
            Focus::DocumentNumber => Some(&mut self.document_number),
            Focus::Email => Some(&mut self.email),
            Focus::Phone => Some(&mut self.phone),
            Focus::DocumentType | Focus::Buttons => None,
        }
    }

    /// Type a character into the focused field. Returns true when a
    /// document field changed, which forces a fresh lookup.
    pub fn input_char(&mut self, c: char) -> bool {
        let on_document = self.focus == Focus::DocumentNumber;
        match self.focused_field_mut() {
            Some(field) => field.push_char(c) && on_document,
            None => false,
        }
    }

    /// Backspace in the focused field. Returns true when a document field
    /// changed.
    pub fn backspace(&mut self) -> bool {
        let on_document = self.focus == Focus::DocumentNumber;
        match self.focused_field_mut() {
            Some(field) => field.pop_char() && on_document,
            None => false,
        }
    }

    /// Cycle the document-type selection. Returns true when it changed.
    pub fn cycle_document_type(&mut self, forward: bool) -> bool {
        if self.focus != Focus::DocumentType {
            return false;
        }
        let next = match self.document_type.as_document_type() {
            Some(t) if forward => Some(t.next()),
            Some(t) => Some(t.prev()),
            None => Some(if forward {
                crate::document::ALL_DOCUMENT_TYPES[0]
            } else {
                crate::document::ALL_DOCUMENT_TYPES[crate::document::ALL_DOCUMENT_TYPES.len() - 1]
            }),
        };
        self.document_type.select_document(next)
    }

    /// Drop everything derived from the last lookup: legal name, email and
    /// the email unlock. Called on every document-field edit.
    pub fn clear_lookup_fields(&mut self) {
        self.legal_name.clear();
        self.email.clear();
        self.email.read_only = true;
    }

    /// Fold a successful lookup into the form; email becomes editable
    pub fn apply_lookup(&mut self, legal_name: &str, email: &str) {
        self.legal_name.assign(legal_name);
        self.email.assign(email);
        self.email.read_only = false;
    }

    /// Selected document type, if any
    pub fn document_type(&self) -> Option<DocumentType> {
        self.document_type.as_document_type()
    }

    /// Phone is flagged whenever non-empty and not exactly ten digits
    pub fn phone_error(&self) -> bool {
        let phone = self.phone.as_text();
        !phone.is_empty() && phone.len() != 10
    }

    /// Email validation state for the current raw input
    pub fn email_error(&self) -> Option<EmailError> {
        validate_email(self.email.as_text()).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded_link() -> TableLink {
        TableLink::parse(Some("https://factura.example.com/12/mesa-12"))
    }

    fn unseeded_form() -> IntakeForm {
        IntakeForm::new(&TableLink::default())
    }

    #[test]
    fn test_link_seeds_and_locks_table_number() {
        let form = IntakeForm::new(&seeded_link());
        assert_eq!(form.table_number.as_text(), "12");
        assert!(form.table_number.read_only);
        assert_eq!(form.table_id, "mesa-12");
    }

    #[test]
    fn test_reset_reasserts_table_lock() {
        let link = seeded_link();
        let mut form = IntakeForm::new(&link);
        form.phone.assign("3001234567");
        form.reset(&link);
        assert_eq!(form.table_number.as_text(), "12");
        assert!(form.table_number.read_only);
        assert_eq!(form.phone.as_text(), "");
    }

    #[test]
    fn test_focus_skips_locked_table_number() {
        let mut form = IntakeForm::new(&seeded_link());
        form.focus = Focus::Phone;
        form.next_focus();
        assert_eq!(form.focus, Focus::Buttons);
        form.next_focus();
        // Table number is locked, so focus wraps straight to the select
        assert_eq!(form.focus, Focus::DocumentType);
    }

    #[test]
    fn test_focus_skips_email_until_lookup() {
        let mut form = unseeded_form();
        form.focus = Focus::DocumentNumber;
        form.next_focus();
        assert_eq!(form.focus, Focus::Phone);

        form.apply_lookup("ACME SAS", "billing@acme.co");
        form.focus = Focus::DocumentNumber;
        form.next_focus();
        assert_eq!(form.focus, Focus::Email);
    }

    #[test]
    fn test_document_edit_reported_for_reset() {
        let mut form = unseeded_form();
        form.focus = Focus::DocumentNumber;
        assert!(form.input_char('9'));
        form.focus = Focus::Phone;
        assert!(!form.input_char('3'));
    }

    #[test]
    fn test_apply_lookup_unlocks_email() {
        let mut form = unseeded_form();
        form.apply_lookup("ACME SAS", "billing@acme.co");
        assert_eq!(form.legal_name.as_text(), "ACME SAS");
        assert_eq!(form.email.as_text(), "billing@acme.co");
        assert!(!form.email.read_only);

        form.clear_lookup_fields();
        assert_eq!(form.legal_name.as_text(), "");
        assert_eq!(form.email.as_text(), "");
        assert!(form.email.read_only);
    }

    #[test]
    fn test_phone_error_flags() {
        let mut form = unseeded_form();
        assert!(!form.phone_error());
        form.phone.assign("300123");
        assert!(form.phone_error());
        form.phone.assign("3001234567");
        assert!(!form.phone_error());
    }

    mod email_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_valid() {
            assert_eq!(validate_email(""), Ok(()));
        }

        #[test]
        fn test_plain_address_is_valid() {
            assert_eq!(validate_email("billing@acme.co"), Ok(()));
        }

        #[test]
        fn test_whitespace_is_collapsed_before_shape_check() {
            assert_eq!(validate_email("billing @acme.co"), Ok(()));
            assert_eq!(clean_email("billing @acme.co"), "billing@acme.co");
        }

        #[test]
        fn test_two_at_signs_always_multiple() {
            assert_eq!(
                validate_email("a@b.co@c.co"),
                Err(EmailError::MultipleAddresses)
            );
            assert_eq!(
                EmailError::MultipleAddresses.message(),
                "only one email address permitted"
            );
        }

        #[test]
        fn test_separator_always_multiple_even_if_one_address() {
            // The raw input carried a separator, so the stricter flag wins
            assert_eq!(
                validate_email("a@b.co,"),
                Err(EmailError::MultipleAddresses)
            );
            assert_eq!(
                validate_email("a@b.co; c@d.co"),
                Err(EmailError::MultipleAddresses)
            );
        }

        #[test]
        fn test_shape_mismatch() {
            assert_eq!(validate_email("not-an-email"), Err(EmailError::InvalidShape));
            assert_eq!(validate_email("a@b"), Err(EmailError::InvalidShape));
            assert_eq!(
                EmailError::InvalidShape.message(),
                "enter a valid email address"
            );
        }
    }
}
