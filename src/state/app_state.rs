//! Workflow state definitions
//!
//! The intake workflow is a single tagged phase instead of a pile of
//! boolean flags, so states like "consulted while a consult is in flight"
//! are unrepresentable.

use std::time::{Duration, Instant};

use super::form::IntakeForm;
use crate::link::TableLink;

/// How long a transient notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Editing; lookup results (if any) have been invalidated
    Idle,
    /// A lookup is in flight; only the response carrying this token applies
    Consulting { token: u64 },
    /// Lookup succeeded and the document fields are unchanged since
    Consulted,
    /// Submission in flight
    Submitting,
    /// The link's admission window has passed; terminal for the session
    Expired,
}

impl Phase {
    pub fn is_expired(&self) -> bool {
        matches!(self, Phase::Expired)
    }

    pub fn is_consulted(&self) -> bool {
        matches!(self, Phase::Consulted)
    }

    /// Whether an operation is in flight (affordances disabled)
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Consulting { .. } | Phase::Submitting)
    }
}

/// Kind of notification raised by the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Lookup returned nothing usable
    LookupNoData,
    /// Submit attempted before a successful lookup
    MustConsult,
    /// Submission accepted by the back office
    SubmitSuccess,
    /// Submission failed; the form is preserved for retry
    SubmitFailed,
}

impl NoticeKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::LookupNoData => {
                "No se encontraron datos para el documento. \
                 Ingrese el número sin el dígito de verificación."
            }
            Self::MustConsult => "Debe consultar el documento antes de continuar.",
            Self::SubmitSuccess => "Solicitud enviada exitosamente",
            Self::SubmitFailed => "Error al enviar la solicitud. Por favor, intente nuevamente.",
        }
    }

    /// Transient notices dismiss themselves; the rest wait for the user
    fn ttl(&self) -> Option<Duration> {
        match self {
            Self::SubmitSuccess | Self::SubmitFailed => Some(NOTICE_TTL),
            Self::LookupNoData | Self::MustConsult => None,
        }
    }
}

/// A notification raised by the workflow, possibly self-dismissing
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    raised_at: Instant,
}

impl Notice {
    fn new(kind: NoticeKind) -> Self {
        Self {
            kind,
            raised_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Whether this notice should be gone at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.kind.ttl() {
            Some(ttl) => now.duration_since(self.raised_at) >= ttl,
            None => false,
        }
    }
}

/// Workflow state: phase, form and the current notice
pub struct AppState {
    pub phase: Phase,
    pub form: IntakeForm,
    pub notice: Option<Notice>,
    consult_seq: u64,
}

impl AppState {
    /// Build the startup state from the admission-gate verdict
    pub fn new(link: &TableLink, link_valid: bool) -> Self {
        Self {
            phase: if link_valid { Phase::Idle } else { Phase::Expired },
            form: IntakeForm::new(link),
            notice: None,
            consult_seq: 0,
        }
    }

    /// Raise a notice, replacing any current one
    pub fn raise(&mut self, kind: NoticeKind) {
        self.notice = Some(Notice::new(kind));
    }

    /// Drop the current notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Clear notices that have outlived their TTL. Called on every loop tick.
    pub fn expire_notices(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.notice = None;
        }
    }

    /// A document field was edited: lookup results are stale. Drops back to
    /// `Idle`, clears the derived fields and any lookup notice.
    pub fn document_edited(&mut self) {
        if self.phase.is_expired() {
            return;
        }
        self.phase = Phase::Idle;
        self.form.clear_lookup_fields();
        if self
            .notice
            .as_ref()
            .is_some_and(|n| matches!(n.kind, NoticeKind::LookupNoData | NoticeKind::MustConsult))
        {
            self.notice = None;
        }
    }

    /// Start a consult; returns the token the response must present
    pub fn begin_consult(&mut self) -> u64 {
        self.consult_seq += 1;
        self.phase = Phase::Consulting {
            token: self.consult_seq,
        };
        self.notice = None;
        self.consult_seq
    }

    /// Whether `token` belongs to the consult currently in flight
    fn consult_current(&self, token: u64) -> bool {
        matches!(self.phase, Phase::Consulting { token: t } if t == token)
    }

    /// Fold a successful lookup into the state. Stale responses (token
    /// mismatch, or the phase moved on) are discarded.
    pub fn consult_succeeded(&mut self, token: u64, legal_name: &str, email: &str) -> bool {
        if !self.consult_current(token) {
            tracing::debug!(token, "Discarding stale consult response");
            return false;
        }
        self.form.apply_lookup(legal_name, email);
        self.phase = Phase::Consulted;
        true
    }

    /// Fold a failed lookup into the state; all failure shapes collapse to
    /// the same no-data notice
    pub fn consult_not_found(&mut self, token: u64) -> bool {
        if !self.consult_current(token) {
            tracing::debug!(token, "Discarding stale consult failure");
            return false;
        }
        self.phase = Phase::Idle;
        self.form.clear_lookup_fields();
        self.raise(NoticeKind::LookupNoData);
        true
    }

    pub fn begin_submit(&mut self) {
        self.phase = Phase::Submitting;
        self.notice = None;
    }

    /// Submission accepted: full reset, with the link seeding re-asserted
    pub fn submit_succeeded(&mut self, link: &TableLink) {
        self.form.reset(link);
        self.phase = Phase::Idle;
        self.raise(NoticeKind::SubmitSuccess);
    }

    /// Submission failed: keep the form for retry, drop back to consulted
    pub fn submit_failed(&mut self) {
        self.phase = Phase::Consulted;
        self.raise(NoticeKind::SubmitFailed);
    }
}
