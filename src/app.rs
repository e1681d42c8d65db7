//! Application controller
//!
//! Owns the workflow state and the webhook client, dispatches key events,
//! and runs the consult/submit orchestration. Rendering lives in `ui/` and
//! only reads what this module exposes.

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tracing::{info, warn};

use crate::branding;
use crate::config::TuiConfig;
use crate::link::TableLink;
use crate::state::{AppState, Focus, NoticeKind, BUTTON_CONSULT, BUTTON_SUBMIT};
use crate::webhook::{ConsultOutcome, HttpWebhookClient, SubmissionRequest, WebhookApi};

pub struct App {
    /// Current workflow state
    pub state: AppState,
    /// The parsed table link; immutable for the session
    pub link: TableLink,
    /// Phone flagged by a submit attempt (covers the empty case the live
    /// length check does not)
    pub phone_flagged: bool,
    /// Webhook client for the two endpoints
    webhook: Box<dyn WebhookApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance. The admission gate runs here, exactly
    /// once; an expired link makes the whole session inert.
    pub fn new(link: TableLink, config: &TuiConfig) -> Self {
        let webhook = Box::new(HttpWebhookClient::new(config));
        Self::with_webhook(link, webhook)
    }

    fn with_webhook(link: TableLink, webhook: Box<dyn WebhookApi>) -> Self {
        let link_valid = link.is_valid_at(Utc::now());
        if !link_valid {
            info!("Link outside its admission window, session is inert");
        }

        Self {
            state: AppState::new(&link, link_valid),
            link,
            phone_flagged: false,
            webhook,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Venue title for the header, from the link origin
    pub fn venue(&self) -> &'static str {
        branding::venue_for_host(self.link.host.as_deref())
    }

    /// Per-frame upkeep: drop notices that outlived their TTL
    pub fn tick(&mut self) {
        self.state.expire_notices(Instant::now());
    }

    /// Whether the phone field should render an error
    pub fn phone_error_visible(&self) -> bool {
        self.state.form.phone_error() || self.phone_flagged
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Terminal state: the expiry screen only quits
        if self.state.phase.is_expired() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.quit = true;
            }
            return Ok(());
        }

        // Sticky notices are modal until dismissed
        if let Some(notice) = &self.state.notice {
            if matches!(notice.kind, NoticeKind::LookupNoData | NoticeKind::MustConsult) {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.state.dismiss_notice();
                }
                return Ok(());
            }
        }

        // In-flight call: affordances are disabled
        if self.state.phase.is_busy() {
            return Ok(());
        }

        let on_buttons = self.state.form.focus == Focus::Buttons;
        let on_select = self.state.form.focus == Focus::DocumentType;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_focus(),
            KeyCode::Left if on_buttons => {
                self.state.form.selected_button = BUTTON_CONSULT;
            }
            KeyCode::Right if on_buttons => {
                self.state.form.selected_button = BUTTON_SUBMIT;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_select => {
                let forward = !matches!(key.code, KeyCode::Left);
                if self.state.form.cycle_document_type(forward) {
                    self.state.document_edited();
                }
            }
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                BUTTON_CONSULT => self.run_consult().await,
                _ => self.run_submit().await,
            },
            KeyCode::Enter => self.state.form.next_focus(),
            KeyCode::Char(c) => {
                if self.state.form.input_char(c) {
                    self.state.document_edited();
                }
                if self.state.form.focus == Focus::Phone {
                    self.phone_flagged = false;
                }
            }
            KeyCode::Backspace => {
                if self.state.form.backspace() {
                    self.state.document_edited();
                }
                if self.state.form.focus == Focus::Phone {
                    self.phone_flagged = false;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the acquirer lookup for the current document fields
    async fn run_consult(&mut self) {
        let Some(document_type) = self.state.form.document_type() else {
            self.state.raise(NoticeKind::LookupNoData);
            return;
        };
        if self.state.form.document_number.is_empty() {
            self.state.raise(NoticeKind::LookupNoData);
            return;
        }
        let document_number = self.state.form.document_number.as_text().to_string();

        let token = self.state.begin_consult();
        let outcome = self.webhook.consult(document_type, &document_number).await;

        match outcome {
            ConsultOutcome::Found { legal_name, email } => {
                info!("Acquirer found (consult #{token})");
                self.state.consult_succeeded(token, &legal_name, &email);
            }
            ConsultOutcome::NotFound => {
                self.state.consult_not_found(token);
            }
        }
    }

    /// Submit the completed request to the back office. Preconditions run
    /// in order; the first failure short-circuits without a network call.
    async fn run_submit(&mut self) {
        if self.state.phase.is_expired() {
            return;
        }
        if !self.state.phase.is_consulted() {
            self.state.raise(NoticeKind::MustConsult);
            return;
        }
        if self.state.form.phone.as_text().len() != 10 {
            self.phone_flagged = true;
            return;
        }
        if self.state.form.email_error().is_some() {
            return;
        }
        // Consulted implies a selected document type
        let Some(document_type) = self.state.form.document_type() else {
            return;
        };

        let request = SubmissionRequest::from_form(&self.state.form, document_type, Utc::now());
        self.state.begin_submit();

        match self.webhook.submit(&request).await {
            Ok(()) => {
                info!("Intake request accepted");
                self.state.submit_succeeded(&self.link);
                self.phone_flagged = false;
            }
            Err(err) => {
                warn!("Submission failed: {err}");
                self.state.submit_failed();
            }
        }
    }
}
