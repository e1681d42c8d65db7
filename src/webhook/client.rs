//! HTTP client for the consult and submission webhooks
//!
//! Carries the wire contract of both endpoints. Lookup failures of every
//! shape degrade to [`ConsultOutcome::NotFound`] here, so no transport
//! detail leaks into the workflow.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::traits::{ConsultOutcome, WebhookApi};
use crate::config::{TuiConfig, CONSULT_WEBHOOK_URL};
use crate::document::DocumentType;
use crate::state::{clean_email, IntakeForm};

/// Submission failure, surfaced to the workflow as a retryable notice
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Body of the consult POST
#[derive(Debug, Serialize)]
struct ConsultRequest<'a> {
    #[serde(rename = "tipoDocumento")]
    document_type: &'a str,
    #[serde(rename = "numeroDocumento")]
    document_number: &'a str,
}

// The lookup responds with an array whose first element wraps the tax
// authority's acquirer payload several levels deep.

#[derive(Debug, Deserialize)]
struct ConsultEntry {
    #[serde(default)]
    success: bool,
    #[serde(rename = "ResponseDian", default)]
    response_dian: Option<ResponseDian>,
}

#[derive(Debug, Deserialize)]
struct ResponseDian {
    #[serde(rename = "GetAcquirerResponse", default)]
    get_acquirer_response: Option<GetAcquirerResponse>,
}

#[derive(Debug, Deserialize)]
struct GetAcquirerResponse {
    #[serde(rename = "GetAcquirerResult", default)]
    get_acquirer_result: Option<GetAcquirerResult>,
}

#[derive(Debug, Deserialize)]
struct GetAcquirerResult {
    #[serde(rename = "StatusCode", default)]
    status_code: Option<String>,
    #[serde(rename = "ReceiverName", default)]
    receiver_name: Option<String>,
    #[serde(rename = "ReceiverEmail", default)]
    receiver_email: Option<String>,
}

/// Body of the submission POST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    #[serde(rename = "numeroMesa")]
    pub table_number: String,
    #[serde(rename = "mesaId")]
    pub table_id: String,
    #[serde(rename = "razonSocial")]
    pub legal_name: String,
    pub email: String,
    #[serde(rename = "tipoDocumento")]
    pub document_type: String,
    #[serde(rename = "tipoDocumentoTexto")]
    pub document_type_label: String,
    #[serde(rename = "numeroDocumento")]
    pub document_number: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "documentoID_Odoo")]
    pub odoo_document_id: Option<i32>,
    pub timestamp: String,
}

impl SubmissionRequest {
    /// Assemble the payload from a consulted form
    pub fn from_form(
        form: &IntakeForm,
        document_type: DocumentType,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            table_number: form.table_number.as_text().to_string(),
            table_id: form.table_id.clone(),
            legal_name: form.legal_name.as_text().to_string(),
            email: clean_email(form.email.as_text()),
            document_type: document_type.code().to_string(),
            document_type_label: document_type.label().to_string(),
            document_number: form.document_number.as_text().to_string(),
            phone: form.phone.as_text().to_string(),
            odoo_document_id: document_type.odoo_code(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Decide what a consult response body means. Only a first entry with
/// `success` and a nested status of exactly "200" counts as found.
fn interpret_consult(entries: Vec<ConsultEntry>) -> ConsultOutcome {
    let Some(entry) = entries.into_iter().next() else {
        return ConsultOutcome::NotFound;
    };
    if !entry.success {
        return ConsultOutcome::NotFound;
    }

    let result = entry
        .response_dian
        .and_then(|d| d.get_acquirer_response)
        .and_then(|r| r.get_acquirer_result);

    match result {
        Some(result) if result.status_code.as_deref() == Some("200") => ConsultOutcome::Found {
            legal_name: result.receiver_name.unwrap_or_default(),
            email: result.receiver_email.unwrap_or_default(),
        },
        _ => ConsultOutcome::NotFound,
    }
}

/// Webhook client backed by reqwest
pub struct HttpWebhookClient {
    http: reqwest::Client,
    consult_url: String,
    submission_url: String,
}

impl HttpWebhookClient {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            consult_url: CONSULT_WEBHOOK_URL.to_string(),
            submission_url: config.submission_url(),
        }
    }
}

#[async_trait]
impl WebhookApi for HttpWebhookClient {
    async fn consult(&self, document_type: DocumentType, document_number: &str) -> ConsultOutcome {
        let body = ConsultRequest {
            document_type: document_type.code(),
            document_number,
        };

        let response = match self.http.post(&self.consult_url).json(&body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("Consult request failed: {err}");
                return ConsultOutcome::NotFound;
            }
        };

        if !response.status().is_success() {
            tracing::info!("Consult returned status {}", response.status());
            return ConsultOutcome::NotFound;
        }

        match response.json::<Vec<ConsultEntry>>().await {
            Ok(entries) => interpret_consult(entries),
            Err(err) => {
                tracing::warn!("Consult response body unreadable: {err}");
                ConsultOutcome::NotFound
            }
        }
    }

    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.submission_url)
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SubmitError::BadStatus(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Vec<ConsultEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_acquirer_found() {
        let entries = parse(
            r#"[{
                "success": true,
                "ResponseDian": {
                    "GetAcquirerResponse": {
                        "GetAcquirerResult": {
                            "StatusCode": "200",
                            "ReceiverName": "ACME SAS",
                            "ReceiverEmail": "billing@acme.co"
                        }
                    }
                }
            }]"#,
        );
        assert_eq!(
            interpret_consult(entries),
            ConsultOutcome::Found {
                legal_name: "ACME SAS".to_string(),
                email: "billing@acme.co".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_receiver_fields_default_to_empty() {
        let entries = parse(
            r#"[{
                "success": true,
                "ResponseDian": {
                    "GetAcquirerResponse": {
                        "GetAcquirerResult": { "StatusCode": "200" }
                    }
                }
            }]"#,
        );
        assert_eq!(
            interpret_consult(entries),
            ConsultOutcome::Found {
                legal_name: String::new(),
                email: String::new(),
            }
        );
    }

    #[test]
    fn test_unsuccessful_entry_is_not_found() {
        let entries = parse(r#"[{ "success": false }]"#);
        assert_eq!(interpret_consult(entries), ConsultOutcome::NotFound);
    }

    #[test]
    fn test_empty_array_is_not_found() {
        assert_eq!(interpret_consult(vec![]), ConsultOutcome::NotFound);
    }

    #[test]
    fn test_success_without_nested_payload_is_not_found() {
        let entries = parse(r#"[{ "success": true }]"#);
        assert_eq!(interpret_consult(entries), ConsultOutcome::NotFound);
    }

    #[test]
    fn test_non_200_nested_status_is_not_found() {
        let entries = parse(
            r#"[{
                "success": true,
                "ResponseDian": {
                    "GetAcquirerResponse": {
                        "GetAcquirerResult": {
                            "StatusCode": "404",
                            "ReceiverName": "ACME SAS"
                        }
                    }
                }
            }]"#,
        );
        assert_eq!(interpret_consult(entries), ConsultOutcome::NotFound);
    }

    #[test]
    fn test_submission_wire_field_names() {
        use crate::link::TableLink;
        use crate::state::IntakeForm;

        let link = TableLink::parse(Some("https://factura.example.com/12/mesa-12"));
        let mut form = IntakeForm::new(&link);
        form.document_type
            .select_document(Some(DocumentType::CitizenId));
        form.document_number.assign("900123456");
        form.apply_lookup("ACME SAS", "billing@acme.co");
        form.phone.assign("3001234567");

        let submitted_at = DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let request = SubmissionRequest::from_form(&form, DocumentType::CitizenId, submitted_at);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["numeroMesa"], "12");
        assert_eq!(value["mesaId"], "mesa-12");
        assert_eq!(value["razonSocial"], "ACME SAS");
        assert_eq!(value["email"], "billing@acme.co");
        assert_eq!(value["tipoDocumento"], "13");
        assert_eq!(value["tipoDocumentoTexto"], "Cédula de ciudadanía");
        assert_eq!(value["numeroDocumento"], "900123456");
        assert_eq!(value["telefono"], "3001234567");
        assert_eq!(value["documentoID_Odoo"], 3);
        assert_eq!(value["timestamp"], "2025-03-01T12:00:00.000Z");
    }

    #[test]
    fn test_unmapped_document_type_serializes_null_odoo_id() {
        let form = IntakeForm::new(&crate::link::TableLink::default());
        let request =
            SubmissionRequest::from_form(&form, DocumentType::ForeignerId, Utc::now());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["documentoID_Odoo"], serde_json::Value::Null);
    }

    #[test]
    fn test_submission_email_is_cleaned() {
        let mut form = IntakeForm::new(&crate::link::TableLink::default());
        form.apply_lookup("ACME SAS", "billing @acme.co");
        let request = SubmissionRequest::from_form(&form, DocumentType::TaxId, Utc::now());
        assert_eq!(request.email, "billing@acme.co");
    }
}
