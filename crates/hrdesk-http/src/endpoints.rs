//! Endpoint paths and request/response bodies.

use serde::{Deserialize, Serialize};

use hrdesk_core::{AssistantAnswer, Document};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST /users/signin
pub const SIGN_IN: &[&str] = &["users", "signin"];

/// POST /users/signup
pub const SIGN_UP: &[&str] = &["users", "signup"];

/// GET /users/me/
pub const CURRENT_USER: &[&str] = &["users", "me", ""];

/// GET, POST /employees/
pub const EMPLOYEES: &[&str] = &["employees", ""];

/// GET /documents/list_pdfs/
pub const LIST_DOCUMENTS: &[&str] = &["documents", "list_pdfs", ""];

/// POST /documents/upload_pdf/
pub const UPLOAD_DOCUMENT: &[&str] = &["documents", "upload_pdf", ""];

/// POST /ask
pub const ASK: &[&str] = &["ask"];

/// GET, PUT, DELETE /employees/{id}
pub fn employee(id: &str) -> [&str; 2] {
    ["employees", id]
}

/// POST /employees/{id}/cv
pub fn employee_cv(id: &str) -> [&str; 3] {
    ["employees", id, "cv"]
}

/// DELETE /documents/pdfs/{id}
pub fn document(id: &str) -> [&str; 3] {
    ["documents", "pdfs", id]
}

/// GET /documents/download_pdf/{id}
pub fn document_download(id: &str) -> [&str; 3] {
    ["documents", "download_pdf", id]
}

/// GET /salary/{employee_id}
pub fn salary(employee_id: &str) -> [&str; 2] {
    ["salary", employee_id]
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for sign-in.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for sign-up.
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// Response from the document listing.
#[derive(Debug, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub pdfs: Vec<Document>,
}

/// Request body for the assistant.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub text: &'a str,
}

/// Response from the assistant. Some backend versions nest the answer
/// under `response`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AskResponse {
    Wrapped { response: AssistantAnswer },
    Flat(AssistantAnswer),
}

impl From<AskResponse> for AssistantAnswer {
    fn from(response: AskResponse) -> Self {
        match response {
            AskResponse::Wrapped { response } | AskResponse::Flat(response) => response,
        }
    }
}

/// Error body returned by the backend.
///
/// `detail` is usually a string but validation failures carry a list.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The detail rendered as text.
    pub fn detail_text(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
