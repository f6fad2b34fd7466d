//! REST implementation of the backend traits.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use hrdesk_core::error::AuthError;
use hrdesk_core::{
    AccessGrant, ApiUrl, AssistantAnswer, AuthApi, AuthToken, Credentials, Document, Employee,
    EmployeeUpdate, HrApi, NewEmployee, Payslip, Registration, Result, Upload, UploadedDocument,
    User,
};

use crate::client::ApiClient;
use crate::endpoints::{self, *};

/// A network-backed client for the HR backend.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: ApiClient,
}

impl HttpApi {
    /// Create a client for the backend at `base`.
    pub fn new(base: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(base, None)?,
        })
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base: ApiUrl, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(base, Some(timeout))?,
        })
    }

    /// Returns the backend URL.
    pub fn url(&self) -> &ApiUrl {
        self.client.base()
    }

    /// URL a document can be downloaded from. Makes no request.
    pub fn document_download_url(&self, id: &str) -> String {
        self.client.url(&endpoints::document_download(id))
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    async fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AccessGrant, AuthError> {
        debug!("Signing in");

        let request = SignInRequest {
            email: credentials.email(),
            password: credentials.password(),
        };

        self.client
            .post(SIGN_IN, &request)
            .await
            .map_err(|e| AuthError::from_failure("Failed to login", e))
    }

    #[instrument(skip(self, registration), fields(username = %registration.username()))]
    async fn sign_up(&self, registration: &Registration) -> std::result::Result<User, AuthError> {
        debug!("Signing up");

        let request = SignUpRequest {
            username: registration.username(),
            email: registration.email(),
            password: registration.password(),
            role: registration.role().as_str(),
        };

        self.client
            .post(SIGN_UP, &request)
            .await
            .map_err(|e| AuthError::from_failure("Failed to sign up", e))
    }

    #[instrument(skip(self, token))]
    async fn fetch_current_user(
        &self,
        token: &AuthToken,
    ) -> std::result::Result<User, AuthError> {
        debug!("Fetching current user");

        self.client
            .get(CURRENT_USER, token)
            .await
            .map_err(|e| AuthError::from_failure("Failed to get user info", e))
    }
}

#[async_trait]
impl HrApi for HttpApi {
    #[instrument(skip(self, token))]
    async fn list_employees(&self, token: &AuthToken) -> Result<Vec<Employee>> {
        self.client
            .get(EMPLOYEES, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to fetch employees"))
    }

    #[instrument(skip(self, token))]
    async fn get_employee(&self, id: &str, token: &AuthToken) -> Result<Employee> {
        self.client
            .get(&endpoints::employee(id), token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to fetch employee"))
    }

    #[instrument(skip(self, employee, token), fields(email = %employee.email))]
    async fn create_employee(&self, employee: &NewEmployee, token: &AuthToken) -> Result<Employee> {
        self.client
            .post_authed(EMPLOYEES, employee, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to create employee"))
    }

    #[instrument(skip(self, update, token))]
    async fn update_employee(
        &self,
        id: &str,
        update: &EmployeeUpdate,
        token: &AuthToken,
    ) -> Result<Employee> {
        self.client
            .put_authed(&endpoints::employee(id), update, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to update employee"))
    }

    #[instrument(skip(self, token))]
    async fn delete_employee(&self, id: &str, token: &AuthToken) -> Result<()> {
        self.client
            .delete_authed(&endpoints::employee(id), token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to delete employee"))
    }

    #[instrument(skip(self, file, token))]
    async fn upload_employee_cv(
        &self,
        id: &str,
        file: Upload,
        token: &AuthToken,
    ) -> Result<Employee> {
        self.client
            .upload_authed(&endpoints::employee_cv(id), file, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to upload CV"))
    }

    #[instrument(skip(self, token))]
    async fn list_documents(&self, token: &AuthToken) -> Result<Vec<Document>> {
        let response: DocumentsResponse = self
            .client
            .get(LIST_DOCUMENTS, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to fetch documents"))?;

        Ok(response.pdfs)
    }

    #[instrument(skip(self, file, token))]
    async fn upload_document(&self, file: Upload, token: &AuthToken) -> Result<UploadedDocument> {
        self.client
            .upload_authed(UPLOAD_DOCUMENT, file, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to upload document"))
    }

    #[instrument(skip(self, token))]
    async fn delete_document(&self, id: &str, token: &AuthToken) -> Result<()> {
        self.client
            .delete_authed(&endpoints::document(id), token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to delete document"))
    }

    #[instrument(skip(self, token))]
    async fn download_document(&self, id: &str, token: &AuthToken) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&endpoints::document_download(id), token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to download document"))
    }

    #[instrument(skip(self, token))]
    async fn get_payslip(&self, employee_id: &str, token: &AuthToken) -> Result<Payslip> {
        self.client
            .get(&endpoints::salary(employee_id), token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to fetch payslip"))
    }

    #[instrument(skip(self, question, token))]
    async fn ask(&self, question: &str, token: &AuthToken) -> Result<AssistantAnswer> {
        let response: AskResponse = self
            .client
            .post_authed(ASK, &AskRequest { text: question }, token)
            .await
            .map_err(|e| e.with_fallback_detail("Failed to get response"))?;

        Ok(response.into())
    }
}
