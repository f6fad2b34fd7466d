//! Mock backend tests for the REST client.
//!
//! These tests use wiremock to stand in for the HR backend and check the
//! requests the client sends and how it reads responses and failures.

use hrdesk_core::{
    ApiUrl, AuthApi, AuthToken, Credentials, EmployeeUpdate, Error, HrApi, NewEmployee,
    Registration, Role, Upload,
};
use hrdesk_http::HttpApi;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpApi {
    let url = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    HttpApi::new(url).unwrap()
}

fn token() -> AuthToken {
    AuthToken::new("test-token")
}

fn employee_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Jane Doe",
        "email": "jane@x.com",
        "role": "Engineer",
        "date_of_birth": "1990-01-01",
        "salary": "50000",
        "address": "1 Main St",
        "phone_number": "555-0100"
    })
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn sign_in_posts_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/signin"))
        .and(body_json(json!({
            "email": "hr@x.com",
            "password": "pw"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T1",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let grant = api
        .sign_in(&Credentials::new("hr@x.com", "pw"))
        .await
        .unwrap();

    assert_eq!(grant.access_token.as_str(), "T1");
    assert_eq!(grant.token_type, "bearer");
}

#[tokio::test]
async fn sign_in_rejection_surfaces_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect email or password"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .sign_in(&Credentials::new("hr@x.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Incorrect email or password");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn sign_in_without_detail_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/signin"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .sign_in(&Credentials::new("hr@x.com", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Failed to login");
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn sign_up_sends_role_in_lowercase() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/signup"))
        .and(body_json(json!({
            "username": "bob",
            "email": "bob@x.com",
            "password": "pw",
            "role": "finance"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "bob",
            "email": "bob@x.com",
            "role": "finance"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let user = api
        .sign_up(&Registration::new("bob", "bob@x.com", "pw", Role::Finance))
        .await
        .unwrap();

    assert_eq!(user.username, "bob");
    assert_eq!(user.role, Role::Finance);
}

#[tokio::test]
async fn sign_up_conflict_surfaces_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Email already registered"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .sign_up(&Registration::new("bob", "bob@x.com", "pw", Role::Hr))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Email already registered");
}

#[tokio::test]
async fn current_user_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "hr1",
            "email": "hr@x.com",
            "role": "hr"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let user = api.fetch_current_user(&token()).await.unwrap();

    assert_eq!(user.email, "hr@x.com");
    assert_eq!(user.role, Role::Hr);
}

#[tokio::test]
async fn current_user_with_expired_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Could not validate credentials"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.fetch_current_user(&token()).await.unwrap_err();

    assert_eq!(err.message(), "Could not validate credentials");
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn unreachable_backend_is_an_auth_failure() {
    // Nothing listens on port 1.
    let api = HttpApi::new(ApiUrl::new("http://127.0.0.1:1").unwrap()).unwrap();
    let err = api
        .sign_in(&Credentials::new("hr@x.com", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Failed to login");
    assert!(!err.is_unauthorized());
}

// ============================================================================
// Employees
// ============================================================================

#[tokio::test]
async fn list_employees() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees/"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([employee_json("1"), employee_json("2")])),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let employees = api.list_employees(&token()).await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].id, "2");
    assert_eq!(employees[0].document_id, None);
}

#[tokio::test]
async fn get_employee_encodes_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(employee_json("a b")))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let employee = api.get_employee("a b", &token()).await.unwrap();

    assert_eq!(employee.id, "a b");
}

#[tokio::test]
async fn create_employee_posts_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/employees/"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "role": "Engineer",
            "date_of_birth": "1990-01-01",
            "salary": "50000",
            "address": "1 Main St",
            "phone_number": "555-0100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(employee_json("7")))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let new = NewEmployee {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        role: "Engineer".into(),
        date_of_birth: "1990-01-01".into(),
        salary: "50000".into(),
        address: "1 Main St".into(),
        phone_number: "555-0100".into(),
        document_id: None,
    };
    let created = api.create_employee(&new, &token()).await.unwrap();

    assert_eq!(created.id, "7");
}

#[tokio::test]
async fn update_employee_sends_only_changed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/employees/7"))
        .and(body_json(json!({ "salary": "60000" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(employee_json("7")))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let update = EmployeeUpdate {
        salary: Some("60000".into()),
        ..Default::default()
    };
    api.update_employee("7", &update, &token()).await.unwrap();
}

#[tokio::test]
async fn delete_employee_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/employees/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.delete_employee("7", &token()).await.unwrap();
}

#[tokio::test]
async fn missing_employee_uses_fallback_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.get_employee("99", &token()).await.unwrap_err();

    match err {
        Error::Protocol(err) => {
            assert_eq!(err.status, 404);
            assert_eq!(err.detail.as_deref(), Some("Failed to fetch employee"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn upload_cv_is_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/employees/7/cv"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"cv.pdf\""))
        .and(body_string_contains("application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut employee = employee_json("7");
            employee["document_id"] = json!("doc-1");
            employee
        }))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let upload = Upload::new("cv.pdf", b"%PDF-1.4".to_vec());
    let employee = api.upload_employee_cv("7", upload, &token()).await.unwrap();

    assert_eq!(employee.document_id.as_deref(), Some("doc-1"));
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn list_documents_unwraps_pdfs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/list_pdfs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pdfs": [
                { "id": "d1", "filename": "handbook.pdf" },
                { "id": "d2", "filename": "policy.pdf" }
            ]
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let documents = api.list_documents(&token()).await.unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].filename, "handbook.pdf");
}

#[tokio::test]
async fn list_documents_without_pdfs_field_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/list_pdfs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert!(api.list_documents(&token()).await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_document_returns_file_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/upload_pdf/"))
        .and(body_string_contains("filename=\"handbook.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "file_id": "d9" })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let uploaded = api
        .upload_document(Upload::new("handbook.pdf", b"%PDF".to_vec()), &token())
        .await
        .unwrap();

    assert_eq!(uploaded.file_id, "d9");
}

#[tokio::test]
async fn delete_and_download_document() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/documents/pdfs/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/documents/download_pdf/d1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.4 body".to_vec(), "application/pdf"),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let bytes = api.download_document("d1", &token()).await.unwrap();
    assert_eq!(bytes, b"%PDF-1.4 body");

    api.delete_document("d1", &token()).await.unwrap();
}

// ============================================================================
// Payslips and assistant
// ============================================================================

#[tokio::test]
async fn payslip_for_employee() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/salary/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gross_monthly_salary": 5000.0,
            "net_monthly_salary": 3800.5,
            "monthly_social_security": 550.0,
            "monthly_total_tax": 649.5,
            "annual_gross_salary": 60000.0,
            "annual_social_security": 6600.0,
            "annual_taxable_income": 53400.0,
            "annual_total_tax": 7794.0,
            "annual_net_salary": 45606.0,
            "formatted_net_monthly_salary": "3,800.50",
            "calculation_date": "2024-05-01"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let payslip = api.get_payslip("7", &token()).await.unwrap();

    assert_eq!(payslip.formatted_net_monthly_salary, "3,800.50");
    assert_eq!(payslip.annual_gross_salary, 60000.0);
}

#[tokio::test]
async fn ask_sends_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({ "text": "How many vacation days?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "25 days",
            "sources": ["handbook.pdf"]
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let answer = api.ask("How many vacation days?", &token()).await.unwrap();

    assert_eq!(answer.answer, "25 days");
    assert_eq!(answer.sources, Some(vec!["handbook.pdf".to_string()]));
}

#[tokio::test]
async fn ask_accepts_nested_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "answer": "Ask your manager" }
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let answer = api.ask("Who approves leave?", &token()).await.unwrap();

    assert_eq!(answer.answer, "Ask your manager");
    assert_eq!(answer.sources, None);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn validation_detail_is_rendered_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "text"], "msg": "field required" }]
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.ask("", &token()).await.unwrap_err();

    match err {
        Error::Protocol(err) => {
            assert_eq!(err.status, 422);
            assert!(err.detail.unwrap().contains("field required"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Not authenticated"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.list_employees(&token()).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "protocol error: HTTP 401: Not authenticated");
}

#[tokio::test]
async fn forbidden_is_not_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "detail": "Not enough permissions"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.list_employees(&token()).await.unwrap_err();

    assert!(!err.is_unauthorized());
}
