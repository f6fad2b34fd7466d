use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An isolated session file and the mock backend it talks to.
pub struct TestEnv {
    pub server: MockServer,
    pub dir: TempDir,
}

impl TestEnv {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn api_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.server.address().port())
    }

    pub fn session_file(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    /// Write a saved session as a previous login would have.
    pub fn save_session(&self, token: &str, user: &Value) {
        let contents = json!({ "token": token, "user": user });
        std::fs::write(self.session_file(), contents.to_string()).unwrap();
    }

    pub fn saved_session(&self) -> Option<Value> {
        let bytes = std::fs::read(self.session_file()).ok()?;
        Some(serde_json::from_slice(&bytes).unwrap())
    }

    /// Answer `GET /users/me/` for `token` with `user`.
    pub async fn mount_current_user(&self, token: &str, user: &Value) {
        Mock::given(method("GET"))
            .and(path("/users/me/"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    /// Run the CLI against this environment.
    pub async fn run(&self, args: &[&str]) -> Output {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let api_url = self.api_url();
        let session_file = self.session_file();

        tokio::task::spawn_blocking(move || run_cli(&args, &api_url, &session_file))
            .await
            .unwrap()
    }
}

/// Run the CLI binary with an explicit backend and session file.
pub fn run_cli(args: &[String], api_url: &str, session_file: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hrdesk"));
    cmd.args(args);
    cmd.env("HRDESK_API_URL", api_url);
    cmd.env("HRDESK_SESSION_FILE", session_file);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("HRDESK_PASSWORD");
    cmd.env_remove("HRDESK_TIMEOUT");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn user_json(username: &str, email: &str, role: &str) -> Value {
    json!({ "username": username, "email": email, "role": role })
}

pub fn employee_json(id: &str, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "role": "Engineer",
        "date_of_birth": "1990-01-01",
        "salary": "50000",
        "address": "1 Main St",
        "phone_number": "555-0100"
    })
}
