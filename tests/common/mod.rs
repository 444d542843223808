use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use fanwall::config::Config;

/// A running test server instance with a dedicated database and upload dir.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub test_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.test_dir.join("uploads")
    }

    /// Create the default admin account.
    pub async fn setup_admin(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/setup-admin"))
            .send()
            .await
            .expect("setup-admin request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Login and return the response body + status.
    pub async fn login(&self, username: &str, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/admin/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create the default admin, log in, return the token.
    pub async fn bootstrap(&self) -> String {
        let (body, status) = self.setup_admin().await;
        assert_eq!(status, StatusCode::CREATED, "setup-admin failed: {body}");
        let (body, status) = self.login("admin", "admin123").await;
        assert_eq!(status, StatusCode::OK, "bootstrap login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Send a multipart submission. Files are (file_name, content_type, bytes).
    pub async fn submit(
        &self,
        name: &str,
        social_handle: &str,
        files: Vec<(&str, &str, Vec<u8>)>,
    ) -> (Value, StatusCode) {
        let mut form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("socialHandle", social_handle.to_string());

        for (file_name, content_type, bytes) in files {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name.to_string())
                .mime_str(content_type)
                .expect("invalid content type");
            form = form.part("images", part);
        }

        let resp = self
            .client
            .post(self.url("/api/submit"))
            .multipart(form)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated GET request.
    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated DELETE request.
    pub async fn delete_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Test apps sign tokens with this secret.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// Spawn a test app backed by a throwaway database and upload directory.
pub async fn spawn_app() -> TestApp {
    let test_dir = std::env::temp_dir().join(format!("fanwall_test_{}", Uuid::now_v7().simple()));
    let uploads_dir = test_dir.join("uploads");
    std::fs::create_dir_all(&uploads_dir).expect("Failed to create test directories");

    let db_path = test_dir.join("fanwall.db");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        upload_dir: uploads_dir,
        max_body_size: 33_554_432,
        log_level: "warn".to_string(),
    };

    let app = fanwall::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        test_dir,
    }
}

/// Remove the test database and upload directory after tests complete.
pub async fn cleanup(app: TestApp) {
    app.pool.close().await;
    let _ = std::fs::remove_dir_all(&app.test_dir);
}
