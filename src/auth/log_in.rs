//! Route handlers for the mock log-in and registration endpoints.
//!
//! Neither endpoint stores anything. They echo back a user built from the
//! request and the static [SAMPLE_TOKEN].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{Error, auth::SAMPLE_TOKEN, store::TEST_USER_EMAIL};

/// The e-mail used when the request does not include one.
const DEFAULT_EMAIL: &str = "john.doe@example.com";
/// The name used when the request does not include one.
const DEFAULT_NAME: &str = "John Doe";
/// Logging in with this e-mail always fails.
const INVALID_EMAIL: &str = "invalid@example.com";

/// The body of a log-in or registration request.
///
/// Every field is optional. The password is accepted but never checked.
#[derive(Debug, Default, Deserialize)]
pub struct AuthForm {
    name: Option<String>,
    email: Option<String>,
}

impl AuthForm {
    fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, PartialEq, Serialize)]
struct AuthUser {
    id: &'static str,
    name: String,
    email: String,
}

impl AuthUser {
    /// The demo test user gets their own ID and name, everyone else is user "u1".
    fn new(email: &str, name: &str) -> Self {
        if email == TEST_USER_EMAIL {
            Self {
                id: "u2",
                name: "Test User".to_owned(),
                email: email.to_owned(),
            }
        } else {
            Self {
                id: "u1",
                name: name.to_owned(),
                email: email.to_owned(),
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    success: bool,
    token: &'static str,
    user: AuthUser,
}

impl AuthResponse {
    fn new(user: AuthUser) -> Self {
        Self {
            success: true,
            token: SAMPLE_TOKEN,
            user,
        }
    }
}

impl IntoResponse for AuthResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

fn parse_form(body: Result<Json<AuthForm>, JsonRejection>) -> AuthForm {
    match body {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::debug!("Could not parse auth form, using defaults: {rejection}");
            AuthForm::default()
        }
    }
}

/// Register a user.
///
/// Always succeeds. Missing fields are filled in with the demo user's details.
pub async fn register(body: Result<Json<AuthForm>, JsonRejection>) -> Response {
    let form = parse_form(body);
    let email = form.email().unwrap_or(DEFAULT_EMAIL);
    let name = form.name().unwrap_or(DEFAULT_NAME);

    tracing::info!("Registering user {email}");
    AuthResponse::new(AuthUser::new(email, name)).into_response()
}

/// Log a user in.
///
/// Succeeds for every e-mail except [INVALID_EMAIL].
pub async fn log_in(body: Result<Json<AuthForm>, JsonRejection>) -> Response {
    let form = parse_form(body);

    if form.email() == Some(INVALID_EMAIL) {
        tracing::info!("Rejecting log in for {INVALID_EMAIL}");
        return Error::InvalidCredentials.into_response();
    }

    let email = form.email().unwrap_or(DEFAULT_EMAIL);
    AuthResponse::new(AuthUser::new(email, DEFAULT_NAME)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::auth::{log_in, register};

    fn get_test_server() -> TestServer {
        let app = Router::new()
            .route("/log_in", post(log_in))
            .route("/register", post(register));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn log_in_returns_token_and_user() {
        let server = get_test_server();

        let response = server
            .post("/log_in")
            .json(&json!({"email": "jane@example.com", "password": "hunter2"}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "token": "sample-jwt-token",
            "user": {"id": "u1", "name": "John Doe", "email": "jane@example.com"}
        }));
    }

    #[tokio::test]
    async fn log_in_as_test_user() {
        let server = get_test_server();

        let response = server
            .post("/log_in")
            .json(&json!({"email": "test@example.com", "password": "hunter2"}))
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["id"], "u2");
        assert_eq!(body["user"]["name"], "Test User");
    }

    #[tokio::test]
    async fn log_in_with_invalid_email_is_unauthorized() {
        let server = get_test_server();

        let response = server
            .post("/log_in")
            .json(&json!({"email": "invalid@example.com", "password": "hunter2"}))
            .await;

        response.assert_status_unauthorized();
        response.assert_json(&json!({"success": false, "message": "Invalid credentials"}));
    }

    #[tokio::test]
    async fn log_in_without_body_uses_default_user() {
        let server = get_test_server();

        let response = server.post("/log_in").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["email"], "john.doe@example.com");
    }

    #[tokio::test]
    async fn register_uses_name_from_body() {
        let server = get_test_server();

        let response = server
            .post("/register")
            .json(&json!({"name": "Jane Doe", "email": "jane@example.com", "password": "pw"}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["id"], "u1");
        assert_eq!(body["user"]["name"], "Jane Doe");
        assert_eq!(body["token"], "sample-jwt-token");
    }

    #[tokio::test]
    async fn register_test_user_ignores_name() {
        let server = get_test_server();

        let response = server
            .post("/register")
            .json(&json!({"name": "Someone Else", "email": "test@example.com"}))
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["id"], "u2");
        assert_eq!(body["user"]["name"], "Test User");
    }

    #[tokio::test]
    async fn register_with_empty_fields_uses_defaults() {
        let server = get_test_server();

        let response = server
            .post("/register")
            .json(&json!({"name": "", "email": ""}))
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["user"]["name"], "John Doe");
        assert_eq!(body["user"]["email"], "john.doe@example.com");
    }
}
