use std::path::Path;

use axum_test::{TestRequest, TestServer};

use crate::{AppState, build_router, store::InMemoryStore};

/// A header value that passes the auth guard.
pub(crate) const TEST_AUTHORIZATION: &str = "Bearer sample-jwt-token";

/// Create a test server for the full app, serving the records in `store`.
#[track_caller]
pub(crate) fn get_test_server(store: InMemoryStore) -> TestServer {
    let state = AppState::new(store, "Etc/UTC").expect("Could not create app state.");
    let app = build_router(state, Path::new("public"));

    TestServer::try_new(app).expect("Could not create test server.")
}

/// Start a GET request to `path` with a bearer token.
pub(crate) fn authorized_get(server: &TestServer, path: &str) -> TestRequest {
    server
        .get(path)
        .add_header("Authorization", TEST_AUTHORIZATION)
}
