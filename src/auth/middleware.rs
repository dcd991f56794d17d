//! Auth middleware that checks for a bearer token and works out which user's
//! records the request should see.

use axum::{
    extract::{FromRequestParts, Request},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{
    Error,
    user::{CurrentUser, UserEmail},
};

/// The header that selects the user whose records a request sees.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Middleware function that checks for a bearer token in the `Authorization` header.
///
/// The [CurrentUser] is placed into the request and then the request executed
/// normally if the header is present, otherwise a 401 response is returned.
/// The token itself is not checked.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(user): Extension<CurrentUser>` to receive the current user.
pub async fn auth_guard(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();

    if let Err(rejection) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &()).await
    {
        tracing::debug!("Rejecting request to {}: {rejection}", parts.uri);
        return Error::Unauthorized.into_response();
    }

    let user = get_current_user(&parts.headers);
    parts.extensions.insert(user);

    next.run(Request::from_parts(parts, body)).await
}

fn get_current_user(headers: &HeaderMap) -> CurrentUser {
    let email = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(UserEmail::new);

    CurrentUser(email)
}
