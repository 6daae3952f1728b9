//! OTP login flow: request a code for an email, then trade code + email for
//! a bearer token. Terminates in [`SessionStore::set_credential`] on success;
//! on any failure the session store is left untouched (no partial login).
//!
//! Concurrent requests for the same email are not deduplicated or
//! rate-limited here; the server is the sole authority on OTP lifetime.

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::session::{CredentialStore, SessionStore};

/// The two authentication endpoints, behind a trait so the flow can be
/// driven against a mock.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/request-otp`. The acknowledgement carries no OTP value.
    async fn request_otp(&self, email: &str) -> ApiResult<()>;

    /// `POST /auth/verify-otp`. Returns the bearer token on success.
    async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<String>;
}

/// Asks the server to email an OTP. Validates locally first so an empty
/// email never costs a request.
pub async fn request_otp<A: AuthApi + ?Sized>(api: &A, email: &str) -> ApiResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }
    api.request_otp(email).await
}

/// Trades email + OTP for a bearer token. Both inputs are required; the
/// guard runs before any request.
pub async fn verify_otp_token<A: AuthApi + ?Sized>(
    api: &A,
    email: &str,
    otp: &str,
) -> ApiResult<String> {
    let email = email.trim();
    let otp = otp.trim();
    if email.is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }
    if otp.is_empty() {
        return Err(ApiError::Validation("OTP is required".to_string()));
    }
    api.verify_otp(email, otp).await
}

/// Verifies the OTP and completes the login by storing the credential.
pub async fn verify_otp<A, S>(
    api: &A,
    store: &mut SessionStore<S>,
    email: &str,
    otp: &str,
) -> ApiResult<()>
where
    A: AuthApi + ?Sized,
    S: CredentialStore,
{
    let token = verify_otp_token(api, email, otp).await?;
    store.set_credential(token, email.trim().to_string());
    Ok(())
}
