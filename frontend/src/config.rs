//! Deployment constants.

/// Base URL of the e-library REST service. The app is served behind the
/// same origin as the API gateway, so a relative prefix is enough.
pub const API_BASE_URL: &str = "/api";

/// localStorage keys for the persisted credential. Fixed names: the
/// credential must survive reloads and be findable after a restart.
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const AUTH_EMAIL_KEY: &str = "authEmail";
