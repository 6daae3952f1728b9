use serde::{Deserialize, Serialize};

use crate::model::Material;

/// Body of `POST /auth/request-otp`.
#[derive(Debug, Clone, Serialize)]
pub struct OtpRequest {
    pub email: String,
}

/// Body of `POST /auth/verify-otp`.
#[derive(Debug, Clone, Serialize)]
pub struct OtpVerifyRequest {
    pub email: String,
    pub otp: String,
}

/// Successful verify-OTP response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Optional provider message on a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// `GET /materials` response. The API has been observed returning both a
/// wrapped `{ "data": [...] }` object and a bare array; accept either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaterialsResponse {
    Wrapped { data: Vec<Material> },
    Bare(Vec<Material>),
}

impl MaterialsResponse {
    pub fn into_materials(self) -> Vec<Material> {
        match self {
            MaterialsResponse::Wrapped { data } => data,
            MaterialsResponse::Bare(materials) => materials,
        }
    }
}
