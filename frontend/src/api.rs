//! Stateless HTTP client for the e-library REST service. No business
//! logic here, only request building and error mapping; state lives in the
//! session store and the catalog.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use common::auth::AuthApi;
use common::error::{ApiError, ApiResult};
use common::model::{Material, MaterialUpload};
use common::requests::{ErrorBody, MaterialsResponse, OtpRequest, OtpVerifyRequest, TokenResponse};
use common::session::SessionProbe;

use crate::config::API_BASE_URL;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Maps a non-2xx response to `ApiError::Remote`, pulling the provider's
    /// `{message}` out of the body when it has one.
    async fn remote_error(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ => response.status_text(),
        };
        ApiError::Remote { status, message }
    }

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    /// `POST /auth/request-otp`. The acknowledgement body is ignored.
    pub async fn post_request_otp(&self, email: &str) -> ApiResult<()> {
        let body = OtpRequest {
            email: email.to_string(),
        };
        let response = Request::post(&format!("{}/auth/request-otp", self.base_url))
            .json(&body)
            .map_err(Self::network)?
            .send()
            .await
            .map_err(Self::network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::remote_error(response).await)
        }
    }

    /// `POST /auth/verify-otp`. Returns the issued bearer token.
    pub async fn post_verify_otp(&self, email: &str, otp: &str) -> ApiResult<String> {
        let body = OtpVerifyRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let response = Request::post(&format!("{}/auth/verify-otp", self.base_url))
            .json(&body)
            .map_err(Self::network)?
            .send()
            .await
            .map_err(Self::network)?;
        if !response.ok() {
            return Err(Self::remote_error(response).await);
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;
        Ok(token.token)
    }

    /// `GET /materials`. Accepts both observed response shapes.
    pub async fn list_materials(&self) -> ApiResult<Vec<Material>> {
        let response = Request::get(&format!("{}/materials", self.base_url))
            .send()
            .await
            .map_err(Self::network)?;
        if !response.ok() {
            return Err(Self::remote_error(response).await);
        }
        let materials: MaterialsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;
        Ok(materials.into_materials())
    }

    /// `GET /materials` with the bearer token, used purely as a validity
    /// probe: the body is not consumed, only the status matters.
    pub async fn check_session(&self, token: &str) -> ApiResult<()> {
        let response = Request::get(&format!("{}/materials", self.base_url))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(Self::network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::remote_error(response).await)
        }
    }

    /// `POST /materials` as multipart form data with the bearer token.
    pub async fn upload_material(
        &self,
        token: &str,
        upload: &MaterialUpload,
        file: &File,
    ) -> ApiResult<()> {
        let form = FormData::new()
            .map_err(|_| ApiError::Network("could not build upload form".to_string()))?;
        let append = form
            .append_with_str("level", &upload.level.to_string())
            .and_then(|_| form.append_with_str("courseCode", &upload.course_code))
            .and_then(|_| form.append_with_str("courseTitle", &upload.course_title))
            .and_then(|_| form.append_with_str("description", &upload.description))
            .and_then(|_| form.append_with_blob("material", file));
        append.map_err(|_| ApiError::Network("could not build upload form".to_string()))?;

        let response = Request::post(&format!("{}/materials", self.base_url))
            .header("Authorization", &format!("Bearer {token}"))
            .body(form)
            .map_err(Self::network)?
            .send()
            .await
            .map_err(Self::network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::remote_error(response).await)
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn request_otp(&self, email: &str) -> ApiResult<()> {
        self.post_request_otp(email).await
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<String> {
        self.post_verify_otp(email, otp).await
    }
}

#[async_trait(?Send)]
impl SessionProbe for ApiClient {
    async fn check(&self, token: &str) -> ApiResult<()> {
        self.check_session(token).await
    }
}
