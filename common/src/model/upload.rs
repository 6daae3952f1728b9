use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Metadata entered for a material submission. The file itself stays in
/// the view layer (a browser `File` handle); only its name travels here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUpload {
    pub level: u32,
    pub course_code: String,
    pub course_title: String,
    pub description: String,
    pub file_name: String,
}

impl MaterialUpload {
    /// Rejects any missing required field before a request is built, so a
    /// doomed upload never reaches the network.
    pub fn validate(&self) -> ApiResult<()> {
        if self.course_code.trim().is_empty() {
            return Err(ApiError::Validation("course code is required".to_string()));
        }
        if self.course_title.trim().is_empty() {
            return Err(ApiError::Validation("course title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::Validation("description is required".to_string()));
        }
        if self.file_name.is_empty() {
            return Err(ApiError::Validation(
                "please select a material file".to_string(),
            ));
        }
        Ok(())
    }
}

/// Client-reported status of a just-submitted upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UploadState {
    /// The request is on the wire.
    InFlight,
    /// The server acknowledged the upload.
    Done,
    /// The upload failed. Contains the displayable error message.
    Failed(String),
}

/// Local-only record of a submitted upload, kept for session-local display.
/// Never reconciled with server truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingUpload {
    /// Client-generated identifier (the frontend uses a UUID).
    pub id: String,
    pub upload: MaterialUpload,
    pub state: UploadState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MaterialUpload {
        MaterialUpload {
            level: 200,
            course_code: "CSC 249.2".to_string(),
            course_title: "Data Structures".to_string(),
            description: "Week 3 notes".to_string(),
            file_name: "week3.pdf".to_string(),
        }
    }

    #[test]
    fn complete_upload_passes_validation() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let mut no_code = filled();
        no_code.course_code = "  ".to_string();
        assert!(matches!(
            no_code.validate(),
            Err(ApiError::Validation(msg)) if msg.contains("course code")
        ));

        let mut no_title = filled();
        no_title.course_title.clear();
        assert!(no_title.validate().is_err());

        let mut no_description = filled();
        no_description.description.clear();
        assert!(no_description.validate().is_err());

        let mut no_file = filled();
        no_file.file_name.clear();
        assert!(matches!(
            no_file.validate(),
            Err(ApiError::Validation(msg)) if msg.contains("file")
        ));
    }
}
