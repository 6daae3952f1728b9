pub mod material;
pub mod upload;

pub use material::{Material, LEVELS};
pub use upload::{MaterialUpload, PendingUpload, UploadState};
