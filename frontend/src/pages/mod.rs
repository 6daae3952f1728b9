mod auth_page;
mod home_page;
mod upload_page;

pub use auth_page::AuthPage;
pub use home_page::HomePage;
pub use upload_page::UploadPage;
