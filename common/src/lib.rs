pub mod auth;
pub mod catalog;
pub mod error;
pub mod model;
pub mod requests;
pub mod session;
