pub mod config;
pub mod error;
pub mod feed;
pub mod http_client;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use http_client::HttpClient;
pub use session::{Session, SessionStore};
