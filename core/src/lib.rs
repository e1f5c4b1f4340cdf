pub mod config;
pub mod db;
pub mod error;
pub mod fonts;
pub mod services;

pub use config::AppConfig;
pub use error::{CoreError, CoreResult};
