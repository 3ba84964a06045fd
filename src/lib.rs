pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod http;
pub mod storage;
pub mod uploads;

pub use config::Config;
pub use error::{PressroomError, Result};
pub use storage::Store;
