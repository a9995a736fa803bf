pub mod config;
mod game_service;
mod service_config;

pub use game_service::GameService;
pub use service_config::{ServiceConfig, default_config_manager};
