mod application;
pub mod cli;
pub mod commands;
pub mod registrator;
pub mod settings;

pub use application::Application;
pub(crate) use application::usage_error;
pub use registrator::{ConfigRegistrator, build_config};
