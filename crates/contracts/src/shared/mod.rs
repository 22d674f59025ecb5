pub mod settings;
pub mod shell_config;
