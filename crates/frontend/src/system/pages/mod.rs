pub mod chat;
pub mod demo_settings;
