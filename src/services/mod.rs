pub mod invoke;
pub mod relay;
pub mod server;
pub mod settings;
pub mod telegram;
