pub mod chat;
pub mod export;
pub mod generate;
pub mod projects;
pub mod system;
