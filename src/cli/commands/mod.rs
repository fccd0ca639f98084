pub mod add;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod show;
pub mod trend;
