pub mod add;
pub mod bulk;
pub mod common;
pub mod config;
pub mod db;
pub mod del;
pub mod dream;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod today;
