pub mod add;
pub mod bulk;
pub mod common;
pub mod del;
pub mod dream;
pub mod log;
pub mod today;
