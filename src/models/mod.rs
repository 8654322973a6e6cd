pub mod common;
pub mod daily_result;
pub mod dream;
pub mod raw;
