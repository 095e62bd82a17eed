pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod names;
pub mod report;
pub mod subjects;
