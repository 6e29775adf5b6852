pub mod config;
pub mod logging;

pub mod catalog;
pub mod downloader;
pub mod retry;
pub mod scheduler;
pub mod storage;
