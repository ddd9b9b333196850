pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod github;
pub mod init;
pub mod logging;
pub mod output;
pub mod run;
pub mod storage;
