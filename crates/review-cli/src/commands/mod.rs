pub mod config;
pub mod prompts;
pub mod replay;
pub mod session;
