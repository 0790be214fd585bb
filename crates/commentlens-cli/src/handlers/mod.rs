pub mod config;
pub mod export;
pub mod notice;
pub mod render;
