pub mod config;
pub mod logging;
pub mod music_info;
