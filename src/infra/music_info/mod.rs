//! External music-info lookup.

pub mod client;

pub use client::{MusicInfoApi, MusicInfoClient, LOOKUP_TIMEOUT};
