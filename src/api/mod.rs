//! # Chapter API
//!
//! Where the chapter list comes from. The screen only sees the
//! [`ChapterSource`] trait; [`EquranClient`] is the HTTP implementation.

pub mod client;
pub mod source;

pub use client::{DEFAULT_BASE_URL, EquranClient, parse_envelope};
pub use source::{ChapterSource, FetchError};
