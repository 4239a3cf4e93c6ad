//! Everything involved in talking to a `MongoDB` instance through its
//! shells: credential resolution, the shell subprocess, and payload
//! decoding.

pub mod credentials;
pub mod payload;
pub mod shell;
