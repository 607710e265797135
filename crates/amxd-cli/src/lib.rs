//! amxd CLI library.
//!
//! This crate provides the driver around the envelope builder: path
//! resolution, the input existence check, staged output writes, and the
//! `build` and `types` commands.

pub mod commands;
pub mod output;
pub mod pipeline;
