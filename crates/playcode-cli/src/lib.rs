//! PlayCode CLI library.
//!
//! This crate provides the command implementations behind the `playcode`
//! binary: frequency table printing, sound-code decoding, and play-notation
//! encoding.

pub mod commands;
pub mod input;
