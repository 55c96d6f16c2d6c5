//! This module constitutes the headless core of chklist: the checklist
//! data, key decoding, and the navigation state machine. Nothing in here
//! performs terminal I/O; output is written to whatever sink the caller
//! provides.

pub mod input;
pub mod list;
pub mod navigation;
