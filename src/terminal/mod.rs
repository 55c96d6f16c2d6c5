//! Terminal-facing half of chklist: the raw-mode session guard and the
//! escape-sequence renderer.

pub mod raw;
pub mod render;
