//! Move rules: per-range resolution, board reconciliation, whole-board slides.
//!
//! All functions here are pure: they read a board and tile map and return
//! new ones.

pub mod resolver;
pub mod reconcile;
pub mod slide;

pub use resolver::{resolve_line, resolve_range, LineMove};
pub use reconcile::{reconcile, Reconciled};
pub use slide::{can_slide, slide, Slide};
