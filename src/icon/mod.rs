//! Procedural app icon rendering.
//!
//! The icon is described by a serializable [`IconProfile`], expanded into an
//! ordered list of [`DrawOp`] instruction records by [`build_draw_plan`],
//! and executed against a [`Canvas`](crate::canvas::Canvas) by
//! [`IconRenderer`].

pub mod layout;
pub mod profile;
pub mod renderer;

pub use layout::{build_draw_plan, DrawOp};
pub use profile::{ColorRgb, IconProfile};
pub use renderer::IconRenderer;
