//! # symbios-fractal
//!
//! Expands L-System grammars and interprets the result as 2D turtle graphics.
//!
//! The pipeline has two passes. [`Grammar::expand`] rewrites the axiom in
//! parallel for a fixed number of generations. [`TurtleInterpreter`] then walks
//! the resulting string once, emitting a [`DrawEvent`] per forward step to a
//! [`DrawingSurface`] while tracking a push/pop state stack and the running
//! [`Bounds`]. The bounds are squared off at the end so the figure can be shown
//! at equal x/y scale.
//!
//! | Symbol | Meaning |
//! |---|---|
//! | `F`, `G` | forward, pen down |
//! | `M`, `N` | forward, pen up |
//! | `+` / `-` | turn left / right by the angle |
//! | `[` / `]` | save / restore position and heading |
//!
//! Every other symbol is a constant and is ignored while drawing.

pub mod bounds;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod presets;
pub mod render;
pub mod surface;
pub mod turtle;

pub use bounds::*;
pub use config::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use presets::*;
pub use render::*;
pub use surface::*;
pub use turtle::*;
