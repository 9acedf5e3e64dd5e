//! End-to-end rendering: expand, interpret, fit.

use crate::bounds::Bounds;
use crate::config::LSystemConfig;
use crate::error::Result;
use crate::grammar::ExpansionLimits;
use crate::interpreter::TurtleInterpreter;
use crate::surface::DrawingSurface;
use std::ops::{Deref, DerefMut};

/// Outcome of a successful [`render`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderReport {
    /// Length of the expanded instruction string, in symbols.
    pub instruction_len: usize,
    pub segments: usize,
    pub bounds: Bounds,
    pub viewport: Bounds,
    pub unclosed_branches: usize,
}

/// Borrows a surface for one render and closes it when dropped.
struct SurfaceSession<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface + ?Sized> SurfaceSession<'a, S> {
    fn open(surface: &'a mut S) -> Self {
        Self { surface }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for SurfaceSession<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for SurfaceSession<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SurfaceSession<'_, S> {
    fn drop(&mut self) {
        self.surface.close();
    }
}

/// Renders `config` onto `surface`.
///
/// The surface is closed before this returns, whether rendering succeeded or
/// not. On a mid-walk [`FractalError::State`](crate::FractalError::State) the
/// segments drawn up to that point remain on the surface.
#[tracing::instrument(level = "debug", skip_all, fields(axiom = %config.axiom, generations = config.generations))]
pub fn render<S>(
    config: &LSystemConfig,
    limits: ExpansionLimits,
    surface: &mut S,
) -> Result<RenderReport>
where
    S: DrawingSurface + ?Sized,
{
    let mut session = SurfaceSession::open(surface);

    let grammar = config.grammar()?;
    let instructions = grammar.expand_with(config.generations, limits)?;
    let run = TurtleInterpreter::new(config.turtle_config()).run(&instructions, &mut *session)?;

    Ok(RenderReport {
        instruction_len: instructions.chars().count(),
        segments: run.segments,
        bounds: run.bounds,
        viewport: run.viewport,
        unclosed_branches: run.unclosed_branches,
    })
}
