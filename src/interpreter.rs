//! Interpreter that walks an instruction string and drives a [`DrawingSurface`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], then call [`TurtleInterpreter::run`] with any surface, or
//! [`TurtleInterpreter::interpret`] to collect the draw events in memory.

use crate::bounds::Bounds;
use crate::error::{FractalError, Resource, Result};
use crate::surface::{DrawEvent, DrawingSurface, EventRecorder};
use crate::turtle::{TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};

/// Configuration for turtle interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Turn angle in degrees applied by `+` and `-`.
    pub angle: f64,
    /// Initial heading in degrees, counter-clockwise from +X.
    pub start_heading: f64,
    /// Distance covered by one `F`, `G`, `M` or `N`.
    pub step: f64,
    /// Maximum number of saved states on the push/pop stack.
    pub max_stack_depth: usize,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            angle: 90.0,
            start_heading: 0.0,
            step: 1.0,
            max_stack_depth: 1_000_000,
        }
    }
}

/// Summary of one completed walk over an instruction string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleRun {
    /// Bounds of every position the turtle moved to, origin included.
    pub bounds: Bounds,
    /// `bounds` squared off; this is what the surface was fitted to.
    pub viewport: Bounds,
    /// Turtle state after the last instruction.
    pub final_state: TurtleState,
    /// Number of draw events emitted (visible and invisible).
    pub segments: usize,
    /// States still on the stack at the end. Zero for balanced brackets.
    pub unclosed_branches: usize,
}

/// A walk whose draw events were collected in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpretation {
    pub events: Vec<DrawEvent>,
    pub bounds: Bounds,
    pub viewport: Bounds,
    pub final_state: TurtleState,
    pub unclosed_branches: usize,
}

/// Interprets L-System output as 2D turtle graphics.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the given turn angle, heading, step and stack ceiling.
    pub fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    /// The configuration this interpreter was built with.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Walks `instructions` once, left to right, sending every step to `surface`.
    ///
    /// The turtle starts at the origin facing `start_heading`. After the last
    /// symbol the surface receives one [`DrawingSurface::fit_viewport`] call
    /// with the squared bounds.
    ///
    /// # Errors
    ///
    /// * [`FractalError::State`] when `]` meets an empty stack. Events sent
    ///   before the offending symbol stay on the surface; the viewport is not
    ///   fitted.
    /// * [`FractalError::ResourceExhaustion`] when a `[` would grow the stack past
    ///   `max_stack_depth`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = instructions.len()))]
    pub fn run<S>(&self, instructions: &str, surface: &mut S) -> Result<TurtleRun>
    where
        S: DrawingSurface + ?Sized,
    {
        let TurtleConfig {
            angle,
            start_heading,
            step,
            max_stack_depth,
        } = self.config;

        let mut turtle = TurtleState::facing(start_heading);
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut bounds = Bounds::default();
        let mut segments = 0;

        for (index, symbol) in instructions.chars().enumerate() {
            match TurtleOp::from_symbol(symbol) {
                op @ (TurtleOp::Draw | TurtleOp::Move) => {
                    let start = turtle.position;
                    let end = turtle.advance(step);
                    bounds.include(end);
                    surface.draw(DrawEvent {
                        start,
                        end,
                        visible: op == TurtleOp::Draw,
                    });
                    segments += 1;
                }
                TurtleOp::TurnLeft => turtle.turn(angle),
                TurtleOp::TurnRight => turtle.turn(-angle),
                TurtleOp::Push => {
                    if stack.len() >= max_stack_depth {
                        return Err(FractalError::ResourceExhaustion {
                            resource: Resource::StackDepth,
                            requested: stack.len() + 1,
                            limit: max_stack_depth,
                        });
                    }
                    stack.push(turtle);
                }
                TurtleOp::Pop => {
                    turtle = stack.pop().ok_or(FractalError::State { index })?;
                }
                TurtleOp::Ignore => {}
            }
        }

        if !stack.is_empty() {
            tracing::warn!(depth = stack.len(), "instruction string ended with unclosed '['");
        }

        let viewport = bounds.square_viewport();
        surface.fit_viewport(viewport);
        tracing::debug!(segments, ?bounds, "interpretation complete");

        Ok(TurtleRun {
            bounds,
            viewport,
            final_state: turtle,
            segments,
            unclosed_branches: stack.len(),
        })
    }

    /// Like [`run`](Self::run), collecting the draw events into memory.
    ///
    /// To keep the events emitted before a failure, call `run` with an
    /// [`EventRecorder`] instead and inspect it afterwards.
    pub fn interpret(&self, instructions: &str) -> Result<Interpretation> {
        let mut recorder = EventRecorder::new();
        let run = self.run(instructions, &mut recorder)?;
        Ok(Interpretation {
            events: recorder.events,
            bounds: run.bounds,
            viewport: run.viewport,
            final_state: run.final_state,
            unclosed_branches: run.unclosed_branches,
        })
    }
}

/// Interprets `instructions` with the given angle, start heading and step.
pub fn interpret(
    instructions: &str,
    angle_degrees: f64,
    start_heading_degrees: f64,
    step_distance: f64,
) -> Result<Interpretation> {
    TurtleInterpreter::new(TurtleConfig {
        angle: angle_degrees,
        start_heading: start_heading_degrees,
        step: step_distance,
        ..Default::default()
    })
    .interpret(instructions)
}
