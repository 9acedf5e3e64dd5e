// tests/interpretation.rs
use glam::DVec2;
use symbios_fractal::{
    DrawingSurface, EventRecorder, FractalError, Resource, TurtleConfig, TurtleInterpreter,
    interpret,
};

const EPS: f64 = 1e-9;

fn interpreter(angle: f64, start_heading: f64) -> TurtleInterpreter {
    TurtleInterpreter::new(TurtleConfig {
        angle,
        start_heading,
        ..Default::default()
    })
}

#[test]
fn test_branch_is_discarded_on_pop() {
    let out = interpret("F[+F]-F", 90.0, 0.0, 1.0).unwrap();

    assert_eq!(out.events.len(), 3);
    assert_eq!(out.unclosed_branches, 0);
    assert!((out.final_state.heading - -90.0).abs() < EPS);

    // Trunk to (1, 0), branch up to (1, 1), then from (1, 0) down to (1, -1).
    assert!(out.events[1].start.abs_diff_eq(DVec2::new(1.0, 0.0), EPS));
    assert!(out.events[1].end.abs_diff_eq(DVec2::new(1.0, 1.0), EPS));
    assert!(out.events[2].start.abs_diff_eq(DVec2::new(1.0, 0.0), EPS));
    assert!(out.events[2].end.abs_diff_eq(DVec2::new(1.0, -1.0), EPS));
    assert!(out.final_state.position.abs_diff_eq(DVec2::new(1.0, -1.0), EPS));
}

#[test]
fn test_lone_pop_is_a_state_error() {
    let mut recorder = EventRecorder::new();
    let err = interpreter(90.0, 0.0).run("]", &mut recorder).unwrap_err();

    assert!(matches!(err, FractalError::State { index: 0 }));
    assert!(recorder.events.is_empty());
    assert!(recorder.viewport.is_none());
}

#[test]
fn test_events_before_state_error_are_kept() {
    let mut recorder = EventRecorder::new();
    let err = interpreter(90.0, 0.0)
        .run("FF[F]]F", &mut recorder)
        .unwrap_err();

    assert!(matches!(err, FractalError::State { index: 5 }));
    assert_eq!(recorder.events.len(), 3);
}

#[test]
fn test_pen_up_moves_are_invisible_but_bounded() {
    let out = interpret("FMGN", 90.0, 0.0, 2.0).unwrap();
    let visibility: Vec<bool> = out.events.iter().map(|e| e.visible).collect();
    assert_eq!(visibility, [true, false, true, false]);
    assert!((out.bounds.max.x - 8.0).abs() < EPS);
}

#[test]
fn test_constants_do_not_move_the_turtle() {
    let out = interpret("XYZ|f", 90.0, 0.0, 1.0).unwrap();
    assert!(out.events.is_empty());
    assert_eq!(out.final_state.position, DVec2::ZERO);
    assert_eq!(out.bounds.min, DVec2::ZERO);
    assert_eq!(out.bounds.max, DVec2::ZERO);
}

#[test]
fn test_start_heading_and_turns() {
    let out = interpret("F+F", 90.0, 90.0, 1.0).unwrap();
    assert!(out.events[0].end.abs_diff_eq(DVec2::new(0.0, 1.0), EPS));
    assert!(out.events[1].end.abs_diff_eq(DVec2::new(-1.0, 1.0), EPS));
}

#[test]
fn test_heading_stays_normalized() {
    let turns = "+".repeat(10_001);
    let out = interpret(&turns, 90.0, 0.0, 1.0).unwrap();
    assert!(out.final_state.heading >= -180.0 && out.final_state.heading < 180.0);
    assert!((out.final_state.heading - 90.0).abs() < EPS);
}

#[test]
fn test_unclosed_branches_are_reported() {
    let out = interpret("[[F]", 90.0, 0.0, 1.0).unwrap();
    assert_eq!(out.unclosed_branches, 1);
}

#[test]
fn test_stack_depth_ceiling() {
    let interpreter = TurtleInterpreter::new(TurtleConfig {
        max_stack_depth: 2,
        ..Default::default()
    });
    assert!(interpreter.interpret("[[F]]").is_ok());
    let err = interpreter.interpret("[[[F]]]").unwrap_err();
    assert!(matches!(
        err,
        FractalError::ResourceExhaustion {
            resource: Resource::StackDepth,
            requested: 3,
            limit: 2,
        }
    ));
}

#[test]
fn test_square_viewport_is_fitted_once() {
    struct CountingSurface {
        draws: usize,
        fits: Vec<symbios_fractal::Bounds>,
    }
    impl DrawingSurface for CountingSurface {
        fn draw(&mut self, _event: symbios_fractal::DrawEvent) {
            self.draws += 1;
        }
        fn fit_viewport(&mut self, viewport: symbios_fractal::Bounds) {
            self.fits.push(viewport);
        }
    }

    let mut surface = CountingSurface {
        draws: 0,
        fits: Vec::new(),
    };
    let run = interpreter(90.0, 0.0)
        .run("FFFF+F", &mut surface)
        .unwrap();

    assert_eq!(surface.draws, 5);
    assert_eq!(surface.fits.len(), 1);
    let fit = surface.fits[0];
    assert!((fit.width() - 4.0).abs() < EPS);
    assert!((fit.height() - 4.0).abs() < EPS);
    assert!((fit.min.y - -1.5).abs() < EPS);
    assert_eq!(fit, run.viewport);
}

#[test]
fn test_events_only_jump_after_restore() {
    let mut recorder = EventRecorder::new();
    interpreter(90.0, 0.0)
        .run("FM[+F]G", &mut recorder)
        .unwrap();

    // `]` emits nothing; the step after it starts from the restored position.
    let events = &recorder.events;
    assert_eq!(events.len(), 4);
    assert_eq!(events[0].start, DVec2::ZERO);
    assert_eq!(events[1].start, events[0].end);
    assert!(!events[1].visible);
    assert_eq!(events[2].start, events[1].end);
    assert_eq!(events[3].start, events[1].end);
    assert_ne!(events[3].start, events[2].end);
}
