//! Property-based tests for expansion and interpretation.

use proptest::prelude::*;
use std::collections::BTreeMap;
use symbios_fractal::{Bounds, Grammar, TurtleConfig, TurtleInterpreter, interpret};

const TOLERANCE: f64 = 1e-6;

/// Rule successors over the turtle alphabet plus two variables.
fn successor_strategy(min_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['F', 'G', 'X', 'Y', '+', '-']), min_len..6)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

fn grammar_strategy(min_len: usize) -> impl Strategy<Value = Grammar> {
    (
        "[FGXY+-]{1,4}",
        prop::collection::btree_map(
            prop::sample::select(vec!['F', 'G', 'X', 'Y']),
            successor_strategy(min_len),
            0..4,
        ),
    )
        .prop_map(|(axiom, rules): (String, BTreeMap<char, String>)| {
            Grammar::new(None, axiom, rules).expect("no alphabet declared")
        })
}

/// Instruction strings with correctly nested brackets.
fn balanced_strategy() -> impl Strategy<Value = String> {
    let leaf = "[FGMNX+-]{0,6}";
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec((inner, "[FGMNX+-]{0,3}"), 1..4).prop_map(|parts| {
            parts
                .into_iter()
                .map(|(branch, tail)| format!("[{branch}]{tail}"))
                .collect::<String>()
        })
    })
}

fn encloses(outer: &Bounds, inner: &Bounds) -> bool {
    outer.min.x <= inner.min.x + TOLERANCE
        && outer.min.y <= inner.min.y + TOLERANCE
        && outer.max.x + TOLERANCE >= inner.max.x
        && outer.max.y + TOLERANCE >= inner.max.y
}

proptest! {
    #[test]
    fn expansion_is_deterministic(grammar in grammar_strategy(1), generations in 0u32..4) {
        prop_assert_eq!(grammar.expand(generations).unwrap(), grammar.expand(generations).unwrap());
    }

    #[test]
    fn zero_generations_is_identity(grammar in grammar_strategy(1)) {
        prop_assert_eq!(grammar.expand(0).unwrap(), grammar.axiom());
    }

    #[test]
    fn growing_rules_never_shrink(grammar in grammar_strategy(2), generations in 0u32..3) {
        let shorter = grammar.expand(generations).unwrap().chars().count();
        let longer = grammar.expand(generations + 1).unwrap().chars().count();
        prop_assert!(longer >= shorter);
    }

    #[test]
    fn balanced_brackets_leave_empty_stack(
        program in balanced_strategy(),
        angle in -180.0f64..180.0,
        heading in -360.0f64..360.0,
    ) {
        let out = interpret(&program, angle, heading, 1.0).unwrap();
        prop_assert_eq!(out.unclosed_branches, 0);
        let steps = program.chars().filter(|c| matches!(c, 'F' | 'G' | 'M' | 'N')).count();
        prop_assert_eq!(out.events.len(), steps);
    }

    #[test]
    fn bounds_grow_monotonically(program in balanced_strategy(), angle in 0.0f64..180.0) {
        let interpreter = TurtleInterpreter::new(TurtleConfig { angle, ..Default::default() });
        let mut previous = Bounds::default();
        for end in 0..=program.len() {
            // Prefixes of a balanced string never pop an empty stack.
            let bounds = interpreter.interpret(&program[..end]).unwrap().bounds;
            prop_assert!(encloses(&bounds, &previous));
            previous = bounds;
        }
    }

    #[test]
    fn viewport_is_square_and_centered(program in balanced_strategy(), angle in 0.0f64..180.0, step in 0.1f64..10.0) {
        let out = interpret(&program, angle, 0.0, step).unwrap();
        let viewport = out.viewport;
        prop_assert!((viewport.width() - viewport.height()).abs() < TOLERANCE);
        prop_assert!(encloses(&viewport, &out.bounds));
        prop_assert!(viewport.center().abs_diff_eq(out.bounds.center(), TOLERANCE));
    }

    #[test]
    fn every_event_lies_within_bounds(program in balanced_strategy(), angle in 0.0f64..180.0) {
        let out = interpret(&program, angle, 0.0, 1.0).unwrap();
        for event in &out.events {
            prop_assert!(out.bounds.contains(event.end));
        }
    }
}
