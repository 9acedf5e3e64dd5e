//! Parallel, context-free string rewriting.
//!
//! A [`Grammar`] is the classical `G = (V, ω, P)` triple. [`Grammar::expand`]
//! rewrites every symbol of the current string simultaneously, once per
//! generation: symbols with a production are replaced by its successor,
//! everything else is copied through unchanged.

use crate::error::{FractalError, Resource, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Ceilings applied while expanding a grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionLimits {
    /// Maximum number of symbols any generation may produce.
    pub max_symbols: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_symbols: 50_000_000,
        }
    }
}

/// A validated L-System grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    alphabet: Option<BTreeSet<char>>,
    axiom: String,
    rules: BTreeMap<char, String>,
}

impl Grammar {
    /// Builds a grammar, checking that every rule key belongs to `alphabet`.
    ///
    /// An absent or empty alphabet places no constraint on the rules.
    pub fn new(
        alphabet: Option<BTreeSet<char>>,
        axiom: impl Into<String>,
        rules: BTreeMap<char, String>,
    ) -> Result<Self> {
        if let Some(declared) = alphabet.as_ref().filter(|a| !a.is_empty())
            && let Some(&symbol) = rules.keys().find(|k| !declared.contains(k))
        {
            return Err(FractalError::Configuration { symbol });
        }

        Ok(Self {
            alphabet,
            axiom: axiom.into(),
            rules,
        })
    }

    /// The declared alphabet, if any.
    pub fn alphabet(&self) -> Option<&BTreeSet<char>> {
        self.alphabet.as_ref()
    }

    /// The initial string, before any rewriting.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Productions keyed by the symbol they rewrite.
    pub fn rules(&self) -> &BTreeMap<char, String> {
        &self.rules
    }

    /// Expands the axiom for `generations` rewriting passes with default limits.
    pub fn expand(&self, generations: u32) -> Result<String> {
        self.expand_with(generations, ExpansionLimits::default())
    }

    /// Expands the axiom for `generations` rewriting passes.
    ///
    /// The exact length of each generation is computed before it is built, so
    /// a runaway grammar fails with [`FractalError::ResourceExhaustion`] without
    /// allocating the oversized string.
    #[tracing::instrument(level = "debug", skip(self), fields(axiom = %self.axiom))]
    pub fn expand_with(&self, generations: u32, limits: ExpansionLimits) -> Result<String> {
        let mut current = self.axiom.clone();
        check_length(current.chars().count(), limits)?;

        for generation in 0..generations {
            if !current.chars().any(|c| self.rules.contains_key(&c)) {
                tracing::trace!(generation, "fixed point reached");
                break;
            }

            let (symbols, bytes) = current.chars().fold((0usize, 0usize), |(n, b), c| {
                match self.rules.get(&c) {
                    Some(successor) => (n + successor.chars().count(), b + successor.len()),
                    None => (n + 1, b + c.len_utf8()),
                }
            });
            check_length(symbols, limits)?;

            let mut next = String::with_capacity(bytes);
            for c in current.chars() {
                match self.rules.get(&c) {
                    Some(successor) => next.push_str(successor),
                    None => next.push(c),
                }
            }
            tracing::trace!(generation, symbols, "generation expanded");
            current = next;
        }

        tracing::debug!(symbols = current.chars().count(), "expansion complete");
        Ok(current)
    }
}

fn check_length(symbols: usize, limits: ExpansionLimits) -> Result<()> {
    if symbols > limits.max_symbols {
        return Err(FractalError::ResourceExhaustion {
            resource: Resource::InstructionLength,
            requested: symbols,
            limit: limits.max_symbols,
        });
    }
    Ok(())
}

/// Validates and expands a grammar in one call.
///
/// Equivalent to [`Grammar::new`] followed by [`Grammar::expand`]; the
/// alphabet check runs before any rewriting.
pub fn expand(
    alphabet: Option<&[char]>,
    axiom: &str,
    rules: &BTreeMap<char, String>,
    generations: u32,
) -> Result<String> {
    let alphabet = alphabet.map(|a| a.iter().copied().collect());
    Grammar::new(alphabet, axiom, rules.clone())?.expand(generations)
}
