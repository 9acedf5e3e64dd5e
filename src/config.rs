//! Fully resolved description of one fractal: grammar, generation count and turtle parameters.

use crate::error::Result;
use crate::grammar::Grammar;
use crate::interpreter::TurtleConfig;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

fn default_step() -> f64 {
    1.0
}

/// Everything needed to render one L-System figure.
///
/// Serializes to JSON as, for example:
///
/// ```json
/// { "alphabet": ["F"], "axiom": "F", "rules": { "F": "F+F-F-F+F" },
///   "generations": 3, "angle": 90.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemConfig {
    /// Declared symbols. Rule keys must be members when present and non-empty.
    #[serde(default)]
    pub alphabet: Option<BTreeSet<char>>,

    pub axiom: String,

    #[serde(default)]
    pub rules: BTreeMap<char, String>,

    pub generations: u32,

    /// Turn angle in degrees.
    pub angle: f64,

    /// Initial heading in degrees, counter-clockwise from +X.
    #[serde(default)]
    pub start_heading: f64,

    #[serde(default = "default_step")]
    pub step: f64,
}

impl LSystemConfig {
    /// Creates a config with no declared alphabet, heading 0 and step 1.
    pub fn new(
        axiom: impl Into<String>,
        rules: impl IntoIterator<Item = (char, &'static str)>,
        generations: u32,
        angle: f64,
    ) -> Self {
        Self {
            alphabet: None,
            axiom: axiom.into(),
            rules: rules.into_iter().map(|(k, v)| (k, v.to_string())).collect(),
            generations,
            angle,
            start_heading: 0.0,
            step: default_step(),
        }
    }

    /// Declares the alphabet that rule keys are checked against.
    pub fn with_alphabet(mut self, alphabet: impl IntoIterator<Item = char>) -> Self {
        self.alphabet = Some(alphabet.into_iter().collect());
        self
    }

    /// Sets the initial heading in degrees.
    pub fn with_start_heading(mut self, degrees: f64) -> Self {
        self.start_heading = degrees;
        self
    }

    /// Sets the distance covered by one forward step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the number of rewriting passes.
    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    /// Validates the grammar part of the config.
    pub fn grammar(&self) -> Result<Grammar> {
        Grammar::new(self.alphabet.clone(), self.axiom.clone(), self.rules.clone())
    }

    /// Turtle parameters with the default stack ceiling.
    pub fn turtle_config(&self) -> TurtleConfig {
        TurtleConfig {
            angle: self.angle,
            start_heading: self.start_heading,
            step: self.step,
            ..Default::default()
        }
    }

    /// Parses a config from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
