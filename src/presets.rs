//! A catalog of classic L-System figures.
//!
//! Each preset is only data: a grammar plus turtle parameters. The generation
//! count is left to the caller since it controls output size.

use crate::config::LSystemConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    RightKoch,
    DragonCurve,
    Sierpinski,
    Plant1,
    Plant2,
    HilbertCurve,
    KochIsland,
    SquareKoch,
    Plant3,
    KochBurst,
}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Self::RightKoch,
        Self::DragonCurve,
        Self::Sierpinski,
        Self::Plant1,
        Self::Plant2,
        Self::HilbertCurve,
        Self::KochIsland,
        Self::SquareKoch,
        Self::Plant3,
        Self::KochBurst,
    ];

    /// Kebab-case name used by [`FromStr`] and [`Display`](std::fmt::Display).
    pub fn name(self) -> &'static str {
        match self {
            Self::RightKoch => "right-koch",
            Self::DragonCurve => "dragon-curve",
            Self::Sierpinski => "sierpinski",
            Self::Plant1 => "plant-1",
            Self::Plant2 => "plant-2",
            Self::HilbertCurve => "hilbert-curve",
            Self::KochIsland => "koch-island",
            Self::SquareKoch => "square-koch",
            Self::Plant3 => "plant-3",
            Self::KochBurst => "koch-burst",
        }
    }

    /// A generation count that renders in well under a second.
    pub fn suggested_generations(self) -> u32 {
        match self {
            Self::DragonCurve => 12,
            Self::Sierpinski | Self::Plant1 | Self::HilbertCurve => 6,
            Self::Plant2 | Self::Plant3 | Self::RightKoch | Self::SquareKoch => 5,
            Self::KochIsland => 2,
            Self::KochBurst => 4,
        }
    }

    /// Resolves the preset into a full configuration.
    pub fn config(self, generations: u32) -> LSystemConfig {
        match self {
            Self::RightKoch => LSystemConfig::new("F", [('F', "F+F-F-F+F")], generations, 90.0)
                .with_alphabet(['F']),
            Self::DragonCurve => {
                LSystemConfig::new("FX", [('X', "X+YF"), ('Y', "FX-Y")], generations, 90.0)
                    .with_alphabet(['X', 'Y'])
            }
            Self::Sierpinski => {
                LSystemConfig::new("F", [('F', "G-F-G"), ('G', "F+G+F")], generations, 60.0)
                    .with_alphabet(['F', 'G'])
            }
            Self::Plant1 => {
                LSystemConfig::new("F", [('G', "GG"), ('F', "G[+F]-F")], generations, 45.0)
                    .with_alphabet(['F', 'G'])
                    .with_start_heading(90.0)
            }
            Self::Plant2 => LSystemConfig::new(
                "X",
                [('X', "F-[[X]+X]+F[+FX]-X"), ('F', "FF")],
                generations,
                335.0,
            )
            .with_alphabet(['X', 'F'])
            .with_start_heading(70.0),
            Self::HilbertCurve => LSystemConfig::new(
                "A",
                [('A', "-BF+AFA+FB-"), ('B', "+AF-BFB-FA+")],
                generations,
                90.0,
            )
            .with_alphabet(['A', 'B']),
            Self::KochIsland => LSystemConfig::new(
                "F-F-F-F",
                [('F', "F+FF-FF-F-F+F+FF-F-F+F+FF+FF-F")],
                generations,
                90.0,
            )
            .with_alphabet(['F']),
            Self::SquareKoch => {
                LSystemConfig::new("F-F-F-F", [('F', "FF-F-F-F-FF")], generations, 90.0)
                    .with_alphabet(['F'])
            }
            Self::Plant3 => {
                LSystemConfig::new("X", [('X', "F[+X]F[-X]+X"), ('F', "FF")], generations, 20.0)
                    .with_alphabet(['F', 'X'])
                    .with_start_heading(90.0)
            }
            Self::KochBurst => {
                LSystemConfig::new("F++F++F++F++F", [('F', "F+F--FF++F-F")], generations, 72.0)
                    .with_alphabet(['F'])
                    .with_start_heading(180.0)
            }
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown preset {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
