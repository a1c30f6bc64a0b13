//! Harvard spectral classification by effective temperature.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralLetter {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl fmt::Display for SpectralLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SpectralClass {
    pub letter: SpectralLetter,
    /// Apparent colour of the star.
    pub chromaticity: &'static str,
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.letter, self.chromaticity)
    }
}

/// Lower temperature bound of each class (`K`), hottest first.
const CLASSES: [(f64, SpectralLetter, &str); 7] = [
    (30_000.0, SpectralLetter::O, "blue"),
    (10_000.0, SpectralLetter::B, "bluish white"),
    (7_500.0, SpectralLetter::A, "white"),
    (6_000.0, SpectralLetter::F, "yellowish white"),
    (5_200.0, SpectralLetter::G, "yellow"),
    (3_700.0, SpectralLetter::K, "light orange"),
    (2_400.0, SpectralLetter::M, "orangish red"),
];

pub fn classify(temperature: f64) -> Result<SpectralClass> {
    let temperature = validate::positive("temperature", temperature)?;
    CLASSES
        .iter()
        .find(|(floor, _, _)| temperature >= *floor)
        .map(|&(_, letter, chromaticity)| SpectralClass {
            letter,
            chromaticity,
        })
        .ok_or(Error::InvalidDomain {
            parameter: "temperature",
            value: temperature,
            requirement: "at least 2400 K to be classified",
        })
}
