use crate::error::{Error, Result};

pub(crate) fn real(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidType { parameter, value })
    }
}

pub(crate) fn positive(parameter: &'static str, value: f64) -> Result<f64> {
    let value = real(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDomain {
            parameter,
            value,
            requirement: "greater than 0",
        })
    }
}

/// Bounded (elliptical) orbits only: `0 <= e < 1`.
pub(crate) fn eccentricity(value: f64) -> Result<f64> {
    let value = real("eccentricity", value)?;
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidDomain {
            parameter: "eccentricity",
            value,
            requirement: "between 0 and 1 (0 <= e < 1)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_real_numbers() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                positive("mass", value),
                Err(Error::InvalidType {
                    parameter: "mass",
                    ..
                })
            ));
        }
    }

    #[test]
    fn rejects_non_positive_numbers() {
        for value in [0.0, -0.0, -1.0, -1000.0] {
            assert!(matches!(
                positive("radius", value),
                Err(Error::InvalidDomain {
                    parameter: "radius",
                    ..
                })
            ));
        }
        assert_eq!(positive("radius", 1.5), Ok(1.5));
    }

    #[test]
    fn eccentricity_is_half_open() {
        assert_eq!(eccentricity(0.0), Ok(0.0));
        assert_eq!(eccentricity(0.999), Ok(0.999));
        for value in [1.0, 2.0, -0.1] {
            assert!(matches!(
                eccentricity(value),
                Err(Error::InvalidDomain { .. })
            ));
        }
        assert!(matches!(
            eccentricity(f64::NAN),
            Err(Error::InvalidType { .. })
        ));
    }
}
