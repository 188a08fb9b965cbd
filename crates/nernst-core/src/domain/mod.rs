//! Fermi-referenced conductivity tables and their sampling policy.

use serde::Serialize;

/// Tabulated anomalous Hall conductivity versus energy relative to the Fermi
/// level. Energies are strictly increasing and every entry is finite; both
/// invariants are enforced at construction so sampling never revalidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConductivityCurve {
    energies: Vec<f64>,
    conductivities: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRegion {
    BelowRange,
    Interior,
    AboveRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    pub value: f64,
    pub region: SampleRegion,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("conductivity curve requires at least 2 points, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error(
        "conductivity curve length mismatch: energies={energies}, conductivities={conductivities}"
    )]
    LengthMismatch {
        energies: usize,
        conductivities: usize,
    },
    #[error("curve energy must be finite at index {index}, got {value}")]
    NonFiniteEnergy { index: usize, value: f64 },
    #[error(
        "curve energies must be strictly increasing, index {index} has {current} after {previous}"
    )]
    NonIncreasingEnergy {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("curve conductivity must be finite at index {index}, got {value}")]
    NonFiniteConductivity { index: usize, value: f64 },
    #[error("fermi level must be finite, got {value}")]
    NonFiniteFermiLevel { value: f64 },
}

impl ConductivityCurve {
    pub fn new(energies: Vec<f64>, conductivities: Vec<f64>) -> Result<Self, CurveError> {
        validate_table(&energies, &conductivities)?;
        Ok(Self {
            energies,
            conductivities,
        })
    }

    /// Build a curve from absolute energies by referencing them to the Fermi
    /// level, the form every fermi-scan file tabulates.
    pub fn from_fermi_scan(
        energies: Vec<f64>,
        conductivities: Vec<f64>,
        fermi_level: f64,
    ) -> Result<Self, CurveError> {
        if !fermi_level.is_finite() {
            return Err(CurveError::NonFiniteFermiLevel { value: fermi_level });
        }
        let referenced = energies
            .into_iter()
            .map(|energy| energy - fermi_level)
            .collect();
        Self::new(referenced, conductivities)
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn conductivities(&self) -> &[f64] {
        &self.conductivities
    }

    /// First and last tabulated energy.
    pub fn domain(&self) -> (f64, f64) {
        (self.energies[0], self.energies[self.energies.len() - 1])
    }

    /// Spacing of the leading interval, the reference step for the
    /// extrapolation decay length.
    pub fn first_step(&self) -> f64 {
        self.energies[1] - self.energies[0]
    }

    /// Conductivity at an arbitrary energy: linear interpolation inside the
    /// tabulated domain, boundary-slope extrapolation decayed over
    /// `decay_length` outside it.
    ///
    /// The bracket search is a forward scan that keeps its index after loop
    /// exit; a query equal to the last tabulated energy must fall through to
    /// the zero-distance extrapolation branch, so the scan is not
    /// interchangeable with a binary search.
    pub fn sample_with_decay(&self, energy: f64, decay_length: f64) -> CurveSample {
        let energies = &self.energies;
        let conductivities = &self.conductivities;
        let last = energies.len() - 1;

        let mut index = 0;
        let mut bracketed = false;
        for (scan_index, grid_energy) in energies.iter().copied().enumerate() {
            index = scan_index;
            if energy < grid_energy {
                bracketed = true;
                break;
            }
        }

        if index == 0 && bracketed {
            let slope = (conductivities[1] - conductivities[0]) / (energies[1] - energies[0]);
            let distance = energies[0] - energy;
            CurveSample {
                value: conductivities[0]
                    - slope * distance * (-distance / decay_length).exp(),
                region: SampleRegion::BelowRange,
            }
        } else if index == last && !bracketed {
            let slope = (conductivities[last] - conductivities[last - 1])
                / (energies[last] - energies[last - 1]);
            let distance = energy - energies[last];
            CurveSample {
                value: conductivities[last]
                    + slope * distance * (-distance / decay_length).exp(),
                region: SampleRegion::AboveRange,
            }
        } else {
            let slope = (conductivities[index] - conductivities[index - 1])
                / (energies[index] - energies[index - 1]);
            CurveSample {
                value: conductivities[index - 1] + slope * (energy - energies[index - 1]),
                region: SampleRegion::Interior,
            }
        }
    }
}

fn validate_table(energies: &[f64], conductivities: &[f64]) -> Result<(), CurveError> {
    if energies.len() < 2 {
        return Err(CurveError::InsufficientPoints {
            actual: energies.len(),
        });
    }
    if energies.len() != conductivities.len() {
        return Err(CurveError::LengthMismatch {
            energies: energies.len(),
            conductivities: conductivities.len(),
        });
    }

    for (index, value) in energies.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(CurveError::NonFiniteEnergy { index, value });
        }
        if index > 0 {
            let previous = energies[index - 1];
            if value <= previous {
                return Err(CurveError::NonIncreasingEnergy {
                    index,
                    previous,
                    current: value,
                });
            }
        }
    }

    for (index, value) in conductivities.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(CurveError::NonFiniteConductivity { index, value });
        }
    }

    Ok(())
}
