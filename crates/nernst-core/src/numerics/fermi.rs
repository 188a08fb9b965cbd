//! Fermi-window primitives: the derivative-of-Fermi-function weight and the
//! truncated symmetric offset mesh it is sampled on.

use crate::common::constants::thermal_voltage;

/// Weight of the Fermi-function derivative on its dimensionless argument
/// `beta * e * (ep - mu)`: `-1 / (2 + 2 cosh x)`.
pub fn fermi_derivative_weight(argument: f64) -> f64 {
    -1.0 / (2.0 + 2.0 * argument.cosh())
}

/// Evenly spaced chemical-potential offsets covering `[-max, +max)`, where
/// `max` is the energy at which the cosh argument reaches the truncation
/// cutoff. The upper endpoint is excluded, so the lone unpaired point is the
/// lower endpoint whose weight sits at the cutoff floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyOffsetMesh {
    half_width: f64,
    step: f64,
    points: usize,
}

impl EnergyOffsetMesh {
    pub fn for_temperature(temperature: f64, cosh_cutoff: f64, points: usize) -> Self {
        let half_width = cosh_cutoff * thermal_voltage(temperature);
        Self {
            half_width,
            step: 2.0 * half_width / points as f64,
            points,
        }
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn offset(&self, index: usize) -> f64 {
        -self.half_width + self.step * index as f64
    }

    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points).map(|index| self.offset(index))
    }
}
