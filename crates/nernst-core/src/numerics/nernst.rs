//! Anomalous Nernst coefficient from an anomalous Hall conductivity scan.
//!
//! Each candidate chemical potential is convolved against the derivative of
//! the Fermi function on a truncated offset mesh; conductivity values come
//! from the curve's interpolation/extrapolation policy. The two final-scaling
//! conventions found in fermi-scan tooling are both supported and selected
//! explicitly through [`AncScaling`].

use crate::common::constants::{BOLTZMANN_J_PER_K, ELEMENTARY_CHARGE_C};
use crate::domain::ConductivityCurve;
use crate::numerics::fermi::{EnergyOffsetMesh, fermi_derivative_weight};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Truncation of the cosh argument in the Fermi weight; beyond this the
/// weight is far below machine precision relative to its peak.
pub const DEFAULT_COSH_CUTOFF: f64 = 200.0;
pub const DEFAULT_MESH_POINTS: usize = 10_000;
/// Extrapolation decay length in units of the curve's leading energy step.
pub const DEFAULT_DECAY_STEP_MULTIPLE: f64 = 5.0;

/// Final scaling convention for the integrated coefficient.
///
/// Both variants apply `sum * step * beta / T * 100 * e`; the elementary
/// charge enters the numerator twice and the denominator once, leaving the
/// single power applied here, and the factor 100 converts S/cm input to S/m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AncScaling {
    /// Transport coefficient `alpha_ij` in A/(K·m).
    #[default]
    Coefficient,
    /// Seebeck-like ratio `alpha_ij / T` in A/(K²·m).
    CoefficientOverTemperature,
}

impl AncScaling {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coefficient => "alpha",
            Self::CoefficientOverTemperature => "alpha-over-t",
        }
    }

    fn apply(self, coefficient: f64, temperature: f64) -> f64 {
        match self {
            Self::Coefficient => coefficient,
            Self::CoefficientOverTemperature => coefficient / temperature,
        }
    }
}

impl Display for AncScaling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NernstConfig {
    pub cosh_cutoff: f64,
    pub mesh_points: usize,
    pub decay_step_multiple: f64,
    pub scaling: AncScaling,
}

impl Default for NernstConfig {
    fn default() -> Self {
        Self {
            cosh_cutoff: DEFAULT_COSH_CUTOFF,
            mesh_points: DEFAULT_MESH_POINTS,
            decay_step_multiple: DEFAULT_DECAY_STEP_MULTIPLE,
            scaling: AncScaling::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NernstError {
    #[error("temperature must be finite and > 0 kelvin, got {value}")]
    InvalidTemperature { value: f64 },
    #[error("offset mesh requires at least 2 points, got {mesh_points}")]
    MeshTooSmall { mesh_points: usize },
    #[error("cosh cutoff must be finite and > 0, got {value}")]
    InvalidCoshCutoff { value: f64 },
    #[error("decay step multiple must be finite and > 0, got {value}")]
    InvalidDecayStepMultiple { value: f64 },
    #[error("chemical potential candidates must be finite, index {index} got {value}")]
    NonFiniteChemicalPotential { index: usize, value: f64 },
    #[error("integration produced a non-finite coefficient at chemical potential {chemical_potential}")]
    NonFiniteResult { chemical_potential: f64 },
}

/// One coefficient per candidate chemical potential, in candidate order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AncScan {
    pub chemical_potentials: Vec<f64>,
    pub coefficients: Vec<f64>,
    pub temperature: f64,
    pub scaling: AncScaling,
}

pub trait NernstIntegrationApi {
    fn anc_scan(
        &self,
        curve: &ConductivityCurve,
        temperature: f64,
    ) -> Result<AncScan, NernstError>;

    fn anc_at(
        &self,
        curve: &ConductivityCurve,
        chemical_potential: f64,
        temperature: f64,
    ) -> Result<f64, NernstError>;
}

impl NernstIntegrationApi for NernstConfig {
    fn anc_scan(
        &self,
        curve: &ConductivityCurve,
        temperature: f64,
    ) -> Result<AncScan, NernstError> {
        anc_scan(curve, temperature, self)
    }

    fn anc_at(
        &self,
        curve: &ConductivityCurve,
        chemical_potential: f64,
        temperature: f64,
    ) -> Result<f64, NernstError> {
        anc_at_chemical_potential(curve, chemical_potential, temperature, self)
    }
}

/// Sweep every tabulated energy of the curve as a candidate chemical
/// potential.
pub fn anc_scan(
    curve: &ConductivityCurve,
    temperature: f64,
    config: &NernstConfig,
) -> Result<AncScan, NernstError> {
    anc_scan_at(curve, curve.energies(), temperature, config)
}

/// Convenience wrapper for a single candidate chemical potential.
pub fn anc_at_chemical_potential(
    curve: &ConductivityCurve,
    chemical_potential: f64,
    temperature: f64,
    config: &NernstConfig,
) -> Result<f64, NernstError> {
    let scan = anc_scan_at(curve, &[chemical_potential], temperature, config)?;
    Ok(scan.coefficients[0])
}

/// Integrate the Nernst coefficient at each candidate chemical potential.
///
/// The offset mesh and Fermi weights are built once and shared across
/// candidates; candidates are evaluated sequentially in input order and the
/// output is aligned with the input.
pub fn anc_scan_at(
    curve: &ConductivityCurve,
    chemical_potentials: &[f64],
    temperature: f64,
    config: &NernstConfig,
) -> Result<AncScan, NernstError> {
    validate_request(chemical_potentials, temperature, config)?;

    let beta = 1.0 / (BOLTZMANN_J_PER_K * temperature);
    let inverse_thermal_voltage = beta * ELEMENTARY_CHARGE_C;
    let decay_length = config.decay_step_multiple * curve.first_step();
    let mesh =
        EnergyOffsetMesh::for_temperature(temperature, config.cosh_cutoff, config.mesh_points);
    let weights: Vec<f64> = mesh
        .offsets()
        .map(|offset| fermi_derivative_weight(offset * inverse_thermal_voltage))
        .collect();
    let scale = mesh.step() * beta / temperature * 100.0 * ELEMENTARY_CHARGE_C;
    let (domain_min, domain_max) = curve.domain();

    let mut coefficients = Vec::with_capacity(chemical_potentials.len());
    for chemical_potential in chemical_potentials.iter().copied() {
        if chemical_potential < domain_min - decay_length
            || chemical_potential > domain_max + decay_length
        {
            tracing::warn!(
                chemical_potential,
                domain_min,
                domain_max,
                "chemical potential outside the tabulated window; conductivity is fully extrapolated"
            );
        }

        let mut accumulated = 0.0;
        for (offset, weight) in mesh.offsets().zip(weights.iter().copied()) {
            let sample = curve.sample_with_decay(chemical_potential + offset, decay_length);
            accumulated += sample.value * offset * weight;
        }

        let coefficient = config
            .scaling
            .apply(accumulated * scale, temperature);
        if !coefficient.is_finite() {
            return Err(NernstError::NonFiniteResult { chemical_potential });
        }
        coefficients.push(coefficient);
    }

    Ok(AncScan {
        chemical_potentials: chemical_potentials.to_vec(),
        coefficients,
        temperature,
        scaling: config.scaling,
    })
}

fn validate_request(
    chemical_potentials: &[f64],
    temperature: f64,
    config: &NernstConfig,
) -> Result<(), NernstError> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(NernstError::InvalidTemperature { value: temperature });
    }
    if config.mesh_points < 2 {
        return Err(NernstError::MeshTooSmall {
            mesh_points: config.mesh_points,
        });
    }
    if !config.cosh_cutoff.is_finite() || config.cosh_cutoff <= 0.0 {
        return Err(NernstError::InvalidCoshCutoff {
            value: config.cosh_cutoff,
        });
    }
    if !config.decay_step_multiple.is_finite() || config.decay_step_multiple <= 0.0 {
        return Err(NernstError::InvalidDecayStepMultiple {
            value: config.decay_step_multiple,
        });
    }

    for (index, value) in chemical_potentials.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(NernstError::NonFiniteChemicalPotential { index, value });
        }
    }

    Ok(())
}
