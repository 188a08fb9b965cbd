//! Anomalous Nernst post-processing for anomalous-Hall fermi scans.
//!
//! The crate turns a tabulated, Fermi-referenced anomalous Hall conductivity
//! curve into anomalous Nernst coefficients by convolving the curve with the
//! derivative of the Fermi function over a truncated symmetric
//! chemical-potential window. Reading simulation output files and rendering
//! figures stay with the surrounding tooling; this crate owns the curve
//! model, the integration kernel, and the temperature-sweep table.

pub mod common;
pub mod domain;
pub mod numerics;
pub mod table;

pub use domain::{ConductivityCurve, CurveError, CurveSample, SampleRegion};
pub use numerics::fermi::{EnergyOffsetMesh, fermi_derivative_weight};
pub use numerics::nernst::{
    AncScaling, AncScan, DEFAULT_COSH_CUTOFF, DEFAULT_DECAY_STEP_MULTIPLE, DEFAULT_MESH_POINTS,
    NernstConfig, NernstError, NernstIntegrationApi, anc_at_chemical_potential, anc_scan,
    anc_scan_at,
};
pub use table::{AncTable, anc_table};
