//! Temperature-sweep tables: one coefficient column per temperature, in the
//! `Ene ahc T…` layout downstream plotting tools read back.

use crate::domain::ConductivityCurve;
use crate::numerics::nernst::{AncScaling, NernstConfig, NernstError, anc_scan};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AncTable {
    pub temperatures: Vec<f64>,
    pub energies: Vec<f64>,
    pub conductivities: Vec<f64>,
    pub columns: Vec<Vec<f64>>,
    pub scaling: AncScaling,
}

/// Run the scan once per temperature and collect the columns.
pub fn anc_table(
    curve: &ConductivityCurve,
    temperatures: &[f64],
    config: &NernstConfig,
) -> Result<AncTable, NernstError> {
    let mut columns = Vec::with_capacity(temperatures.len());
    for temperature in temperatures.iter().copied() {
        let scan = anc_scan(curve, temperature, config)?;
        tracing::debug!(temperature, "nernst coefficient column complete");
        columns.push(scan.coefficients);
    }

    Ok(AncTable {
        temperatures: temperatures.to_vec(),
        energies: curve.energies().to_vec(),
        conductivities: curve.conductivities().to_vec(),
        columns,
        scaling: config.scaling,
    })
}

impl AncTable {
    /// Fixed-width text rendering. The header labels the energy and
    /// conductivity columns and then one column per temperature; where the
    /// result lands on disk is the caller's concern.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.energies.len() + 1);

        let mut header = format!("{:>14} {:>14}", "Ene", "ahc");
        for temperature in &self.temperatures {
            header.push(' ');
            header.push_str(&format_fixed(*temperature, 14, 1));
        }
        lines.push(header);

        for row in 0..self.energies.len() {
            let mut line = format!(
                "{} {}",
                format_fixed(self.energies[row], 14, 6),
                format_fixed(self.conductivities[row], 14, 6)
            );
            for column in &self.columns {
                line.push(' ');
                line.push_str(&format_fixed(column[row], 14, 8));
            }
            lines.push(line);
        }

        let mut rendered = lines.join("\n");
        rendered.push('\n');
        rendered
    }
}

fn format_fixed(value: f64, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}
