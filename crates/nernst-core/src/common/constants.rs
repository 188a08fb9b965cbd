//! SI constants shared by the Nernst integration kernels.
//!
//! Values are the 2019 exact SI definitions, so thermal scales derived here
//! agree with the CODATA tables the fermi-scan data was produced against.

pub const BOLTZMANN_J_PER_K: f64 = 1.380_649e-23;
pub const ELEMENTARY_CHARGE_C: f64 = 1.602_176_634e-19;

/// Thermal energy scale `k_B T / e` in volts at `temperature` kelvin.
pub fn thermal_voltage(temperature: f64) -> f64 {
    BOLTZMANN_J_PER_K * temperature / ELEMENTARY_CHARGE_C
}

#[cfg(test)]
mod tests {
    use super::{BOLTZMANN_J_PER_K, ELEMENTARY_CHARGE_C, thermal_voltage};

    #[test]
    fn constants_remain_finite_and_positive() {
        for value in [BOLTZMANN_J_PER_K, ELEMENTARY_CHARGE_C] {
            assert!(value.is_finite());
            assert!(value > 0.0);
        }
    }

    #[test]
    fn room_temperature_thermal_voltage_matches_reference_value() {
        let expected = 0.025_852_0;
        let actual = thermal_voltage(300.0);
        assert!(
            (actual - expected).abs() <= 1.0e-6,
            "thermal voltage at 300 K was {actual}"
        );
    }

    #[test]
    fn thermal_voltage_scales_linearly_with_temperature() {
        let reference = thermal_voltage(100.0);
        assert!((thermal_voltage(300.0) - 3.0 * reference).abs() <= 1.0e-12);
    }
}
