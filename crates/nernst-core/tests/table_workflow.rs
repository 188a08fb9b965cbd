use nernst_core::{AncScaling, ConductivityCurve, NernstConfig, anc_scan, anc_table};
use std::fs;
use tempfile::TempDir;

fn fermi_scan_curve() -> ConductivityCurve {
    ConductivityCurve::from_fermi_scan(
        vec![12.4, 12.6, 12.8, 13.0, 13.2],
        vec![85.0, -140.0, 310.0, 42.0, -9.5],
        12.8375,
    )
    .expect("curve should validate")
}

#[test]
fn sweep_covers_every_requested_temperature_in_order() {
    let curve = fermi_scan_curve();
    let config = NernstConfig {
        scaling: AncScaling::CoefficientOverTemperature,
        ..NernstConfig::default()
    };
    let temperatures = [1.0, 100.0, 300.0, 500.0];

    let table = anc_table(&curve, &temperatures, &config).expect("table");

    assert_eq!(table.temperatures, temperatures);
    assert_eq!(table.columns.len(), temperatures.len());
    assert_eq!(table.scaling, AncScaling::CoefficientOverTemperature);
    for (column, temperature) in table.columns.iter().zip(temperatures) {
        assert_eq!(column.len(), curve.len());
        let scan = anc_scan(&curve, temperature, &config).expect("scan");
        assert_eq!(column, &scan.coefficients);
    }
}

#[test]
fn rendered_table_round_trips_through_a_scratch_file() {
    let curve = fermi_scan_curve();
    let table = anc_table(&curve, &[100.0, 300.0], &NernstConfig::default()).expect("table");
    let rendered = table.render();

    let temp = TempDir::new().expect("tempdir should be created");
    let path = temp.path().join("anc.dat");
    fs::write(&path, &rendered).expect("table should be written");
    let read_back = fs::read_to_string(&path).expect("table should be readable");
    assert_eq!(read_back, rendered);

    // Header carries the column labels a reader recovers the temperatures
    // from, one data row per tabulated energy below it.
    let mut lines = read_back.lines();
    let header: Vec<&str> = lines.next().expect("header line").split_whitespace().collect();
    assert_eq!(header, ["Ene", "ahc", "100.0", "300.0"]);
    assert_eq!(lines.count(), curve.len());
}

#[test]
fn table_serializes_for_downstream_tooling() {
    let curve = fermi_scan_curve();
    let table = anc_table(&curve, &[300.0], &NernstConfig::default()).expect("table");

    let json = serde_json::to_value(&table).expect("table should serialize");
    assert_eq!(json["scaling"], "Coefficient");
    assert_eq!(
        json["columns"].as_array().expect("columns array").len(),
        1
    );
    assert_eq!(
        json["energies"].as_array().expect("energies array").len(),
        curve.len()
    );
}
