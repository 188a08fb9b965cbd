use nernst_core::{ConductivityCurve, NernstConfig, anc_at_chemical_potential};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().expect("buffer lock")).into_owned()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("buffer lock")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn far_outside_candidates_warn_once_and_still_integrate() {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();

    let curve = ConductivityCurve::new(vec![-1.0, 0.0, 1.0], vec![5.0, 0.0, -5.0])
        .expect("curve should validate");
    let config = NernstConfig::default();

    let far_value = tracing::subscriber::with_default(subscriber, || {
        let inside = anc_at_chemical_potential(&curve, 0.5, 300.0, &config)
            .expect("in-domain candidate");
        assert!(inside.is_finite());

        anc_at_chemical_potential(&curve, 50.0, 300.0, &config)
            .expect("far-outside candidate")
    });

    // Non-fatal policy: the far candidate still produces a finite value, it
    // just rides entirely on the exponential tail.
    assert!(far_value.is_finite());

    let log = writer.contents();
    assert_eq!(
        log.matches("fully extrapolated").count(),
        1,
        "expected exactly one warning, log was: {log}"
    );
    assert!(log.contains("chemical_potential"), "log was: {log}");
}
