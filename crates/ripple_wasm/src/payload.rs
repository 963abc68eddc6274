//! Serializable payloads handed back to the host.

use anyhow::{Context, Result};
use ripple_core::grid::sample_sine_wave;
use ripple_core::Simulation;
use serde::Serialize;

/// Points used by the standalone sine-wave preview.
pub(crate) const PREVIEW_POINTS: usize = 100;

#[derive(Debug, Serialize)]
pub(crate) struct SnapshotPayload {
    pub x: Vec<f64>,
    pub f: Vec<f64>,
    pub t: f64,
    pub dt: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SineWavePayload {
    pub x: Vec<f64>,
    pub sin_wave: Vec<f64>,
}

pub(crate) fn snapshot_payload(sim: &Simulation) -> Result<SnapshotPayload> {
    let samples = sim.samples().context("Snapshot requires an initialized simulation")?;
    let t = sim.simulated_time()?;
    let dt = sim.current_time_step()?;
    Ok(SnapshotPayload {
        x: samples.x,
        f: samples.f,
        t,
        dt,
    })
}

pub(crate) fn sine_wave_payload(point_count: usize) -> Result<SineWavePayload> {
    let samples = sample_sine_wave(point_count)
        .with_context(|| format!("Failed to sample sine wave on {point_count} points"))?;
    Ok(SineWavePayload {
        x: samples.x,
        sin_wave: samples.f,
    })
}

/// JSON text of [`sine_wave_payload`], the form hosts `JSON.parse`.
pub(crate) fn sine_wave_json(point_count: usize) -> Result<String> {
    let payload = sine_wave_payload(point_count)?;
    serde_json::to_string(&payload).context("Failed to encode sine wave as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::ModelKind;

    #[test]
    fn snapshot_requires_initialized_simulation() {
        let sim = Simulation::new(ModelKind::Wave, 1.0);
        let err = snapshot_payload(&sim).expect_err("uninitialized snapshot must fail");
        let message = format!("{err:#}");
        assert!(message.contains("initialized"), "got \"{message}\"");
    }

    #[test]
    fn snapshot_reports_time_and_samples() {
        let mut sim = Simulation::new(ModelKind::Wave, 1.0);
        sim.initialize(20, 0.1, f64::sin).expect("initialize should succeed");
        sim.advance(4).expect("advance should succeed");
        let payload = snapshot_payload(&sim).expect("snapshot should build");
        assert_eq!(payload.x.len(), 20);
        assert_eq!(payload.f.len(), 20);
        assert!((payload.t - 4.0 * payload.dt).abs() < 1e-15);
    }

    #[test]
    fn sine_wave_payload_matches_preview_size() {
        let payload = sine_wave_payload(PREVIEW_POINTS).expect("payload should build");
        assert_eq!(payload.x.len(), PREVIEW_POINTS);
        assert_eq!(payload.sin_wave.len(), PREVIEW_POINTS);
        assert!(sine_wave_payload(2).is_err());
    }

    #[test]
    fn sine_wave_json_uses_camel_case_keys() {
        let text = sine_wave_json(PREVIEW_POINTS).expect("json should encode");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json should parse");
        let x = value["x"].as_array().expect("x array");
        let sin_wave = value["sinWave"].as_array().expect("sinWave array");
        assert_eq!(x.len(), PREVIEW_POINTS);
        assert_eq!(sin_wave.len(), PREVIEW_POINTS);
        assert_eq!(sin_wave[0].as_f64(), Some(0.0));
        assert!(value.get("sin_wave").is_none());
    }
}
