//! Preset catalog bindings.

use crate::solve::{run_request, to_js_error};
use anyhow::Result;
use attractor_core::{preset, presets, SystemParams, Trajectory};
use js_sys::Float64Array;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Catalog entry as seen by the gallery.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetPayload {
    id: String,
    name: String,
    dimension: usize,
    params: SystemParams,
    initial: Vec<f64>,
    dt: f64,
    steps: usize,
}

fn catalog_payload() -> Vec<PresetPayload> {
    presets()
        .into_iter()
        .map(|p| PresetPayload {
            dimension: p.params.dimension(),
            id: p.id,
            name: p.name,
            params: p.params,
            initial: p.initial,
            dt: p.dt,
            steps: p.steps,
        })
        .collect()
}

fn run_preset(id: &str) -> Result<Trajectory> {
    let entry = preset(id)?;
    run_request(&entry.request())
}

/// Returns every built-in preset with its parameters and step configuration.
#[wasm_bindgen]
pub fn preset_catalog() -> Result<JsValue, JsValue> {
    to_value(&catalog_payload())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Solves a built-in preset by id and returns the flat trajectory.
#[wasm_bindgen]
pub fn solve_preset(id: &str) -> Result<Float64Array, JsValue> {
    console_error_panic_hook::set_once();

    let trajectory = run_preset(id).map_err(to_js_error)?;
    Ok(Float64Array::from(trajectory.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_payload_lists_all_systems() {
        let ids: Vec<String> = catalog_payload().into_iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["lorenz", "van_der_pol", "damped_pendulum", "rossler"]
        );
    }

    #[test]
    fn catalog_payload_reports_dimension() {
        for entry in catalog_payload() {
            assert_eq!(entry.dimension, entry.initial.len());
        }
    }

    #[test]
    fn run_preset_solves_known_ids() {
        let trajectory = run_preset("van_der_pol").expect("preset should solve");
        assert_eq!(trajectory.dimension(), 2);
        assert_eq!(trajectory.point(0), Some(&[2.0, 0.0][..]));
    }

    #[test]
    fn run_preset_rejects_unknown_id() {
        let err = run_preset("henon").expect_err("unknown preset");
        assert!(err.to_string().contains("Unknown preset `henon`"));
    }
}
