//! Bindings for running the planner from JavaScript.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::builder::NetworkBuilder;
use crate::solver::Planner;

/// Plan severances for `corridors` (one `NodeA-NodeB` per line) with the virus starting at `start`.
///
/// Resolves to an array of `Gate-Neighbor` strings, empty if the virus is already contained or cannot be.
#[wasm_bindgen]
pub fn contain(corridors: &str, start: &str) -> Result<Array, JsError> {
    let network = NetworkBuilder::new()
        .add_lines(corridors.lines())
        .build()?;
    let containment = Planner::from(&network).plan(start)?;

    Ok(containment.severances().iter()
        .map(|severance| JsValue::from_str(&severance.to_string()))
        .collect())
}
