//! WebAssembly bindings for the board generator.
//!
//! Exposes generation to a JavaScript renderer; boards cross the boundary as
//! JSON strings.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::config::GeneratorConfig;
#[cfg(feature = "wasm")]
use crate::generator::{BoardGenerator, GeneratedBoard, GenerationError};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed generator wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmBoardGenerator {
    generator: BoardGenerator,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmBoardGenerator {
    /// Create a generator from a JSON `GeneratorConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmBoardGenerator, JsValue> {
        let config = GeneratorConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        Ok(WasmBoardGenerator {
            generator: config.generator(),
        })
    }

    /// Generate a board, returns the board JSON or an error
    #[wasm_bindgen(js_name = generate)]
    pub fn generate(&self) -> Result<String, JsValue> {
        to_json(self.generator.generate())
    }

    /// Generate a board from an explicit seed
    #[wasm_bindgen(js_name = generateSeeded)]
    pub fn generate_seeded(&self, seed: u64) -> Result<String, JsValue> {
        to_json(self.generator.generate_seeded(seed))
    }
}

#[cfg(feature = "wasm")]
fn to_json(generated: Result<GeneratedBoard, GenerationError>) -> Result<String, JsValue> {
    let generated = generated.map_err(|e| JsValue::from_str(&e.to_string()))?;
    generated
        .to_json()
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
