// WebAssembly bindings for the converter
use crate::convert::{
    parse_measurement, ConversionUnit, Converter, UnitFormatter, UnitProcessor, Viewport,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    converter: Converter,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self {
            converter: Converter::default(),
        }
    }
}

fn parse_unit(unit: &str) -> Result<ConversionUnit, JsValue> {
    unit.parse::<ConversionUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<ConverterWasm, JsValue> {
        let viewport =
            Viewport::new(width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            converter: Converter::new(viewport),
        })
    }

    /// Convert `value` given in `unit` ("px", "vw" or "vh")
    /// Returns JSON string: {"px": .., "vw": .., "vh": ..}
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, unit: &str) -> Result<String, JsValue> {
        let unit = parse_unit(unit)?;
        let results = self
            .converter
            .convert(value, unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&results)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Convert a measurement string such as "12.5vw"
    /// Returns JSON string of formatted values: {"px": "240px", "vw": "12.5vw", "vh": "22.22vh"}
    #[wasm_bindgen]
    pub fn convert_str(&self, input: &str, precision: u32) -> Result<String, JsValue> {
        let measurement =
            parse_measurement(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let results = self
            .converter
            .convert_measurement(&measurement)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let formatted = UnitFormatter::new(precision).format(&results);

        serde_json::to_string(&formatted)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Rewrite px lengths in a stylesheet into `unit`
    #[wasm_bindgen]
    pub fn rewrite(&self, css: &str, unit: &str, precision: u32) -> Result<String, JsValue> {
        let processor = UnitProcessor::new(self.converter, parse_unit(unit)?, precision);
        Ok(processor.process_text(css).text)
    }
}
