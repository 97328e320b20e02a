//! WASM bindings for MC34063 Calc.
//!
//! This module provides JavaScript-friendly bindings for the browser
//! calculator page. Field persistence stays on the JavaScript side
//! (`localStorage`); the page passes the raw field text in and renders the
//! returned report.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { calculate } from 'mc34063_calc';
//!
//! await init();
//!
//! const report = calculate(vin.value, vout.value, iout.value, freq.value, res1.value);
//! if (report.ok) {
//!   results.innerHTML = `<pre><u>${report.title}</u>\n${report.lines.join('\n')}</pre>`;
//!   schematic.src = 'resources/' + report.schematic;
//! } else {
//!   report.invalid_fields.forEach(id => markField(id));
//!   results.innerHTML = report.message;
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::calculator::{self, ABOUT};
use crate::error::Result;
use crate::input::{Field, RawFields, Violations};
use crate::regulator::{Results, Topology};
use crate::report::{Presenter, Report};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Outcome of one calculation, ready for the page to render.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct WasmReport {
    title: String,
    schematic: String,
    lines: Vec<String>,
    message: String,
    invalid_fields: Vec<String>,
}

#[wasm_bindgen]
impl WasmReport {
    /// Whether a design was computed.
    #[wasm_bindgen(getter)]
    pub fn ok(&self) -> bool {
        self.invalid_fields.is_empty()
    }

    /// Regulator name, empty on failure.
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    /// Schematic image file name, empty on failure.
    #[wasm_bindgen(getter)]
    pub fn schematic(&self) -> String {
        self.schematic.clone()
    }

    /// Formatted component lines.
    #[wasm_bindgen(getter)]
    pub fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    /// Count message when the input was rejected, empty otherwise.
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Identifiers of the rejected form fields.
    #[wasm_bindgen(getter)]
    pub fn invalid_fields(&self) -> Vec<String> {
        self.invalid_fields.clone()
    }
}

impl Presenter for WasmReport {
    fn present(&mut self, topology: Topology, results: &Results) -> Result<()> {
        let report = Report::new(topology, results);
        self.title = report.title.to_string();
        self.schematic = report.schematic.to_string();
        self.lines = report.lines;
        Ok(())
    }

    fn present_validation_failure(&mut self, violations: &Violations) -> Result<()> {
        self.message = violations.message();
        self.invalid_fields = violations.fields().iter().map(|f| f.key().to_string()).collect();
        self.lines = violations.iter().map(|v| v.to_string()).collect();
        Ok(())
    }
}

/// Calculate the components from the raw form field text.
#[wasm_bindgen]
pub fn calculate(
    vin: &str,
    vout: &str,
    iout: &str,
    freq: &str,
    res1: &str,
) -> std::result::Result<WasmReport, JsValue> {
    let fields = RawFields::new()
        .with(Field::Vin, vin)
        .with(Field::Vout, vout)
        .with(Field::Iout, iout)
        .with(Field::Freq, freq)
        .with(Field::Res1, res1);

    let mut report = WasmReport::default();
    calculator::run(&fields, &mut report).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(report)
}

/// Introductory text for the about dialog.
#[wasm_bindgen]
pub fn about() -> String {
    ABOUT.to_string()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_step_down_report() {
        let report = calculate("12", "5", "500", "50", "10").unwrap();

        assert!(report.ok());
        assert_eq!(report.title(), "Step-Down regulator");
        assert_eq!(report.schematic(), "step_down.png");
        assert_eq!(report.lines().first().map(String::as_str), Some("L   = 58 uH (min)"));
        assert!(report.message().is_empty());
        assert!(report.invalid_fields().is_empty());
    }

    #[test]
    fn test_calculate_rejected_report() {
        let report = calculate("4", "abc", "500", "150", "10").unwrap();

        assert!(!report.ok());
        assert_eq!(report.message(), "3 fields are out of limits");
        assert_eq!(report.invalid_fields(), vec!["vin", "vout", "freq"]);
        assert_eq!(report.lines().len(), 3);
        assert!(report.title().is_empty());
        assert!(report.schematic().is_empty());
    }

    #[test]
    fn test_step_up_report_lists_rb() {
        let report = calculate("5", "12", "100", "50", "10").unwrap();

        assert!(report.ok());
        assert_eq!(report.title(), "Step-Up regulator");
        assert_eq!(report.lines().last().map(String::as_str), Some("Rb  = 55 Ω"));
    }
}
