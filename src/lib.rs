//! # MC34063 Calc
//!
//! Component calculator for switching regulators built around the MC34063.
//!
//! Given five operating parameters (input voltage, output voltage, output
//! current, switching frequency and the feedback resistor R1) the library
//! picks a configuration and sizes the external parts:
//!
//! - Step Down (buck)
//! - Step Up (boost)
//! - Inverter
//!
//! ## Architecture
//!
//! - [`input`] - Field types, parsing and range validation
//! - [`regulator`] - Topology selection and the closed-form design procedures
//! - [`report`] - Presenters turning results into display units
//! - [`store`] - Persistence of raw field values between sessions
//! - [`calculator`] - The request/response entry point wiring these together
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! mc34063 --vin 12 --vout 5 --iout 500 --freq 50 --res1 10
//! ```
//!
//! ### Library
//!
//! ```
//! use mc34063_calc::input::{UserValues, ValidatedValues};
//! use mc34063_calc::regulator::{compute, select_topology, Topology};
//!
//! let values = ValidatedValues::new(UserValues::new(12.0, 5.0, 500.0, 50.0, 10.0)).unwrap();
//! let topology = select_topology(&values);
//! assert_eq!(topology, Topology::StepDown);
//!
//! let results = compute(&values, topology);
//! assert_eq!((results.lmin * 1e6).round(), 58.0);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import init, { calculate } from 'mc34063_calc';
//!
//! await init();
//! const report = calculate("12", "5", "500", "50", "10");
//! ```

pub mod calculator;
pub mod error;
pub mod input;
pub mod regulator;
pub mod report;
pub mod store;

// Re-export main types for convenience
pub use calculator::{run, FieldSource, Outcome};
pub use error::{CalcError, Result};
pub use input::{validate, Field, RawFields, UserValues, ValidatedValues, Violations};
pub use regulator::{compute, select_topology, Results, Topology};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmReport;

/// Default location of the CLI field store.
pub const DEFAULT_STORE_FILE: &str = "mc34063.json";
