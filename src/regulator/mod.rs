//! MC34063 regulator models.
//!
//! Each supported topology has a closed-form design procedure that maps the
//! operating parameters to the six external component values:
//!
//! | Result | Meaning | Unit |
//! |--------|---------|------|
//! | `lmin` | Minimum inductance | H |
//! | `ct`   | Timing capacitor | F |
//! | `cout` | Output capacitor | F |
//! | `rsc`  | Current-sense resistor | Ω |
//! | `r2`   | Feedback resistor R2 | kΩ |
//! | `rb`   | Base-drive resistor (step-up only) | Ω |
//!
//! The models assume a 0.8 V catch-diode drop, a 1 V switch drop, a 0.33 V
//! current-sense threshold, a 1.25 V reference and a 10% output ripple
//! target. No rounding is done here; scaling to display units belongs to
//! the presenter.

mod inverter;
mod step_down;
mod step_up;

use std::fmt;

use tracing::debug;

use crate::input::ValidatedValues;

pub use inverter::inverter;
pub use step_down::step_down;
pub use step_up::step_up;

/// Output ripple design target (fraction of output voltage).
pub const RIPPLE: f64 = 0.1;

/// Forward drop of the catch diode in volts.
pub const DIODE_DROP: f64 = 0.8;

/// Saturation drop of the output switch in volts.
pub const SWITCH_DROP: f64 = 1.0;

/// Current-sense threshold in volts.
pub const SENSE_THRESHOLD: f64 = 0.33;

/// Internal reference voltage in volts.
pub const VREF: f64 = 1.25;

/// Timing capacitance per second of on-time (F/s).
pub const CT_PER_TON: f64 = 4e-5;

/// The three supported regulator configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Buck: output lower than input
    StepDown,
    /// Boost: output at or above input
    StepUp,
    /// Negative output from a positive input
    Inverter,
}

impl Topology {
    /// Title shown above the results.
    pub fn title(self) -> &'static str {
        match self {
            Topology::StepDown => "Step-Down regulator",
            Topology::StepUp => "Step-Up regulator",
            Topology::Inverter => "Inverter regulator",
        }
    }

    /// Schematic image for this configuration.
    pub fn schematic(self) -> &'static str {
        match self {
            Topology::StepDown => "step_down.png",
            Topology::StepUp => "step_up.png",
            Topology::Inverter => "inverter.png",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Component values for one design, in SI base units (except `r2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Minimum inductance (H)
    pub lmin: f64,
    /// Timing capacitor (F)
    pub ct: f64,
    /// Minimum output capacitor (F)
    pub cout: f64,
    /// Current-sense resistor (Ω)
    pub rsc: f64,
    /// Feedback resistor R2 (kΩ, same unit as R1)
    pub r2: f64,
    /// Base-drive resistor (Ω), zero when the topology has none
    pub rb: f64,
}

/// Pick the topology for a validated set of values.
///
/// A negative output always means the inverter. Otherwise the output is
/// compared with the input; equal voltages go to the step-up design.
pub fn select_topology(values: &ValidatedValues) -> Topology {
    if values.vout < 0.0 {
        Topology::Inverter
    } else if values.vout < values.vin {
        Topology::StepDown
    } else {
        Topology::StepUp
    }
}

/// Compute the component values for `topology`.
pub fn compute(values: &ValidatedValues, topology: Topology) -> Results {
    let results = match topology {
        Topology::StepDown => step_down(values),
        Topology::StepUp => step_up(values),
        Topology::Inverter => inverter(values),
    };
    debug!(?topology, ?results, "computed regulator components");
    results
}

/// Switching period in seconds for a frequency given in kHz.
fn period(freq_khz: f64) -> f64 {
    1.0 / (freq_khz * 1e3)
}

/// On-time within one period for a given ton/toff ratio.
fn on_time(period: f64, ratio: f64) -> f64 {
    let toff = period / (ratio + 1.0);
    period - toff
}

/// Feedback resistor R2 for an output magnitude, in the unit of R1.
fn feedback_r2(vout_magnitude: f64, res1: f64) -> f64 {
    (vout_magnitude - VREF) / VREF * res1
}
