//! Step-up (boost) design procedure.

use crate::input::ValidatedValues;

use super::{
    feedback_r2, on_time, period, Results, CT_PER_TON, DIODE_DROP, RIPPLE, SENSE_THRESHOLD,
    SWITCH_DROP,
};

/// Base current floor for the external drive transistor (A).
const BASE_CURRENT_OFFSET: f64 = 5e-3;

/// Forced current gain assumed for the drive transistor.
const DRIVE_GAIN: f64 = 20.0;

/// Component values for a step-up regulator.
///
/// This is the only topology with a base-drive resistor. The peak current
/// scales with the duty ratio, so a large step-up ratio drives `rb` negative
/// once the peak current exceeds `vin - 1`; the value is reported as
/// computed.
pub fn step_up(values: &ValidatedValues) -> Results {
    let ratio = (values.vout + DIODE_DROP - values.vin) / (values.vin - SWITCH_DROP);
    let tontoff = period(values.freq);
    let ton_max = on_time(tontoff, ratio);
    let ipeak = values.iout / 1e3 * (ratio + 1.0) * 2.0;
    let ib = ipeak / DRIVE_GAIN + BASE_CURRENT_OFFSET;
    let rsc = SENSE_THRESHOLD / ipeak;

    Results {
        lmin: (values.vin - SWITCH_DROP) / ipeak * ton_max,
        ct: ton_max * CT_PER_TON,
        cout: (values.iout / 1e3 * ton_max) / RIPPLE,
        rsc,
        r2: feedback_r2(values.vout, values.res1),
        rb: ((values.vin - SWITCH_DROP) - ipeak) * rsc / ib,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::UserValues;
    use approx::assert_relative_eq;

    fn design(vin: f64, vout: f64, iout: f64, freq: f64, res1: f64) -> Results {
        let values = ValidatedValues::new(UserValues::new(vin, vout, iout, freq, res1)).unwrap();
        step_up(&values)
    }

    #[test]
    fn test_five_to_twelve_volts() {
        let r = design(5.0, 12.0, 100.0, 50.0, 10.0);

        // ratio = 7.8 / 4 = 1.95, ipeak = 0.1 * 2.95 * 2 = 0.59 A
        let ton = 20e-6 - 20e-6 / 2.95;
        assert_relative_eq!(r.lmin, 4.0 / 0.59 * ton, max_relative = 1e-9);
        assert_relative_eq!(r.ct, ton * 4e-5, max_relative = 1e-9);
        assert_relative_eq!(r.cout, 0.1 * ton / 0.1, max_relative = 1e-9);
        assert_relative_eq!(r.rsc, 0.33 / 0.59, max_relative = 1e-9);
        assert_relative_eq!(r.r2, 86.0, max_relative = 1e-12);

        let ib = 0.59 / 20.0 + 5e-3;
        assert_relative_eq!(r.rb, (4.0 - 0.59) * (0.33 / 0.59) / ib, max_relative = 1e-9);
        assert_eq!(r.rb.round(), 55.0);
    }

    #[test]
    fn test_equal_voltages_give_finite_values() {
        // vout == vin is routed here; the design stays finite.
        let r = design(12.0, 12.0, 500.0, 50.0, 10.0);
        assert!(r.lmin.is_finite() && r.lmin > 0.0);
        assert!(r.ct.is_finite() && r.ct > 0.0);
        assert!(r.rb.is_finite());
    }
}
