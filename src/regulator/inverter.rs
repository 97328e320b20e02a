//! Inverting design procedure.

use crate::input::ValidatedValues;

use super::{
    feedback_r2, on_time, period, Results, CT_PER_TON, DIODE_DROP, RIPPLE, SENSE_THRESHOLD,
};

/// Component values for an inverting regulator.
///
/// Only the magnitude of the (negative) output voltage enters the design.
pub fn inverter(values: &ValidatedValues) -> Results {
    let vout = values.vout.abs();
    let ratio = (vout + DIODE_DROP) / (values.vin - DIODE_DROP);
    let tontoff = period(values.freq);
    let ton = on_time(tontoff, ratio);
    let ipeak = 2.0 * values.iout / 1e3;

    Results {
        lmin: (values.vin - DIODE_DROP) / ipeak * ton,
        ct: ton * CT_PER_TON,
        cout: (values.iout / 1e3 * ton) / RIPPLE,
        rsc: SENSE_THRESHOLD / ipeak,
        r2: feedback_r2(vout, values.res1),
        rb: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::UserValues;
    use approx::assert_relative_eq;

    fn design(vin: f64, vout: f64, iout: f64, freq: f64, res1: f64) -> Results {
        let values = ValidatedValues::new(UserValues::new(vin, vout, iout, freq, res1)).unwrap();
        inverter(&values)
    }

    #[test]
    fn test_twelve_to_minus_five_volts() {
        let r = design(12.0, -5.0, 500.0, 50.0, 10.0);

        // ratio = 5.8 / 11.2, ton = 20 us * ratio / (ratio + 1)
        let ratio: f64 = 5.8 / 11.2;
        let ton = 20e-6 * ratio / (ratio + 1.0);
        assert_relative_eq!(r.lmin, 11.2 / 1.0 * ton, max_relative = 1e-9);
        assert_relative_eq!(r.ct, ton * 4e-5, max_relative = 1e-9);
        assert_relative_eq!(r.cout, 0.5 * ton / 0.1, max_relative = 1e-9);
        assert_relative_eq!(r.rsc, 0.33, max_relative = 1e-12);
        assert_relative_eq!(r.r2, 30.0, max_relative = 1e-12);
        assert_eq!(r.rb, 0.0);

        assert_eq!((r.lmin * 1e6).round(), 76.0);
        assert_eq!((r.ct * 1e12).round(), 273.0);
    }

    #[test]
    fn test_sign_of_output_is_ignored() {
        let r = design(12.0, -12.0, 100.0, 50.0, 4.7);
        assert!(r.r2 > 0.0);
        assert_relative_eq!(r.r2, (12.0 - 1.25) / 1.25 * 4.7, max_relative = 1e-12);
    }
}
