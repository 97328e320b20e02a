//! Step-down (buck) design procedure.

use crate::input::ValidatedValues;

use super::{
    feedback_r2, on_time, period, Results, CT_PER_TON, DIODE_DROP, RIPPLE, SENSE_THRESHOLD,
    SWITCH_DROP,
};

/// Component values for a step-down regulator.
///
/// The peak switch current is twice the load current. The output capacitor
/// is sized from the peak current over one full period.
pub fn step_down(values: &ValidatedValues) -> Results {
    let ratio = (values.vout + DIODE_DROP) / (values.vin - DIODE_DROP - values.vout);
    let tontoff = period(values.freq);
    let ton_max = on_time(tontoff, ratio);
    let ipeak = values.iout / 1e3 * 2.0;

    Results {
        lmin: (values.vin - SWITCH_DROP - values.vout) / ipeak * ton_max,
        ct: ton_max * CT_PER_TON,
        cout: (ipeak * tontoff) / (8.0 * RIPPLE),
        rsc: SENSE_THRESHOLD / ipeak,
        r2: feedback_r2(values.vout, values.res1),
        rb: 0.0,
    }
}
