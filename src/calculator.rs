//! The calculation request/response entry point.
//!
//! [`run`] reads raw fields from a [`FieldSource`], validates them, selects
//! the topology, computes the components and hands the outcome to a
//! [`Presenter`]. Both collaborators are passed in by the caller.

use tracing::{debug, warn};

use crate::error::Result;
use crate::input::{check, RawFields, Violations};
use crate::regulator::{compute, select_topology, Results, Topology};
use crate::report::Presenter;
use crate::store::FieldStore;

/// Introductory text shown by front ends.
pub const ABOUT: &str = "\
MC34063 calculator

This application calculates the value of all the components required
to build a switching regulator based on the MC34063 chip.

The following configurations are supported:
- Step Down (buck)
- Step Up (boost)
- Inverter";

/// Where the raw field text for a calculation comes from.
pub trait FieldSource {
    fn fields(&self) -> RawFields;
}

impl FieldSource for RawFields {
    fn fields(&self) -> RawFields {
        self.clone()
    }
}

/// Result of one calculation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The input was valid and the design was computed
    Computed { topology: Topology, results: Results },
    /// The input was rejected; nothing was computed
    Rejected(Violations),
}

impl Outcome {
    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed { .. })
    }

    /// Process exit status: 0 when a design was computed, 2 when the input
    /// was rejected.
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Computed { .. } => 0,
            Outcome::Rejected(_) => 2,
        }
    }
}

/// Fill the fields the user did not give from `store`.
///
/// Given fields win field by field. With `save` set, the resolved fields are
/// written back to the store before they are returned.
pub fn resolve_fields(
    given: &RawFields,
    store: &mut dyn FieldStore,
    save: bool,
) -> Result<RawFields> {
    let fields = given.clone().or(&store.restore()?);
    if save {
        store.save(&fields)?;
    }
    Ok(fields)
}

/// Run one calculation and present its outcome.
///
/// Rejected input is not an error: it is presented and returned as
/// [`Outcome::Rejected`]. Only presenter failures are propagated.
pub fn run<S, P>(source: &S, presenter: &mut P) -> Result<Outcome>
where
    S: FieldSource + ?Sized,
    P: Presenter + ?Sized,
{
    let raw = source.fields();

    let values = match check(&raw) {
        Ok(values) => values,
        Err(violations) => {
            warn!(
                count = violations.len(),
                fields = ?violations.fields(),
                "input rejected"
            );
            presenter.present_validation_failure(&violations)?;
            return Ok(Outcome::Rejected(violations));
        }
    };

    let topology = select_topology(&values);
    debug!(?topology, values = ?values.values(), "selected topology");

    let results = compute(&values, topology);
    presenter.present(topology, &results)?;

    Ok(Outcome::Computed { topology, results })
}
