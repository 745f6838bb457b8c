//! Trip types.

/// One step of a trip: board `line` at `stop` and ride it to the next
/// step's stop.
///
/// The final step of a trip carries no line; it denotes the destination
/// rather than a boarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripStep {
    /// Display name of the stop.
    pub stop: String,
    /// Long name of the line boarded here, `None` on the final step.
    pub line: Option<String>,
}

/// An ordered sequence of boardings ending at the destination.
///
/// A trip always starts at the requested start stop and ends at the
/// requested end stop; its length is the number of line segments plus
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    steps: Vec<TripStep>,
}

impl Trip {
    pub(crate) fn new(steps: Vec<TripStep>) -> Self {
        Trip { steps }
    }

    /// The steps of the trip, start first.
    pub fn steps(&self) -> &[TripStep] {
        &self.steps
    }

    /// Number of line boardings in the trip.
    pub fn boardings(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
