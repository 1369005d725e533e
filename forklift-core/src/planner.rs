//! The step-driven planner contract and its lazy leg sequence.

use crate::{LegReport, PlanError, PlanStep};

/// Produce a collection run one leg at a time.
///
/// Each call runs to completion synchronously and returns a single leg or a
/// terminal step. Once a planner has returned [`PlanStep::Done`] or
/// [`PlanStep::Cancelled`] it keeps returning that step.
///
/// # Examples
///
/// ```rust
/// use forklift_core::{LegPlanner, PlanError, PlanStep};
///
/// struct Idle;
///
/// impl LegPlanner for Idle {
///     fn plan_next_leg(&mut self) -> Result<PlanStep, PlanError> {
///         Ok(PlanStep::Done)
///     }
/// }
///
/// let mut planner = Idle;
/// assert_eq!(planner.legs().count(), 0);
/// ```
pub trait LegPlanner {
    /// Plan the next leg, or report that the run has ended.
    ///
    /// # Errors
    ///
    /// Implementations return [`PlanError`] only for inputs that make the
    /// run impossible; unreachable items are dropped silently.
    fn plan_next_leg(&mut self) -> Result<PlanStep, PlanError>;

    /// Pull legs lazily until the run ends.
    fn legs(&mut self) -> Legs<'_, Self>
    where
        Self: Sized,
    {
        Legs {
            planner: self,
            finished: false,
        }
    }
}

/// Iterator over the remaining legs of a run.
///
/// Ends after [`PlanStep::Done`] or [`PlanStep::Cancelled`], or after
/// yielding the first error.
#[derive(Debug)]
pub struct Legs<'a, P> {
    planner: &'a mut P,
    finished: bool,
}

impl<P: LegPlanner> Iterator for Legs<'_, P> {
    type Item = Result<LegReport, PlanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.planner.plan_next_leg() {
            Ok(PlanStep::Leg(report)) => Some(Ok(report)),
            Ok(PlanStep::Done | PlanStep::Cancelled) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
