//! Specifies objective functions as a fitness algebra over tours.

use crate::models::Tour;
use std::cmp::Ordering;

mod stsp;
pub use self::stsp::{StspFitness, StspObjective};

mod tsp;
pub use self::tsp::{TspObjective, TspTwObjective};

/// An *objective* function defines a *fitness algebra* and a *total ordering relation* on a set
/// of tours of a concrete problem type. Fitness values form a commutative monoid under
/// [`Objective::add`] with [`Objective::zero`] as identity.
pub trait Objective: Send + Sync {
    /// A problem type the objective is defined on.
    type Problem;
    /// A fitness type produced by the objective.
    type Fitness: Clone + Send + Sync + std::fmt::Debug;

    /// Returns the name of the objective.
    fn name(&self) -> &'static str;

    /// Returns the identity fitness.
    fn zero(&self) -> Self::Fitness;

    /// Returns the worst possible fitness.
    fn infinite(&self) -> Self::Fitness;

    /// Returns true if the given fitness equals the identity.
    fn is_zero(&self, fitness: &Self::Fitness) -> bool;

    /// Adds two fitness values.
    fn add(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness;

    /// Subtracts the right fitness from the left one.
    fn subtract(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness;

    /// Compares two fitness values component-wise: the result is `Less` when the left value is
    /// componentwise smaller. This ordering is monotone under [`Objective::add`].
    fn compare(&self, left: &Self::Fitness, right: &Self::Fitness) -> Ordering;

    /// Defines a total preference order between two fitness values: the result is `Less` when
    /// the left value describes a better tour. The default assumes minimization.
    fn total_order(&self, left: &Self::Fitness, right: &Self::Fitness) -> Ordering {
        self.compare(left, right)
    }

    /// Calculates the fitness of the given tour.
    fn calculate(&self, problem: &Self::Problem, tour: &Tour) -> Self::Fitness;

    /// Returns true when the fitness landscape has discontinuities the search must not
    /// assume away.
    fn is_non_continuous(&self) -> bool {
        false
    }
}
