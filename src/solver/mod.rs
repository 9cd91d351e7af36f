//! This module contains the solver framework and the search operators built on top of it.

use crate::models::Tour;
use crate::utils::GenericResult;

pub mod objectives;
pub mod search;

mod genetic;
pub use self::genetic::{GeneticSolver, GeneticSolverConfig};

use self::objectives::Objective;

/// A solver produces a tour for a problem from scratch.
pub trait Solver<P, O>
where
    O: Objective<Problem = P>,
{
    /// Returns the name of the solver.
    fn name(&self) -> String;

    /// Solves the given problem returning the best discovered tour with its fitness.
    fn solve(&self, problem: &P, objective: &O) -> GenericResult<(Tour, O::Fitness)>;
}

/// A crossover combines two parent tours into a child tour.
pub trait Crossover<P, O>
where
    O: Objective<Problem = P>,
{
    /// Returns the name of the crossover.
    fn name(&self) -> String;

    /// Produces a child tour from the given parents.
    fn apply(&self, problem: &P, objective: &O, parent1: &Tour, parent2: &Tour) -> GenericResult<(Tour, O::Fitness)>;
}

/// An operator tries to improve an existing tour.
pub trait Operator<P, O>
where
    O: Objective<Problem = P>,
{
    /// Returns the name of the operator.
    fn name(&self) -> String;

    /// Returns an improved tour with its fitness, `None` when no improvement was found.
    fn improve(&self, problem: &P, objective: &O, tour: &Tour, fitness: &O::Fitness) -> Option<(Tour, O::Fitness)>;
}
