//! Contains the selective-TSP router driver and the contract of the weight matrix collaborator.

#[cfg(test)]
#[path = "../../tests/unit/routing/router_test.rs"]
mod router_test;

use crate::models::common::{Customer, WeightMatrix};
use crate::models::{StspProblem, Tour};
use crate::solver::objectives::StspObjective;
use crate::solver::Solver;
use crate::utils::Cost;
use std::sync::Arc;

/// Describes why a caller-facing location cannot be used by the weight matrix.
#[derive(Clone, Debug, Default)]
pub struct IndexError {
    /// A location resolution error, when the location itself could not be matched.
    pub location_error: Option<String>,
    /// A router point error, when the matched location could not be routed.
    pub router_point_error: Option<String>,
}

/// A contract of the weight matrix collaborator: an algorithm which resolves caller-facing
/// locations and produces a directed, side-expanded weight matrix between them.
pub trait WeightMatrixAlgorithm {
    /// Returns true if the algorithm has run already.
    fn has_run(&self) -> bool;

    /// Returns true if the algorithm has run and succeeded.
    fn has_succeeded(&self) -> bool;

    /// Returns the failure diagnostic, if any.
    fn error_message(&self) -> Option<String>;

    /// Runs the algorithm.
    fn run(&mut self);

    /// Returns the error registered for the given caller-facing location, if any.
    fn try_get_error(&self, index: usize) -> Option<IndexError>;

    /// Returns the directed weight matrix.
    fn weights(&self) -> Arc<WeightMatrix>;

    /// Maps a caller-facing location index to its matrix-interior customer id.
    fn weight_index(&self, original: usize) -> Option<Customer>;
}

/// A router which solves the u-turn aware directed selective problem on top of a weight matrix
/// collaborator: it validates the endpoints, builds the problem and publishes the best tour
/// discovered within the weight budget.
pub struct StspRouter<M> {
    matrix: M,
    first: usize,
    last: Option<usize>,
    turn_penalties: [Cost; 4],
    max: Cost,
    solver: Option<Box<dyn Solver<StspProblem, StspObjective>>>,
    tour: Option<Tour>,
    error_message: Option<String>,
    has_run: bool,
    has_succeeded: bool,
}

impl<M: WeightMatrixAlgorithm> StspRouter<M> {
    /// Creates a new instance of `StspRouter`.
    pub fn new(matrix: M, first: usize, last: Option<usize>, turn_penalties: [Cost; 4], max: Cost) -> Self {
        Self {
            matrix,
            first,
            last,
            turn_penalties,
            max,
            solver: None,
            tour: None,
            error_message: None,
            has_run: false,
            has_succeeded: false,
        }
    }

    /// Replaces the default constructive solver with a custom one.
    pub fn with_solver(mut self, solver: Box<dyn Solver<StspProblem, StspObjective>>) -> Self {
        self.solver = Some(solver);
        self
    }

    /// Returns true if the router has run already.
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Returns true if the router has run and succeeded.
    pub fn has_succeeded(&self) -> bool {
        self.has_succeeded
    }

    /// Returns the best discovered tour, `None` until the router succeeds.
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Returns the failure diagnostic, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Runs the router.
    pub fn run(&mut self) {
        self.has_run = true;

        match self.run_inner() {
            Ok(tour) => {
                self.tour = Some(tour);
                self.has_succeeded = true;
            }
            Err(message) => {
                self.error_message = Some(message);
                self.has_succeeded = false;
            }
        }
    }

    fn run_inner(&mut self) -> Result<Tour, String> {
        if !self.matrix.has_run() {
            self.matrix.run();
        }

        if !self.matrix.has_succeeded() {
            return Err(self
                .matrix
                .error_message()
                .unwrap_or_else(|| "could not calculate weight matrix".to_string()));
        }

        let first = self.validate_endpoint(self.first, "first")?;
        let last = self.last.map(|last| self.validate_endpoint(last, "last")).transpose()?;

        let problem = StspProblem::new(first, last, self.matrix.weights(), self.turn_penalties, self.max);

        let solved = match &self.solver {
            Some(solver) => problem.solve_with(solver.as_ref()),
            None => problem.solve(),
        };

        solved.map(|(tour, _)| tour).map_err(|error| error.to_string())
    }

    fn validate_endpoint(&self, original: usize, role: &str) -> Result<Customer, String> {
        if let Some(error) = self.matrix.try_get_error(original) {
            return Err(if let Some(message) = error.location_error {
                format!("{role} location is in error: {message}")
            } else if let Some(message) = error.router_point_error {
                format!("{role} location could not be routed: {message}")
            } else {
                format!("{role} location was in error list")
            });
        }

        self.matrix.weight_index(original).ok_or_else(|| format!("{role} location was in error list"))
    }
}
