#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::{Customer, WeightMatrix};
use crate::models::Tour;
use crate::solver::objectives::{StspFitness, StspObjective};
use crate::solver::search::CheapestInsertionSolver;
use crate::solver::Solver;
use crate::utils::{compare_floats, Cost, Float, GenericResult};
use hashbrown::HashMap;
use std::sync::{Arc, Mutex};

/// Provides the problem facts needed by tour solvers: endpoints, transition weights and
/// a forward nearest neighbourhood.
pub trait TourProblem: Send + Sync {
    /// Returns the required starting customer.
    fn first(&self) -> Customer;

    /// Returns the customer which defines the tour shape, see [`crate::models::Tour`].
    fn last(&self) -> Option<Customer>;

    /// Returns the dimension of the weight matrix.
    fn size(&self) -> usize;

    /// Returns the weight of the transition between two customers.
    fn weight(&self, from: Customer, to: Customer) -> Cost;

    /// Returns, for every customer, its `k` forward nearest neighbours ordered by ascending
    /// weight. The table is cached per `k`.
    fn nearest_neighbours_forward(&self, k: usize) -> Arc<Vec<Vec<Customer>>>;

    /// Returns the canonical closed rendition of the problem: same weights, same first
    /// customer, tour shape closed back to it.
    fn to_closed(&self) -> Self
    where
        Self: Sized;
}

type NeighbourCache = Arc<Mutex<HashMap<usize, Arc<Vec<Vec<Customer>>>>>>;

fn neighbour_table(weights: &WeightMatrix, k: usize) -> Vec<Vec<Customer>> {
    (0..weights.len())
        .map(|from| {
            let mut neighbours: Vec<Customer> = (0..weights.len()).filter(|&to| to != from).collect();
            neighbours.sort_by(|&left, &right| {
                compare_floats(weights[from][left], weights[from][right]).then(left.cmp(&right))
            });
            neighbours.truncate(k);
            neighbours
        })
        .collect()
}

/// A Traveling Salesman Problem over a precomputed weight matrix.
pub struct TspProblem {
    first: Customer,
    last: Option<Customer>,
    weights: Arc<WeightMatrix>,
    neighbours: NeighbourCache,
}

impl TspProblem {
    /// Creates a new instance of `TspProblem`.
    pub fn new(first: Customer, last: Option<Customer>, weights: Arc<WeightMatrix>) -> Self {
        Self { first, last, weights, neighbours: Arc::new(Mutex::new(HashMap::new())) }
    }
}

impl TourProblem for TspProblem {
    fn first(&self) -> Customer {
        self.first
    }

    fn last(&self) -> Option<Customer> {
        self.last
    }

    fn size(&self) -> usize {
        self.weights.len()
    }

    fn weight(&self, from: Customer, to: Customer) -> Cost {
        self.weights[from][to]
    }

    fn nearest_neighbours_forward(&self, k: usize) -> Arc<Vec<Vec<Customer>>> {
        let mut cache = self.neighbours.lock().expect("cannot lock neighbour cache");
        cache.entry(k).or_insert_with(|| Arc::new(neighbour_table(&self.weights, k))).clone()
    }

    fn to_closed(&self) -> Self {
        Self {
            first: self.first,
            last: Some(self.first),
            weights: self.weights.clone(),
            neighbours: self.neighbours.clone(),
        }
    }
}

/// A time window given by its earliest and latest time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    /// Earliest time.
    pub start: Float,
    /// Latest time.
    pub end: Float,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`.
    pub fn new(start: Float, end: Float) -> Self {
        Self { start, end }
    }
}

/// A Traveling Salesman Problem with a time window attached to every customer. The windows
/// are consumed by the objective, the crossover sees only the travel time matrix.
pub struct TspTwProblem {
    inner: TspProblem,
    times: Arc<Vec<TimeWindow>>,
}

impl TspTwProblem {
    /// Creates a new instance of `TspTwProblem`.
    pub fn new(
        first: Customer,
        last: Option<Customer>,
        weights: Arc<WeightMatrix>,
        times: Arc<Vec<TimeWindow>>,
    ) -> Self {
        Self { inner: TspProblem::new(first, last, weights), times }
    }

    /// Returns the time window of the given customer.
    pub fn time_window(&self, customer: Customer) -> TimeWindow {
        self.times[customer]
    }
}

impl TourProblem for TspTwProblem {
    fn first(&self) -> Customer {
        self.inner.first()
    }

    fn last(&self) -> Option<Customer> {
        self.inner.last()
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn weight(&self, from: Customer, to: Customer) -> Cost {
        self.inner.weight(from, to)
    }

    fn nearest_neighbours_forward(&self, k: usize) -> Arc<Vec<Vec<Customer>>> {
        self.inner.nearest_neighbours_forward(k)
    }

    fn to_closed(&self) -> Self {
        Self { inner: self.inner.to_closed(), times: self.times.clone() }
    }
}

/// A directed Selective Traveling Salesman Problem: visit as many customers as the weight
/// budget admits, paying a turn penalty at every visited vertex.
///
/// The weight matrix is side-expanded: every physical vertex occupies two consecutive rows,
/// one per side, and tours are built from directed ids (see [`crate::models::directed`]).
pub struct StspProblem {
    first: Customer,
    last: Option<Customer>,
    weights: Arc<WeightMatrix>,
    turn_penalties: [Cost; 4],
    max: Cost,
}

impl StspProblem {
    /// Creates a new instance of `StspProblem`. The first and last customers are physical
    /// vertex ids in matrix-interior terms.
    pub fn new(
        first: Customer,
        last: Option<Customer>,
        weights: Arc<WeightMatrix>,
        turn_penalties: [Cost; 4],
        max: Cost,
    ) -> Self {
        Self { first, last, weights, turn_penalties, max }
    }

    /// Returns the required starting customer as a physical vertex id.
    pub fn first(&self) -> Customer {
        self.first
    }

    /// Returns the optional last customer as a physical vertex id.
    pub fn last(&self) -> Option<Customer> {
        self.last
    }

    /// Returns the amount of physical vertices.
    pub fn size(&self) -> usize {
        self.weights.len() / 2
    }

    /// Returns the weight between two sides of the side-expanded matrix.
    pub fn weight(&self, from_side: usize, to_side: usize) -> Cost {
        self.weights[from_side][to_side]
    }

    /// Returns the penalty of the given turn.
    pub fn turn_penalty(&self, turn: usize) -> Cost {
        self.turn_penalties[turn]
    }

    /// Returns the maximum weight budget.
    pub fn max(&self) -> Cost {
        self.max
    }

    /// Solves the problem with the default constructive solver.
    pub fn solve(&self) -> GenericResult<(Tour, StspFitness)> {
        self.solve_with(&CheapestInsertionSolver)
    }

    /// Solves the problem with the given solver.
    pub fn solve_with(&self, solver: &dyn Solver<Self, StspObjective>) -> GenericResult<(Tour, StspFitness)> {
        solver.solve(self, &StspObjective)
    }
}
