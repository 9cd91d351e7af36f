#[cfg(test)]
#[path = "../../../tests/unit/solver/objectives/stsp_test.rs"]
mod stsp_test;

use super::Objective;
use crate::models::directed::extract_all;
use crate::models::{StspProblem, Tour};
use crate::utils::{compare_floats, Cost, Float};
use std::cmp::Ordering;

/// A composite fitness of a selective tour: the amount of visited customers and the total
/// weight including turn penalties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StspFitness {
    /// Amount of visited customers.
    pub customers: i32,
    /// Total weight including turn penalties.
    pub weight: Cost,
}

impl StspFitness {
    /// Creates a new instance of `StspFitness`.
    pub fn new(customers: i32, weight: Cost) -> Self {
        Self { customers, weight }
    }
}

/// An objective over directed selective tours which prefers more visited customers and breaks
/// ties by lower weight.
#[derive(Clone, Copy, Debug, Default)]
pub struct StspObjective;

impl Objective for StspObjective {
    type Problem = StspProblem;
    type Fitness = StspFitness;

    fn name(&self) -> &'static str {
        "STSP"
    }

    fn zero(&self) -> Self::Fitness {
        StspFitness::new(0, 0.)
    }

    fn infinite(&self) -> Self::Fitness {
        StspFitness::new(i32::MIN, Float::MAX)
    }

    fn is_zero(&self, fitness: &Self::Fitness) -> bool {
        fitness.customers == 0 && fitness.weight == 0.
    }

    fn add(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness {
        StspFitness::new(left.customers + right.customers, left.weight + right.weight)
    }

    fn subtract(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness {
        StspFitness::new(left.customers - right.customers, left.weight - right.weight)
    }

    fn compare(&self, left: &Self::Fitness, right: &Self::Fitness) -> Ordering {
        left.customers.cmp(&right.customers).then(compare_floats(left.weight, right.weight))
    }

    fn total_order(&self, left: &Self::Fitness, right: &Self::Fitness) -> Ordering {
        right.customers.cmp(&left.customers).then(compare_floats(left.weight, right.weight))
    }

    fn calculate(&self, problem: &Self::Problem, tour: &Tour) -> Self::Fitness {
        let mut weight = 0.;
        let mut first_arrival = 0;
        let mut previous_departure = None;

        for directed_id in tour.iter() {
            let (arrival, departure, _, turn) = extract_all(directed_id);

            match previous_departure {
                Some(previous) => weight += problem.weight(previous, arrival),
                None => first_arrival = arrival,
            }
            weight += problem.turn_penalty(turn);

            previous_departure = Some(departure);
        }

        if tour.is_closed() {
            if let Some(previous) = previous_departure {
                weight += problem.weight(previous, first_arrival);
            }
        }

        StspFitness::new(tour.count() as i32, weight)
    }
}
