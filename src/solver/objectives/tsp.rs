#[cfg(test)]
#[path = "../../../tests/unit/solver/objectives/tsp_test.rs"]
mod tsp_test;

use super::Objective;
use crate::models::{TourProblem, TspProblem, TspTwProblem};
use crate::models::Tour;
use crate::utils::{compare_floats, Cost, Float};
use std::cmp::Ordering;

fn tour_weight<P: TourProblem>(problem: &P, tour: &Tour) -> Cost {
    tour.pairs().map(|(from, to)| problem.weight(from, to)).sum()
}

/// An objective which minimizes the total transition weight of a tour.
#[derive(Clone, Copy, Debug, Default)]
pub struct TspObjective;

impl Objective for TspObjective {
    type Problem = TspProblem;
    type Fitness = Float;

    fn name(&self) -> &'static str {
        "TSP"
    }

    fn zero(&self) -> Self::Fitness {
        0.
    }

    fn infinite(&self) -> Self::Fitness {
        Float::INFINITY
    }

    fn is_zero(&self, fitness: &Self::Fitness) -> bool {
        *fitness == 0.
    }

    fn add(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness {
        left + right
    }

    fn subtract(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness {
        left - right
    }

    fn compare(&self, left: &Self::Fitness, right: &Self::Fitness) -> Ordering {
        compare_floats(*left, *right)
    }

    fn calculate(&self, problem: &Self::Problem, tour: &Tour) -> Self::Fitness {
        tour_weight(problem, tour)
    }
}

/// An objective which minimizes the total travel time of a tour with time windows. The
/// objective is non continuous: window violations computed elsewhere introduce jumps the
/// search must not assume away.
#[derive(Clone, Copy, Debug, Default)]
pub struct TspTwObjective;

impl Objective for TspTwObjective {
    type Problem = TspTwProblem;
    type Fitness = Float;

    fn name(&self) -> &'static str {
        "TSP-TW"
    }

    fn zero(&self) -> Self::Fitness {
        0.
    }

    fn infinite(&self) -> Self::Fitness {
        Float::INFINITY
    }

    fn is_zero(&self, fitness: &Self::Fitness) -> bool {
        *fitness == 0.
    }

    fn add(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness {
        left + right
    }

    fn subtract(&self, left: &Self::Fitness, right: &Self::Fitness) -> Self::Fitness {
        left - right
    }

    fn compare(&self, left: &Self::Fitness, right: &Self::Fitness) -> Ordering {
        compare_floats(*left, *right)
    }

    fn calculate(&self, problem: &Self::Problem, tour: &Tour) -> Self::Fitness {
        tour_weight(problem, tour)
    }

    fn is_non_continuous(&self) -> bool {
        true
    }
}
