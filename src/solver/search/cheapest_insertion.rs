#[cfg(test)]
#[path = "../../../tests/unit/solver/search/cheapest_insertion_test.rs"]
mod cheapest_insertion_test;

use crate::models::common::Customer;
use crate::models::directed::{build_directed_id, extract_all, extract_id, TURN_COUNT};
use crate::models::{StspProblem, Tour};
use crate::solver::objectives::{Objective, StspFitness, StspObjective};
use crate::solver::Solver;
use crate::utils::{Cost, GenericResult};

/// A constructive solver for the directed selective problem: grows the tour from its endpoints
/// by repeatedly inserting the customer with the globally cheapest weight increase, evaluating
/// all four turns at every insertion point, until the weight budget is exhausted.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheapestInsertionSolver;

/// A candidate insertion: `(delta, directed id, customer to insert after)`.
type Insertion = (Cost, Customer, Customer);

impl CheapestInsertionSolver {
    fn cheapest_turn(problem: &StspProblem) -> usize {
        (0..TURN_COUNT)
            .fold(None, |cheapest: Option<usize>, turn| match cheapest {
                Some(best) if problem.turn_penalty(best) <= problem.turn_penalty(turn) => cheapest,
                _ => Some(turn),
            })
            .expect("four turns are always available")
    }

    /// Calculates the weight increase of placing `inserted` between `from` and `to`.
    fn insertion_delta(problem: &StspProblem, from: Customer, to: Option<Customer>, inserted: Customer) -> Cost {
        let (_, from_departure, _, _) = extract_all(from);
        let (arrival, departure, _, turn) = extract_all(inserted);

        let added = problem.weight(from_departure, arrival) + problem.turn_penalty(turn);

        match to {
            Some(to) => {
                let (to_arrival, _, _, _) = extract_all(to);
                added + problem.weight(departure, to_arrival) - problem.weight(from_departure, to_arrival)
            }
            None => added,
        }
    }

    fn best_insertion(problem: &StspProblem, tour: &Tour, placed: &[bool]) -> Option<Insertion> {
        let mut positions: Vec<(Customer, Option<Customer>)> =
            tour.pairs().map(|(from, to)| (from, Some(to))).collect();
        if tour.is_closed() {
            if tour.count() == 1 {
                positions.push((tour.first(), Some(tour.first())));
            }
        } else if tour.last().is_none() {
            // an open tour can also grow at its end
            positions.push((tour.iter().last().expect("tour is not empty"), None));
        }

        let mut best: Option<Insertion> = None;

        for customer in (0..problem.size()).filter(|&customer| !placed[customer]) {
            for turn in 0..TURN_COUNT {
                let directed_id = build_directed_id(customer, turn);

                for &(from, to) in positions.iter() {
                    let delta = Self::insertion_delta(problem, from, to, directed_id);
                    if best.map_or(true, |(current, ..)| delta < current) {
                        best = Some((delta, directed_id, from));
                    }
                }
            }
        }

        best
    }
}

impl Solver<StspProblem, StspObjective> for CheapestInsertionSolver {
    fn name(&self) -> String {
        "CI_DIRECTED".to_string()
    }

    fn solve(&self, problem: &StspProblem, objective: &StspObjective) -> GenericResult<(Tour, StspFitness)> {
        let turn = Self::cheapest_turn(problem);
        let first = build_directed_id(problem.first(), turn);

        let mut tour = match problem.last() {
            None => Tour::new([first], None)?,
            Some(last) if last == problem.first() => Tour::new([first], Some(first))?,
            Some(last) => {
                let last = build_directed_id(last, turn);
                Tour::new([first, last], Some(last))?
            }
        };

        let mut placed = vec![false; problem.size()];
        tour.iter().for_each(|directed_id| placed[extract_id(directed_id)] = true);

        let mut weight = objective.calculate(problem, &tour).weight;

        while let Some((delta, directed_id, after)) = Self::best_insertion(problem, &tour, &placed) {
            if weight + delta > problem.max() {
                break;
            }

            tour.insert_after(after, directed_id)?;
            placed[extract_id(directed_id)] = true;
            weight += delta;
        }

        let result = objective.calculate(problem, &tour);
        Ok((tour, result))
    }
}
