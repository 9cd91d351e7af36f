#[cfg(test)]
#[path = "../../../tests/unit/solver/search/two_opt_test.rs"]
mod two_opt_test;

use crate::models::{Tour, TourProblem};
use crate::solver::objectives::Objective;
use crate::solver::Operator;
use crate::utils::GenericResult;
use std::cmp::Ordering;

/// A classic 2-opt local search: reverses tour segments while an improvement is found,
/// keeping the first customer and a fixed last customer in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoOptOperator;

impl TwoOptOperator {
    fn rebuild(sequence: &[usize], last: Option<usize>) -> GenericResult<Tour> {
        Tour::new(sequence.iter().copied(), last)
    }
}

impl<P, O> Operator<P, O> for TwoOptOperator
where
    P: TourProblem,
    O: Objective<Problem = P>,
{
    fn name(&self) -> String {
        "2-Opt".to_string()
    }

    fn improve(&self, problem: &P, objective: &O, tour: &Tour, fitness: &O::Fitness) -> Option<(Tour, O::Fitness)> {
        let mut sequence: Vec<_> = tour.iter().collect();
        if sequence.len() < 4 {
            return None;
        }

        // the first customer stays put, so does a fixed last one
        let movable_end = match tour.last() {
            Some(last) if last != tour.first() => sequence.len() - 1,
            _ => sequence.len(),
        };

        let mut best_fitness = fitness.clone();
        let mut improved = false;

        let mut restart = true;
        while restart {
            restart = false;

            'scan: for begin in 1..movable_end {
                for end in (begin + 1)..movable_end {
                    sequence[begin..=end].reverse();

                    match Self::rebuild(&sequence, tour.last()) {
                        Ok(candidate) => {
                            let candidate_fitness = objective.calculate(problem, &candidate);
                            if objective.total_order(&candidate_fitness, &best_fitness) == Ordering::Less {
                                best_fitness = candidate_fitness;
                                improved = true;
                                restart = true;
                                break 'scan;
                            }
                        }
                        Err(_) => {}
                    }

                    sequence[begin..=end].reverse();
                }
            }
        }

        if improved {
            Self::rebuild(&sequence, tour.last())
                .ok()
                .map(|candidate| (candidate, best_fitness))
        } else {
            None
        }
    }
}
