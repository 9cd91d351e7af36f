#[cfg(test)]
#[path = "../../tests/unit/solver/genetic_test.rs"]
mod genetic_test;

use crate::models::{Tour, TourProblem};
use crate::solver::objectives::Objective;
use crate::solver::{Crossover, Operator, Solver};
use crate::utils::{Environment, GenericResult, Random};
use std::cmp::Ordering;
use std::sync::Arc;

/// Specifies termination and population parameters of [`GeneticSolver`].
#[derive(Clone, Copy, Debug)]
pub struct GeneticSolverConfig {
    /// Amount of individuals kept in the population.
    pub population_size: usize,
    /// Amount of individuals participating in a tournament selection.
    pub tournament_size: usize,
    /// Amount of generations to run.
    pub max_generations: usize,
    /// Amount of consecutive generations without improvement after which the search stops.
    pub stagnation_limit: usize,
}

impl Default for GeneticSolverConfig {
    fn default() -> Self {
        Self { population_size: 32, tournament_size: 4, max_generations: 2000, stagnation_limit: 500 }
    }
}

/// A steady state genetic solver: a population of tours is refined by crossing tournament
/// selected parents and replacing the worst individual whenever the child improves on it.
pub struct GeneticSolver<P, O, X>
where
    P: TourProblem,
    O: Objective<Problem = P>,
    X: Crossover<P, O>,
{
    crossover: X,
    improvement: Option<Box<dyn Operator<P, O> + Send + Sync>>,
    config: GeneticSolverConfig,
    environment: Arc<Environment>,
}

impl<P, O, X> GeneticSolver<P, O, X>
where
    P: TourProblem,
    O: Objective<Problem = P>,
    X: Crossover<P, O>,
{
    /// Creates a new instance of `GeneticSolver`.
    pub fn new(crossover: X, config: GeneticSolverConfig, environment: Arc<Environment>) -> Self {
        assert!(config.population_size > 1);
        Self { crossover, improvement: None, config, environment }
    }

    /// Adds an improvement operator applied to every offspring.
    pub fn with_improvement(mut self, improvement: Box<dyn Operator<P, O> + Send + Sync>) -> Self {
        self.improvement = Some(improvement);
        self
    }

    fn initial_sequence(problem: &P) -> Vec<usize> {
        let first = problem.first();
        let fixed_last = problem.last().filter(|&last| last != first);

        let mut sequence = vec![first];
        sequence.extend((0..problem.size()).filter(|&customer| customer != first && Some(customer) != fixed_last));
        sequence.extend(fixed_last);

        sequence
    }

    fn shuffle_middle(sequence: &mut [usize], has_fixed_last: bool, random: &(dyn Random + Send + Sync)) {
        let end = sequence.len() - usize::from(has_fixed_last);
        // Fisher-Yates over the customers between the endpoints
        for index in (2..end).rev() {
            let other = random.uniform_int(1, index as i32) as usize;
            sequence.swap(index, other);
        }
    }

    fn select<'a>(
        &self,
        population: &'a [(Tour, O::Fitness)],
        objective: &O,
        random: &(dyn Random + Send + Sync),
    ) -> &'a (Tour, O::Fitness) {
        let pick = |_: usize| random.uniform_int(0, population.len() as i32 - 1) as usize;

        (1..self.config.tournament_size)
            .map(pick)
            .fold(&population[pick(0)], |winner, index| {
                let candidate = &population[index];
                match objective.total_order(&candidate.1, &winner.1) {
                    Ordering::Less => candidate,
                    _ => winner,
                }
            })
    }
}

impl<P, O, X> Solver<P, O> for GeneticSolver<P, O, X>
where
    P: TourProblem,
    O: Objective<Problem = P>,
    X: Crossover<P, O>,
{
    fn name(&self) -> String {
        format!("GA({})", self.crossover.name())
    }

    fn solve(&self, problem: &P, objective: &O) -> GenericResult<(Tour, O::Fitness)> {
        let random = self.environment.random.clone();
        let has_fixed_last = problem.last().is_some_and(|last| last != problem.first());

        let mut population: Vec<(Tour, O::Fitness)> = Vec::with_capacity(self.config.population_size);
        let mut sequence = Self::initial_sequence(problem);
        for index in 0..self.config.population_size {
            if index > 0 {
                Self::shuffle_middle(&mut sequence, has_fixed_last, random.as_ref());
            }

            let tour = Tour::new(sequence.iter().copied(), problem.last())?;
            let fitness = objective.calculate(problem, &tour);
            population.push((tour, fitness));
        }

        let mut stagnation = 0;
        for _ in 0..self.config.max_generations {
            if stagnation >= self.config.stagnation_limit {
                break;
            }

            if self.environment.quota.as_ref().is_some_and(|quota| quota.is_reached()) {
                break;
            }

            let parent1 = self.select(&population, objective, random.as_ref());
            let parent2 = self.select(&population, objective, random.as_ref());

            let (child, child_fitness) = self.crossover.apply(problem, objective, &parent1.0, &parent2.0)?;
            let (child, child_fitness) = match &self.improvement {
                Some(operator) => operator
                    .improve(problem, objective, &child, &child_fitness)
                    .unwrap_or((child, child_fitness)),
                None => (child, child_fitness),
            };

            let worst = population
                .iter()
                .enumerate()
                .max_by(|(_, left), (_, right)| match objective.total_order(&left.1, &right.1) {
                    // prefer replacing the earliest of equally bad individuals
                    Ordering::Equal => Ordering::Greater,
                    other => other,
                })
                .map(|(index, _)| index)
                .expect("population is not empty");

            if objective.total_order(&child_fitness, &population[worst].1) == Ordering::Less {
                population[worst] = (child, child_fitness);
                stagnation = 0;
            } else {
                stagnation += 1;
            }
        }

        population
            .into_iter()
            .reduce(|best, candidate| match objective.total_order(&candidate.1, &best.1) {
                Ordering::Less => candidate,
                _ => best,
            })
            .ok_or_else(|| "population cannot be empty".into())
    }
}
