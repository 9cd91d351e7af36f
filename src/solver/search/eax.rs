#[cfg(test)]
#[path = "../../../tests/unit/solver/search/eax_test.rs"]
mod eax_test;

use crate::algorithms::cycles::{AsymmetricAlternatingCycles, AsymmetricCycles};
use crate::models::common::{Customer, NOT_SET};
use crate::models::{Tour, TourProblem};
use crate::solver::objectives::Objective;
use crate::solver::Crossover;
use crate::utils::{Cost, Environment, GenericResult, LogSeverity};
use std::cmp::Ordering;
use std::sync::Arc;

const NEAREST_NEIGHBOURS: usize = 10;

/// A 2-opt style merge move: `(delta, from1, to1, from2, to2)`.
type ReconnectMove = (Cost, Customer, Customer, Customer, Customer);

/// Specifies how AB-cycles are picked when a new offspring is assembled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CycleSelection {
    /// Picks one cycle at random and consumes it: a later offspring of the same application
    /// cannot pick it again.
    SingleRandom,
    /// Picks every cycle independently with probability 0.75 without consuming any.
    MultipleRandom,
}

/// An edge assembly crossover (EAX): combines two parent tours through the AB-cycle
/// decomposition of their edge-union multigraph, then repairs the patched edge set into a
/// single tour with nearest-neighbour guided 2-opt style reconnection moves.
///
/// The crossover works on closed tours: an open or fixed-end problem is transparently
/// converted to its canonical closed form and the child is converted back.
pub struct EdgeAssemblyCrossover {
    max_offspring: usize,
    strategy: CycleSelection,
    use_nearest_neighbours: bool,
    environment: Arc<Environment>,
}

impl EdgeAssemblyCrossover {
    /// Creates a new instance of `EdgeAssemblyCrossover`.
    pub fn new(
        max_offspring: usize,
        strategy: CycleSelection,
        use_nearest_neighbours: bool,
        environment: Arc<Environment>,
    ) -> Self {
        assert!(max_offspring > 0);
        Self { max_offspring, strategy, use_nearest_neighbours, environment }
    }

    /// Creates a new instance of `EdgeAssemblyCrossover` with default settings.
    pub fn new_with_defaults(environment: Arc<Environment>) -> Self {
        Self::new(30, CycleSelection::SingleRandom, true, environment)
    }

    fn cross_closed<P, O>(&self, problem: &P, objective: &O, parent1: &Tour, parent2: &Tour) -> GenericResult<Tour>
    where
        P: TourProblem,
        O: Objective<Problem = P>,
    {
        let size = problem.size();

        let edges_a = AsymmetricCycles::from_edges(size, parent1.pairs());
        let mut edges_b = vec![NOT_SET; size];
        parent2.pairs().for_each(|(from, to)| edges_b[to] = from);

        let alternating = AsymmetricAlternatingCycles::new(
            size,
            (0..size).filter_map(|vertex| {
                let paired = edges_a.next_of(vertex);
                if paired == NOT_SET {
                    return None;
                }
                let follower = edges_b[paired];
                (follower != NOT_SET && follower != vertex).then_some((vertex, paired, follower))
            }),
        );
        // consumed below when the single offspring is assembled destructively
        let mut edges_a = Some(edges_a);

        let mut pool: Vec<Customer> = alternating.cycles().iter().map(|&(start, _)| start).collect();
        let expected_count = parent1.count();
        let random = self.environment.random.clone();

        let mut best: Option<(Tour, O::Fitness)> = None;
        let mut generated = 0;
        while generated < self.max_offspring && !pool.is_empty() {
            let selected = match self.strategy {
                CycleSelection::SingleRandom => {
                    let index = random.uniform_int(0, pool.len() as i32 - 1) as usize;
                    vec![pool.remove(index)]
                }
                CycleSelection::MultipleRandom => pool.iter().copied().filter(|_| random.is_hit(0.75)).collect(),
            };

            let mut donor = if self.max_offspring > 1 {
                edges_a.as_ref().expect("edge set is consumed only when one offspring is allowed").clone()
            } else {
                match edges_a.take() {
                    Some(edges) => edges,
                    None => break,
                }
            };

            // every vertex on a selected cycle trades its first-parent edge for its
            // second-parent edge
            for start in selected {
                let mut current = start;
                loop {
                    let (follower, paired) = alternating.next(current);
                    donor.add_edge(follower, paired);
                    current = follower;
                    if current == start {
                        break;
                    }
                }
            }

            self.reconnect(problem, parent1, &mut donor);

            let child = materialize(problem.first(), &donor)?;
            if child.count() == expected_count {
                generated += 1;
                let fitness = objective.calculate(problem, &child);
                let improves = best
                    .as_ref()
                    .map_or(true, |(_, current)| objective.total_order(&fitness, current) == Ordering::Less);
                if improves {
                    best = Some((child, fitness));
                }
            }
        }

        match best {
            Some((child, _)) => Ok(child),
            // no valid offspring was assembled, fall back to the first parent's edge set
            None => Ok(parent1.clone()),
        }
    }

    /// Merges the sub-tours of the patched edge set into a single cycle. On each round the
    /// smallest sub-tour is reconnected to the rest with the cheapest 2-opt style move found.
    fn reconnect<P: TourProblem>(&self, problem: &P, parent1: &Tour, donor: &mut AsymmetricCycles) {
        let size = donor.len();
        let neighbours =
            self.use_nearest_neighbours.then(|| problem.nearest_neighbours_forward(NEAREST_NEIGHBOURS));

        while donor.cycles().len() > 1 {
            let (start, _) = donor
                .cycles()
                .iter()
                .copied()
                .fold(None, |smallest: Option<(Customer, usize)>, candidate| match smallest {
                    Some((_, length)) if length <= candidate.1 => smallest,
                    _ => Some(candidate),
                })
                .expect("at least two cycles are present");

            // members of the smallest sub-tour cannot serve as merge partners
            let mut ignore = vec![false; size];
            let mut current = start;
            loop {
                ignore[current] = true;
                current = donor.next_of(current);
                if current == start {
                    break;
                }
            }

            // the first candidate found wins on an equal delta
            fn track(best: &mut Option<ReconnectMove>, delta: Cost, edges: (Customer, Customer, Customer, Customer)) {
                if best.map_or(true, |(current, ..)| delta < current) {
                    let (from1, to1, from2, to2) = edges;
                    *best = Some((delta, from1, to1, from2, to2));
                }
            }

            let mut best: Option<ReconnectMove> = None;

            if let Some(neighbours) = &neighbours {
                let mut from = start;
                loop {
                    let to = donor.next_of(from);
                    for &nn in neighbours[from].iter() {
                        if ignore[nn] {
                            continue;
                        }
                        let nn_to = donor.next_of(nn);
                        if nn_to == NOT_SET || ignore[nn_to] {
                            continue;
                        }

                        let delta = (problem.weight(from, nn_to) + problem.weight(nn, to))
                            - (problem.weight(from, to) + problem.weight(nn, nn_to));
                        track(&mut best, delta, (from, to, nn, nn_to));
                    }

                    from = to;
                    if from == start {
                        break;
                    }
                }
            }

            if best.is_none() {
                let from = start;
                let to = donor.next_of(from);
                for candidate in parent1.iter() {
                    if ignore[candidate] {
                        continue;
                    }
                    let candidate_to = donor.next_of(candidate);
                    if candidate_to == NOT_SET || ignore[candidate_to] {
                        continue;
                    }

                    let delta = (problem.weight(from, candidate_to) + problem.weight(candidate, to))
                        - (problem.weight(from, to) + problem.weight(candidate, candidate_to));
                    track(&mut best, delta, (from, to, candidate, candidate_to));
                }
            }

            let Some((_, from1, to1, from2, to2)) = best else {
                break;
            };

            donor.add_edge(from1, to2);
            donor.add_edge(from2, to1);
        }
    }
}

fn materialize(first: Customer, donor: &AsymmetricCycles) -> GenericResult<Tour> {
    let sequence = std::iter::successors(Some(first), |&current| {
        let next = donor.next_of(current);
        (next != NOT_SET && next != first).then_some(next)
    });

    Tour::new(sequence, Some(first))
}

impl<P, O> Crossover<P, O> for EdgeAssemblyCrossover
where
    P: TourProblem,
    O: Objective<Problem = P>,
{
    fn name(&self) -> String {
        let strategy = match self.strategy {
            CycleSelection::SingleRandom => "SR",
            CycleSelection::MultipleRandom => "MR",
        };
        let nn = if self.use_nearest_neighbours { "_NN" } else { "" };

        format!("EAX_({}{}{})", strategy, self.max_offspring, nn)
    }

    fn apply(&self, problem: &P, objective: &O, parent1: &Tour, parent2: &Tour) -> GenericResult<(Tour, O::Fitness)> {
        if parent1.last() != problem.last() || parent2.last() != problem.last() {
            return Err("cannot apply crossover: the parents' last customer disagrees with the problem".into());
        }

        let first = problem.first();
        if problem.last() == Some(first) {
            let child = self.cross_closed(problem, objective, parent1, parent2)?;
            let fitness = objective.calculate(problem, &child);
            return Ok((child, fitness));
        }

        // the crossover needs a closed tour without a fixed endpoint
        (self.environment.logger)(
            LogSeverity::Warn,
            "the problem is not closed, applying crossover on its canonical closed form",
        );

        let closed = problem.to_closed();
        let fixed_last = problem.last().filter(|&last| last != first);

        let convert = |parent: &Tour| -> GenericResult<Tour> {
            let sequence = parent.iter().filter(|&customer| Some(customer) != fixed_last);
            Tour::new(sequence, Some(first))
        };

        let child = self.cross_closed(&closed, objective, &convert(parent1)?, &convert(parent2)?)?;

        let sequence = child.iter().chain(fixed_last);
        let child = Tour::new(sequence, problem.last())?;
        let fitness = objective.calculate(problem, &child);

        Ok((child, fitness))
    }
}
