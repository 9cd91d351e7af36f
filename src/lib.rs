//! This crate provides building blocks to solve Traveling Salesman Problem variations with a
//! genetic metaheuristic built around the Edge Assembly Crossover (EAX) operator.
//!
//! # Key points
//!
//! The crate models three problem variations on top of a precomputed weight matrix: the
//! classic closed/open/fixed-end TSP, the TSP with time windows, and a u-turn aware directed
//! selective TSP where a weight budget bounds how many customers can be visited and every
//! visit pays a turn penalty.
//!
//! The search engine combines the EAX crossover with a steady state genetic solver and local
//! search operators; the selective variation ships with a budget-aware constructive solver and
//! a router driver which connects the engine to a weight matrix collaborator.
//!
//! # Examples
//!
//! This example solves a small closed TSP:
//!
//! ```
//! # use std::sync::Arc;
//! use tsp_core::prelude::*;
//!
//! let weights: Arc<WeightMatrix> = Arc::new(vec![
//!     vec![0., 1., 2., 1.],
//!     vec![1., 0., 1., 2.],
//!     vec![2., 1., 0., 1.],
//!     vec![1., 2., 1., 0.],
//! ]);
//! let problem = TspProblem::new(0, Some(0), weights);
//!
//! let environment = Arc::new(Environment::new_with_random(Arc::new(DefaultRandom::new_with_seed(42))));
//! let crossover = EdgeAssemblyCrossover::new_with_defaults(environment.clone());
//! let solver = GeneticSolver::new(crossover, GeneticSolverConfig::default(), environment);
//!
//! let (tour, fitness) = solver.solve(&problem, &TspObjective).expect("cannot solve the problem");
//!
//! assert_eq!(tour.count(), 4);
//! assert_eq!(fitness, 4.);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod routing;
pub mod solver;
pub mod utils;
