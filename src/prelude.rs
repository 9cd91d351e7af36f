//! This module reimports a commonly used types.

pub use crate::models::common::{Customer, WeightMatrix, NOT_SET};
pub use crate::models::Tour;
pub use crate::models::{StspProblem, TimeWindow, TourProblem, TspProblem, TspTwProblem};

pub use crate::solver::objectives::{Objective, StspFitness, StspObjective, TspObjective, TspTwObjective};
pub use crate::solver::search::{CheapestInsertionSolver, CycleSelection, EdgeAssemblyCrossover, TwoOptOperator};
pub use crate::solver::{Crossover, GeneticSolver, GeneticSolverConfig, Operator, Solver};

pub use crate::routing::{StspRouter, WeightMatrixAlgorithm};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Random;
pub use crate::utils::{InfoLogger, LogSeverity};
pub use crate::utils::{Cost, Float};
pub use crate::utils::{GenericError, GenericResult};
