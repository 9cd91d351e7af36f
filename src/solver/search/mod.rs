//! Contains search operators and constructive solvers.

mod cheapest_insertion;
pub use self::cheapest_insertion::CheapestInsertionSolver;

mod eax;
pub use self::eax::{CycleSelection, EdgeAssemblyCrossover};

mod two_opt;
pub use self::two_opt::TwoOptOperator;
