/// A type alias for the floating point type used across the crate.
pub type Float = f64;

/// Represents the cost of a transition between two customers.
pub type Cost = Float;
