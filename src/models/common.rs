//! Contains common types shared by the problem and solution models.

use crate::utils::Cost;

/// A customer is a unique identifier for a stop to visit.
pub type Customer = usize;

/// A sentinel which marks an absent customer inside successor arrays.
pub const NOT_SET: Customer = Customer::MAX;

/// A weight matrix addressable as `weights[from][to]`, possibly asymmetric.
pub type WeightMatrix = Vec<Vec<Cost>>;
