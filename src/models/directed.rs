//! Provides bit packing of directed visits: a physical vertex together with the sides the
//! tour arrives on and departs from.

#[cfg(test)]
#[path = "../../tests/unit/models/directed_test.rs"]
mod directed_test;

use crate::models::common::Customer;

/// Amount of turn combinations at a physical vertex: two arrival sides times two departure sides.
pub const TURN_COUNT: usize = 4;

/// Builds a directed id from a physical vertex id and a turn in `[0, 4)`.
///
/// The two low bits carry the turn, the remaining bits carry the vertex id, so the encoding
/// round-trips through [`extract_all`] and stays within `ceil(log2(n)) + 2` bits.
#[inline]
pub fn build_directed_id(id: Customer, turn: usize) -> Customer {
    debug_assert!(turn < TURN_COUNT);
    (id << 2) | turn
}

/// Builds a directed id from a physical vertex id and its arrival/departure sides.
#[inline]
pub fn build_directed_id_from_sides(id: Customer, arrival: usize, departure: usize) -> Customer {
    build_directed_id(id, turn_from_sides(arrival, departure))
}

/// Combines arrival and departure sides into a turn in `[0, 4)`.
#[inline]
pub fn turn_from_sides(arrival: usize, departure: usize) -> usize {
    debug_assert!(arrival < 2 && departure < 2);
    (arrival << 1) | departure
}

/// Extracts the physical vertex id from a directed id.
#[inline]
pub fn extract_id(directed_id: Customer) -> Customer {
    directed_id >> 2
}

/// Extracts the turn from a directed id.
#[inline]
pub fn extract_turn(directed_id: Customer) -> usize {
    directed_id & 3
}

/// Extracts all fields from a directed id as `(arrival, departure, id, turn)`, where arrival
/// and departure are indices into the side-expanded weight matrix (two rows per vertex).
#[inline]
pub fn extract_all(directed_id: Customer) -> (usize, usize, Customer, usize) {
    let id = extract_id(directed_id);
    let turn = extract_turn(directed_id);
    let arrival = (id << 1) | (turn >> 1);
    let departure = (id << 1) | (turn & 1);

    (arrival, departure, id, turn)
}
