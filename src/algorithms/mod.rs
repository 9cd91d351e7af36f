//! Contains reusable algorithmic building blocks.

pub mod cycles;
