//! Literals, clauses, formulas, and the values passed between stages of a pipeline.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod problem;
