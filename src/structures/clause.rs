//! Clauses and clause sets.
//!
//! A clause is a disjunction of literals, and a clause set is a conjunction of clauses.
//! Both are kept as plain vectors, in the order given: nothing here sorts or deduplicates.

use crate::structures::literal::{variable_of, Literal, NamedLiteral};

pub type Clause = Vec<Literal>;

pub type ClauseSet = Vec<Clause>;

pub type NamedClause = Vec<NamedLiteral>;

pub type NamedClauseSet = Vec<NamedClause>;

/// Whether every clause has some literal true on the valuation.
///
/// `valuation[v - 1]` is the value of variable `v`, and variables outside the valuation are taken to be false.
pub fn satisfied_by(clauses: &[Clause], valuation: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            let value = valuation
                .get(variable_of(*literal).wrapping_sub(1))
                .copied()
                .unwrap_or(false);
            value == (*literal > 0)
        })
    })
}
