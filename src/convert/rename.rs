//! Renaming of named clauses into the dense numeric space `1..=max_variable`.

use std::collections::HashMap;

use crate::structures::{
    clause::{ClauseSet, NamedClause},
    literal::literal_of,
    problem::NormalizedProblem,
};

/// Renames the variables of a clause set, in order of first occurrence.
pub fn rename_vars_in_clauses(clauses: &[NamedClause]) -> NormalizedProblem {
    let mut ids: HashMap<&str, usize> = HashMap::default();
    let mut original_names: Vec<String> = Vec::default();

    let renamed: ClauseSet = clauses
        .iter()
        .map(|clause| {
            clause
                .iter()
                .map(|literal| {
                    let id = *ids.entry(literal.name.as_str()).or_insert_with(|| {
                        original_names.push(literal.name.clone());
                        original_names.len()
                    });
                    literal_of(id, literal.polarity)
                })
                .collect()
        })
        .collect();

    NormalizedProblem {
        max_variable: original_names.len(),
        clauses: renamed,
        original_names,
    }
}
