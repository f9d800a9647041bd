//! Literals, as signed integers or as named variables paired with a polarity.
//!
//! Integer literals follow DIMACS: the variable is the absolute value, and the sign is the polarity.
//! So, `-3` is the negation of variable `3`, and `0` is not a literal.
//!
//! Named literals appear only between conversion of a formula to CNF and renaming of the variables of the CNF.

use serde::Serialize;

/// A variable, in the dense numeric space `1..=max_variable`.
pub type Variable = usize;

/// A signed integer literal.
pub type Literal = i32;

/// The largest variable an integer literal can name.
pub const MAX_VARIABLE: Variable = Literal::MAX as Variable;

/// The variable of an integer literal.
pub fn variable_of(literal: Literal) -> Variable {
    literal.unsigned_abs() as Variable
}

/// The integer literal of a variable with the given polarity.
///
/// The variable is at most [MAX_VARIABLE].
pub fn literal_of(variable: Variable, polarity: bool) -> Literal {
    match polarity {
        true => variable as Literal,
        false => -(variable as Literal),
    }
}

/// A variable name paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NamedLiteral {
    pub name: String,
    pub polarity: bool,
}

impl NamedLiteral {
    pub fn new(name: impl Into<String>, polarity: bool) -> Self {
        NamedLiteral {
            name: name.into(),
            polarity,
        }
    }

    pub fn negate(&self) -> Self {
        NamedLiteral {
            name: self.name.clone(),
            polarity: !self.polarity,
        }
    }
}

impl std::fmt::Display for NamedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.name),
            false => write!(f, "-{}", self.name),
        }
    }
}

/// A literal as text, using the name of the variable if one is given.
///
/// `names[i]` is the name of variable `i + 1`.
pub fn label(literal: Literal, names: &[String]) -> String {
    match names.get(variable_of(literal).wrapping_sub(1)) {
        Some(name) if literal > 0 => name.clone(),
        Some(name) => format!("-{name}"),
        None => literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let names = vec!["p".to_string(), "q".to_string()];
        assert_eq!(label(1, &names), "p");
        assert_eq!(label(-2, &names), "-q");
        assert_eq!(label(-3, &names), "-3");
        assert_eq!(label(-3, &[]), "-3");
    }

    #[test]
    fn conversion() {
        assert_eq!(variable_of(-7), 7);
        assert_eq!(literal_of(7, false), -7);
        assert_eq!(literal_of(7, true), 7);
        assert_eq!(NamedLiteral::new("p", true).negate().to_string(), "-p");
    }
}
