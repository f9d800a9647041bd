//! Formulas of propositional logic, as produced by the [formula parser](crate::parse::formula).
//!
//! The pipelines never inspect a formula: they pass it from the parser to the converter.
//! The structure is public all the same, for collaborators and for tests.
//!
//! A formula serializes to nested prefix lists, e.g. `a & -b` to `["&","a",["-","b"]]`.
//! This is the structure dumped by the `parse_tree` build mode.

use serde::{ser::SerializeSeq, Serialize, Serializer};

/// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Xor,
    Implies,
    Equiv,
}

impl Connective {
    /// The symbol of the connective in parse trees and printed formulas.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Implies => "->",
            Self::Equiv => "<->",
        }
    }

    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Xor => left != right,
            Self::Implies => !left || right,
            Self::Equiv => left == right,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// The constant true.
    Top,

    /// The constant false.
    Bottom,

    Atom(String),

    Not(Box<Formula>),

    Binary(Connective, Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn negation(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    pub fn binary(connective: Connective, left: Formula, right: Formula) -> Self {
        Formula::Binary(connective, Box::new(left), Box::new(right))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::binary(Connective::And, left, right)
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::binary(Connective::Or, left, right)
    }

    /// The connective over the operands, in order, grouped as a balanced tree.
    ///
    /// For an associative connective the formula is equivalent to the left-associative chain, with depth logarithmic in the count of operands.
    /// Three operands group to the left, as `(a & b) & c`.
    pub fn balanced(connective: Connective, mut operands: Vec<Formula>) -> Option<Self> {
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            count => {
                let right = operands.split_off(count.div_ceil(2));
                Some(Formula::binary(
                    connective,
                    Formula::balanced(connective, operands)?,
                    Formula::balanced(connective, right)?,
                ))
            }
        }
    }

    /// The names of atoms in the formula, in order of first occurrence from the left.
    pub fn atoms(&self) -> Vec<String> {
        let mut atoms = Vec::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut Vec<String>) {
        match self {
            Formula::Top | Formula::Bottom => {}

            Formula::Atom(name) => {
                if !atoms.contains(name) {
                    atoms.push(name.clone())
                }
            }

            Formula::Not(inner) => inner.collect_atoms(atoms),

            Formula::Binary(_, left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }

    /// The value of the formula, given the value of each atom.
    pub fn evaluate<F: Fn(&str) -> bool>(&self, value_of: &F) -> bool {
        match self {
            Formula::Top => true,
            Formula::Bottom => false,
            Formula::Atom(name) => value_of(name),
            Formula::Not(inner) => !inner.evaluate(value_of),
            Formula::Binary(connective, left, right) => {
                connective.apply(left.evaluate(value_of), right.evaluate(value_of))
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Formula::Top => write!(f, "true"),
            Formula::Bottom => write!(f, "false"),
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(inner) => write!(f, "-{inner}"),
            Formula::Binary(connective, left, right) => {
                write!(f, "({left} {} {right})", connective.symbol())
            }
        }
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Formula::Top => serializer.serialize_str("true"),

            Formula::Bottom => serializer.serialize_str("false"),

            Formula::Atom(name) => serializer.serialize_str(name),

            Formula::Not(inner) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("-")?;
                seq.serialize_element(inner)?;
                seq.end()
            }

            Formula::Binary(connective, left, right) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(connective.symbol())?;
                seq.serialize_element(left)?;
                seq.serialize_element(right)?;
                seq.end()
            }
        }
    }
}
