//! Formulas in an infix syntax.
//!
//! | Connective  | Written as               |
//! |-------------|--------------------------|
//! | negation    | `-` `~` `!` `not`        |
//! | conjunction | `&` `&&` `and`           |
//! | disjunction | `\|` `\|\|` `or`         |
//! | xor         | `^` `+` `xor`            |
//! | implication | `->` `=>`                |
//! | equivalence | `<->` `<=>`              |
//!
//! Connectives are listed from tightest to loosest binding.
//! Implication associates to the right.
//! The other binary connectives are associative, and a chain of one is grouped as a balanced tree, in order.
//! So, `a & b & c` reads as `(a & b) & c`, and `a & b & c & d` as `(a & b) & (c & d)`.
//!
//! Parentheses, negations, and implications may nest to a depth of at most [MAX_NESTING].
//! The constants are `true`/`T` and `false`/`F`.
//!
//! A text may hold several formulas, separated by `;` or by line breaks, and these are read as a conjunction.
//! A line break separates formulas only outside parentheses and when the line does not end with a connective, so long formulas may be split over lines.

use crate::{
    structures::formula::{Connective, Formula},
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum TokenKind {
    Name(String),
    True,
    False,
    Not,
    Binary(Connective),
    Open,
    Close,
    Separator,
    Newline,
}

impl TokenKind {
    fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_) | TokenKind::True | TokenKind::False | TokenKind::Close
        )
    }

    fn starts_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Name(_) | TokenKind::True | TokenKind::False | TokenKind::Not | TokenKind::Open
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Not => write!(f, "-"),
            Self::Binary(connective) => write!(f, "{}", connective.symbol()),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Separator => write!(f, ";"),
            Self::Newline => write!(f, "line break"),
        }
    }
}

#[derive(Clone, Debug)]
struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
}

fn keyword(word: &str) -> Option<TokenKind> {
    match word {
        "not" => Some(TokenKind::Not),
        "and" => Some(TokenKind::Binary(Connective::And)),
        "or" => Some(TokenKind::Binary(Connective::Or)),
        "xor" => Some(TokenKind::Binary(Connective::Xor)),
        "true" | "T" => Some(TokenKind::True),
        "false" | "F" => Some(TokenKind::False),
        _ => None,
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>, err::ParseError> {
    let chars = text.chars().collect::<Vec<_>>();
    let mut tokens = Vec::default();

    let mut index = 0;
    let mut line = 1;
    let mut line_start = 0;

    while let Some(&character) = chars.get(index) {
        let column = index - line_start + 1;
        let next = chars.get(index + 1).copied();

        let (kind, width) = match character {
            '\n' => {
                tokens.push(Token {
                    kind: TokenKind::Newline,
                    line,
                    column,
                });
                index += 1;
                line += 1;
                line_start = index;
                continue;
            }

            c if c.is_whitespace() => {
                index += 1;
                continue;
            }

            '(' => (TokenKind::Open, 1),
            ')' => (TokenKind::Close, 1),
            ';' => (TokenKind::Separator, 1),

            '-' => match next {
                Some('>') => (TokenKind::Binary(Connective::Implies), 2),
                _ => (TokenKind::Not, 1),
            },
            '~' | '!' => (TokenKind::Not, 1),

            '&' => match next {
                Some('&') => (TokenKind::Binary(Connective::And), 2),
                _ => (TokenKind::Binary(Connective::And), 1),
            },
            '|' => match next {
                Some('|') => (TokenKind::Binary(Connective::Or), 2),
                _ => (TokenKind::Binary(Connective::Or), 1),
            },
            '^' | '+' => (TokenKind::Binary(Connective::Xor), 1),

            '=' if next == Some('>') => (TokenKind::Binary(Connective::Implies), 2),

            '<' if matches!(
                (next, chars.get(index + 2).copied()),
                (Some('-'), Some('>')) | (Some('='), Some('>'))
            ) =>
            {
                (TokenKind::Binary(Connective::Equiv), 3)
            }

            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = index;
                while chars
                    .get(end)
                    .is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_')
                {
                    end += 1;
                }
                let word = chars[index..end].iter().collect::<String>();
                let kind = keyword(&word).unwrap_or(TokenKind::Name(word));
                (kind, end - index)
            }

            _ => {
                return Err(err::ParseError::UnexpectedCharacter {
                    character,
                    line,
                    column,
                })
            }
        };

        tokens.push(Token { kind, line, column });
        index += width;
    }

    Ok(separate(tokens))
}

/// Resolves each line break to a separator, or drops it.
///
/// A line break separates only at depth zero, between a token which ends an operand and a token which starts one.
fn separate(tokens: Vec<Token>) -> Vec<Token> {
    let mut separated: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut depth = 0_usize;
    // The line break which opened the current run of line breaks, if any.
    let mut pending: Option<Token> = None;

    for token in tokens {
        if token.kind == TokenKind::Newline {
            pending.get_or_insert(token);
            continue;
        }

        if let Some(line_break) = pending.take() {
            let ends = separated
                .last()
                .is_some_and(|token| token.kind.ends_operand());

            if depth == 0 && ends && token.kind.starts_operand() {
                separated.push(Token {
                    kind: TokenKind::Separator,
                    line: line_break.line,
                    column: line_break.column,
                });
            }
        }

        match token.kind {
            TokenKind::Open => depth += 1,
            TokenKind::Close => depth = depth.saturating_sub(1),
            _ => {}
        }
        separated.push(token);
    }

    separated
}

/// The deepest nesting of parentheses, negations, and implications the parser reads.
pub const MAX_NESTING: usize = 256;

struct FormulaParser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl FormulaParser {
    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.position).map(|token| &token.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        self.position += 1;
        token
    }

    fn unexpected(&self) -> err::ParseError {
        match self.tokens.get(self.position) {
            Some(token) => err::ParseError::UnexpectedToken {
                token: token.kind.to_string(),
                line: token.line,
                column: token.column,
            },
            None => err::ParseError::UnexpectedEnd,
        }
    }

    /// Parses with `parse` one level deeper than the token just read.
    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Formula, err::ParseError>,
    ) -> Result<Formula, err::ParseError> {
        if self.depth >= MAX_NESTING {
            let (line, column) = self
                .tokens
                .get(self.position.saturating_sub(1))
                .map_or((0, 0), |token| (token.line, token.column));
            return Err(err::ParseError::TooDeep { line, column });
        }

        self.depth += 1;
        let formula = parse(self);
        self.depth -= 1;
        formula
    }

    fn skip_separators(&mut self) {
        while self.peek() == Some(&TokenKind::Separator) {
            self.position += 1;
        }
    }

    fn program(&mut self) -> Result<Formula, err::ParseError> {
        let mut formulas = Vec::default();

        self.skip_separators();
        while self.peek().is_some() {
            formulas.push(self.equivalence()?);

            match self.peek() {
                None => break,
                Some(TokenKind::Separator) => self.skip_separators(),
                Some(_) => return Err(self.unexpected()),
            }
        }

        Formula::balanced(Connective::And, formulas).ok_or(err::ParseError::Empty)
    }

    /// A chain of the given connective over the operands parsed by `operand`.
    fn chain(
        &mut self,
        connective: Connective,
        operand: fn(&mut Self) -> Result<Formula, err::ParseError>,
    ) -> Result<Formula, err::ParseError> {
        let mut operands = vec![operand(self)?];
        while self.peek() == Some(&TokenKind::Binary(connective)) {
            self.position += 1;
            operands.push(operand(self)?);
        }
        Formula::balanced(connective, operands).ok_or(err::ParseError::UnexpectedEnd)
    }

    fn equivalence(&mut self) -> Result<Formula, err::ParseError> {
        self.chain(Connective::Equiv, Self::implication)
    }

    fn implication(&mut self) -> Result<Formula, err::ParseError> {
        let antecedent = self.xor()?;
        match self.peek() {
            Some(TokenKind::Binary(Connective::Implies)) => {
                self.position += 1;
                let consequent = self.nested(Self::implication)?;
                Ok(Formula::binary(Connective::Implies, antecedent, consequent))
            }
            _ => Ok(antecedent),
        }
    }

    fn xor(&mut self) -> Result<Formula, err::ParseError> {
        self.chain(Connective::Xor, Self::disjunction)
    }

    fn disjunction(&mut self) -> Result<Formula, err::ParseError> {
        self.chain(Connective::Or, Self::conjunction)
    }

    fn conjunction(&mut self) -> Result<Formula, err::ParseError> {
        self.chain(Connective::And, Self::unary)
    }

    fn unary(&mut self) -> Result<Formula, err::ParseError> {
        match self.peek() {
            Some(TokenKind::Not) => {
                self.position += 1;
                Ok(Formula::negation(self.nested(Self::unary)?))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Formula, err::ParseError> {
        let error = self.unexpected();
        let Some(token) = self.advance() else {
            return Err(err::ParseError::UnexpectedEnd);
        };

        match token.kind {
            TokenKind::Name(name) => Ok(Formula::Atom(name)),
            TokenKind::True => Ok(Formula::Top),
            TokenKind::False => Ok(Formula::Bottom),
            TokenKind::Open => {
                let formula = self.nested(Self::equivalence)?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::Close,
                        ..
                    }) => Ok(formula),
                    Some(_) => {
                        self.position -= 1;
                        Err(self.unexpected())
                    }
                    None => Err(err::ParseError::UnclosedParenthesis {
                        line: token.line,
                        column: token.column,
                    }),
                }
            }
            _ => Err(error),
        }
    }
}

/// Parses a text to a formula.
pub fn parse(text: &str) -> Result<Formula, err::ParseError> {
    let tokens = tokenize(text)?;
    log::trace!(target: crate::misc::log::targets::PARSE, "{} tokens", tokens.len());

    let mut parser = FormulaParser {
        tokens,
        position: 0,
        depth: 0,
    };
    parser.program()
}
