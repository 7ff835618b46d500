//! Boolean expressions: AST, parser, evaluation.
//!
//! Variables are single ASCII letters. Connectives are accepted in three
//! spellings: the symbols `∧ ∨ ⊕ ¬`, the words `AND OR XOR NOT` (any case),
//! and the operator forms `&`/`&&`, `|`/`||`, `^`, `!`. Parentheses group.
//! Precedence, tightest first: NOT, AND, XOR, OR; binary connectives
//! associate to the left.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};

/// A boolean expression over single-letter variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Var(char),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(name)
    }

    /// Negation; a double negation collapses.
    pub fn not(value: Self) -> Self {
        match value {
            Expr::Not(inner) => *inner,
            _ => Expr::Not(Box::new(value)),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    /// Parses an expression string.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_rs::expr::Expr;
    ///
    /// let e = Expr::parse("a AND NOT b").unwrap();
    /// assert_eq!(e, Expr::and(Expr::var('a'), Expr::not(Expr::var('b'))));
    /// assert_eq!(Expr::parse("a ∧ ¬b").unwrap(), e);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        Parser::new(tokens).parse()
    }

    /// The distinct variables of the expression, in code-point order.
    ///
    /// This is the fixed variable order used by truth-table columns and
    /// row-index bits.
    pub fn variables(&self) -> Vec<char> {
        let mut set = BTreeSet::new();
        self.collect_variables(&mut set);
        set.into_iter().collect()
    }

    fn collect_variables(&self, set: &mut BTreeSet<char>) {
        match self {
            Expr::Var(v) => {
                set.insert(*v);
            }
            Expr::Not(a) => a.collect_variables(set),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => {
                a.collect_variables(set);
                b.collect_variables(set);
            }
        }
    }

    /// Evaluates the expression under `assignment`.
    ///
    /// A variable absent from the assignment is an
    /// [`UnknownSymbol`][Error::UnknownSymbol] error, never a default.
    pub fn eval(&self, assignment: &HashMap<char, bool>) -> Result<bool> {
        Ok(match self {
            Expr::Var(v) => *assignment
                .get(v)
                .ok_or_else(|| Error::UnknownSymbol(v.to_string()))?,
            Expr::Not(a) => !a.eval(assignment)?,
            Expr::And(a, b) => a.eval(assignment)? & b.eval(assignment)?,
            Expr::Or(a, b) => a.eval(assignment)? | b.eval(assignment)?,
            Expr::Xor(a, b) => a.eval(assignment)? ^ b.eval(assignment)?,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Token {
    Var(char),
    Not,
    And,
    Or,
    Xor,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '∧' => tokens.push(Token::And),
            '∨' => tokens.push(Token::Or),
            '⊕' | '^' => tokens.push(Token::Xor),
            '¬' | '!' => tokens.push(Token::Not),
            '&' => {
                chars.next_if_eq(&'&');
                tokens.push(Token::And);
            }
            '|' => {
                chars.next_if_eq(&'|');
                tokens.push(Token::Or);
            }
            c if c.is_ascii_alphabetic() => {
                let mut word = String::from(c);
                while let Some(letter) = chars.next_if(|c| c.is_ascii_alphabetic()) {
                    word.push(letter);
                }
                match word.to_ascii_uppercase().as_str() {
                    "AND" => tokens.push(Token::And),
                    "OR" => tokens.push(Token::Or),
                    "XOR" => tokens.push(Token::Xor),
                    "NOT" => tokens.push(Token::Not),
                    _ if word.len() == 1 => tokens.push(Token::Var(c)),
                    _ => {
                        return Err(Error::Parse(format!(
                            "unknown word {:?} (variables are single letters)",
                            word
                        )));
                    }
                }
            }
            _ => {
                return Err(Error::Parse(format!("unexpected character {:?}", c)));
            }
        }
    }
    Ok(tokens)
}

/// Recursive-descent parser.
///
/// ```text
/// or    := xor (OR xor)*
/// xor   := and (XOR and)*
/// and   := unary (AND unary)*
/// unary := NOT unary | Var | '(' or ')'
/// ```
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Expr> {
        if self.tokens.is_empty() {
            return Err(Error::Parse("empty expression".to_string()));
        }
        let expr = self.parse_or()?;
        if let Some(token) = self.peek() {
            return Err(Error::Parse(format!(
                "unexpected trailing token {:?}",
                token
            )));
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, token: Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut expr = self.parse_xor()?;
        while self.eat(Token::Or) {
            expr = Expr::or(expr, self.parse_xor()?);
        }
        Ok(expr)
    }

    fn parse_xor(&mut self) -> Result<Expr> {
        let mut expr = self.parse_and()?;
        while self.eat(Token::Xor) {
            expr = Expr::xor(expr, self.parse_and()?);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut expr = self.parse_unary()?;
        while self.eat(Token::And) {
            expr = Expr::and(expr, self.parse_unary()?);
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        match self.bump() {
            Some(Token::Not) => Ok(Expr::not(self.parse_unary()?)),
            Some(Token::Var(v)) => Ok(Expr::var(v)),
            Some(Token::LParen) => {
                let expr = self.parse_or()?;
                if !self.eat(Token::RParen) {
                    return Err(Error::Parse("unclosed parenthesis".to_string()));
                }
                Ok(expr)
            }
            Some(token) => Err(Error::Parse(format!("unexpected token {:?}", token))),
            None => Err(Error::Parse("unexpected end of expression".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn assignment(pairs: &[(char, bool)]) -> HashMap<char, bool> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_parse_spelling_variants_agree() {
        let word = Expr::parse("a AND NOT b").unwrap();
        let symbol = Expr::parse("a ∧ ¬b").unwrap();
        let operator = Expr::parse("a && !b").unwrap();
        assert_eq!(word, symbol);
        assert_eq!(word, operator);
    }

    #[test]
    fn test_precedence_not_and_xor_or() {
        // a OR b XOR c AND NOT d == a OR (b XOR (c AND (NOT d)))
        let e = Expr::parse("a | b ^ c & !d").unwrap();
        assert_eq!(
            e,
            Expr::or(
                Expr::var('a'),
                Expr::xor(
                    Expr::var('b'),
                    Expr::and(Expr::var('c'), Expr::not(Expr::var('d'))),
                ),
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let e = Expr::parse("(a | b) & c").unwrap();
        assert_eq!(
            e,
            Expr::and(Expr::or(Expr::var('a'), Expr::var('b')), Expr::var('c'))
        );
    }

    #[test]
    fn test_left_associativity() {
        let e = Expr::parse("a ^ b ^ c").unwrap();
        assert_eq!(
            e,
            Expr::xor(Expr::xor(Expr::var('a'), Expr::var('b')), Expr::var('c'))
        );
    }

    #[test]
    fn test_double_negation_collapses() {
        assert_eq!(Expr::parse("!!a").unwrap(), Expr::var('a'));
        assert_eq!(Expr::parse("NOT NOT NOT a").unwrap(), Expr::not(Expr::var('a')));
    }

    #[test]
    fn test_variables_are_sorted_and_distinct() {
        let e = Expr::parse("c AND a OR b AND a").unwrap();
        assert_eq!(e.variables(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_eval() {
        let e = Expr::parse("a AND NOT b").unwrap();
        assert_eq!(e.eval(&assignment(&[('a', true), ('b', false)])), Ok(true));
        assert_eq!(e.eval(&assignment(&[('a', false), ('b', false)])), Ok(false));
        assert_eq!(e.eval(&assignment(&[('a', true), ('b', true)])), Ok(false));
    }

    #[test]
    fn test_eval_missing_variable() {
        let e = Expr::parse("a AND b").unwrap();
        assert_eq!(
            e.eval(&assignment(&[('a', true)])),
            Err(Error::UnknownSymbol("b".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        for input in ["", "a AND", "AND a", "(a OR b", "a b", "abc", "a + b", "()"] {
            assert!(
                matches!(Expr::parse(input), Err(Error::Parse(_))),
                "input = {:?}",
                input
            );
        }
    }
}
