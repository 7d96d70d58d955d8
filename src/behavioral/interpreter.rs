// Interpreter: a tiny grammar of single-letter variables and addition.
//
//   expression := operand ('+' operand)*
//   operand    := VARIABLE | '(' expression ')'

use crate::error::{PatternError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// Context
// ============================================================================

#[derive(Debug, Default)]
pub struct IntegerContext {
    data: HashMap<char, i64>,
}

impl IntegerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: char) -> Result<i64> {
        self.data
            .get(&name)
            .copied()
            .ok_or(PatternError::UnknownVariable(name))
    }

    pub fn assign(&mut self, variable: &Variable, value: i64) {
        self.data.insert(variable.name, value);
    }
}

// ============================================================================
// Expressions
// ============================================================================

pub trait IntegerExpression {
    fn evaluate(&self, context: &IntegerContext) -> Result<i64>;
    /// Returns a new tree where every variable called `name` is replaced by a
    /// copy of `expression`.
    fn replace(&self, name: char, expression: &dyn IntegerExpression)
        -> Box<dyn IntegerExpression>;
    fn copy(&self) -> Box<dyn IntegerExpression>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    name: char,
}

impl Variable {
    pub fn new(name: char) -> Self {
        Self { name }
    }

    pub fn name(&self) -> char {
        self.name
    }
}

impl IntegerExpression for Variable {
    fn evaluate(&self, context: &IntegerContext) -> Result<i64> {
        context.lookup(self.name)
    }

    fn replace(
        &self,
        name: char,
        expression: &dyn IntegerExpression,
    ) -> Box<dyn IntegerExpression> {
        if name == self.name {
            expression.copy()
        } else {
            Box::new(*self)
        }
    }

    fn copy(&self) -> Box<dyn IntegerExpression> {
        Box::new(*self)
    }

    fn describe(&self) -> String {
        self.name.to_string()
    }
}

pub struct AddExpression {
    lhs: Box<dyn IntegerExpression>,
    rhs: Box<dyn IntegerExpression>,
}

impl AddExpression {
    pub fn new(lhs: Box<dyn IntegerExpression>, rhs: Box<dyn IntegerExpression>) -> Self {
        Self { lhs, rhs }
    }
}

impl IntegerExpression for AddExpression {
    fn evaluate(&self, context: &IntegerContext) -> Result<i64> {
        let lhs = self.lhs.evaluate(context)?;
        let rhs = self.rhs.evaluate(context)?;
        lhs.checked_add(rhs)
            .ok_or(PatternError::Overflow { lhs, rhs })
    }

    fn replace(
        &self,
        name: char,
        expression: &dyn IntegerExpression,
    ) -> Box<dyn IntegerExpression> {
        Box::new(AddExpression::new(
            self.lhs.replace(name, expression),
            self.rhs.replace(name, expression),
        ))
    }

    fn copy(&self) -> Box<dyn IntegerExpression> {
        Box::new(AddExpression::new(self.lhs.copy(), self.rhs.copy()))
    }

    fn describe(&self) -> String {
        format!("({} + {})", self.lhs.describe(), self.rhs.describe())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Deepest tree `parse` will build. Evaluating, describing and dropping a
/// tree all recurse once per level.
pub const MAX_DEPTH: usize = 256;

fn token_pattern() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"[A-Za-z]|[+()]|\S").expect("token pattern is valid"))
}

struct Parser<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
    end: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        let tokens = token_pattern()
            .find_iter(input)
            .map(|m| (m.start(), m.as_str()))
            .collect();
        Self {
            tokens,
            pos: 0,
            end: input.len(),
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<(usize, &'a str)> {
        self.tokens.get(self.pos).copied()
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.end, |(offset, _)| offset)
    }

    // Each parsed node comes back with the height of its subtree.
    fn expression(&mut self) -> Result<(Box<dyn IntegerExpression>, usize)> {
        let (mut lhs, mut height) = self.operand()?;
        while let Some((offset, "+")) = self.peek() {
            self.pos += 1;
            let (rhs, rhs_height) = self.operand()?;
            height = height.max(rhs_height) + 1;
            if height > MAX_DEPTH {
                return Err(PatternError::parse(offset, "nesting too deep"));
            }
            lhs = Box::new(AddExpression::new(lhs, rhs));
        }
        Ok((lhs, height))
    }

    fn operand(&mut self) -> Result<(Box<dyn IntegerExpression>, usize)> {
        let Some((offset, token)) = self.peek() else {
            return Err(PatternError::parse(self.end, "unexpected end of input"));
        };
        self.pos += 1;

        if token == "(" {
            if self.nesting >= MAX_DEPTH {
                return Err(PatternError::parse(offset, "nesting too deep"));
            }
            self.nesting += 1;
            let inner = self.expression()?;
            self.nesting -= 1;
            return match self.peek() {
                Some((_, ")")) => {
                    self.pos += 1;
                    Ok(inner)
                }
                _ => Err(PatternError::parse(self.offset(), "expected ')'")),
            };
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok((Box::new(Variable::new(c)), 1)),
            _ => Err(PatternError::parse(
                offset,
                format!("unexpected token '{token}'"),
            )),
        }
    }
}

/// Parses text such as `A + (B + C)`.
pub fn parse(input: &str) -> Result<Box<dyn IntegerExpression>> {
    let mut parser = Parser::new(input);
    let (expression, _) = parser.expression()?;
    if let Some((offset, token)) = parser.peek() {
        return Err(PatternError::parse(
            offset,
            format!("unexpected token '{token}'"),
        ));
    }
    Ok(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documented_context() -> IntegerContext {
        let mut context = IntegerContext::new();
        context.assign(&Variable::new('A'), 2);
        context.assign(&Variable::new('B'), 1);
        context.assign(&Variable::new('C'), 3);
        context
    }

    #[test]
    fn test_evaluate_built_tree() {
        let a = Variable::new('A');
        let b = Variable::new('B');
        let c = Variable::new('C');
        // a + (b + c)
        let expression = AddExpression::new(
            Box::new(a),
            Box::new(AddExpression::new(Box::new(b), Box::new(c))),
        );
        assert_eq!(expression.evaluate(&documented_context()).unwrap(), 6);
    }

    #[test]
    fn test_unknown_variable() {
        let expression = Variable::new('Z');
        let result = expression.evaluate(&documented_context());
        assert!(matches!(result, Err(PatternError::UnknownVariable('Z'))));
    }

    #[test]
    fn test_replace_variable() {
        let expression = parse("A + B").unwrap();
        let replacement = parse("C + C").unwrap();
        let replaced = expression.replace('B', replacement.as_ref());

        assert_eq!(replaced.describe(), "(A + (C + C))");
        assert_eq!(replaced.evaluate(&documented_context()).unwrap(), 8);
        // Receiver unchanged
        assert_eq!(expression.describe(), "(A + B)");
    }

    #[test]
    fn test_copy_is_independent() {
        let expression = parse("A + (B + C)").unwrap();
        let copy = expression.copy();
        drop(expression);
        assert_eq!(copy.evaluate(&documented_context()).unwrap(), 6);
    }

    #[test]
    fn test_parse_documented_expression() {
        let expression = parse("A + (B + C)").unwrap();
        assert_eq!(expression.describe(), "(A + (B + C))");
        assert_eq!(expression.evaluate(&documented_context()).unwrap(), 6);
    }

    #[test]
    fn test_parse_left_associative() {
        let expression = parse("A+B+C").unwrap();
        assert_eq!(expression.describe(), "((A + B) + C)");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("A + "),
            Err(PatternError::Parse { position: 4, .. })
        ));
        assert!(matches!(
            parse("(A + B"),
            Err(PatternError::Parse { position: 6, .. })
        ));
        assert!(matches!(
            parse("A * B"),
            Err(PatternError::Parse { position: 2, .. })
        ));
        assert!(matches!(
            parse("A B"),
            Err(PatternError::Parse { position: 2, .. })
        ));
        assert!(parse("").is_err());
    }

    #[test]
    fn test_addition_overflow() {
        let mut context = IntegerContext::new();
        context.assign(&Variable::new('A'), i64::MAX);
        let expression = parse("A + A").unwrap();
        assert!(matches!(
            expression.evaluate(&context),
            Err(PatternError::Overflow { lhs: i64::MAX, rhs: i64::MAX })
        ));
    }

    #[test]
    fn test_deep_parentheses_rejected() {
        let input = format!("{}A{}", "(".repeat(200_000), ")".repeat(200_000));
        assert!(matches!(
            parse(&input),
            Err(PatternError::Parse { position: 256, .. })
        ));

        let input = format!("{}A{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&input).unwrap().describe(), "A");
    }

    #[test]
    fn test_long_chain_rejected() {
        let input = vec!["A"; 200_000].join("+");
        assert!(matches!(
            parse(&input),
            Err(PatternError::Parse { message, .. }) if message == "nesting too deep"
        ));

        let input = vec!["A"; MAX_DEPTH].join("+");
        let mut context = IntegerContext::new();
        context.assign(&Variable::new('A'), 1);
        assert_eq!(
            parse(&input).unwrap().evaluate(&context).unwrap(),
            MAX_DEPTH as i64
        );
    }
}
