use log::{debug, trace};

use crate::{
    ast::{Expression, Program},
    error::{Error, Result},
    lexer::Lexer,
    object::Object,
    parser::Parser,
    token::Token,
};

use super::{environment::Environment, operators};

/// Reduces programs to values against a persistent [`Environment`].
///
/// Assignments made while evaluating a program are staged and only reach the
/// environment once the whole program has evaluated without error.
#[derive(Debug, Default)]
pub struct Evaluator {
    env: Environment,
    staged: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Parses and evaluates `input`. Empty input yields `Ok(None)`.
    pub fn evaluate(&mut self, input: &str) -> Result<Option<Object>> {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);

        let program = parser.parse_program()?;

        self.eval(program)
    }

    pub fn eval(&mut self, program: Program) -> Result<Option<Object>> {
        let expression = match program.expression {
            Some(expression) => expression,
            None => return Ok(None),
        };

        match self.eval_expression(Box::new(expression)) {
            Ok(value) => {
                self.commit();
                Ok(Some(value))
            }
            Err(err) => {
                self.discard();
                Err(err)
            }
        }
    }

    fn commit(&mut self) {
        let staged = std::mem::take(&mut self.staged);
        for (name, value) in staged.iter() {
            debug!("commit {} = {}", name, value);
        }
        self.env.merge(staged);
    }

    fn discard(&mut self) {
        if !self.staged.is_empty() {
            debug!("discarding {} staged assignment(s)", self.staged.len());
        }
        self.staged = Environment::new();
    }

    fn eval_expression(&mut self, expression: Box<Expression>) -> Result<Object> {
        let object = match *expression {
            Expression::NumberLiteral(value) => {
                trace!("num {}", value);
                value
            }
            Expression::Identifier(name) => self.eval_identifier_expression(name)?,
            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right)?;
                self.eval_prefix_expression(operator, right)?
            }
            Expression::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                operators::apply(left, operator, right)?
            }
            Expression::Assign { name, value } => self.eval_assign_expression(name, value)?,
        };
        Ok(object)
    }

    fn eval_assign_expression(&mut self, name: String, value: Box<Expression>) -> Result<Object> {
        let value = self.eval_expression(value)?;
        trace!("assign {} = {}", name, value);
        self.staged.set(&name, value);
        Ok(value)
    }

    fn eval_prefix_expression(&mut self, operator: Token, right: Object) -> Result<Object> {
        match operator {
            Token::Plus => Ok(right),
            Token::Minus => self.eval_minus_prefix_operator_expression(right),
            _ => Err(Error::UnknownOperator(format!("{}{}", operator, right))),
        }
    }

    fn eval_minus_prefix_operator_expression(&mut self, right: Object) -> Result<Object> {
        match right {
            Object::Integer(value) => value
                .checked_neg()
                .map(Object::Integer)
                .ok_or_else(|| Error::IntegerOverflow(format!("-{}", value))),
            Object::Float(value) => Ok(Object::Float(-value)),
        }
    }

    fn eval_identifier_expression(&mut self, name: String) -> Result<Object> {
        trace!("name {}", name);
        match self.staged.get(&name).or_else(|| self.env.get(&name)) {
            Some(value) => Ok(value),
            None => Err(Error::UndefinedVariable(name)),
        }
    }
}
