use crate::{
    ast::{Expression, Program},
    error::{parse_bail, Error, Result},
    lexer::Lexer,
    object::Object,
    token::Token,
};

#[derive(Debug, Clone, PartialOrd, PartialEq, Eq, Ord)]
enum Precedence {
    Lowest,
    Assign,
    Sum,
    Product,
    Prefix,
}

impl Precedence {
    fn from_token(token: Token) -> Self {
        match token {
            Token::Assign => Precedence::Assign,
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Asterisk | Token::Slash | Token::Percent => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// Deepest expression tree, or parser nesting, accepted.
const MAX_DEPTH: usize = 200;

/// An expression together with the depth of its tree.
type Parsed = (Expression, usize);

fn end_of_input() -> Error {
    Error::Parse("unexpected end of input".to_string())
}

fn checked_depth(depth: usize) -> Result<usize> {
    if depth > MAX_DEPTH {
        parse_bail!("expression nested too deeply");
    }
    Ok(depth)
}

pub struct Parser {
    lexer: Lexer,
    cur_token: Option<Token>,
    peek_token: Option<Token>,
    nesting: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        Self {
            cur_token: lexer.next_token(),
            peek_token: lexer.next_token(),
            lexer,
            nesting: 0,
        }
    }

    /// Parses a single statement, optionally terminated by `;`.
    pub fn parse_program(&mut self) -> Result<Program> {
        if self.cur_token().is_none() {
            return Ok(Program { expression: None });
        }

        let (expression, _) = self.parse_expression(Precedence::Lowest)?;

        if self
            .peek_token()
            .is_some_and(|token| token.variant_eq(Token::Semicolon))
        {
            self.next_token();
        }

        if let Some(token) = self.peek_token() {
            parse_bail!("unexpected token {token} after end of statement");
        }

        Ok(Program {
            expression: Some(expression),
        })
    }

    fn cur_token(&mut self) -> Option<Token> {
        self.cur_token.clone()
    }

    fn peek_token(&mut self) -> Option<Token> {
        self.peek_token.clone()
    }

    fn next_token(&mut self) -> &mut Self {
        self.cur_token = self.peek_token();
        self.peek_token = self.lexer.next_token();
        self
    }

    fn peek_precedence(&mut self) -> Result<Precedence> {
        Ok(Precedence::from_token(
            self.peek_token().ok_or_else(end_of_input)?,
        ))
    }

    fn cur_precedence(&mut self) -> Result<Precedence> {
        Ok(Precedence::from_token(
            self.cur_token().ok_or_else(end_of_input)?,
        ))
    }

    fn expect_peek(&mut self, exp_token: Token) -> Result<()> {
        let peek_token = self.peek_token().ok_or_else(|| {
            Error::Parse(format!("expected next token to be {exp_token}, found end of input"))
        })?;
        if peek_token.variant_eq(exp_token.clone()) {
            self.next_token();
            Ok(())
        } else {
            parse_bail!("expected next token to be {exp_token}, found {peek_token}")
        }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Result<Parsed> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            parse_bail!("expression nested too deeply");
        }
        let parsed = self.parse_nested_expression(precedence);
        self.nesting -= 1;
        parsed
    }

    fn parse_nested_expression(&mut self, precedence: Precedence) -> Result<Parsed> {
        let cur_token = self.cur_token().ok_or_else(end_of_input)?;

        let mut left_exp = match cur_token.clone() {
            Token::Ident(value) => (Expression::Identifier(value), 1),
            Token::Int(value) => (self.parse_integer_literal(value)?, 1),
            Token::Float(value) => (self.parse_float_literal(value)?, 1),
            Token::Minus | Token::Plus => self.parse_prefix_expression(cur_token)?,
            Token::Lparen => self.parse_grouped_expression()?,
            Token::Illegal(value) => parse_bail!("illegal character {value}"),
            token => parse_bail!("no prefix parse function for {token}"),
        };

        while self
            .peek_token()
            .is_some_and(|token| !token.variant_eq(Token::Semicolon))
            && precedence < self.peek_precedence()?
        {
            match self.peek_token().ok_or_else(end_of_input)? {
                Token::Plus | Token::Minus | Token::Asterisk | Token::Slash | Token::Percent => {
                    self.next_token();
                    left_exp = self.parse_infix_expression(left_exp)?;
                }
                Token::Assign => {
                    self.next_token();
                    left_exp = self.parse_assign_expression(left_exp)?;
                }
                _ => return Ok(left_exp),
            };
        }

        Ok(left_exp)
    }

    fn parse_prefix_expression(&mut self, token: Token) -> Result<Parsed> {
        self.next_token();
        let (right, depth) = self.parse_expression(Precedence::Prefix)?;
        let expression = Expression::Prefix {
            operator: token,
            right: Box::new(right),
        };
        Ok((expression, checked_depth(depth + 1)?))
    }

    fn parse_infix_expression(&mut self, (left, left_depth): Parsed) -> Result<Parsed> {
        let token = self.cur_token().ok_or_else(end_of_input)?;
        let precedence = self.cur_precedence()?;
        self.next_token();
        let (right, right_depth) = self.parse_expression(precedence)?;
        let expression = Expression::Infix {
            left: Box::new(left),
            operator: token,
            right: Box::new(right),
        };
        Ok((expression, checked_depth(left_depth.max(right_depth) + 1)?))
    }

    // Parsing the value at `Lowest` makes `a = b = 1` right associative.
    fn parse_assign_expression(&mut self, (target, _): Parsed) -> Result<Parsed> {
        let name = match target {
            Expression::Identifier(name) => name,
            target => parse_bail!("cannot assign to {target}"),
        };
        self.next_token();
        let (value, depth) = self.parse_expression(Precedence::Lowest)?;
        let expression = Expression::Assign {
            name,
            value: Box::new(value),
        };
        Ok((expression, checked_depth(depth + 1)?))
    }

    fn parse_integer_literal(&mut self, literal: String) -> Result<Expression> {
        let value = literal.parse::<i64>().map_err(|err| {
            Error::Parse(format!("could not parse integer literal {literal} as i64: {err}"))
        })?;
        Ok(Expression::NumberLiteral(Object::Integer(value)))
    }

    fn parse_float_literal(&mut self, literal: String) -> Result<Expression> {
        let value = literal.parse::<f64>().map_err(|err| {
            Error::Parse(format!("could not parse float literal {literal}: {err}"))
        })?;
        Ok(Expression::NumberLiteral(Object::Float(value)))
    }

    // Parentheses add no node but still count toward the depth.
    fn parse_grouped_expression(&mut self) -> Result<Parsed> {
        self.next_token();
        let (exp, depth) = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Rparen)?;
        Ok((exp, checked_depth(depth + 1)?))
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Deref;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identifier_expression() {
        let expr = get_expression("foobar;");
        assert_identifier_expression(&expr, "foobar");
    }

    #[test]
    fn integer_literal_expression() {
        let expr = get_expression("5");
        assert_eq!(expr, Expression::NumberLiteral(Object::Integer(5)));
    }

    #[test]
    fn float_literal_expression() {
        let cases = vec![
            ("2.5", 2.5),
            (".5", 0.5),
            ("3.", 3.0),
            ("1e3", 1000.0),
            ("2.5E-3", 0.0025),
            ("1e+2", 100.0),
        ];
        for (input, expected) in cases {
            let expr = get_expression(input);
            assert_eq!(expr, Expression::NumberLiteral(Object::Float(expected)));
        }
    }

    #[test]
    fn infix_expressions() {
        let cases = vec![
            ("5 + 5", Token::Plus),
            ("5 - 5", Token::Minus),
            ("5 * 5", Token::Asterisk),
            ("5 / 5", Token::Slash),
            ("5 % 5", Token::Percent),
        ];
        for (input, operator) in cases {
            let expr = get_expression(input);
            assert_eq!(
                expr,
                Expression::Infix {
                    left: Box::new(Expression::NumberLiteral(Object::Integer(5))),
                    operator,
                    right: Box::new(Expression::NumberLiteral(Object::Integer(5))),
                }
            );
        }
    }

    #[test]
    fn assign_expression() {
        let expr = get_expression("x = 5 * y");
        match expr {
            Expression::Assign { name, value } => {
                assert_eq!(name, "x");
                match value.deref() {
                    Expression::Infix {
                        left,
                        operator,
                        right,
                    } => {
                        assert_eq!(left.deref(), &Expression::NumberLiteral(Object::Integer(5)));
                        assert_eq!(operator, &Token::Asterisk);
                        assert_identifier_expression(right, "y");
                    }
                    _ => panic!("expected infix expression, found {value}"),
                }
            }
            _ => panic!("expected assign expression, found {expr}"),
        }
    }

    #[test]
    fn operator_precedence() {
        let cases = vec![
            ("-a * b", "((-a) * b)"),
            ("+a - b", "((+a) - b)"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b % c - d", "((a + (b % c)) - d)"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("x = 1 + 2 * 3", "(x = (1 + (2 * 3)))"),
            ("a = b = 3", "(a = (b = 3))"),
            ("(a = 2) * a", "((a = 2) * a)"),
            ("(a) = 2", "(a = 2)"),
            ("x = 1;", "(x = 1)"),
        ];
        for (input, expected) in cases {
            let program = get_program(input);
            assert_eq!(program.to_string(), expected);
        }
    }

    #[test]
    fn empty_program() {
        let cases = vec!["", "   ", "\n\n", "# nothing here"];
        for input in cases {
            assert_eq!(get_program(input), Program { expression: None });
        }
    }

    #[test]
    fn parse_errors() {
        let cases = vec![
            ("2 = 3", "parse error: cannot assign to 2"),
            ("a + 1 = 2", "parse error: cannot assign to (a + 1)"),
            ("1 +", "parse error: unexpected end of input"),
            ("1 2", "parse error: unexpected token 2 after end of statement"),
            ("x = 1; y = 2", "parse error: unexpected token y after end of statement"),
            ("(1 + 2", "parse error: expected next token to be ), found end of input"),
            ("(1 + 2;", "parse error: expected next token to be ), found ;"),
            ("* 2", "parse error: no prefix parse function for *"),
            (";", "parse error: no prefix parse function for ;"),
            ("2 ^ 3", "parse error: unexpected token ^ after end of statement"),
            ("$", "parse error: illegal character $"),
            (
                "99999999999999999999",
                "parse error: could not parse integer literal 99999999999999999999 as i64: number too large to fit in target type",
            ),
            (
                "1.2.3",
                "parse error: could not parse float literal 1.2.3: invalid float literal",
            ),
        ];
        for (input, expected) in cases {
            let lexer = Lexer::new(input);
            let mut parser = Parser::new(lexer);
            let err = parser.parse_program().unwrap_err();
            assert_eq!(err.to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn deeply_nested_expressions() {
        let too_deep = vec![
            format!("1{}", " + 1".repeat(10_000)),
            format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000)),
            format!("{}1", "-".repeat(10_000)),
            format!("{}1", "a = ".repeat(10_000)),
            format!("2{}", " * (1".repeat(10_000)),
        ];
        for input in too_deep {
            let lexer = Lexer::new(&input);
            let mut parser = Parser::new(lexer);
            let err = parser.parse_program().unwrap_err();
            assert_eq!(err, Error::Parse("expression nested too deeply".to_string()));
        }

        let within_limit = vec![
            format!("1{}", " + 1".repeat(150)),
            format!("{}1{}", "(".repeat(100), ")".repeat(100)),
            format!("{}1", "-".repeat(150)),
        ];
        for input in within_limit {
            assert!(get_program(&input).expression.is_some());
        }
    }

    fn get_program(input: &str) -> Program {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        parser.parse_program().unwrap()
    }

    fn get_expression(input: &str) -> Expression {
        match get_program(input).expression {
            Some(expression) => expression,
            None => panic!("expected an expression for {input}"),
        }
    }

    fn assert_identifier_expression(expr: &Expression, expected: &str) {
        match expr {
            Expression::Identifier(name) => assert_eq!(name, expected),
            _ => panic!("expected identifier expression, found {expr}"),
        }
    }
}
