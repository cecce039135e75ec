use crate::token::Token;

pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let token = match self.char {
            Some(char) => match char {
                '=' => Some(Token::Assign),
                '+' => Some(Token::Plus),
                '-' => Some(Token::Minus),
                '*' => Some(Token::Asterisk),
                '/' => Some(Token::Slash),
                '%' => Some(Token::Percent),
                '(' => Some(Token::Lparen),
                ')' => Some(Token::Rparen),
                ';' => Some(Token::Semicolon),
                _ if char.is_ascii_digit() || (char == '.' && self.is_next_char_digit()) => {
                    Some(self.read_number())
                }
                _ if char.is_ascii_alphabetic() || char == '_' => {
                    let literal =
                        self.read_until(|char| !char.is_ascii_alphanumeric() && char != '_');
                    Some(Token::Ident(literal))
                }
                _ => Some(Token::Illegal(char.to_string())),
            },
            None => None,
        };

        self.read_char();

        token
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn is_next_char_digit(&self) -> bool {
        self.chars
            .get(self.position + 1)
            .is_some_and(|char| char.is_ascii_digit())
    }

    fn read_number(&mut self) -> Token {
        let mut literal = self.read_until(|char| !char.is_ascii_digit() && char != '.');

        let exponent_len = self.exponent_len();
        if exponent_len > 0 {
            let start = self.position + 1;
            literal.extend(&self.chars[start..start + exponent_len]);
            self.position += exponent_len;
            self.char = self.chars.get(self.position).copied();
            return Token::Float(literal);
        }

        if literal.contains('.') {
            Token::Float(literal)
        } else {
            Token::Int(literal)
        }
    }

    // Length of an `[eE][+-]?digits` suffix right after the current position.
    fn exponent_len(&self) -> usize {
        let start = self.position + 1;
        if !matches!(self.chars.get(start), Some('e' | 'E')) {
            return 0;
        }
        let mut end = start + 1;
        if matches!(self.chars.get(end), Some('+' | '-')) {
            end += 1;
        }
        let digits = self.chars[end..]
            .iter()
            .take_while(|char| char.is_ascii_digit())
            .count();
        if digits == 0 {
            0
        } else {
            end + digits - start
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(char) = self.char {
            if char == '#' {
                while self.char.is_some_and(|char| char != '\n') {
                    self.read_char();
                }
            } else if char.is_whitespace() {
                self.read_char();
            } else {
                break;
            }
        }
    }

    fn read_until(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if condition(char) {
                self.position -= 1;
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }
}
