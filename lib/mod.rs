pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

mod engine;
mod interpreter;
mod object;

pub use engine::Engine;
pub use error::Error;
pub use interpreter::{Environment, Evaluator};
pub use lexer::Lexer;
pub use object::Object;
pub use parser::Parser;

pub fn new_interpreter() -> Box<dyn Engine> {
    interpreter::new_engine()
}
