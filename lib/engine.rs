use anyhow::Result;

use crate::Object;

pub trait Engine {
    /// Evaluates one statement and renders its value, or `""` for empty input.
    fn run(&mut self, input: &str) -> Result<String>;

    /// Current variable bindings, sorted by name.
    fn bindings(&self) -> Vec<(String, Object)>;
}
