mod environment;
mod evaluator;
mod operators;

use anyhow::Result;
pub use environment::Environment;
pub use evaluator::Evaluator;

use crate::{Engine, Object};

pub fn new_engine() -> Box<dyn Engine> {
    Box::new(EngineImpl {
        evaluator: Evaluator::new(),
    })
}

struct EngineImpl {
    evaluator: Evaluator,
}

impl Engine for EngineImpl {
    fn run(&mut self, input: &str) -> Result<String> {
        log::debug!("run {:?}", input);

        let result = self.evaluator.evaluate(input)?;

        Ok(result.map(|value| value.to_string()).unwrap_or_default())
    }

    fn bindings(&self) -> Vec<(String, Object)> {
        let mut bindings: Vec<(String, Object)> = self
            .evaluator
            .environment()
            .iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(&b.0));
        bindings
    }
}
