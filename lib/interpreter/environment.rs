use std::collections::HashMap;

use crate::object::Object;

/// Variable bindings that outlive a single evaluation.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        self.store.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: Object) {
        self.store.insert(name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Object)> {
        self.store
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Moves every binding of `other` into `self`, overwriting existing names.
    pub fn merge(&mut self, other: Environment) {
        self.store.extend(other.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        env.set("x", Object::Integer(1));
        env.set("x", Object::Float(2.5));
        assert_eq!(env.get("x"), Some(Object::Float(2.5)));
        assert_eq!(env.get("y"), None);
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_merge() {
        let mut env = Environment::new();
        env.set("a", Object::Integer(1));
        env.set("b", Object::Integer(2));

        let mut staged = Environment::new();
        staged.set("b", Object::Integer(20));
        staged.set("c", Object::Integer(30));

        env.merge(staged);

        let mut bindings: Vec<(&str, Object)> = env.iter().collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(
            bindings,
            vec![
                ("a", Object::Integer(1)),
                ("b", Object::Integer(20)),
                ("c", Object::Integer(30)),
            ]
        );
    }
}
