use std::collections::HashMap;

/// The only value type of the language: a signed 64-bit integer.
pub type Value = i64;

/// Variable store of a session. Names are bound by assignment and stay bound
/// for as long as the store lives; there is no way to remove one.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.store.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Binds `name`, replacing any earlier value.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        let mut bindings = self.store.iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect::<Vec<(&str, Value)>>();

        bindings.sort_by_key(|(name, _)| *name);
        bindings.into_iter()
    }
}
