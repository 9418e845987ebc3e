//! User-defined variables, registered outside the engine and always eligible
//! for completion.

use parking_lot::RwLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
  pub name: String,
}

/// Live view of the user's variables. Queried fresh on every suggestion
/// cycle; the engine never caches the result.
pub trait VariableSource {
  fn current_variables(&self) -> Vec<Variable>;
}

/// Process-wide variable registry. Mutated by the variable-management UI,
/// read by the engine.
#[derive(Debug, Default)]
pub struct VariableRegistry {
  inner: RwLock<Vec<Variable>>,
}

impl VariableRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a variable, keeping insertion order. Re-defining an existing
  /// name is a no-op.
  pub fn define(&self, name: impl Into<String>) {
    let name = name.into();
    let mut vars = self.inner.write();
    if !vars.iter().any(|v| v.name == name) {
      vars.push(Variable { name });
    }
  }

  pub fn remove(&self, name: &str) {
    self.inner.write().retain(|v| v.name != name);
  }

  pub fn clear(&self) {
    self.inner.write().clear();
  }
}

impl VariableSource for VariableRegistry {
  fn current_variables(&self) -> Vec<Variable> {
    self.inner.read().clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn registry_keeps_insertion_order_and_dedupes() {
    let registry = VariableRegistry::new();
    registry.define("storage");
    registry.define("spawn_point");
    registry.define("storage");

    let names: Vec<_> = registry
      .current_variables()
      .into_iter()
      .map(|v| v.name)
      .collect();
    assert_eq!(names, ["storage", "spawn_point"]);
  }

  #[test]
  fn remove_drops_only_the_named_variable() {
    let registry = VariableRegistry::new();
    registry.define("a");
    registry.define("b");
    registry.remove("a");
    assert_eq!(registry.current_variables(), [Variable {
      name: "b".to_string()
    }]);
  }
}
