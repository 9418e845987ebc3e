//! Candidate assembly: substring-filter the vocabulary and the live
//! variables against the token, under the context gates.

use indexmap::IndexMap;

use crate::core::{
  style::{
    StyleTagSet,
    TAG_STRING,
  },
  variables::Variable,
  vocabulary::VocabularyIndex,
};

/// One ranking cycle's result: insertion-ordered `canonical key -> display
/// label`. Replaced wholesale on the next cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionSet {
  entries: IndexMap<String, String>,
}

impl SuggestionSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// First write wins: a key matched by an earlier pass keeps its label.
  fn insert(&mut self, key: String, label: String) {
    self.entries.entry(key).or_insert(label);
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .entries
      .iter()
      .map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

/// Build the suggestion set for `token`.
///
/// Two ordered passes: the vocabulary pass (skipped inside strings, stops at
/// `max_hints`), then the variable pass. The variable pass always runs and
/// is not capped, so the final set can grow past `max_hints`; only the
/// vocabulary share is bounded.
pub fn rank(
  token: &str,
  tags: &StyleTagSet,
  vocabulary: &VocabularyIndex,
  variables: &[Variable],
  min_word_length: usize,
  max_hints: usize,
) -> SuggestionSet {
  let mut set = SuggestionSet::new();
  if token.chars().count() < min_word_length {
    return set;
  }

  let needle = token.to_lowercase();

  if !tags.contains(TAG_STRING) {
    for entry in vocabulary.entries() {
      if set.len() >= max_hints {
        break;
      }
      if entry.display.to_lowercase().contains(&needle) {
        set.insert(entry.canonical.to_string(), entry.display.clone());
      }
    }
  }

  for variable in variables {
    if variable.name.to_lowercase().contains(&needle) {
      set.insert(variable.name.clone(), variable.name.clone());
    }
  }

  set
}
