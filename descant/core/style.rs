//! Syntactic classification of buffer positions, as reported by the
//! highlighter.

/// Tag set on characters inside quoted scalars.
pub const TAG_STRING: &str = "string";
/// Tag set on characters of a mapping key.
pub const TAG_KEY: &str = "key";
/// Tag set on the `:` separating a key from its value.
pub const TAG_COLON: &str = "colon";

/// The style tags active at one buffer position. Tiny in practice (zero to
/// three tags), so a plain vector beats a hash set here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTagSet {
  tags: Vec<String>,
}

impl StyleTagSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_tags<I, T>(tags: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    let mut set = Self::new();
    for tag in tags {
      set.insert(tag);
    }
    set
  }

  pub fn insert(&mut self, tag: impl Into<String>) {
    let tag = tag.into();
    if !self.tags.contains(&tag) {
      self.tags.push(tag);
    }
  }

  pub fn contains(&self, tag: &str) -> bool {
    self.tags.iter().any(|t| t == tag)
  }

  pub fn is_empty(&self) -> bool {
    self.tags.is_empty()
  }

  /// Typing inside a mapping key (or on its colon) suppresses the whole
  /// suggestion cycle.
  pub fn suppresses_completion(&self) -> bool {
    self.contains(TAG_KEY) || self.contains(TAG_COLON)
  }
}
