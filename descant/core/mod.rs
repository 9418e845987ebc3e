use ropey::RopeSlice;

use crate::core::style::StyleTagSet;

pub mod style;
pub mod suggest;
pub mod variables;
pub mod vocabulary;
pub mod words;

/// Screen-space origin of the caret, in layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretBounds {
  pub min_x: f32,
  pub min_y: f32,
}

/// One buffer edit, as reported by the text widget.
#[derive(Clone, Copy, Debug)]
pub struct TextChange {
  pub inserted_len: usize,
  pub removed_len:  usize,
}

impl TextChange {
  /// Completion only triggers while the buffer is growing.
  pub fn is_net_insertion(&self) -> bool {
    self.inserted_len > self.removed_len
  }
}

/// The text-buffer widget, as seen by the engine.
///
/// Offsets are char offsets into [`text`](EditArea::text). `style_tags_at`
/// reflects the highlighter's classification of a position; positions at or
/// past end-of-buffer classify as the empty set.
pub trait EditArea {
  fn text(&self) -> RopeSlice<'_>;
  fn caret(&self) -> usize;
  fn style_tags_at(&self, pos: usize) -> StyleTagSet;
  /// `None` when the widget cannot resolve the caret to screen space yet.
  fn caret_bounds(&self) -> Option<CaretBounds>;
}
