//! The suggestion overlay: a single menu instance whose lifecycle is driven
//! by the change orchestrator.

use crate::{
  core::{
    CaretBounds,
    suggest::SuggestionSet,
  },
  ui::MENU_VERTICAL_OFFSET,
};

/// Layout origin of the overlay, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuPosition {
  pub x: f32,
  pub y: f32,
}

/// The overlay instance. Created lazily on the first qualifying cycle,
/// updated in place while the token keeps qualifying, destroyed when the
/// token shrinks below the minimum length.
#[derive(Debug, Default)]
pub struct AutocompleteMenu {
  entries:  SuggestionSet,
  position: MenuPosition,
  shown:    bool,
  focused:  bool,
  hovered:  Option<usize>,
}

impl AutocompleteMenu {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the menu contents. An empty set empties the menu but does not
  /// hide it; only the short-token path tears the instance down.
  pub fn update(&mut self, entries: SuggestionSet) {
    self.entries = entries;
    self.hovered = None;
  }

  /// Anchor the overlay under the caret, falling back to the screen origin
  /// when the widget cannot resolve caret bounds yet.
  pub fn reposition(&mut self, bounds: Option<CaretBounds>) {
    self.position = match bounds {
      Some(bounds) => MenuPosition {
        x: bounds.min_x,
        y: bounds.min_y + MENU_VERTICAL_OFFSET,
      },
      None => MenuPosition::default(),
    };
  }

  pub fn show(&mut self) {
    self.shown = true;
  }

  pub fn hide(&mut self) {
    self.shown = false;
    self.focused = false;
    self.hovered = None;
  }

  /// Keyboard focus lands in the menu with its first entry highlighted.
  pub fn focus_first(&mut self) {
    self.focused = true;
    self.hovered = Some(0);
  }

  pub fn entries(&self) -> &SuggestionSet {
    &self.entries
  }

  pub fn position(&self) -> MenuPosition {
    self.position
  }

  pub fn is_shown(&self) -> bool {
    self.shown
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn is_focused(&self) -> bool {
    self.focused
  }

  pub fn hovered(&self) -> Option<usize> {
    self.hovered
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reposition_offsets_below_the_caret() {
    let mut menu = AutocompleteMenu::new();
    menu.reposition(Some(CaretBounds {
      min_x: 12.5,
      min_y: 40.0,
    }));
    assert_eq!(menu.position(), MenuPosition { x: 12.5, y: 130.0 });
  }

  #[test]
  fn missing_bounds_fall_back_to_the_origin() {
    let mut menu = AutocompleteMenu::new();
    menu.reposition(None);
    assert_eq!(menu.position(), MenuPosition::default());
  }

  #[test]
  fn hide_drops_focus_and_hover() {
    let mut menu = AutocompleteMenu::new();
    menu.show();
    menu.focus_first();
    menu.hide();
    assert!(!menu.is_shown());
    assert!(!menu.is_focused());
    assert_eq!(menu.hovered(), None);
  }

  #[test]
  fn update_resets_hover_but_not_visibility() {
    let mut menu = AutocompleteMenu::new();
    menu.show();
    menu.focus_first();
    menu.update(SuggestionSet::new());
    assert!(menu.is_shown());
    assert_eq!(menu.hovered(), None);
  }
}
