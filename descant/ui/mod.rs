pub mod components;
pub mod overlay;

/// Vertical gap between the caret origin and the suggestion overlay, in
/// layout units.
pub const MENU_VERTICAL_OFFSET: f32 = 90.0;

/// Keys the engine cares about. Everything it does not intercept passes
/// through to the widget's default handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
  Up,
  Down,
  Left,
  Right,
  Enter,
  Escape,
  Tab,
  Char(char),
}

/// A key press with the widget's consume capability: consuming suppresses
/// the default caret behavior for that key.
#[derive(Debug)]
pub struct KeyEvent {
  pub code: Key,
  consumed: bool,
}

impl KeyEvent {
  pub fn new(code: Key) -> Self {
    Self {
      code,
      consumed: false,
    }
  }

  pub fn consume(&mut self) {
    self.consumed = true;
  }

  pub fn is_consumed(&self) -> bool {
    self.consumed
  }
}
