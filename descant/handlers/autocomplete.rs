//! The change orchestrator: turns buffer edits and key presses into
//! suggestion-overlay transitions.

use crate::{
  config::ConfigStore,
  core::{
    EditArea,
    TextChange,
    style::StyleTagSet,
    suggest::rank,
    variables::VariableSource,
    vocabulary::vocabulary,
    words::token_at,
  },
  ui::{
    Key,
    KeyEvent,
    components::autocomplete::AutocompleteMenu,
    overlay::{
      Acquire,
      OverlayBroker,
      OverlayKind,
    },
  },
};

pub struct AutocompleteHandler {
  menu:   Option<AutocompleteMenu>,
  config: ConfigStore,
  /// Programmatic edits (paste, formatting) set this to skip suggestion
  /// cycles entirely.
  pub ignore_autocompletion: bool,
}

impl AutocompleteHandler {
  pub fn new(config: ConfigStore) -> Self {
    Self {
      menu: None,
      config,
      ignore_autocompletion: false,
    }
  }

  pub fn menu(&self) -> Option<&AutocompleteMenu> {
    self.menu.as_ref()
  }

  /// Process one buffer edit to completion. Synchronous; the next edit is
  /// only dispatched after this returns.
  pub fn on_change(
    &mut self,
    change: &TextChange,
    area: &impl EditArea,
    variables: &dyn VariableSource,
    broker: &mut OverlayBroker,
  ) {
    let config = self.config.load();
    let settings = &config.autocomplete;
    if self.ignore_autocompletion || !settings.enabled || !change.is_net_insertion() {
      return;
    }

    let caret = area.caret();
    let len = area.text().len_chars();
    // At end-of-buffer there is no character to classify.
    let tags = if caret < len {
      area.style_tags_at(caret)
    } else {
      StyleTagSet::default()
    };
    if caret < len && tags.suppresses_completion() {
      return;
    }

    // A caret past the end of the buffer means this event raced a later
    // edit; skip the cycle rather than suggest against stale text.
    let Some(token) = token_at(area.text(), caret) else {
      log::debug!("caret {caret} out of range, skipping suggestion cycle");
      return;
    };

    if token.len_chars() >= settings.min_word_length {
      let suggestions = rank(
        &token.text,
        &tags,
        vocabulary(),
        &variables.current_variables(),
        settings.min_word_length,
        settings.max_hints,
      );

      let menu = self.menu.get_or_insert_with(AutocompleteMenu::new);
      let has_entries = !suggestions.is_empty();
      menu.update(suggestions);
      if has_entries {
        menu.reposition(area.caret_bounds());
      }

      match broker.acquire(OverlayKind::Autocomplete) {
        Acquire::AlreadyHeld => {},
        Acquire::Granted { .. } => menu.show(),
      }
    } else {
      // Token shrank below the minimum: tear the instance down so the next
      // qualifying edit starts from a fresh menu.
      if let Some(menu) = self.menu.as_mut() {
        menu.hide();
      }
      broker.release(OverlayKind::Autocomplete);
      self.menu = None;
    }
  }

  /// Down moves keyboard focus into the menu when it owns the overlay slot;
  /// every other key passes through untouched.
  pub fn on_key(&mut self, event: &mut KeyEvent, broker: &OverlayBroker) {
    if event.code != Key::Down {
      return;
    }
    if broker.current() != Some(OverlayKind::Autocomplete) {
      return;
    }
    let Some(menu) = self.menu.as_mut() else {
      return;
    };
    menu.focus_first();
    event.consume();
  }
}
