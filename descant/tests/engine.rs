//! End-to-end coverage of the suggestion engine through the public API.

use descant::{
  config::{
    Config,
    ConfigStore,
  },
  core::{
    CaretBounds,
    EditArea,
    TextChange,
    style::StyleTagSet,
    variables::{
      VariableRegistry,
      VariableSource,
    },
  },
  handlers::autocomplete::AutocompleteHandler,
  ui::overlay::{
    OverlayBroker,
    OverlayKind,
  },
};
use ropey::{
  Rope,
  RopeSlice,
};

struct Area {
  text:  Rope,
  caret: usize,
}

impl Area {
  fn new(text: &str) -> Self {
    let text = Rope::from_str(text);
    let caret = text.len_chars();
    Self { text, caret }
  }
}

impl EditArea for Area {
  fn text(&self) -> RopeSlice<'_> {
    self.text.slice(..)
  }

  fn caret(&self) -> usize {
    self.caret
  }

  fn style_tags_at(&self, _pos: usize) -> StyleTagSet {
    StyleTagSet::default()
  }

  fn caret_bounds(&self) -> Option<CaretBounds> {
    Some(CaretBounds {
      min_x: 4.0,
      min_y: 16.0,
    })
  }
}

fn typed() -> TextChange {
  TextChange {
    inserted_len: 1,
    removed_len:  0,
  }
}

#[test]
fn typing_session_drives_the_full_lifecycle() {
  let store = ConfigStore::default();
  let mut handler = AutocompleteHandler::new(store.clone());
  let mut broker = OverlayBroker::new();
  let variables = VariableRegistry::new();
  variables.define("storage");

  // "s" is below the minimum length: nothing happens.
  handler.on_change(&typed(), &Area::new("s"), &variables, &mut broker);
  assert!(handler.menu().is_none());

  // "sto" opens the menu with vocabulary first, variables after.
  handler.on_change(&typed(), &Area::new("sto"), &variables, &mut broker);
  let menu = handler.menu().expect("menu opens");
  assert!(menu.is_shown());
  assert_eq!(menu.entries().get("stone_sword"), Some("Stone Sword"));
  assert_eq!(menu.entries().get("storage"), Some("storage"));
  assert_eq!(broker.current(), Some(OverlayKind::Autocomplete));

  // Narrowing the token updates the same instance in place.
  handler.on_change(&typed(), &Area::new("stora"), &variables, &mut broker);
  let menu = handler.menu().unwrap();
  assert_eq!(menu.entries().len(), 1);
  assert_eq!(menu.entries().get("storage"), Some("storage"));

  // A breaker empties the token and tears the menu down.
  handler.on_change(&typed(), &Area::new("stora "), &variables, &mut broker);
  assert!(handler.menu().is_none());
  assert_eq!(broker.current(), None);
}

#[test]
fn config_reload_applies_on_the_next_cycle() {
  let store = ConfigStore::default();
  let mut handler = AutocompleteHandler::new(store.clone());
  let mut broker = OverlayBroker::new();
  let variables = VariableRegistry::new();

  handler.on_change(&typed(), &Area::new("sto"), &variables, &mut broker);
  assert!(handler.menu().is_some());

  // Raise the minimum length; the running handler sees the new snapshot on
  // its next invocation and treats "sto" as too short.
  let config = Config::load(Some("[autocomplete]\nmin-word-length = 5\n"), None).unwrap();
  store.store(config);

  handler.on_change(&typed(), &Area::new("stor"), &variables, &mut broker);
  assert!(handler.menu().is_none());
}

#[test]
fn variable_snapshot_is_queried_fresh_each_cycle() {
  let store = ConfigStore::default();
  let mut handler = AutocompleteHandler::new(store);
  let mut broker = OverlayBroker::new();
  let variables = VariableRegistry::new();

  handler.on_change(&typed(), &Area::new("myv"), &variables, &mut broker);
  assert!(handler.menu().unwrap().is_empty());

  variables.define("myvar");
  handler.on_change(&typed(), &Area::new("myva"), &variables, &mut broker);
  assert_eq!(handler.menu().unwrap().entries().get("myvar"), Some("myvar"));
}

#[test]
fn fresh_variable_snapshot_reflects_removals_too() {
  let registry = VariableRegistry::new();
  registry.define("alpha");
  registry.define("beta");
  registry.remove("alpha");
  let names: Vec<_> = registry
    .current_variables()
    .into_iter()
    .map(|v| v.name)
    .collect();
  assert_eq!(names, ["beta"]);
}
