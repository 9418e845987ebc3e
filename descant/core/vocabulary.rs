//! The fixed completion vocabulary: game-object names grouped by category,
//! built once at startup and read-only afterwards.

use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
  Literal,
  Item,
  Entity,
  Particle,
  Effect,
  Enchantment,
  Sound,
}

/// One completion candidate: the canonical key written into the buffer and
/// the formalized label shown in the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyEntry {
  pub canonical: &'static str,
  pub display:   String,
  pub category:  Category,
}

// Boolean literals come first and keep their raw spelling as the label.
const LITERALS: &[&str] = &["true", "false"];

const ITEMS: &[&str] = &[
  "stone",
  "stone_sword",
  "stone_axe",
  "stone_pickaxe",
  "diamond",
  "diamond_sword",
  "iron_ingot",
  "iron_sword",
  "golden_apple",
  "bow",
  "arrow",
  "ender_pearl",
  "oak_planks",
  "torch",
  "shield",
];

const ENTITIES: &[&str] = &[
  "zombie",
  "skeleton",
  "creeper",
  "spider",
  "enderman",
  "villager",
  "iron_golem",
  "cow",
  "pig",
  "sheep",
  "chicken",
  "blaze",
  "wither",
];

const PARTICLES: &[&str] = &[
  "flame",
  "smoke",
  "large_smoke",
  "portal",
  "heart",
  "crit",
  "cloud",
  "lava",
  "snowball",
  "dripping_water",
];

const EFFECTS: &[&str] = &[
  "speed",
  "slowness",
  "haste",
  "strength",
  "instant_health",
  "regeneration",
  "poison",
  "night_vision",
  "invisibility",
  "fire_resistance",
];

const ENCHANTMENTS: &[&str] = &[
  "sharpness",
  "smite",
  "protection",
  "fire_protection",
  "efficiency",
  "unbreaking",
  "fortune",
  "silk_touch",
  "knockback",
  "infinity",
];

const SOUNDS: &[&str] = &[
  "ambient_cave",
  "block_anvil_land",
  "block_chest_open",
  "entity_zombie_ambient",
  "entity_player_levelup",
  "entity_arrow_hit",
  "ui_button_click",
  "music_creative",
];

/// Turn a raw catalog name into the label shown in the menu:
/// `"stone_sword"` becomes `"Stone Sword"`.
pub fn formalize(raw: &str) -> String {
  raw
    .split('_')
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

/// All completion candidates in fixed category order. Iteration order is the
/// ranking order: category by category, catalog order within each.
#[derive(Debug)]
pub struct VocabularyIndex {
  entries: Vec<VocabularyEntry>,
}

impl VocabularyIndex {
  pub fn from_entries(entries: Vec<VocabularyEntry>) -> Self {
    Self { entries }
  }

  fn build() -> Self {
    let catalogs: &[(Category, &[&str])] = &[
      (Category::Literal, LITERALS),
      (Category::Item, ITEMS),
      (Category::Entity, ENTITIES),
      (Category::Particle, PARTICLES),
      (Category::Effect, EFFECTS),
      (Category::Enchantment, ENCHANTMENTS),
      (Category::Sound, SOUNDS),
    ];

    let mut entries = Vec::new();
    for &(category, names) in catalogs {
      for &canonical in names {
        let display = match category {
          Category::Literal => canonical.to_string(),
          _ => formalize(canonical),
        };
        entries.push(VocabularyEntry {
          canonical,
          display,
          category,
        });
      }
    }
    Self { entries }
  }

  pub fn entries(&self) -> &[VocabularyEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

static VOCABULARY: Lazy<VocabularyIndex> = Lazy::new(VocabularyIndex::build);

/// The process-wide vocabulary, built on first use.
pub fn vocabulary() -> &'static VocabularyIndex {
  &VOCABULARY
}
