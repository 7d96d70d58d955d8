// Memento: the game state exports itself as an opaque snapshot, and the
// checkpoint keeps snapshots in the defaults store without looking inside.

use crate::error::Result;
use crate::store::DefaultsStore;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

pub type Memento = BTreeMap<String, String>;

pub const KEY_CHAPTER: &str = "com.valve.halflife.chapter";
pub const KEY_WEAPON: &str = "com.valve.halflife.weapon";
pub const KEY_GAME_STATE: &str = "com.valve.halflife.state";

const NOT_AVAILABLE: &str = "n/a";

// ============================================================================
// Originator
// ============================================================================

pub trait MementoConvertible: Sized {
    fn memento(&self) -> Memento;
    /// Strict restore: `None` unless every key is present.
    fn from_memento(memento: &Memento) -> Option<Self>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub chapter: String,
    pub weapon: String,
}

impl GameState {
    pub fn new(chapter: impl Into<String>, weapon: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            weapon: weapon.into(),
        }
    }

    pub fn to_memento(&self) -> Memento {
        self.memento()
    }

    /// Lenient restore: missing keys become "n/a".
    pub fn restore_from_memento(&mut self, memento: &Memento) {
        let field = |key: &str| {
            memento
                .get(key)
                .cloned()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        self.chapter = field(KEY_CHAPTER);
        self.weapon = field(KEY_WEAPON);
    }
}

impl MementoConvertible for GameState {
    fn memento(&self) -> Memento {
        Memento::from([
            (KEY_CHAPTER.to_string(), self.chapter.clone()),
            (KEY_WEAPON.to_string(), self.weapon.clone()),
        ])
    }

    fn from_memento(memento: &Memento) -> Option<Self> {
        Some(Self {
            chapter: memento.get(KEY_CHAPTER)?.clone(),
            weapon: memento.get(KEY_WEAPON)?.clone(),
        })
    }
}

// ============================================================================
// Caretaker
// ============================================================================

pub struct CheckPoint;

impl CheckPoint {
    /// Stores `memento` under `key` and synchronizes the store.
    pub fn save_state(store: &mut DefaultsStore, memento: &Memento, key: &str) -> Result<()> {
        let object: serde_json::Map<String, Value> = memento
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        debug!(key, "saving checkpoint");
        store.set(key, Value::Object(object));
        store.synchronize()
    }

    /// Empty memento when nothing was saved under `key`.
    pub fn restore_previous_state(store: &DefaultsStore, key: &str) -> Memento {
        store
            .object(key)
            .map(|object| {
                object
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }
}
