//! Held-key tracking for the four paddle controls
//!
//! Press/release handlers may fire from any thread; the tick reads a copy of
//! the table through `InputSampler::snapshot` once per step.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::state::Player;

/// Logical control keys understood by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKey {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
}

impl ControlKey {
    pub const ALL: [ControlKey; 4] = [
        ControlKey::Player1Up,
        ControlKey::Player1Down,
        ControlKey::Player2Up,
        ControlKey::Player2Down,
    ];

    pub fn player(self) -> Player {
        match self {
            ControlKey::Player1Up | ControlKey::Player1Down => Player::One,
            ControlKey::Player2Up | ControlKey::Player2Down => Player::Two,
        }
    }
}

/// Held state of every control key at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub player1_up: bool,
    pub player1_down: bool,
    pub player2_up: bool,
    pub player2_down: bool,
}

impl InputSnapshot {
    /// Snapshot with only the given keys held
    pub fn holding(keys: &[ControlKey]) -> Self {
        let mut snapshot = Self::default();
        for &key in keys {
            snapshot.set(key, true);
        }
        snapshot
    }

    pub fn held(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Player1Up => self.player1_up,
            ControlKey::Player1Down => self.player1_down,
            ControlKey::Player2Up => self.player2_up,
            ControlKey::Player2Down => self.player2_down,
        }
    }

    /// `(up, down)` for one player
    pub fn direction(&self, player: Player) -> (bool, bool) {
        match player {
            Player::One => (self.player1_up, self.player1_down),
            Player::Two => (self.player2_up, self.player2_down),
        }
    }

    fn set(&mut self, key: ControlKey, held: bool) {
        let slot = match key {
            ControlKey::Player1Up => &mut self.player1_up,
            ControlKey::Player1Down => &mut self.player1_down,
            ControlKey::Player2Up => &mut self.player2_up,
            ControlKey::Player2Down => &mut self.player2_down,
        };
        *slot = held;
    }
}

/// Physical key names bound to each control key
///
/// Names are matched exactly, e.g. `"w"` or `"ArrowUp"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player1_up: String,
    pub player1_down: String,
    pub player2_up: String,
    pub player2_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player1_up: "w".to_string(),
            player1_down: "s".to_string(),
            player2_up: "ArrowUp".to_string(),
            player2_down: "ArrowDown".to_string(),
        }
    }
}

impl KeyBindings {
    /// Control key bound to a physical key name, if any
    pub fn lookup(&self, name: &str) -> Option<ControlKey> {
        ControlKey::ALL
            .into_iter()
            .find(|&key| self.name_of(key) == name)
    }

    pub fn name_of(&self, key: ControlKey) -> &str {
        match key {
            ControlKey::Player1Up => &self.player1_up,
            ControlKey::Player1Down => &self.player1_down,
            ControlKey::Player2Up => &self.player2_up,
            ControlKey::Player2Down => &self.player2_down,
        }
    }
}

/// Current pressed/released table, shared between input handlers and the tick
#[derive(Debug, Default)]
pub struct InputSampler {
    bindings: KeyBindings,
    keys: Mutex<InputSnapshot>,
}

impl InputSampler {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys: Mutex::new(InputSnapshot::default()),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Physical key went down. Unbound names are ignored.
    pub fn on_press(&self, name: &str) {
        self.apply(name, true);
    }

    /// Physical key went up. Unbound names are ignored.
    pub fn on_release(&self, name: &str) {
        self.apply(name, false);
    }

    /// Mark a control key held, for callers that bind keys themselves
    pub fn press(&self, key: ControlKey) {
        self.keys.lock().set(key, true);
    }

    pub fn release(&self, key: ControlKey) {
        self.keys.lock().set(key, false);
    }

    /// Release every key (e.g. when the window loses focus)
    pub fn release_all(&self) {
        *self.keys.lock() = InputSnapshot::default();
    }

    /// Copy of the table as it is right now
    pub fn snapshot(&self) -> InputSnapshot {
        *self.keys.lock()
    }

    fn apply(&self, name: &str, held: bool) {
        match self.bindings.lookup(name) {
            Some(key) => self.keys.lock().set(key, held),
            None => log::trace!("Ignoring unbound key {:?}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_press_and_release_bound_keys() {
        let sampler = InputSampler::default();
        sampler.on_press("w");
        sampler.on_press("ArrowDown");

        let snapshot = sampler.snapshot();
        assert!(snapshot.player1_up);
        assert!(snapshot.player2_down);
        assert!(!snapshot.player1_down);
        assert!(!snapshot.player2_up);

        sampler.on_release("w");
        assert!(!sampler.snapshot().player1_up);
        assert!(sampler.snapshot().player2_down);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let sampler = InputSampler::default();
        sampler.on_press("q");
        sampler.on_press("W");
        sampler.on_press("");
        assert_eq!(sampler.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_last_writer_wins() {
        let sampler = InputSampler::default();
        sampler.on_press("s");
        sampler.on_press("s");
        sampler.on_release("s");
        assert!(!sampler.snapshot().player1_down);
        sampler.on_release("s");
        sampler.on_press("s");
        assert!(sampler.snapshot().player1_down);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let sampler = InputSampler::default();
        sampler.press(ControlKey::Player2Up);
        let first = sampler.snapshot();
        let second = sampler.snapshot();
        assert_eq!(first, second);
        assert!(second.held(ControlKey::Player2Up));

        sampler.release(ControlKey::Player2Up);
        assert!(first.held(ControlKey::Player2Up));
        assert!(!sampler.snapshot().held(ControlKey::Player2Up));
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = KeyBindings {
            player1_up: "a".to_string(),
            ..KeyBindings::default()
        };
        let sampler = InputSampler::new(bindings);
        sampler.on_press("w");
        assert!(!sampler.snapshot().player1_up);
        sampler.on_press("a");
        assert!(sampler.snapshot().player1_up);
    }

    #[test]
    fn test_release_all() {
        let sampler = InputSampler::default();
        for key in ControlKey::ALL {
            sampler.press(key);
        }
        sampler.release_all();
        assert_eq!(sampler.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_handlers_from_other_threads() {
        let sampler = Arc::new(InputSampler::default());
        let handles: Vec<_> = ["w", "s", "ArrowUp", "ArrowDown"]
            .into_iter()
            .map(|name| {
                let sampler = Arc::clone(&sampler);
                thread::spawn(move || sampler.on_press(name))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = sampler.snapshot();
        assert!(ControlKey::ALL.iter().all(|&key| snapshot.held(key)));
    }

    #[test]
    fn test_direction_and_holding() {
        let snapshot = InputSnapshot::holding(&[ControlKey::Player1Down, ControlKey::Player2Up]);
        assert_eq!(snapshot.direction(Player::One), (false, true));
        assert_eq!(snapshot.direction(Player::Two), (true, false));
        assert_eq!(ControlKey::Player2Down.player(), Player::Two);
    }
}
