use std::collections::HashMap;
use std::hash::Hash;

pub const JOINED_LABEL: &str = "✓ Joined!";
/// How long a join control stays in its joined state before reverting.
pub const JOIN_REVERT_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinState {
    Idle,
    Joined { original_label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The control moved to its joined state and should show `label`, disabled.
    Joined { label: &'static str },
    /// The control is already joined; nothing to do.
    Ignored,
}

/// Join state for every live join control, keyed by control identity.
#[derive(Debug, Clone)]
pub struct JoinRegistry<K> {
    controls: HashMap<K, JoinState>,
}

impl<K> Default for JoinRegistry<K> {
    fn default() -> Self {
        Self {
            controls: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> JoinRegistry<K> {
    #[cfg(test)]
    pub fn state(&self, id: &K) -> JoinState {
        self.controls.get(id).cloned().unwrap_or(JoinState::Idle)
    }

    pub fn activate(&mut self, id: K, current_label: &str) -> Activation {
        match self.controls.get(&id) {
            Some(JoinState::Joined { .. }) => Activation::Ignored,
            _ => {
                self.controls.insert(
                    id,
                    JoinState::Joined {
                        original_label: current_label.to_string(),
                    },
                );
                Activation::Joined {
                    label: JOINED_LABEL,
                }
            }
        }
    }

    /// Return a joined control to idle, yielding the label to restore.
    /// `None` when the control is idle or no longer registered.
    pub fn revert(&mut self, id: &K) -> Option<String> {
        let slot = self.controls.get_mut(id)?;
        match std::mem::replace(slot, JoinState::Idle) {
            JoinState::Joined { original_label } => Some(original_label),
            JoinState::Idle => None,
        }
    }

    /// Drop a control that no longer exists.
    pub fn forget(&mut self, id: &K) {
        self.controls.remove(id);
    }

    #[cfg(test)]
    pub fn joined_count(&self) -> usize {
        self.controls
            .values()
            .filter(|s| matches!(s, JoinState::Joined { .. }))
            .count()
    }
}
