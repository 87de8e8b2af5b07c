use serde::{Deserialize, Serialize};

const KG_PER_LB: f64 = 0.453592;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Ordered; names are unique.
    pub crew_members: Vec<String>,
    pub cleanups_attended: u32,
    pub trash_collected_lbs: f64,
}

impl UserProfile {
    pub fn seed() -> Self {
        Self {
            crew_members: ["Alex", "Jordan", "Casey", "Morgan", "Sam", "Taylor", "Riley", "Jamie"]
                .into_iter()
                .map(String::from)
                .collect(),
            cleanups_attended: 12,
            trash_collected_lbs: 450.0,
        }
    }
}

/// Derived figures for the crew stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewStats {
    pub members: usize,
    pub cleanups_attended: u32,
    pub trash_collected_kg: i64,
}

impl CrewStats {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            members: profile.crew_members.len(),
            cleanups_attended: profile.cleanups_attended,
            trash_collected_kg: pounds_to_kg(profile.trash_collected_lbs),
        }
    }

    pub fn trash_label(&self) -> String {
        format!("{} kg", self.trash_collected_kg)
    }
}

pub fn pounds_to_kg(pounds: f64) -> i64 {
    (pounds.max(0.0) * KG_PER_LB).round() as i64
}

/// The three stat targets plus the member badge list.
pub trait CrewTargets {
    fn set_member_count(&mut self, text: String);
    fn set_cleanups_attended(&mut self, text: String);
    fn set_trash_collected(&mut self, text: String);
    fn set_badges(&mut self, names: Vec<String>);
}

pub fn present<T: CrewTargets + ?Sized>(profile: &UserProfile, targets: &mut T) {
    let stats = CrewStats::from_profile(profile);
    targets.set_member_count(stats.members.to_string());
    targets.set_cleanups_attended(stats.cleanups_attended.to_string());
    targets.set_trash_collected(stats.trash_label());
    targets.set_badges(profile.crew_members.clone());
}

/// How a member badge was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeInput<'a> {
    Pointer,
    /// `repeat` is set for auto-repeat events while the key is held.
    Key { key: &'a str, repeat: bool },
}

impl<'a> BadgeInput<'a> {
    pub fn key(key: &'a str) -> Self {
        Self::Key { key, repeat: false }
    }

    /// Pointer clicks and a fresh Enter/Space press activate a badge.
    pub fn activates(self) -> bool {
        match self {
            Self::Pointer => true,
            Self::Key { key, repeat } => !repeat && is_activation_key(key),
        }
    }
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Apply a badge input to the highlighted member. Inputs that do not activate
/// leave the highlight unchanged.
pub fn apply_badge_input(
    highlighted: Option<&str>,
    name: &str,
    input: BadgeInput<'_>,
) -> Option<String> {
    if !input.activates() {
        return highlighted.map(str::to_string);
    }
    toggle_highlight(highlighted, name)
}

pub fn toggle_highlight(highlighted: Option<&str>, name: &str) -> Option<String> {
    if highlighted == Some(name) {
        None
    } else {
        Some(name.to_string())
    }
}
