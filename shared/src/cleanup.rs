use serde::{Deserialize, Serialize};

use crate::crew::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub id: u32,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub participants: u32,
    #[serde(default)]
    pub badge: Option<String>,
}

impl CleanupEvent {
    /// Human date such as "Mon, Dec 8". Falls back to the stored string.
    pub fn display_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d.format("%a, %b %-d").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }

    pub fn participants_label(&self) -> String {
        match self.participants {
            1 => "1 volunteer".to_string(),
            n => format!("{n} volunteers"),
        }
    }
}

/// Static page content owned by the application root.
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub cleanups: Vec<CleanupEvent>,
    pub profile: UserProfile,
}

impl AppData {
    pub fn seed() -> Self {
        Self {
            cleanups: seed_cleanups(),
            profile: UserProfile::seed(),
        }
    }
}

pub fn seed_cleanups() -> Vec<CleanupEvent> {
    vec![
        CleanupEvent {
            id: 1,
            title: "Sunset Beach Cleanup".to_string(),
            date: "2025-12-08".to_string(),
            time: "09:00 AM".to_string(),
            location: "Sunset Beach, CA".to_string(),
            description: "Join 40+ volunteers for a 3-hour beach cleanup. All supplies provided!"
                .to_string(),
            participants: 42,
            badge: Some("Popular".to_string()),
        },
        CleanupEvent {
            id: 2,
            title: "Marina Bay Restoration".to_string(),
            date: "2025-12-12".to_string(),
            time: "04:00 PM".to_string(),
            location: "Marina Bay, SF".to_string(),
            description: "Evening cleanup focused on marine habitat restoration.".to_string(),
            participants: 18,
            badge: Some("New".to_string()),
        },
        CleanupEvent {
            id: 3,
            title: "Coral Cove Summer Initiative".to_string(),
            date: "2025-12-15".to_string(),
            time: "10:00 AM".to_string(),
            location: "Coral Cove, HI".to_string(),
            description:
                "Quarterly reef-safe cleanup with educational talks from marine biologists."
                    .to_string(),
            participants: 65,
            badge: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{AppData, seed_cleanups};

    #[test]
    fn seed_ids_and_titles_are_unique() {
        let events = seed_cleanups();
        let ids: HashSet<u32> = events.iter().map(|e| e.id).collect();
        let titles: HashSet<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(ids.len(), events.len());
        assert_eq!(titles.len(), events.len());
    }

    #[test]
    fn display_date_is_human_readable() {
        let events = seed_cleanups();
        assert_eq!(events[0].display_date(), "Mon, Dec 8");
        let mut broken = events[0].clone();
        broken.date = "soon".to_string();
        assert_eq!(broken.display_date(), "soon");
    }

    #[test]
    fn participants_label_pluralizes() {
        let mut event = seed_cleanups().remove(1);
        assert_eq!(event.participants_label(), "18 volunteers");
        event.participants = 1;
        assert_eq!(event.participants_label(), "1 volunteer");
    }

    #[test]
    fn seed_app_data_bundles_profile() {
        let data = AppData::seed();
        assert_eq!(data.cleanups.len(), 3);
        assert_eq!(data.profile.crew_members.len(), 8);
    }
}
