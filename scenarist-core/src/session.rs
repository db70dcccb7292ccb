//! Per-client session state and the recency tracker.
//!
//! A [`Session`] is a plain value: the boundary layer decodes it from the
//! client, hands it to the gate and tracker by `&mut`, and encodes it back.
//! The premium flag can only be raised through [`crate::gate`].
use crate::constants::RECENT_SCENARIO_LIMIT;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Most-recent-first scenario labels, at most [`RECENT_SCENARIO_LIMIT`] long.
pub type RecentScenarios = SmallVec<[String; RECENT_SCENARIO_LIMIT]>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    premium_unlocked_dating: bool,
    #[serde(default, deserialize_with = "deserialize_recent")]
    recent_scenarios: RecentScenarios,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn premium_unlocked_dating(&self) -> bool {
        self.premium_unlocked_dating
    }

    /// Raise the premium flag. There is deliberately no way to lower it.
    pub(crate) const fn mark_premium_unlocked(&mut self) {
        self.premium_unlocked_dating = true;
    }

    #[must_use]
    pub fn recent_scenarios(&self) -> &[String] {
        &self.recent_scenarios
    }

    /// Record a scenario view.
    ///
    /// Moves `label` to the front, removing an earlier occurrence, then
    /// drops everything past the limit.
    pub fn track_view(&mut self, label: &str) {
        if let Some(pos) = self.recent_scenarios.iter().position(|seen| seen == label) {
            self.recent_scenarios.remove(pos);
        }
        self.recent_scenarios.insert(0, label.to_string());
        self.recent_scenarios.truncate(RECENT_SCENARIO_LIMIT);
    }
}

// Session payloads come back from the client; keep the list invariants even
// if an older encoding carried more entries or repeats.
fn deserialize_recent<'de, D>(deserializer: D) -> Result<RecentScenarios, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    let mut recent = RecentScenarios::new();
    for label in raw {
        if recent.len() == RECENT_SCENARIO_LIMIT {
            break;
        }
        if !recent.contains(&label) {
            recent.push(label);
        }
    }
    Ok(recent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_locked_and_empty() {
        let session = Session::new();
        assert!(!session.premium_unlocked_dating());
        assert!(session.recent_scenarios().is_empty());
    }

    #[test]
    fn track_view_puts_latest_first() {
        let mut session = Session::new();
        session.track_view("Alpha");
        session.track_view("Beta");
        assert_eq!(session.recent_scenarios(), ["Beta", "Alpha"]);
    }

    #[test]
    fn repeated_label_keeps_single_entry() {
        let mut session = Session::new();
        session.track_view("Alpha");
        session.track_view("Alpha");
        assert_eq!(session.recent_scenarios(), ["Alpha"]);
    }

    #[test]
    fn revisiting_moves_label_to_front() {
        let mut session = Session::new();
        for label in ["A", "B", "C"] {
            session.track_view(label);
        }
        session.track_view("A");
        assert_eq!(session.recent_scenarios(), ["A", "C", "B"]);
    }

    #[test]
    fn list_is_capped_and_drops_oldest() {
        let mut session = Session::new();
        for n in 1..=8 {
            session.track_view(&format!("Scenario {n}"));
            assert!(session.recent_scenarios().len() <= RECENT_SCENARIO_LIMIT);
        }
        assert_eq!(
            session.recent_scenarios(),
            [
                "Scenario 8",
                "Scenario 7",
                "Scenario 6",
                "Scenario 5",
                "Scenario 4"
            ]
        );
    }

    #[test]
    fn revisit_at_capacity_does_not_evict() {
        let mut session = Session::new();
        for label in ["A", "B", "C", "D", "E"] {
            session.track_view(label);
        }
        session.track_view("A");
        assert_eq!(session.recent_scenarios(), ["A", "E", "D", "C", "B"]);
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let mut session = Session::new();
        session.mark_premium_unlocked();
        session.track_view("Alpha");
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn deserialize_normalizes_oversized_lists() {
        let json = r#"{"recent_scenarios":["a","b","a","c","d","e","f","g"]}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.recent_scenarios(), ["a", "b", "c", "d", "e"]);
        assert!(!session.premium_unlocked_dating());
    }

    #[test]
    fn empty_object_deserializes_to_default() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::default());
    }
}
