use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::DeckError;

use super::CompetitorId;

/// How often a keyword surfaces in AI-generated answers. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiPresence {
    Low,
    Medium,
    High,
}

impl AiPresence {
    /// Fixed ordinal used for sorting; alphabetical order would put `High` first.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Ord for AiPresence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for AiPresence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AiPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiPresence {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(DeckError::InvalidData(format!(
                "unknown AI presence level `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    pub keyword: String,
    /// Average ranking position, 1 is best.
    pub position: u32,
    pub traffic_share: f64,
    pub ai_presence: AiPresence,
    /// Owning competitor, resolved by lookup.
    pub competitor: CompetitorId,
}

impl KeywordRecord {
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        position: u32,
        traffic_share: f64,
        ai_presence: AiPresence,
        competitor: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            position,
            traffic_share,
            ai_presence,
            competitor: CompetitorId::new(competitor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Keyword,
    Position,
    TrafficShare,
    AiPresence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Column sort state of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for KeywordSortState {
    fn default() -> Self {
        Self {
            key: SortKey::TrafficShare,
            direction: SortDirection::Desc,
        }
    }
}

impl KeywordSortState {
    /// Header click: the same key flips direction, a new key starts descending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Desc;
        }
    }

    #[must_use]
    pub fn apply(self, records: &[KeywordRecord]) -> Vec<KeywordRecord> {
        sort_keywords(records, self.key, self.direction)
    }
}

/// Returns a stably sorted copy; equal keys keep their input order in both directions.
#[must_use]
pub fn sort_keywords(
    records: &[KeywordRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<KeywordRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|left, right| {
        let ordering = compare_by_key(left, right, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_key(left: &KeywordRecord, right: &KeywordRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Keyword => compare_case_insensitive(&left.keyword, &right.keyword),
        SortKey::Position => left.position.cmp(&right.position),
        SortKey::TrafficShare => {
            OrderedFloat(left.traffic_share).cmp(&OrderedFloat(right.traffic_share))
        }
        SortKey::AiPresence => left.ai_presence.cmp(&right.ai_presence),
    }
}

fn compare_case_insensitive(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::{AiPresence, KeywordSortState, SortDirection, SortKey, compare_case_insensitive};
    use std::cmp::Ordering;

    #[test]
    fn header_clicks_toggle_then_reset() {
        let mut state = KeywordSortState::default();
        state.select(SortKey::TrafficShare);
        assert_eq!(state.direction, SortDirection::Asc);
        state.select(SortKey::Position);
        assert_eq!(state.key, SortKey::Position);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn keyword_comparison_ignores_case() {
        assert_eq!(compare_case_insensitive("VPN", "vpn"), Ordering::Equal);
        assert_eq!(compare_case_insensitive("Zero", "apple"), Ordering::Greater);
    }

    #[test]
    fn presence_parses_and_orders() {
        let high: AiPresence = "High".parse().expect("high");
        assert!(high > AiPresence::Medium);
        assert!("high".parse::<AiPresence>().is_err());
    }
}
