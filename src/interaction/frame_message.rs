//! Cross-frame control protocol for decks embedded in a hosting page.
//!
//! The host posts `{ "type": "KEY_NAV", "key": "ArrowRight" | "ArrowLeft" }`.
//! Messages are honored only when their origin is on the allow-list; anything
//! else is dropped silently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Navigation keys understood by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value; other keys are not navigation.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowLeft" => Some(Self::ArrowLeft),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowRight => "ArrowRight",
            Self::ArrowLeft => "ArrowLeft",
        }
    }
}

/// Payload posted by the hosting frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameMessage {
    #[serde(rename = "KEY_NAV")]
    KeyNav { key: String },
}

impl FrameMessage {
    #[must_use]
    pub fn key_nav(key: NavKey) -> Self {
        Self::KeyNav {
            key: key.as_str().to_owned(),
        }
    }

    /// Parses arbitrary message data. Unknown shapes yield `None`.
    #[must_use]
    pub fn parse(data: &Value) -> Option<Self> {
        Self::deserialize(data).ok()
    }

    /// Navigation key carried by the message, if any.
    #[must_use]
    pub fn nav_key(&self) -> Option<NavKey> {
        match self {
            Self::KeyNav { key } => NavKey::from_key(key),
        }
    }
}

/// Hosting origins the deck accepts messages from.
pub const TRUSTED_HOST_ORIGINS: [&str; 3] = [
    "https://competition-metrics-fortinet-jan202.vercel.app",
    "https://lwstaging.webflow.io",
    "https://www.leadwalnut.com",
];

/// Exact-match origin filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginAllowList(Vec<String>);

impl OriginAllowList {
    #[must_use]
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(origins.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn allows(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    #[must_use]
    pub fn origins(&self) -> &[String] {
        &self.0
    }

    /// Navigation key for a message from `origin`, or `None` when the origin is
    /// untrusted or the payload is not a recognised `KEY_NAV` message.
    #[must_use]
    pub fn accept(&self, origin: &str, data: &Value) -> Option<NavKey> {
        if !self.allows(origin) {
            return None;
        }
        FrameMessage::parse(data)?.nav_key()
    }
}

impl Default for OriginAllowList {
    fn default() -> Self {
        Self::new(TRUSTED_HOST_ORIGINS)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameMessage, NavKey, OriginAllowList};
    use serde_json::json;

    #[test]
    fn key_nav_round_trips_through_json() {
        let message = FrameMessage::key_nav(NavKey::ArrowLeft);
        let value = serde_json::to_value(&message).expect("to value");
        assert_eq!(value, json!({ "type": "KEY_NAV", "key": "ArrowLeft" }));
        assert_eq!(FrameMessage::parse(&value), Some(message));
    }

    #[test]
    fn origin_match_is_exact() {
        let list = OriginAllowList::default();
        assert!(list.allows("https://www.leadwalnut.com"));
        assert!(!list.allows("https://www.leadwalnut.com.evil.example"));
        assert!(!list.allows("http://www.leadwalnut.com"));
    }

    #[test]
    fn unrelated_payloads_are_ignored() {
        let list = OriginAllowList::default();
        let origin = "https://lwstaging.webflow.io";
        assert_eq!(list.accept(origin, &json!({ "type": "RESIZE" })), None);
        assert_eq!(list.accept(origin, &json!("ArrowRight")), None);
        assert_eq!(
            list.accept(origin, &json!({ "type": "KEY_NAV", "key": "Enter" })),
            None
        );
        assert_eq!(
            list.accept(origin, &json!({ "type": "KEY_NAV", "key": "ArrowRight" })),
            Some(NavKey::ArrowRight)
        );
    }
}
