//! Navigation state and the input surfaces that drive it.

pub mod frame_message;
pub mod listeners;
pub mod navigation;

pub use frame_message::{FrameMessage, NavKey, OriginAllowList, TRUSTED_HOST_ORIGINS};
pub use listeners::{EventHub, HostEvent, ListenerGuard, ListenerId};
pub use navigation::{SlideCursor, TabSet};

/// Applies a navigation key to `cursor`, returning whether it moved.
pub fn apply_nav_key(cursor: &mut SlideCursor, key: NavKey) -> bool {
    match key {
        NavKey::ArrowRight => cursor.next(),
        NavKey::ArrowLeft => cursor.previous(),
    }
}
