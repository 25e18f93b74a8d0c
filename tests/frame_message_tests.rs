use serde_json::json;
use serp_deck::api::{DeckConfig, PresentationController};
use serp_deck::interaction::{FrameMessage, NavKey, OriginAllowList, TRUSTED_HOST_ORIGINS};

fn deck() -> PresentationController {
    PresentationController::new(&DeckConfig::default().with_start_slide(3)).expect("deck")
}

#[test]
fn trusted_origin_drives_navigation() {
    let mut deck = deck();
    for origin in TRUSTED_HOST_ORIGINS {
        let before = deck.current_index();
        let message = serde_json::to_value(FrameMessage::key_nav(NavKey::ArrowRight))
            .expect("message json");
        assert!(deck.handle_frame_message(origin, &message));
        assert_eq!(deck.current_index(), before + 1);
    }
    assert!(deck.handle_frame_message(
        TRUSTED_HOST_ORIGINS[0],
        &json!({ "type": "KEY_NAV", "key": "ArrowLeft" })
    ));
    assert_eq!(deck.current_index(), 5);
}

#[test]
fn untrusted_origin_is_ignored() {
    let mut deck = deck();
    let message = json!({ "type": "KEY_NAV", "key": "ArrowRight" });
    for origin in [
        "https://evil.example",
        "http://www.leadwalnut.com",
        "https://www.leadwalnut.com/",
        "https://lwstaging.webflow.io.attacker.net",
        "",
        "null",
    ] {
        assert!(!deck.handle_frame_message(origin, &message), "{origin}");
    }
    assert_eq!(deck.current_index(), 3);
}

#[test]
fn malformed_payloads_from_trusted_origin_are_ignored() {
    let mut deck = deck();
    let origin = TRUSTED_HOST_ORIGINS[1];
    for payload in [
        json!(null),
        json!(42),
        json!({ "type": "key_nav", "key": "ArrowRight" }),
        json!({ "type": "KEY_NAV" }),
        json!({ "type": "KEY_NAV", "key": "ArrowUp" }),
        json!({ "key": "ArrowRight" }),
    ] {
        assert!(!deck.handle_frame_message(origin, &payload), "{payload}");
    }
    assert_eq!(deck.current_index(), 3);
}

#[test]
fn custom_allow_list_replaces_the_default() {
    let config = DeckConfig::default()
        .with_allowed_origins(OriginAllowList::new(["https://host.example"]));
    let mut deck = PresentationController::new(&config).expect("deck");
    let message = json!({ "type": "KEY_NAV", "key": "ArrowRight" });
    assert!(!deck.handle_frame_message(TRUSTED_HOST_ORIGINS[2], &message));
    assert!(deck.handle_frame_message("https://host.example", &message));
}
