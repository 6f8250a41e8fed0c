//! Codec round-trip conformance over the full recognized address table.
//!
//! Every address the routing table knows must survive an encode/decode
//! round trip with the argument shapes the control surface actually sends.

use oscpad_core::domain::routing::route;
use oscpad_core::protocol::codec::{decode_message, encode_message};
use oscpad_core::protocol::message::{OscArg, OscMessage};

/// Every recognized address, paired with representative arguments.
fn recognized_messages() -> Vec<OscMessage> {
    let bare = [
        "/session/cmd/arrange",
        "/session/cmd/toggle",
        "/session/cmd/pause",
        "/session/zoom/in",
        "/session/zoom/out",
        "/clip/cmd/sel/left",
        "/clip/cmd/sel/right",
        "/clip/cmd/sel/down",
        "/clip/cmd/sel/up",
        "/clip/cmd/cut",
        "/clip/cmd/copy",
        "/clip/cmd/paste",
        "/pad/mouse/pos/center",
        "/pad/mouse/pos/song",
        "/session/cmd/cueing",
        "/clip/cmd/legato",
        "/pad/mouse/click/left/1",
        "/pad/mouse/click/left/2",
        "/pad/mouse/click/right/1",
        "/pad/mouse/click/right/2",
    ];

    let mut messages: Vec<OscMessage> = bare
        .iter()
        .map(|addr| OscMessage::new(*addr, vec![]))
        .collect();

    messages.push(OscMessage::new(
        "/pad/mouse/pos/touch",
        vec![OscArg::Float(1.0)],
    ));
    messages.push(OscMessage::new(
        "/pad/mouse/pos/xy",
        vec![OscArg::Float(0.5), OscArg::Float(0.5)],
    ));

    for direction in ["left", "right", "up", "down"] {
        for tier in 1..=4 {
            messages.push(OscMessage::new(
                format!("/pad/mouse/scroll/{direction}/{tier}"),
                vec![],
            ));
        }
    }

    messages
}

#[test]
fn test_every_recognized_address_round_trips() {
    for msg in recognized_messages() {
        let bytes = encode_message(&msg);
        let decoded = decode_message(&bytes).expect("decode failed");
        assert_eq!(decoded, msg, "{}", msg.address);
    }
}

#[test]
fn test_every_recognized_address_resolves_in_the_routing_table() {
    for msg in recognized_messages() {
        assert!(
            route(&msg.address).is_some(),
            "{} must have a route entry",
            msg.address
        );
    }
}

#[test]
fn test_recognized_address_count_is_exhaustive() {
    // 12 key chords + 3 pointer ops + 3 virtual buttons + 4 clicks +
    // 16 scroll tiers = 38 recognized addresses.
    assert_eq!(recognized_messages().len(), 38);
}
