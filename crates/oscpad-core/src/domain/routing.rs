//! The address routing table: one exact-match lookup per message.
//!
//! Every control message the surface can send is listed here, grouped by
//! effect type, as a pure mapping from address string to a tagged action
//! descriptor.  The dispatcher evaluates the descriptor; this module never
//! performs side effects, which keeps the table independently testable.
//!
//! Lookup is exact-match and case-sensitive with no wildcards.  An address
//! with no entry is `None`: unrecognized messages are silently ignored so
//! that new or unused controls on the surface never crash the bridge.

use crate::domain::keychord::{keycode, KeyChord, Modifiers};
use crate::domain::scroll::{ScrollDirection, ScrollStep, ScrollTier};

/// Direct click actions.
///
/// `RightDouble` is routed even though the executor has no primitive for
/// it: the dispatcher reports the documented limitation instead of
/// approximating, and the distinction from an unknown address is
/// intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    LeftSingle,
    LeftDouble,
    RightSingle,
    RightDouble,
}

/// Pointer state-machine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRoute {
    /// Touch-phase message: argument `1.0` begins a gesture, anything else
    /// ends it and commits the pending position.
    Touch,
    /// Normalized `(x, y)` position update while dragging.
    Position,
    /// Immediate commit of the pad-center position.
    Center,
}

/// Fixed-coordinate virtual buttons.  Invoking one is "move there, then
/// click"; the coordinates come from configuration and no pointer state is
/// read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    SongLaunch,
    Cue,
    Legato,
}

/// A tagged action descriptor produced by the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Key(KeyChord),
    Click(ClickKind),
    Scroll(ScrollStep),
    Pointer(PointerRoute),
    Button(PadButton),
}

/// Resolves an address to its action descriptor, or `None` for an unknown
/// address.
pub fn route(address: &str) -> Option<Route> {
    const SHIFT: Modifiers = Modifiers(Modifiers::SHIFT);
    const COMMAND: Modifiers = Modifiers(Modifiers::COMMAND);

    let route = match address {
        // ── Window and transport key chords ──────────────────────────────
        "/session/cmd/arrange" => Route::Key(KeyChord::key_code(keycode::TAB, Modifiers::NONE)),
        "/session/cmd/toggle" => Route::Key(KeyChord::key_code(keycode::TAB, SHIFT)),
        "/session/cmd/pause" => Route::Key(KeyChord::key_code(keycode::SPACE, SHIFT)),

        // ── Zoom ─────────────────────────────────────────────────────────
        "/session/zoom/in" => Route::Key(KeyChord::keystroke('+', Modifiers::NONE)),
        "/session/zoom/out" => Route::Key(KeyChord::keystroke('-', Modifiers::NONE)),

        // ── Clip-slot selection marking ──────────────────────────────────
        "/clip/cmd/sel/left" => Route::Key(KeyChord::key_code(keycode::LEFT_ARROW, SHIFT)),
        "/clip/cmd/sel/right" => Route::Key(KeyChord::key_code(keycode::RIGHT_ARROW, SHIFT)),
        "/clip/cmd/sel/down" => Route::Key(KeyChord::key_code(keycode::DOWN_ARROW, SHIFT)),
        "/clip/cmd/sel/up" => Route::Key(KeyChord::key_code(keycode::UP_ARROW, SHIFT)),

        // ── Clipboard ────────────────────────────────────────────────────
        "/clip/cmd/cut" => Route::Key(KeyChord::keystroke('x', COMMAND)),
        "/clip/cmd/copy" => Route::Key(KeyChord::keystroke('c', COMMAND)),
        "/clip/cmd/paste" => Route::Key(KeyChord::keystroke('v', COMMAND)),

        // ── Pointer state machine ────────────────────────────────────────
        "/pad/mouse/pos/touch" => Route::Pointer(PointerRoute::Touch),
        "/pad/mouse/pos/xy" => Route::Pointer(PointerRoute::Position),
        "/pad/mouse/pos/center" => Route::Pointer(PointerRoute::Center),

        // ── Virtual buttons ──────────────────────────────────────────────
        "/pad/mouse/pos/song" => Route::Button(PadButton::SongLaunch),
        "/session/cmd/cueing" => Route::Button(PadButton::Cue),
        "/clip/cmd/legato" => Route::Button(PadButton::Legato),

        // ── Direct clicks ────────────────────────────────────────────────
        "/pad/mouse/click/left/1" => Route::Click(ClickKind::LeftSingle),
        "/pad/mouse/click/left/2" => Route::Click(ClickKind::LeftDouble),
        "/pad/mouse/click/right/1" => Route::Click(ClickKind::RightSingle),
        "/pad/mouse/click/right/2" => Route::Click(ClickKind::RightDouble),

        // ── Scroll tiers ─────────────────────────────────────────────────
        other => return route_scroll(other),
    };
    Some(route)
}

/// Resolves the 16 `/pad/mouse/scroll/<direction>/<tier>` addresses.
///
/// The direction and tier components parse individually, so the semantics
/// stay exact-match: `/pad/mouse/scroll/up/5` or `/pad/mouse/scroll/x/1`
/// resolve to `None` like any other unknown address.
fn route_scroll(address: &str) -> Option<Route> {
    let rest = address.strip_prefix("/pad/mouse/scroll/")?;
    let (direction, tier) = rest.split_once('/')?;
    let direction = ScrollDirection::from_address_component(direction)?;
    let tier = ScrollTier::from_address_component(tier)?;
    Some(Route::Scroll(ScrollStep::new(direction, tier)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Key chords ────────────────────────────────────────────────────────────

    #[test]
    fn test_arrange_toggle_and_pause_key_codes() {
        assert_eq!(
            route("/session/cmd/arrange"),
            Some(Route::Key(KeyChord::key_code(48, Modifiers::NONE)))
        );
        assert_eq!(
            route("/session/cmd/toggle"),
            Some(Route::Key(KeyChord::key_code(48, Modifiers(Modifiers::SHIFT))))
        );
        assert_eq!(
            route("/session/cmd/pause"),
            Some(Route::Key(KeyChord::key_code(49, Modifiers(Modifiers::SHIFT))))
        );
    }

    #[test]
    fn test_zoom_addresses_are_bare_keystrokes() {
        assert_eq!(
            route("/session/zoom/in"),
            Some(Route::Key(KeyChord::keystroke('+', Modifiers::NONE)))
        );
        assert_eq!(
            route("/session/zoom/out"),
            Some(Route::Key(KeyChord::keystroke('-', Modifiers::NONE)))
        );
    }

    #[test]
    fn test_selection_marking_is_shift_arrows() {
        for (addr, code) in [
            ("/clip/cmd/sel/left", 123u16),
            ("/clip/cmd/sel/right", 124),
            ("/clip/cmd/sel/down", 125),
            ("/clip/cmd/sel/up", 126),
        ] {
            assert_eq!(
                route(addr),
                Some(Route::Key(KeyChord::key_code(code, Modifiers(Modifiers::SHIFT)))),
                "{addr}"
            );
        }
    }

    #[test]
    fn test_clipboard_chords_hold_command() {
        let command = Modifiers(Modifiers::COMMAND);
        assert_eq!(
            route("/clip/cmd/cut"),
            Some(Route::Key(KeyChord::keystroke('x', command)))
        );
        assert_eq!(
            route("/clip/cmd/copy"),
            Some(Route::Key(KeyChord::keystroke('c', command)))
        );
        assert_eq!(
            route("/clip/cmd/paste"),
            Some(Route::Key(KeyChord::keystroke('v', command)))
        );
    }

    // ── Pointer and virtual buttons ───────────────────────────────────────────

    #[test]
    fn test_pointer_addresses_route_to_state_machine() {
        assert_eq!(
            route("/pad/mouse/pos/touch"),
            Some(Route::Pointer(PointerRoute::Touch))
        );
        assert_eq!(
            route("/pad/mouse/pos/xy"),
            Some(Route::Pointer(PointerRoute::Position))
        );
        assert_eq!(
            route("/pad/mouse/pos/center"),
            Some(Route::Pointer(PointerRoute::Center))
        );
    }

    #[test]
    fn test_virtual_button_addresses() {
        assert_eq!(
            route("/pad/mouse/pos/song"),
            Some(Route::Button(PadButton::SongLaunch))
        );
        assert_eq!(route("/session/cmd/cueing"), Some(Route::Button(PadButton::Cue)));
        assert_eq!(route("/clip/cmd/legato"), Some(Route::Button(PadButton::Legato)));
    }

    // ── Clicks ────────────────────────────────────────────────────────────────

    #[test]
    fn test_click_addresses_including_unsupported_right_double() {
        assert_eq!(
            route("/pad/mouse/click/left/1"),
            Some(Route::Click(ClickKind::LeftSingle))
        );
        assert_eq!(
            route("/pad/mouse/click/left/2"),
            Some(Route::Click(ClickKind::LeftDouble))
        );
        assert_eq!(
            route("/pad/mouse/click/right/1"),
            Some(Route::Click(ClickKind::RightSingle))
        );
        // Routed, not unknown: the dispatcher reports the limitation.
        assert_eq!(
            route("/pad/mouse/click/right/2"),
            Some(Route::Click(ClickKind::RightDouble))
        );
    }

    // ── Scroll ────────────────────────────────────────────────────────────────

    #[test]
    fn test_all_sixteen_scroll_addresses_resolve() {
        for direction in ["left", "right", "up", "down"] {
            for tier in ["1", "2", "3", "4"] {
                let addr = format!("/pad/mouse/scroll/{direction}/{tier}");
                assert!(
                    matches!(route(&addr), Some(Route::Scroll(_))),
                    "{addr} must resolve"
                );
            }
        }
    }

    #[test]
    fn test_scroll_descriptor_carries_direction_and_tier() {
        assert_eq!(
            route("/pad/mouse/scroll/left/3"),
            Some(Route::Scroll(ScrollStep::new(
                ScrollDirection::Left,
                ScrollTier::Three
            )))
        );
        assert_eq!(
            route("/pad/mouse/scroll/down/1"),
            Some(Route::Scroll(ScrollStep::new(
                ScrollDirection::Down,
                ScrollTier::One
            )))
        );
    }

    #[test]
    fn test_out_of_range_scroll_tier_is_unknown() {
        assert_eq!(route("/pad/mouse/scroll/up/5"), None);
        assert_eq!(route("/pad/mouse/scroll/up/0"), None);
        assert_eq!(route("/pad/mouse/scroll/diagonal/1"), None);
    }

    // ── Unknown addresses ─────────────────────────────────────────────────────

    #[test]
    fn test_unknown_addresses_resolve_to_none() {
        assert_eq!(route("/nonexistent/path"), None);
        assert_eq!(route(""), None);
        assert_eq!(route("/pad/mouse"), None);
        assert_eq!(route("/pad/mouse/pos/xy/extra"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(route("/Session/Cmd/Arrange"), None);
        assert_eq!(route("/PAD/MOUSE/POS/XY"), None);
    }
}
