//! Scroll magnitude resolution.
//!
//! The control surface exposes four scroll buttons per direction.  Each
//! button is a *tier* — a discrete magnitude class scaling the configured
//! base step by `{1, 4, 16, 64}`.  Sign follows the wheel convention of the
//! executor: left and up are positive, right and down are negative.
//!
//! Horizontal scrolling has no dedicated primitive on the executor; it is
//! synthesized as "hold shift + vertical scroll".  [`ScrollStep`] only
//! flags a step as horizontal; the dispatcher owns the bracketing.

use serde::{Deserialize, Serialize};

/// Discrete scroll magnitude class, tiers 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollTier {
    One,
    Two,
    Three,
    Four,
}

impl ScrollTier {
    /// The base-step multiplier for this tier.
    pub fn multiplier(&self) -> i32 {
        match self {
            ScrollTier::One => 1,
            ScrollTier::Two => 4,
            ScrollTier::Three => 16,
            ScrollTier::Four => 64,
        }
    }

    /// Parses the trailing tier component of a scroll address (`"1"`–`"4"`).
    pub fn from_address_component(s: &str) -> Option<Self> {
        match s {
            "1" => Some(ScrollTier::One),
            "2" => Some(ScrollTier::Two),
            "3" => Some(ScrollTier::Three),
            "4" => Some(ScrollTier::Four),
            _ => None,
        }
    }
}

/// Scroll direction as named by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ScrollDirection {
    /// Sign convention: left/up positive, right/down negative.
    pub fn sign(&self) -> i32 {
        match self {
            ScrollDirection::Left | ScrollDirection::Up => 1,
            ScrollDirection::Right | ScrollDirection::Down => -1,
        }
    }

    /// Returns `true` for the shift-synthesized horizontal directions.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, ScrollDirection::Left | ScrollDirection::Right)
    }

    /// Parses the direction component of a scroll address.
    pub fn from_address_component(s: &str) -> Option<Self> {
        match s {
            "left" => Some(ScrollDirection::Left),
            "right" => Some(ScrollDirection::Right),
            "up" => Some(ScrollDirection::Up),
            "down" => Some(ScrollDirection::Down),
            _ => None,
        }
    }
}

/// A resolved scroll action descriptor: direction plus magnitude tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollStep {
    pub direction: ScrollDirection,
    pub tier: ScrollTier,
}

impl ScrollStep {
    pub const fn new(direction: ScrollDirection, tier: ScrollTier) -> Self {
        Self { direction, tier }
    }

    /// The signed scroll amount for the configured base step:
    /// `sign(direction) × base × multiplier(tier)`.
    pub fn amount(&self, base: i32) -> i32 {
        self.direction.sign() * base * self.tier.multiplier()
    }

    /// Whether the executor must hold shift around the scroll call.
    pub fn is_horizontal(&self) -> bool {
        self.direction.is_horizontal()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
