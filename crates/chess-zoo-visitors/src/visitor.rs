//! The visitor record: where a spectator stands, what it is doing, and how
//! it looks.

use chess_zoo_core::cell::Cell;
use chess_zoo_core::fixed::{Fixed32, Fixed64, Millis, f64_to_fixed32, fixed32_to_f64};
use chess_zoo_core::id::PieceId;
use chess_zoo_core::rng::SimRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Chance that a spawned visitor is a child (0.2).
pub const CHILD_CHANCE: Fixed64 = Fixed64::from_bits(858_993_459);

/// Upper bound on the random delay before a new visitor first acts.
pub const SPAWN_DELAY_MS: Millis = 1_000;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitorState {
    Idle,
    SelectingTarget,
    MovingToTarget,
    Observing,
    Commenting,
    Wandering,
    /// A label this build does not recognise. Reset to `Idle` on the next
    /// evaluation.
    #[serde(other)]
    Unknown,
}

impl VisitorState {
    /// Path-following states advance every behaviour tick, ignoring the
    /// state timer.
    pub fn is_moving(self) -> bool {
        matches!(self, VisitorState::MovingToTarget | VisitorState::Wandering)
    }
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// Stick-figure proportions in cell units. Only the renderer reads these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub is_child: bool,
    pub head_radius: Fixed32,
    pub body_length: Fixed32,
    pub leg_length: Fixed32,
    pub arm_length: Fixed32,
}

/// `(base, spread)` pairs: a proportion is `base + spread * u`, `u` in [0, 1).
struct Proportions {
    head: (f64, f64),
    body: (f64, f64),
    leg: (f64, f64),
    arm: (f64, f64),
}

const ADULT: Proportions = Proportions {
    head: (0.15, 0.02),
    body: (0.4, 0.2),
    leg: (0.3, 0.15),
    arm: (0.25, 0.1),
};

const CHILD: Proportions = Proportions {
    head: (0.12, 0.06),
    body: (0.3, 0.15),
    leg: (0.2, 0.1),
    arm: (0.18, 0.08),
};

impl Appearance {
    pub fn random(rng: &mut SimRng) -> Self {
        let is_child = rng.chance(CHILD_CHANCE);
        let p = if is_child { &CHILD } else { &ADULT };
        let mut draw = |(base, spread): (f64, f64)| {
            f64_to_fixed32(base) + f64_to_fixed32(spread) * Fixed32::from_num(rng.unit())
        };
        Self {
            is_child,
            head_radius: draw(p.head),
            body_length: draw(p.body),
            leg_length: draw(p.leg),
            arm_length: draw(p.arm),
        }
    }

    /// Overall figure height in cell units, for display.
    pub fn height(&self) -> f64 {
        fixed32_to_f64(self.head_radius * 2 + self.body_length + self.leg_length)
    }
}

// ---------------------------------------------------------------------------
// Visitor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub cell: Cell,
    pub state: VisitorState,
    /// Piece being approached or watched.
    pub target_piece: Option<PieceId>,
    /// Final cell of the current walk.
    pub movement_target: Option<Cell>,
    /// Remaining steps of the current walk, next step first.
    pub path: VecDeque<Cell>,
    /// Absolute time of the next evaluation. Ignored while moving.
    pub state_timer: Millis,
    /// Absolute time the current comment disappears.
    pub comment_timer: Option<Millis>,
    pub comment: Option<String>,
    pub appearance: Appearance,
}

impl Visitor {
    /// A fresh idle visitor with a random appearance, acting within the
    /// next second.
    pub fn spawn(cell: Cell, now: Millis, rng: &mut SimRng) -> Self {
        let appearance = Appearance::random(rng);
        Self {
            cell,
            state: VisitorState::Idle,
            target_piece: None,
            movement_target: None,
            path: VecDeque::new(),
            state_timer: now + rng.below(SPAWN_DELAY_MS),
            comment_timer: None,
            comment: None,
            appearance,
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Forget the current walk.
    pub fn clear_path(&mut self) {
        self.movement_target = None;
        self.path.clear();
    }

    /// Start walking `path` towards `target`.
    pub fn begin_walk(&mut self, state: VisitorState, target: Cell, path: Vec<Cell>) {
        self.state = state;
        self.movement_target = Some(target);
        self.path = path.into();
    }

    /// Switch to `state` and re-evaluate in `[now + lo, now + hi)`.
    pub fn wait(
        &mut self,
        state: VisitorState,
        now: Millis,
        lo: Millis,
        hi: Millis,
        rng: &mut SimRng,
    ) {
        self.state = state;
        self.state_timer = now + rng.range(lo, hi);
    }

    pub fn clear_comment(&mut self) {
        self.comment = None;
        self.comment_timer = None;
    }
}
