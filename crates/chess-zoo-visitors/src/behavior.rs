//! The visitor behaviour state machine.
//!
//! One call to [`update_visitor`] evaluates a single visitor, in priority
//! order:
//!
//! 1. An expired comment is cleared, and a commenting visitor goes back to
//!    observing.
//! 2. A walking visitor takes its next step, every tick, regardless of its
//!    state timer.
//! 3. Anything else waits until its state timer is reached.
//! 4. The current state's transition runs.
//!
//! The machine writes only to the visitor it is given. Pieces, walls and
//! other visitors are read through a [`CrowdView`] taken before the pass.

use crate::comments::comment_for;
use crate::crowd::CrowdView;
use crate::path::find_path;
use crate::visitor::{Visitor, VisitorState};
use chess_zoo_core::cell::{Cell, NEIGHBOR_STEPS};
use chess_zoo_core::fixed::{Fixed64, Millis};
use chess_zoo_core::id::VisitorId;
use chess_zoo_core::occupancy::Occupancy;
use chess_zoo_core::rng::SimRng;
use tracing::{debug, trace};

/// Pieces closer than this (Euclidean, in cells) attract an idle visitor.
pub const TARGETING_RANGE: i32 = 15;

/// Comfortable watching distance. A target farther than 1.5 times this is
/// considered lost.
pub const VIEWING_DISTANCE: i64 = 5;

/// Half-width of the square searched for viewing spots around a target.
pub const VIEWING_SPOT_RADIUS: i32 = 3;

pub const MIN_STATE_DURATION_MS: Millis = 2_000;
pub const MAX_STATE_DURATION_MS: Millis = 10_000;

/// How long a comment stays visible.
pub const COMMENT_DURATION_MS: Millis = 3_000;

/// Extra time a commenting visitor lingers after its comment expires.
pub const COMMENT_LINGER_MS: Millis = 200;

/// Chance per observing evaluation of saying something (0.3).
pub const COMMENT_CHANCE: Fixed64 = Fixed64::from_bits(1_288_490_189);

const LOST_TARGET_DELAY_MS: (Millis, Millis) = (500, 1_500);
const BLOCKED_PATH_DELAY_MS: (Millis, Millis) = (2_000, 5_000);
const IDLE_RECHECK_MS: (Millis, Millis) = (1_000, 2_000);
const UNKNOWN_STATE_DELAY_MS: Millis = 1_000;

/// Advance one visitor by one behaviour tick.
pub fn update_visitor(
    id: VisitorId,
    visitor: &mut Visitor,
    view: &CrowdView<'_>,
    now: Millis,
    rng: &mut SimRng,
) {
    expire_comment(visitor, now, rng);

    if visitor.state.is_moving() {
        follow_path(id, visitor, view, now, rng);
        return;
    }

    if now < visitor.state_timer {
        return;
    }

    match visitor.state {
        VisitorState::Idle | VisitorState::SelectingTarget => {
            select_target(visitor, view, now, rng)
        }
        VisitorState::Observing => observe(visitor, view, now, rng),
        VisitorState::Commenting => {
            visitor.clear_comment();
            dwell(visitor, VisitorState::Observing, now, rng);
        }
        VisitorState::Unknown => {
            visitor.state = VisitorState::Idle;
            visitor.state_timer = now + UNKNOWN_STATE_DELAY_MS;
        }
        VisitorState::MovingToTarget | VisitorState::Wandering => {}
    }
}

/// Whether a piece at `piece` has drifted out of watching range of `here`.
pub fn target_lost(here: Cell, piece: Cell) -> bool {
    // distance > 1.5 * VIEWING_DISTANCE, compared squared in integers
    4 * here.distance_sq(&piece) > 9 * VIEWING_DISTANCE * VIEWING_DISTANCE
}

/// Unoccupied cells within [`VIEWING_SPOT_RADIUS`] of `center`, excluding
/// `center` and its eight neighbours. Row-major order.
pub fn viewing_spots(center: Cell, view: &impl Occupancy) -> Vec<Cell> {
    let r = VIEWING_SPOT_RADIUS;
    let mut spots = Vec::new();
    for dr in -r..=r {
        for dc in -r..=r {
            if dr.abs() <= 1 && dc.abs() <= 1 {
                continue;
            }
            let Some(spot) = center.offset(dr, dc) else {
                continue;
            };
            if spot.in_bounds() && !view.is_occupied(spot, None) {
                spots.push(spot);
            }
        }
    }
    spots
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

fn dwell(visitor: &mut Visitor, state: VisitorState, now: Millis, rng: &mut SimRng) {
    visitor.wait(state, now, MIN_STATE_DURATION_MS, MAX_STATE_DURATION_MS, rng);
}

fn expire_comment(visitor: &mut Visitor, now: Millis, rng: &mut SimRng) {
    let Some(expires) = visitor.comment_timer else {
        return;
    };
    if now < expires {
        return;
    }
    visitor.clear_comment();
    if visitor.state == VisitorState::Commenting {
        dwell(visitor, VisitorState::Observing, now, rng);
    }
}

fn follow_path(
    id: VisitorId,
    visitor: &mut Visitor,
    view: &CrowdView<'_>,
    now: Millis,
    rng: &mut SimRng,
) {
    let Some(&next) = visitor.path.front() else {
        finish_walk(visitor, now, rng);
        return;
    };

    if view.is_occupied(next, Some(id)) {
        trace!(?id, %next, "path blocked, giving up");
        visitor.clear_path();
        let (lo, hi) = BLOCKED_PATH_DELAY_MS;
        visitor.wait(VisitorState::Idle, now, lo, hi, rng);
        return;
    }

    trace!(?id, from = %visitor.cell, to = %next, "visitor step");
    visitor.cell = next;
    visitor.path.pop_front();
    if visitor.path.is_empty() {
        finish_walk(visitor, now, rng);
    }
}

/// Arrival: a target walk turns into watching, a wander into idling.
fn finish_walk(visitor: &mut Visitor, now: Millis, rng: &mut SimRng) {
    let next = match visitor.state {
        VisitorState::MovingToTarget => VisitorState::Observing,
        _ => VisitorState::Idle,
    };
    visitor.clear_path();
    dwell(visitor, next, now, rng);
}

fn select_target(visitor: &mut Visitor, view: &CrowdView<'_>, now: Millis, rng: &mut SimRng) {
    let here = visitor.cell;
    let board = view.board();
    let nearby = board.pieces_near(here, TARGETING_RANGE);

    if let Some(&target) = rng.pick(&nearby) {
        visitor.target_piece = Some(target);
        if let Some(piece) = board.piece(target) {
            let spots = viewing_spots(piece.cell, view);
            match rng.pick(&spots) {
                Some(&spot) => match find_path(here, spot, view) {
                    Some(path) if !path.is_empty() => {
                        debug!(
                            %here,
                            %spot,
                            piece = %piece.symbol(),
                            steps = path.len(),
                            "visitor heading to piece"
                        );
                        visitor.begin_walk(VisitorState::MovingToTarget, spot, path);
                        return;
                    }
                    _ => debug!(%here, %spot, "no path to viewing spot"),
                },
                None => debug!(piece = %piece.cell, "no free viewing spot"),
            }
        }
        visitor.target_piece = None;
    }

    wander(visitor, view, now, rng);
}

fn wander(visitor: &mut Visitor, view: &CrowdView<'_>, now: Millis, rng: &mut SimRng) {
    let here = visitor.cell;
    let free: Vec<Cell> = here
        .neighbors(&NEIGHBOR_STEPS)
        .filter(|&cell| !view.is_occupied(cell, None))
        .collect();

    if let Some(&goal) = rng.pick(&free) {
        if let Some(path) = find_path(here, goal, view).filter(|p| !p.is_empty()) {
            visitor.begin_walk(VisitorState::Wandering, goal, path);
            return;
        }
    }

    let (lo, hi) = IDLE_RECHECK_MS;
    visitor.wait(VisitorState::Idle, now, lo, hi, rng);
}

fn observe(visitor: &mut Visitor, view: &CrowdView<'_>, now: Millis, rng: &mut SimRng) {
    let target = visitor
        .target_piece
        .and_then(|id| view.board().piece(id))
        .filter(|piece| !target_lost(visitor.cell, piece.cell));

    let Some(piece) = target else {
        debug!(here = %visitor.cell, "target piece lost");
        visitor.target_piece = None;
        let (lo, hi) = LOST_TARGET_DELAY_MS;
        visitor.wait(VisitorState::Idle, now, lo, hi, rng);
        return;
    };

    if rng.chance(COMMENT_CHANCE) {
        visitor.comment = Some(comment_for(piece.kind, rng).to_owned());
        visitor.comment_timer = Some(now + COMMENT_DURATION_MS);
        visitor.state = VisitorState::Commenting;
        visitor.state_timer = now + COMMENT_DURATION_MS + COMMENT_LINGER_MS;
    } else {
        dwell(visitor, VisitorState::Observing, now, rng);
    }
}
