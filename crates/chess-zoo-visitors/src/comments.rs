//! Phrases visitors say about the pieces they watch.

use chess_zoo_core::piece::PieceKind;
use chess_zoo_core::rng::SimRng;

const PAWN: [&str; 8] = [
    "Look, a pawn!",
    "So many pawns.",
    "A humble pawn.",
    "Marching forward!",
    "One step at a time.",
    "The brave little pawn.",
    "Pawn power!",
    "The foundation piece.",
];

const KNIGHT: [&str; 8] = [
    "A knight!",
    "Graceful jump!",
    "Cool horse piece!",
    "L-shape moves.",
    "Leaping over others!",
    "The tricky knight.",
    "What an interesting path!",
    "A noble steed.",
];

const BISHOP: [&str; 8] = [
    "The bishop.",
    "Moving diagonally.",
    "Nice bishop!",
    "Looks pointy.",
    "Sliding across colors.",
    "The strategic bishop.",
    "Long range striker.",
    "Diagonal master.",
];

const ROOK: [&str; 8] = [
    "It's a rook!",
    "Straight lines only.",
    "Like a castle.",
    "Powerful rook!",
    "Standing tall!",
    "The mighty fortress.",
    "Guarding the ranks.",
    "Such straight moves!",
];

const QUEEN: [&str; 8] = [
    "The Queen!",
    "Wow, the Queen!",
    "Most powerful piece!",
    "Look at her go!",
    "So majestic!",
    "The mighty queen.",
    "Ruler of the board!",
    "What amazing moves!",
];

const KING: [&str; 8] = [
    "The King!",
    "Protect the King!",
    "Regal looking.",
    "Slow and steady.",
    "The royal piece!",
    "Most important piece.",
    "Lead your army!",
    "The noble king.",
];

const GENERIC: [&str; 3] = ["Interesting piece...", "What is that?", "Look!"];

/// Every phrase a visitor may say about `kind`.
pub fn phrases(kind: PieceKind) -> &'static [&'static str] {
    match kind {
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
        PieceKind::Unknown => &GENERIC,
    }
}

/// A uniformly random phrase about `kind`.
pub fn comment_for(kind: PieceKind, rng: &mut SimRng) -> &'static str {
    let list = phrases(kind);
    rng.pick(list).copied().unwrap_or(GENERIC[0])
}
