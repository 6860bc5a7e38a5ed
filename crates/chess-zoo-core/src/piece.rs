//! Chess pieces and walls: the inhabitants of the chess layer.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Piece color. Encoded in piece symbols by letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row delta of a pawn step. White marches towards smaller rows.
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row from which a pawn may advance two cells.
    pub fn pawn_home_row(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The movement rule a piece follows.
///
/// `Unknown` absorbs letters this engine does not model. Such pieces occupy
/// their cell but never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    #[serde(other)]
    Unknown,
}

impl PieceKind {
    /// Every kind with a movement rule.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Parse a piece letter, ignoring case.
    pub fn from_letter(letter: char) -> PieceKind {
        match letter.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'P' => PieceKind::Pawn,
            _ => PieceKind::Unknown,
        }
    }

    /// Uppercase letter of this kind; `'?'` for `Unknown`.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
            PieceKind::Unknown => '?',
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A chess piece standing on one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub cell: Cell,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, cell: Cell) -> Self {
        Self { kind, color, cell }
    }

    /// Build a piece from its case-encoded symbol (`'N'` white knight,
    /// `'n'` black knight).
    pub fn from_symbol(symbol: char, cell: Cell) -> Self {
        let color = if symbol.is_ascii_lowercase() {
            Color::Black
        } else {
            Color::White
        };
        Self::new(PieceKind::from_letter(symbol), color, cell)
    }

    /// The case-encoded symbol of this piece.
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// A permanent obstacle. The shape label only matters to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub cell: Cell,
    pub shape: String,
}

impl Wall {
    pub const DEFAULT_SHAPE: &'static str = "wall";

    pub fn new(cell: Cell) -> Self {
        Self::with_shape(cell, Self::DEFAULT_SHAPE)
    }

    pub fn with_shape(cell: Cell, shape: impl Into<String>) -> Self {
        let shape = shape.into();
        let shape = if shape.is_empty() {
            Self::DEFAULT_SHAPE.to_owned()
        } else {
            shape
        };
        Self { cell, shape }
    }
}
