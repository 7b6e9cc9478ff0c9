//! Value types shared by every layer of the engine.
//!
//! Colors, piece kinds, colored pieces, squares and the castling-rights set.
//! All of them are small `Copy` values; nothing here owns heap memory.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may turn into, strongest first.
    pub const PROMOTABLE: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn is_promotable(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }

    /// Lowercase FEN letter.
    pub const fn fen_letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece kind together with its owner. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn is_promotable(self) -> bool {
        self.kind.is_promotable()
    }

    /// Decode one of the 12 FEN piece letters. Anything else yields `None`.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self::new(kind, color))
    }

    pub fn to_fen_char(self) -> char {
        let letter = self.kind.fen_letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// A board coordinate. Rank 0 is rank "1", file 0 is file "a".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SquareRepr"))]
pub struct Square {
    rank: u8,
    file: u8,
}

/// Unchecked wire form; deserialised squares go through `Square::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SquareRepr {
    rank: u8,
    file: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<SquareRepr> for Square {
    type Error = ChessErrors;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::new(repr.rank, repr.file).ok_or_else(|| {
            ChessErrors::InvalidAlgebraic(format!("rank {} file {} is off the board", repr.rank, repr.file))
        })
    }
}

impl Square {
    /// Build a square from zero-based coordinates, `None` when off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Callers guarantee `rank < 8 && file < 8`.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        Self { rank, file }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Row-major index, `a1 == 0`, `h8 == 63`.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self::at((index / 8) as u8, (index % 8) as u8))
        } else {
            None
        }
    }

    /// Step by a rank/file delta, `None` when leaving the board.
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Self> {
        let rank = i16::from(self.rank) + i16::from(rank_delta);
        let file = i16::from(self.file) + i16::from(file_delta);
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self::at(rank as u8, file as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|index| Self::at((index / 8) as u8, (index % 8) as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// One of the four castling flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingRight {
    WhiteKingSide,
    WhiteQueenSide,
    BlackKingSide,
    BlackQueenSide,
}

impl CastlingRight {
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingSide,
        CastlingRight::WhiteQueenSide,
        CastlingRight::BlackKingSide,
        CastlingRight::BlackQueenSide,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CastlingRight::WhiteKingSide => 1 << 0,
            CastlingRight::WhiteQueenSide => 1 << 1,
            CastlingRight::BlackKingSide => 1 << 2,
            CastlingRight::BlackQueenSide => 1 << 3,
        }
    }

    pub const fn fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingSide => 'K',
            CastlingRight::WhiteQueenSide => 'Q',
            CastlingRight::BlackKingSide => 'k',
            CastlingRight::BlackQueenSide => 'q',
        }
    }

    pub const fn color(self) -> Color {
        match self {
            CastlingRight::WhiteKingSide | CastlingRight::WhiteQueenSide => Color::White,
            CastlingRight::BlackKingSide | CastlingRight::BlackQueenSide => Color::Black,
        }
    }
}

/// Set of held castling rights. Membership only; removal is idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    #[inline]
    pub const fn contains(self, right: CastlingRight) -> bool {
        (self.0 & right.bit()) != 0
    }

    #[inline]
    pub fn insert(&mut self, right: CastlingRight) {
        self.0 |= right.bit();
    }

    #[inline]
    pub fn remove(&mut self, right: CastlingRight) {
        self.0 &= !right.bit();
    }

    #[inline]
    #[must_use]
    pub fn without(mut self, right: CastlingRight) -> Self {
        self.remove(right);
        self
    }

    /// Drop both rights of one color.
    #[must_use]
    pub fn without_color(self, color: Color) -> Self {
        match color {
            Color::White => self
                .without(CastlingRight::WhiteKingSide)
                .without(CastlingRight::WhiteQueenSide),
            Color::Black => self
                .without(CastlingRight::BlackKingSide)
                .without(CastlingRight::BlackQueenSide),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when every right in `self` is also held by `other`.
    #[inline]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        (self.0 & !other.0) == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CastlingRight> {
        CastlingRight::ALL
            .into_iter()
            .filter(move |right| self.contains(*right))
    }
}

impl FromIterator<CastlingRight> for CastlingRights {
    fn from_iter<T: IntoIterator<Item = CastlingRight>>(iter: T) -> Self {
        let mut rights = CastlingRights::NONE;
        for right in iter {
            rights.insert(right);
        }
        rights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fen_piece_letter_round_trips() {
        for ch in "PNBRQKpnbrqk".chars() {
            let piece = Piece::from_fen_char(ch).expect("standard letter should decode");
            assert_eq!(piece.to_fen_char(), ch);
        }
    }

    #[test]
    fn unknown_letters_decode_to_nothing() {
        for ch in ['x', 'Z', '9', '/', ' ', 'é'] {
            assert_eq!(Piece::from_fen_char(ch), None);
        }
    }

    #[test]
    fn only_minor_and_major_pieces_are_promotable() {
        let promotable: Vec<PieceKind> = PieceKind::ALL
            .into_iter()
            .filter(|kind| kind.is_promotable())
            .collect();
        assert_eq!(
            promotable,
            vec![PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
        );
    }

    #[test]
    fn square_offset_stays_on_board() {
        let a1 = Square::new(0, 0).expect("a1");
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 2), Square::new(1, 2));
        let h8 = Square::new(7, 7).expect("h8");
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn castling_removal_is_idempotent() {
        let rights = CastlingRights::ALL
            .without(CastlingRight::WhiteKingSide)
            .without(CastlingRight::WhiteKingSide);
        assert!(!rights.contains(CastlingRight::WhiteKingSide));
        assert!(rights.contains(CastlingRight::WhiteQueenSide));
        assert!(rights.is_subset_of(CastlingRights::ALL));
        assert!(!CastlingRights::ALL.is_subset_of(rights));
        assert_eq!(
            CastlingRights::ALL.without_color(Color::Black).iter().count(),
            2
        );
    }
}
