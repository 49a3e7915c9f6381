use super::board::{Board, COLS};

/// Legal columns of a board, left to right.
///
/// Backed by a fixed array so move generation never touches the heap inside
/// the search recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMoves {
    cols: [usize; COLS],
    len: usize,
}

impl LegalMoves {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, col: usize) -> bool {
        self.as_slice().contains(&col)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cols[..self.len]
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.as_slice().iter().copied()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Columns that accept a piece, in increasing order.
///
/// The order is part of the search contract: ties between equally scored
/// moves are broken in favour of the earliest column generated here.
pub fn valid_moves(board: &Board) -> LegalMoves {
    let mut moves = LegalMoves {
        cols: [0; COLS],
        len: 0,
    };
    for col in (0..COLS).filter(|&col| board.is_valid_move(col)) {
        moves.cols[moves.len] = col;
        moves.len += 1;
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Side, ROWS};

    #[test]
    fn test_empty_board_has_all_columns() {
        let moves = valid_moves(&Board::empty());
        assert_eq!(moves.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_full_columns_are_skipped() {
        let mut board = Board::empty();
        for _ in 0..ROWS {
            board = board.drop_piece(2, Side::A).drop_piece(5, Side::B);
        }
        let moves = valid_moves(&board);
        assert_eq!(moves.as_slice(), &[0, 1, 3, 4, 6]);
        assert!(!moves.contains(2));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::empty();
        for col in 0..COLS {
            for row in 0..ROWS {
                let side = if (row + col) % 2 == 0 { Side::A } else { Side::B };
                board = board.drop_piece(col, side);
            }
        }
        assert!(valid_moves(&board).is_empty());
    }
}
