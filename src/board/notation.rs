use std::fmt;
use std::str::FromStr;
use crate::board::{Board, Cell, Move, Player, SIZE};
use crate::error::{InvalidMoveError, ParseError};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    // Accepts "1,2", "1 2" or "12"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();
        let err = || ParseError::Move { input: s.to_string() };
        if digits.len() != 2 { return Err(err()); }
        let row = digits[0].to_digit(10).ok_or_else(err)? as usize;
        let col = digits[1].to_digit(10).ok_or_else(err)? as usize;
        if row >= SIZE || col >= SIZE { return Err(err()); }
        Ok(Move::new(row, col))
    }
}

impl Cell {
    pub fn as_char(self) -> char {
        match self { Cell::Empty => '.', Cell::Mark(p) => p.as_char() }
    }

    fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::Mark(Player::X)),
            'O' | 'o' => Some(Cell::Mark(Player::O)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells().iter().enumerate() {
            let line: String = row.iter().map(|c| c.as_char()).collect();
            if i + 1 < SIZE { writeln!(f, "{}", line)?; } else { write!(f, "{}", line)?; }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Nine cells of `X`, `O` or `.` (`_`/`-` also mean empty), row-major.
    /// Whitespace and `/` are ignored, so "XO./.X./..O" works too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != '/').collect();
        if raw.len() != SIZE * SIZE { return Err(ParseError::BoardLength { got: raw.len() }); }
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, ch) in raw.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = Cell::from_char(ch).ok_or(ParseError::BoardCell { character: ch })?;
        }
        Ok(Board::from_cells(cells))
    }
}

impl Board {
    /// Plays `moves` in order from the empty board.
    pub fn from_moves(moves: &[Move]) -> Result<Self, InvalidMoveError> {
        moves.iter().try_fold(Board::initial(), |b, &mv| b.apply(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_forms() {
        assert_eq!("1,2".parse::<Move>(), Ok(Move::new(1, 2)));
        assert_eq!(" 2 0 ".parse::<Move>(), Ok(Move::new(2, 0)));
        assert_eq!("01".parse::<Move>(), Ok(Move::new(0, 1)));
        assert!("3,0".parse::<Move>().is_err());
        assert!("a,b".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
    }

    #[test]
    fn board_text_roundtrip() {
        let b: Board = "XO./.X./..O".parse().expect("valid board");
        assert_eq!(b.cell(0, 0), Some(Cell::Mark(Player::X)));
        assert_eq!(b.cell(2, 2), Some(Cell::Mark(Player::O)));
        assert_eq!(b.to_string(), "XO.\n.X.\n..O");
        assert_eq!(b.to_string().parse::<Board>(), Ok(b));
    }

    #[test]
    fn board_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(ParseError::BoardLength { got: 2 }));
        assert_eq!("XO.......Z".parse::<Board>(), Err(ParseError::BoardLength { got: 10 }));
        assert_eq!("XO......Z".parse::<Board>(), Err(ParseError::BoardCell { character: 'Z' }));
    }

    #[test]
    fn from_moves_alternates_players() {
        let b = Board::from_moves(&[Move::new(1, 1), Move::new(0, 0)]).expect("legal");
        assert_eq!(b.to_string(), "O..\n.X.\n...");
        assert!(Board::from_moves(&[Move::new(1, 1), Move::new(1, 1)]).is_err());
    }
}
