//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes
/// (9 bytes for cells + 1 byte for player enum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{BoardState, Player};
    ///
    /// let o_first = BoardState::new_with_player(Player::O);
    /// assert_eq!(o_first.to_move, Player::O);
    ///
    /// let after_move = o_first.make_move(4).unwrap();
    /// assert_eq!(after_move.to_move, Player::X);
    /// ```
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Build a board from raw cells with an explicit side to move.
    pub fn from_cells(cells: [Cell; 9], to_move: Player) -> Self {
        BoardState { cells, to_move }
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    fn determine_turn_from_counts(count: &PieceCount) -> Result<Player, crate::Error> {
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else if count.o == count.x + 1 {
            // O opened the game
            Ok(Player::X)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The board part holds exactly 9 cells once whitespace is removed (`.` or
    /// `_` for empty, `X`/`O` in either case). An optional `/X` or `/O` suffix
    /// sets the player to move explicitly; otherwise it is inferred from the
    /// piece counts with X-first semantics. Within the 9-character board part,
    /// `_` counts as an empty cell; a trailing `_X`/`_O` after the ninth cell is
    /// also accepted as the turn suffix, matching [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns error if the board part does not hold 9 cells, a character is
    /// not a valid cell, or the piece counts differ by more than one.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned, s)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let to_move = match specified_turn {
            Some(turn) => turn,
            None => Self::determine_turn_from_counts(&count)?,
        };

        Ok(BoardState { cells, to_move })
    }

    fn split_board_and_turn<'a>(
        cleaned: &'a str,
        context: &str,
    ) -> Result<(&'a str, Option<Player>), crate::Error> {
        if let Some((board, suffix)) = cleaned.rsplit_once('/') {
            return Ok((board, Some(Self::parse_player(suffix, context)?)));
        }

        let chars: Vec<(usize, char)> = cleaned.char_indices().collect();
        if chars.len() == 11 && chars[9].1 == '_' {
            let (board, rest) = cleaned.split_at(chars[9].0);
            return Ok((board, Some(Self::parse_player(&rest[1..], context)?)));
        }

        Ok((cleaned, None))
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Number of X and O marks, in that order
    pub fn piece_counts(&self) -> (usize, usize) {
        let count = Self::count_pieces(&self.cells);
        (count.x, count.o)
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells.get(pos) == Some(&Cell::Empty)
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return a new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The first completed line on the board, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LineAnalyzer::winning_line(&self.cells)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        LineAnalyzer::is_terminal(&self.cells)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Get a string representation for use as a key
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_make_move() {
        let board = BoardState::new();

        let new_board = board.make_move(4).unwrap();
        assert_eq!(new_board.cells[4], Cell::X);
        assert_eq!(new_board.to_move, Player::O);

        let result = new_board.make_move(4);
        assert!(result.unwrap_err().to_string().contains("occupied"));

        let result = new_board.make_move(9);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_legal_moves() {
        let mut board = BoardState::new();
        assert_eq!(board.legal_moves().len(), 9);

        board = board.make_move(0).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&0));
    }

    #[test]
    fn test_no_legal_moves_after_win() {
        let board = BoardState::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.empty_positions().len(), 4);
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = BoardState::new();
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(2).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(5).unwrap(); // X
        board = board.make_move(7).unwrap(); // O

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.winning_line(), Some([1, 4, 7]));
    }

    #[test]
    fn test_draw_detection() {
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.to_move, Player::O);

        assert!(BoardState::from_string("XO").is_err());
        assert!(BoardState::from_string("XOZ......").is_err());
        assert!(BoardState::from_string("XXXX.....").is_err());
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let board = BoardState::from_string("........._O").unwrap();
        assert_eq!(board.to_move, Player::O);

        let board = BoardState::from_string("XX.OO..../o").unwrap();
        assert_eq!(board.to_move, Player::O);

        let board = BoardState::from_string("XX_ OO_ ___").unwrap();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(board.empty_positions(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = BoardState::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO......._X");
        assert_eq!(BoardState::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_display() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }
}
