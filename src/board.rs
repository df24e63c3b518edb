use std::fmt;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    UP,
    LEFT,
    RIGHT,
    DOWN
}

/// Expansion order used by every strategy.
pub const DIRECTIONS: [Direction; 4] = [Direction::UP, Direction::LEFT, Direction::RIGHT, Direction::DOWN];

impl Direction {
    pub fn to_char(&self) -> char {
        match self {
            Direction::UP => 'U',
            Direction::DOWN => 'D',
            Direction::LEFT => 'L',
            Direction::RIGHT => 'R'
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            Direction::UP => Direction::DOWN,
            Direction::DOWN => Direction::UP,
            Direction::LEFT => Direction::RIGHT,
            Direction::RIGHT => Direction::LEFT
        }
    }

    /// Grid offset `(dx, dy)` of the blank for this move.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::LEFT => (-1, 0),
            Direction::RIGHT => (1, 0),
            Direction::UP => (0, -1),
            Direction::DOWN => (0, 1)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::UP => "up",
            Direction::LEFT => "left",
            Direction::RIGHT => "right",
            Direction::DOWN => "down"
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("Board must have 9 or 16 tiles, got {0}")]
    InvalidLength(usize),
    #[error("Tile {value} is out of range for a board of {len} tiles")]
    ValueOutOfRange { value: u32, len: usize },
    #[error("Tile {0} appears more than once")]
    DuplicateValue(u8),
    #[error("Illegal move: cannot move blank {0}")]
    IllegalMove(Direction),
}

/// A square sliding puzzle stored row-major; `0` is the blank.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Board {
    pub(crate) width: usize,
    pub(crate) tiles: Vec<u8>,
}

impl Board {
    pub fn new(values: Vec<u32>) -> Result<Self, BoardError> {
        let len = values.len();
        let width = match len {
            9 => 3,
            16 => 4,
            _ => return Err(BoardError::InvalidLength(len)),
        };

        let mut seen = vec![false; len];
        let mut tiles: Vec<u8> = Vec::with_capacity(len);

        for value in values {
            if value as usize >= len {
                return Err(BoardError::ValueOutOfRange { value, len });
            }
            if seen[value as usize] {
                return Err(BoardError::DuplicateValue(value as u8));
            }
            seen[value as usize] = true;
            tiles.push(value as u8);
        }

        Ok(Self { width, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn to_pos(&self, idx: usize) -> (i32, i32) {
        ((idx % self.width) as i32, (idx / self.width) as i32)
    }

    pub fn from_pos(&self, (x, y): (i32, i32)) -> usize {
        self.width * y as usize + x as usize
    }

    pub fn space_idx(&self) -> usize {
        // Construction guarantees exactly one blank.
        self.tiles.iter().position(|&t| t == 0).unwrap_or_default()
    }

    /// The goal is the identity layout `0, 1, 2, ..., len - 1`, blank first.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(idx, &t)| t as usize == idx)
    }

    /// Returns the board reached by moving the blank one cell in `dir`.
    /// `self` is left untouched.
    pub fn move_space(&self, dir: Direction) -> Result<Board, BoardError> {
        let space_idx = self.space_idx();
        let (x, y) = self.to_pos(space_idx);
        let (dx, dy) = dir.offset();
        let (tx, ty) = (x + dx, y + dy);
        let width = self.width as i32;

        if tx < 0 || ty < 0 || tx >= width || ty >= width {
            return Err(BoardError::IllegalMove(dir));
        }

        let target_idx = self.from_pos((tx, ty));
        let mut successor = self.clone();
        successor.tiles.swap(space_idx, target_idx);
        Ok(successor)
    }

    /// Every legal `(board, move)` pair in `DIRECTIONS` order, skipping `forbidden`.
    pub fn generate_successors(&self, forbidden: Option<Direction>) -> Vec<(Board, Direction)> {
        let mut result: Vec<(Board, Direction)> = Vec::with_capacity(4);

        for dir in DIRECTIONS {
            if forbidden == Some(dir) {
                continue;
            }
            if let Ok(successor) = self.move_space(dir) {
                result.push((successor, dir));
            }
        }

        result
    }

    pub fn apply_path(&self, path: &[Direction]) -> Result<Board, BoardError> {
        let mut board = self.clone();
        for &dir in path {
            board = board.move_space(dir)?;
        }
        Ok(board)
    }

    fn inversions(&self) -> u32 {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    /// Whether the goal (blank in the top-left cell) is reachable from this board.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();

        if self.width % 2 == 1 {
            inversions % 2 == 0
        } else {
            // A vertical move shifts a tile past width - 1 others and changes the blank row.
            let space_row = (self.space_idx() / self.width) as u32;
            (inversions + space_row) % 2 == 0
        }
    }

    pub fn serialized(&self) -> String {
        self.tiles.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ {} }}", self.serialized())
    }
}
