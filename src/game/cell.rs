/// A single board slot: empty or holding one of the two players' pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    First,
    Second,
}

impl Cell {
    /// Whether the slot holds a piece.
    pub fn is_occupied(self) -> bool {
        self != Cell::Empty
    }

    /// Character used in the textual board rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::First => '1',
            Cell::Second => '2',
        }
    }
}
