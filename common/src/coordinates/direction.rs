/// A single diagonal step, expressed as a row and column delta.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const UP_LEFT: Direction = Direction::new(-1, -1);
    pub const UP_RIGHT: Direction = Direction::new(-1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(1, -1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);

    /// All four diagonals, in the order move generation visits them.
    pub const ALL: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    pub const fn reverse(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }
}
