pub const BOARD_SIZE: i8 = 8;

/// True iff `(x, y)` names one of the 64 squares.
pub const fn on_board(x: i8, y: i8) -> bool {
    x >= 0 && x < BOARD_SIZE && y >= 0 && y < BOARD_SIZE
}

/// True for squares on the outer ring. A slider always stops there whatever occupies it,
/// so these never count as relevant blockers.
pub const fn is_border(x: i8, y: i8) -> bool {
    x == 0 || x == BOARD_SIZE - 1 || y == 0 || y == BOARD_SIZE - 1
}
