use crate::board::Board;
use crate::data::{Contents, Dir, Pos};
use crate::moves::Moves;
use crate::solver::dead_squares::DeadSquares;
use crate::state::Layout;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position (a walk)

/// Result of trying to move the player one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Blocked,
    /// New layout and new player position.
    Walked(Layout, Pos),
    /// New layout and new player position (where the box was).
    Pushed(Layout, Pos),
}

/// Applies one move to a copy of `layout`, the input is never modified.
///
/// Boxes are never pushed into walls, other boxes, dead squares or off the board.
pub(crate) fn apply(
    board: &Board,
    dead_squares: &DeadSquares,
    layout: &Layout,
    player_pos: Pos,
    dir: Dir,
) -> Step {
    let target = match board.grid.neighbor(player_pos, dir) {
        Some(pos) if !board.is_wall(pos) => pos,
        _ => return Step::Blocked,
    };

    match layout.get(target) {
        Contents::Empty => {
            let mut new_layout = layout.clone();
            new_layout.set(player_pos, Contents::Empty);
            new_layout.set(target, Contents::Player);
            Step::Walked(new_layout, target)
        }
        Contents::Box => {
            let push_dest = match board.grid.neighbor(target, dir) {
                Some(pos) => pos,
                None => return Step::Blocked,
            };
            if board.is_wall(push_dest)
                || layout.get(push_dest) != Contents::Empty
                || dead_squares.is_dead(push_dest)
            {
                return Step::Blocked;
            }

            let mut new_layout = layout.clone();
            new_layout.set(player_pos, Contents::Empty);
            new_layout.set(target, Contents::Player);
            new_layout.set(push_dest, Contents::Box);
            Step::Pushed(new_layout, target)
        }
        // there is only one player
        Contents::Player => Step::Blocked,
    }
}

/// Plays `moves` from `layout` without dead square pruning.
///
/// Returns the layout after each legal move and the index of the first illegal one
/// (blocked or a push marked as a step and vice versa), if any.
pub(crate) fn replay(
    board: &Board,
    layout: &Layout,
    moves: &Moves,
) -> (Vec<Layout>, Option<usize>) {
    let dead_squares = DeadSquares::none(board);
    let mut layouts = Vec::new();

    let mut player_pos = match layout.player_pos() {
        Some(pos) => pos,
        None => return (layouts, Some(0)),
    };
    let mut cur = layout.clone();

    for (i, mov) in moves.iter().enumerate() {
        let step = apply(board, &dead_squares, &cur, player_pos, mov.dir);
        let (new_layout, new_player_pos) = match step {
            Step::Walked(l, p) if !mov.is_push => (l, p),
            Step::Pushed(l, p) if mov.is_push => (l, p),
            _ => return (layouts, Some(i)),
        };
        layouts.push(new_layout.clone());
        cur = new_layout;
        player_pos = new_player_pos;
    }

    (layouts, None)
}
