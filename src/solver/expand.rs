use std::collections::VecDeque;

use crate::board::Board;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::moves::{Move, Moves};
use crate::solver::dead_squares::DeadSquares;
use crate::solver::registry::Registry;
use crate::solver::simulator::{self, Step};
use crate::state::Layout;
use crate::vec2d::Vec2d;

/// A layout reachable by walking and then pushing exactly one box.
#[derive(Debug, Clone)]
pub(crate) struct Successor {
    pub(crate) layout: Layout,
    /// The walk prefix followed by the push.
    pub(crate) moves: Moves,
}

/// Finds every layout reachable from `layout` by any number of steps and one push.
///
/// Each walk layout is recorded in the registry with `priority` (the priority of the
/// expanded state) so the same region isn't walked again. Layouts already in the registry
/// are skipped, whether reached by a step or a push.
pub(crate) fn expand_pushes(
    board: &Board,
    dead_squares: &DeadSquares,
    registry: &mut Registry,
    layout: &Layout,
    priority: u32,
) -> Vec<Successor> {
    let mut successors = Vec::new();

    let start = match layout.player_pos() {
        Some(pos) => pos,
        None => return successors,
    };

    // direction of the last step to each walked cell
    let mut came_from: Vec2d<Option<Dir>> = board.grid.scratchpad_with_default(None);

    // BFS so the walk prefixes are as short as possible
    let mut to_visit = VecDeque::new();
    to_visit.push_back((layout.clone(), start));

    while let Some((cur, player_pos)) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            match simulator::apply(board, dead_squares, &cur, player_pos, dir) {
                Step::Blocked => {}
                Step::Walked(new_layout, new_player_pos) => {
                    let signature = new_layout.signature();
                    if registry.contains(&signature) {
                        continue;
                    }
                    registry.mark(signature, priority);
                    came_from[new_player_pos] = Some(dir);
                    to_visit.push_back((new_layout, new_player_pos));
                }
                Step::Pushed(new_layout, _) => {
                    if registry.contains(&new_layout.signature()) {
                        trace!("Push {} from {:?} already explored", dir, player_pos);
                        continue;
                    }
                    let mut moves = walk_path(board, &came_from, start, player_pos);
                    moves.add(Move::new(dir, true));
                    successors.push(Successor {
                        layout: new_layout,
                        moves,
                    });
                }
            }
        }
    }

    successors
}

/// Steps from `start` to `dest` by following `came_from` backwards.
fn walk_path(board: &Board, came_from: &Vec2d<Option<Dir>>, start: Pos, dest: Pos) -> Moves {
    let mut dirs = Vec::new();
    let mut cur = dest;
    while cur != start {
        let dir = match came_from[cur] {
            Some(dir) => dir,
            None => break,
        };
        dirs.push(dir);
        cur = match board.grid.neighbor(cur, dir.inverse()) {
            Some(prev) => prev,
            None => break,
        };
    }

    Moves::new(
        dirs.into_iter()
            .rev()
            .map(|dir| Move::new(dir, false))
            .collect(),
    )
}
