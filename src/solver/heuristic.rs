use crate::board::Board;
use crate::data::Pos;
use crate::state::Layout;

/// Sum of distances from each box to its closest goal, less is better.
///
/// Several boxes may count the same goal so this is neither a matching
/// nor guaranteed to be a lower bound. It is 0 iff every box is on a goal.
pub(crate) fn score(board: &Board, layout: &Layout) -> u32 {
    score_boxes(board, &layout.box_positions())
}

/// A single distance fits in `u16` but the sum over `MAX_BOXES` boxes doesn't.
pub(crate) fn score_boxes(board: &Board, boxes: &[Pos]) -> u32 {
    let mut goal_dist_sum = 0;
    for &box_pos in boxes {
        let min = board
            .goals()
            .iter()
            .map(|&goal| u32::from(box_pos.dist(goal)))
            .min()
            .unwrap_or(0);
        goal_dist_sum += min;
    }
    goal_dist_sum
}

#[cfg(test)]
mod tests {
    use crate::data::{MAX_BOXES, MAX_SIZE};
    use crate::level::Level;
    use crate::state::PuzzleState;

    use super::*;

    fn level_score(level: &str) -> u32 {
        let level: Level = level.parse().unwrap();
        score(&level.board, &level.layout)
    }

    #[test]
    fn corridor() {
        assert_eq!(level_score("@$."), 1);
        assert_eq!(level_score("@ *"), 0);
        assert_eq!(level_score("#@$   .#"), 4);
    }

    #[test]
    fn closest_goal() {
        let level = r"
#######
#.   $#
#@    #
#    .#
#######
";
        // 2 to the bottom goal, 4 to the top one
        assert_eq!(level_score(level), 2);
    }

    #[test]
    fn shared_goal_counts_twice() {
        let level = r"
#######
#.$   #
#@$   #
#    .#
#######
";
        // both boxes are closest to the top left goal
        assert_eq!(level_score(level), 1 + 2);
    }

    #[test]
    fn solved_only_when_all_on_goals() {
        assert_eq!(level_score("#@**#"), 0);
        assert_ne!(level_score("#@*$.#"), 0);
    }

    #[test]
    fn largest_board() {
        // 254 goals in the top left corner, 254 boxes in the bottom right
        let mut rows = vec![vec![' '; MAX_SIZE]; MAX_SIZE];
        for r in 0..2 {
            for c in 0..127 {
                rows[r][c] = '.';
                rows[MAX_SIZE - 2 + r][128 + c] = '$';
            }
        }
        rows[127][127] = '@';
        let level: String = rows
            .iter()
            .map(|row| row.iter().collect::<String>() + "\n")
            .collect();
        let level: Level = level.parse().unwrap();
        assert_eq!(level.box_cnt(), MAX_BOXES);

        // every box is closest to the goal at (1, 126)
        let expected = 127 * (252 + 253) + 2 * (2..=128).sum::<u32>();
        assert_eq!(expected, 80_645);
        let h = score(&level.board, &level.layout);
        assert_eq!(h, expected);
        assert!(h > u32::from(u16::max_value()));
        assert!(!PuzzleState::root(level.layout.clone(), h).is_solved());
    }
}
