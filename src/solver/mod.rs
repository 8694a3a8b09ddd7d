pub(crate) mod dead_squares;
mod expand;
pub(crate) mod heuristic;
mod registry;
pub(crate) mod simulator;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use crate::board::Board;
use crate::config::{Limits, Method};
use crate::data::MAX_BOXES;
use crate::level::Level;
use crate::moves::Moves;
use crate::state::{Action, Layout, PuzzleState};
use crate::Solve;

use self::dead_squares::DeadSquares;
use self::expand::expand_pushes;
use self::registry::{Frontier, Registry};

pub use self::stats::Stats;

/// The level can't be solved by design - not a search failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    NoBoxes,
    BoxesGoals,
    TooMany,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NoBoxes => write!(f, "No boxes"),
            SolverErr::BoxesGoals => write!(f, "Different number of boxes and goals"),
            SolverErr::TooMany => write!(f, "More than {} boxes", MAX_BOXES),
        }
    }
}

impl Error for SolverErr {}

/// States of the search driver. `Running` is never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Solved,
    /// Every reachable layout was expanded without reaching the goals.
    Exhausted,
    /// A limit was hit or the search was cancelled.
    TimedOut,
}

impl Display for SearchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SearchStatus::Running => write!(f, "Running"),
            SearchStatus::Solved => write!(f, "Solved"),
            SearchStatus::Exhausted => write!(f, "No solution"),
            SearchStatus::TimedOut => write!(f, "Timed out"),
        }
    }
}

pub struct SolverOk {
    /// `Some` iff `status` is `Solved`.
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub status: SearchStatus,
    pub(crate) method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, status: SearchStatus, method: Method) -> Self {
        Self {
            moves,
            stats,
            status,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "{}", self.status)?,
            Some(ref moves) => writeln!(f, "{}: {}", self.method, moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, method: Method, limits: &Limits) -> Result<SolverOk, SolverErr> {
        debug!("Processing level...");
        let solver = Solver::new(&self.board, &self.layout)?;
        debug!("Processed level");
        Ok(solver.search(method, limits))
    }
}

/// Immutable data for one solve.
struct Solver<'a> {
    board: &'a Board,
    initial_layout: &'a Layout,
    dead_squares: DeadSquares,
}

/// Everything that changes during one solve, never reused between solves.
struct SearchContext {
    states: Vec<PuzzleState>,
    frontier: Frontier,
    registry: Registry,
    stats: Stats,
    expansions: usize,
}

impl<'a> Solver<'a> {
    fn new(board: &'a Board, initial_layout: &'a Layout) -> Result<Self, SolverErr> {
        let box_cnt = initial_layout.box_positions().len();
        if box_cnt == 0 {
            return Err(SolverErr::NoBoxes);
        }
        if box_cnt != board.goals().len() {
            return Err(SolverErr::BoxesGoals);
        }
        if box_cnt > MAX_BOXES {
            return Err(SolverErr::TooMany);
        }

        let dead_squares = DeadSquares::new(board);
        debug!("Found {} dead squares", dead_squares.count());

        Ok(Solver {
            board,
            initial_layout,
            dead_squares,
        })
    }

    fn search(&self, method: Method, limits: &Limits) -> SolverOk {
        debug!("Search called");
        let started = Instant::now();

        let mut ctx = SearchContext {
            states: Vec::new(),
            frontier: Frontier::new(),
            registry: Registry::new(),
            stats: Stats::new(),
            expansions: 0,
        };

        let h = heuristic::score(self.board, self.initial_layout);
        let root = PuzzleState::root(self.initial_layout.clone(), h);
        ctx.registry.should_admit(root.layout.signature(), h);
        ctx.frontier.push(0, h);
        ctx.stats.add_created(0);
        ctx.states.push(root);

        let mut status = SearchStatus::Running;
        let mut terminal = None;
        while status == SearchStatus::Running {
            if Self::limits_exceeded(limits, &ctx, started) {
                status = SearchStatus::TimedOut;
                continue;
            }

            let cur_id = match ctx.frontier.pop_min() {
                Some(id) => id,
                None => {
                    status = SearchStatus::Exhausted;
                    continue;
                }
            };
            let depth = ctx.states[cur_id].depth;
            let priority = ctx.states[cur_id].heuristic;
            if ctx.stats.add_unique_visited(depth) {
                debug!(
                    "Visited new depth: {}, heuristic: {}, queued: {}",
                    depth,
                    priority,
                    ctx.frontier.len()
                );
            }

            if ctx.states[cur_id].is_solved() {
                status = SearchStatus::Solved;
                terminal = Some(cur_id);
                continue;
            }

            ctx.expansions += 1;
            let successors = expand_pushes(
                self.board,
                &self.dead_squares,
                &mut ctx.registry,
                &ctx.states[cur_id].layout,
                priority,
            );
            let next_depth = depth.saturating_add(1);
            for successor in successors {
                ctx.stats.add_created(next_depth);
                let h = heuristic::score(self.board, &successor.layout);
                if !ctx.registry.should_admit(successor.layout.signature(), h) {
                    ctx.stats.add_reached_duplicate(next_depth);
                    continue;
                }
                let id = ctx.states.len();
                ctx.states.push(PuzzleState {
                    layout: successor.layout,
                    heuristic: h,
                    action: Action::Push(successor.moves),
                    prev: Some(cur_id),
                    depth: next_depth,
                });
                ctx.frontier.push(id, h);
            }
        }

        info!(
            "{} after {} expansions, {} layouts explored, {:?}",
            status,
            ctx.expansions,
            ctx.registry.len(),
            started.elapsed()
        );

        let moves = terminal.map(|id| {
            debug!("Solved, backtracking path");
            backtrack_moves(&ctx.states, id, method)
        });
        SolverOk::new(moves, ctx.stats, status, method)
    }

    fn limits_exceeded(limits: &Limits, ctx: &SearchContext, started: Instant) -> bool {
        if limits.cancel.is_cancelled() {
            debug!("Search cancelled");
            return true;
        }
        if let Some(max) = limits.max_expansions {
            if ctx.expansions >= max {
                debug!("Expansion limit {} reached", max);
                return true;
            }
        }
        if let Some(time_limit) = limits.time_limit {
            if started.elapsed() >= time_limit {
                debug!("Time limit {:?} reached", time_limit);
                return true;
            }
        }
        false
    }
}

/// Follows the predecessor links from `terminal` back to the root.
fn backtrack_moves(states: &[PuzzleState], terminal: usize, method: Method) -> Moves {
    let mut edges = Vec::new();
    let mut cur = Some(terminal);
    while let Some(id) = cur {
        if let Action::Push(ref moves) = states[id].action {
            edges.push(moves);
        }
        cur = states[id].prev;
    }

    let mut ret = Moves::default();
    for moves in edges.into_iter().rev() {
        match method {
            Method::Moves => ret.extend(moves),
            Method::Pushes => ret.extend(&moves.pushes_only()),
        }
    }
    ret
}
