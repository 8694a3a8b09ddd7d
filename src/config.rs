use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Custom,
    Xsb,
}

/// What the solver returns for each search edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Walk prefix and push - the full sequence of player moves.
    Moves,
    /// Only the push directions.
    Pushes,
}

impl Default for Method {
    fn default() -> Self {
        Method::Moves
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Moves => write!(f, "moves"),
            Method::Pushes => write!(f, "pushes"),
        }
    }
}

/// Shared flag to stop a running search from another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Bounds on a single solve. `None` means unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
    pub cancel: CancelToken,
}

impl Limits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_clones() {
        let token = CancelToken::new();
        let limits = Limits::unbounded().with_cancel(token.clone());
        assert!(!limits.cancel.is_cancelled());
        token.cancel();
        assert!(limits.cancel.is_cancelled());
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::default(), Method::Moves);
        assert_eq!(Method::Moves.to_string(), "moves");
        assert_eq!(Method::Pushes.to_string(), "pushes");
    }
}
