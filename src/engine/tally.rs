//! Per-player live-neighbor tallies for the evolution rule
//!
//! The tally is sized from the board's highest observed player id and
//! reused across cells within one generation step; index 0 is unused.

/// Summary of one cell's neighborhood after tallying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyOutcome {
    /// Total live neighbors regardless of owner
    pub total: u32,
    /// Player with the highest tally (0 when no neighbor is alive)
    pub leader: i32,
    /// The highest tally value
    pub leader_count: u32,
    /// The second-highest tally value among the other players
    pub runner_up_count: u32,
    /// Number of distinct players with at least one live neighbor
    pub contenders: usize,
}

impl TallyOutcome {
    /// True when two or more players tie for the highest tally
    ///
    /// A contested neighborhood forces the cell dead regardless of the
    /// classic survival/birth rule.
    pub const fn is_contested(&self) -> bool {
        self.contenders > 1 && self.leader_count == self.runner_up_count
    }
}

/// Growable per-player counter of live neighbors
#[derive(Debug)]
pub struct NeighborTally {
    counts: Vec<u32>,
}

impl NeighborTally {
    /// Allocate a tally sized for player ids up to `max_player`
    pub fn new(max_player: i32) -> Self {
        let players = if max_player > 0 { max_player as usize } else { 0 };
        Self {
            counts: vec![0; players + 1],
        }
    }

    /// Clear all counts for the next cell
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    /// Count one live neighbor owned by `owner`
    ///
    /// Non-positive owners (dead or unowned neighbors) are ignored.
    pub fn record(&mut self, owner: i32) {
        if owner > 0 {
            if let Some(count) = self.counts.get_mut(owner as usize) {
                *count += 1;
            }
        }
    }

    /// Reduce the tallies to total, leader, and runner-up
    pub fn outcome(&self) -> TallyOutcome {
        let mut total = 0;
        let mut leader = 0;
        let mut leader_count = 0;
        let mut runner_up_count = 0;
        let mut contenders = 0;
        for (player, &count) in self.counts.iter().enumerate().skip(1) {
            if count == 0 {
                continue;
            }
            total += count;
            contenders += 1;
            if count > leader_count {
                runner_up_count = leader_count;
                leader_count = count;
                leader = player as i32;
            } else if count > runner_up_count {
                runner_up_count = count;
            }
        }
        TallyOutcome {
            total,
            leader,
            leader_count,
            runner_up_count,
            contenders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NeighborTally;

    #[test]
    fn test_single_player_is_uncontested() {
        let mut tally = NeighborTally::new(3);
        tally.record(2);
        tally.record(2);
        tally.record(2);
        let outcome = tally.outcome();
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.leader, 2);
        assert_eq!(outcome.contenders, 1);
        assert!(!outcome.is_contested());
    }

    #[test]
    fn test_equal_leaders_are_contested() {
        let mut tally = NeighborTally::new(2);
        tally.record(1);
        tally.record(2);
        let outcome = tally.outcome();
        assert_eq!(outcome.total, 2);
        assert!(outcome.is_contested());
    }

    #[test]
    fn test_strict_majority_wins_over_minority() {
        let mut tally = NeighborTally::new(3);
        tally.record(3);
        tally.record(3);
        tally.record(1);
        let outcome = tally.outcome();
        assert_eq!(outcome.leader, 3);
        assert_eq!(outcome.leader_count, 2);
        assert_eq!(outcome.runner_up_count, 1);
        assert!(!outcome.is_contested());
    }

    #[test]
    fn test_reset_clears_previous_cell() {
        let mut tally = NeighborTally::new(1);
        tally.record(1);
        tally.reset();
        let outcome = tally.outcome();
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.leader, 0);
        assert_eq!(outcome.contenders, 0);
    }
}
