//! Stream lifecycle.
//!
//! The phase is a function of ledger time until the stream reaches a
//! terminal state, which is then kept regardless of the clock.

use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamStatus {
    Waiting = 0,
    Bootstrapping = 1,
    Active = 2,
    Ended = 3,
    FinalizedStreamed = 4,
    FinalizedRefunded = 5,
    Cancelled = 6,
}

impl StreamStatus {
    /// Terminal states are never overwritten by time-based recomputation.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            StreamStatus::Cancelled
                | StreamStatus::FinalizedStreamed
                | StreamStatus::FinalizedRefunded
        )
    }

    /// Subscriptions and withdrawals are only accepted in these phases.
    pub fn accepts_deposits(self) -> bool {
        matches!(self, StreamStatus::Bootstrapping | StreamStatus::Active)
    }

    pub fn allows_exit(self) -> bool {
        matches!(
            self,
            StreamStatus::Ended
                | StreamStatus::FinalizedStreamed
                | StreamStatus::FinalizedRefunded
                | StreamStatus::Cancelled
        )
    }

    /// Phases from which a cancel can still be issued.
    pub fn is_pre_end(self) -> bool {
        matches!(
            self,
            StreamStatus::Waiting | StreamStatus::Bootstrapping | StreamStatus::Active
        )
    }
}

/// Lifecycle phase at `now`.
///
/// | Window                               | Status          |
/// |--------------------------------------|-----------------|
/// | `now < bootstrapping_start`          | `Waiting`       |
/// | `bootstrapping_start <= now < start` | `Bootstrapping` |
/// | `start <= now < end`                 | `Active`        |
/// | `end <= now`                         | `Ended`         |
///
/// `Cancelled` and both finalized states are returned unchanged.
pub fn derive_status(
    current: StreamStatus,
    now: u64,
    bootstrapping_start_time: u64,
    stream_start_time: u64,
    stream_end_time: u64,
) -> StreamStatus {
    if current.is_terminal() {
        return current;
    }
    if now < bootstrapping_start_time {
        StreamStatus::Waiting
    } else if now < stream_start_time {
        StreamStatus::Bootstrapping
    } else if now < stream_end_time {
        StreamStatus::Active
    } else {
        StreamStatus::Ended
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(current: StreamStatus, now: u64) -> StreamStatus {
        derive_status(current, now, 100, 200, 300)
    }

    #[test]
    fn test_time_driven_transitions() {
        assert_eq!(at(StreamStatus::Waiting, 0), StreamStatus::Waiting);
        assert_eq!(at(StreamStatus::Waiting, 99), StreamStatus::Waiting);
        assert_eq!(at(StreamStatus::Waiting, 100), StreamStatus::Bootstrapping);
        assert_eq!(at(StreamStatus::Waiting, 199), StreamStatus::Bootstrapping);
        assert_eq!(at(StreamStatus::Bootstrapping, 200), StreamStatus::Active);
        assert_eq!(at(StreamStatus::Active, 299), StreamStatus::Active);
        assert_eq!(at(StreamStatus::Active, 300), StreamStatus::Ended);
        assert_eq!(at(StreamStatus::Waiting, u64::MAX), StreamStatus::Ended);
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        for terminal in [
            StreamStatus::Cancelled,
            StreamStatus::FinalizedStreamed,
            StreamStatus::FinalizedRefunded,
        ] {
            assert_eq!(at(terminal, 0), terminal);
            assert_eq!(at(terminal, 250), terminal);
            assert_eq!(at(terminal, u64::MAX), terminal);
        }
    }

    #[test]
    fn test_ended_is_recomputed_not_sticky() {
        // Ended is time-derived: the stored value does not pin it.
        assert_eq!(at(StreamStatus::Ended, 250), StreamStatus::Active);
    }

    #[test]
    fn test_phase_predicates() {
        assert!(StreamStatus::Bootstrapping.accepts_deposits());
        assert!(StreamStatus::Active.accepts_deposits());
        assert!(!StreamStatus::Waiting.accepts_deposits());
        assert!(!StreamStatus::Ended.accepts_deposits());

        assert!(StreamStatus::Ended.allows_exit());
        assert!(StreamStatus::Cancelled.allows_exit());
        assert!(!StreamStatus::Active.allows_exit());

        assert!(StreamStatus::Active.is_pre_end());
        assert!(!StreamStatus::Ended.is_pre_end());
    }
}
