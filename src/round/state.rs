//! Round state types.

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for an action on the hand at `hand_index`.
    PlayerTurn {
        /// Index of the actionable hand.
        hand_index: usize,
    },
    /// Every hand is finished; the dealer has yet to play.
    DealerTurn,
    /// The round is over and can be settled.
    Settled,
}
