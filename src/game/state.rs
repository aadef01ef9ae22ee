//! Round phase types.

/// Phase of a round.
///
/// A round moves forward only: `NotStarted`, `Dealing`, `Playing`, `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The deck is built but nothing has been dealt.
    NotStarted,
    /// Initial cards are being dealt.
    Dealing,
    /// House and player are taking turns.
    Playing,
    /// The hole card is revealed and the outcome announced.
    Resolved,
}
