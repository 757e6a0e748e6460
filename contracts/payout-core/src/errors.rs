use soroban_sdk::contracterror;

/// Every failure rejects the whole invocation; the host rolls back all
/// storage writes and token movements made before the error was returned.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller does not hold the role the operation requires.
    Unauthorized = 3,
    /// Registry is locked; no further payout edits this round.
    AlreadyFinalized = 4,
    NotFinalized = 5,
    /// Custody operation attempted while the round is still in Draft, or a
    /// Merkle claim attempted before the root was locked.
    PayoutsNotReady = 6,
    /// Mapping claim attempted before payouts were enabled, or payouts enabled
    /// on an empty contract.
    NotYetFunded = 7,
    AlreadyFunded = 8,
    InvalidProof = 9,
    AlreadyClaimed = 10,
    /// Token movement would be rejected (balance or allowance too low).
    TransferFailed = 11,
    InvalidAmount = 12,
    InvalidOwner = 13,
    NoRootCommitted = 14,
    /// Reset refused: the round has paid some claims but is not settled.
    ClaimsInProgress = 15,
}
