use soroban_sdk::{contracttype, Address};

/// Storage layout shared by both payout contracts.
///
/// Registry and claim keys carry the round number, so a reset moves the
/// contract onto a fresh namespace instead of clearing entries in place.
/// Round-keyed entries live in persistent storage; instance storage only
/// holds the fixed configuration and lifecycle keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Funder,
    Token,
    Lifecycle,
    ReentrancyGuard,
    MerkleRoot(u32),
    TotalOwed(u32),
    TotalClaimed(u32),
    Payout(u32, Address),
    ClaimedWord(u32, u32),
}

/// Approx. 1 day of ledgers at 5s per ledger.
pub(crate) const LEDGERS_PER_DAY: u32 = 17_280;
