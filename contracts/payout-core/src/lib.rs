#![no_std]
//! # Payout Core
//!
//! Shared state machine behind the grant-matching payout contracts. A round
//! holds pooled donor funds in a single token and releases each grantee's
//! amount exactly once, to the grantee, under two privileged roles:
//!
//! - **owner** defines payouts, locks the registry, enables payouts, resets
//! - **funder** deposits and sweeps the pooled capital
//!
//! ```text
//! Draft ──finalize──▶ Finalized ──enable_payouts──▶ Funded
//!   ▲                                                  │
//!   └──────────────────── reset (round + 1) ───────────┘
//! ```
//!
//! Two registries plug into the same claim ledger through [`ledger::Registry`]:
//!
//! - [`mapping::MappingRegistry`]: explicit recipient -> amount table. A
//!   repeated claim is a successful no-op.
//! - [`merkle::MerkleRegistry`]: a committed root; each claim carries a
//!   membership proof. A repeated claim fails with `AlreadyClaimed`.
//!
//! Claims are permissionless: anyone may submit one, value always moves to
//! the recipient recorded in the registry.

pub mod access;
pub mod custody;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod mapping;
pub mod merkle;
pub mod reentrancy_guard;
pub mod storage;

pub use errors::Error;

#[cfg(test)]
mod test_merkle;
