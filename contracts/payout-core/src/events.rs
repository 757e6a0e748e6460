use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

pub const EVENT_VERSION: u32 = 1;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutAdded {
    pub version: u32,
    pub round: u32,
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_payout_added(env: &Env, event: PayoutAdded) {
    let topics = (symbol_short!("p_add"), event.recipient.clone());
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Finalized {
    pub version: u32,
    pub round: u32,
    pub timestamp: u64,
}

pub fn emit_finalized(env: &Env, event: Finalized) {
    let topics = (symbol_short!("final"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub version: u32,
    pub round: u32,
    pub balance: i128,
    pub timestamp: u64,
}

pub fn emit_funded(env: &Env, event: Funded) {
    let topics = (symbol_short!("funded"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsAdded {
    pub version: u32,
    pub funder: Address,
    pub amount: i128,
}

pub fn emit_funds_added(env: &Env, event: FundsAdded) {
    let topics = (symbol_short!("f_add"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingWithdrawn {
    pub version: u32,
    pub funder: Address,
    pub amount: i128,
}

pub fn emit_funding_withdrawn(env: &Env, event: FundingWithdrawn) {
    let topics = (symbol_short!("f_wd"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutClaimed {
    pub version: u32,
    pub round: u32,
    pub recipient: Address,
    pub amount: i128,
}

pub fn emit_payout_claimed(env: &Env, event: PayoutClaimed) {
    let topics = (symbol_short!("claimed"), event.recipient.clone());
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RootCommitted {
    pub version: u32,
    pub round: u32,
    pub root: BytesN<32>,
}

pub fn emit_root_committed(env: &Env, event: RootCommitted) {
    let topics = (symbol_short!("root"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundReset {
    pub version: u32,
    pub previous_round: u32,
    pub round: u32,
}

pub fn emit_round_reset(env: &Env, event: RoundReset) {
    let topics = (symbol_short!("reset"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub version: u32,
    pub previous_owner: Address,
    pub new_owner: Option<Address>,
}

pub fn emit_ownership_transferred(env: &Env, event: OwnershipTransferred) {
    let topics = (symbol_short!("owner"),);
    env.events().publish(topics, event);
}
