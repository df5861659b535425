use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub authority: Pubkey,
}

#[event]
pub struct ServiceCreated {
    pub service_id: u64,
    pub owner: Pubkey,
    pub price: u64,
    pub period: i64,
}

#[event]
pub struct Subscribed {
    pub service_id: u64,
    pub subscriber: Pubkey,
    pub expiry: i64,
}

#[event]
pub struct SubscriptionGifted {
    pub service_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub expiry: i64,
}

#[event]
pub struct ServicePaused {
    pub service_id: u64,
}

#[event]
pub struct ServiceResumed {
    pub service_id: u64,
}

#[event]
pub struct PriceChanged {
    pub service_id: u64,
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct Withdrawn {
    pub service_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
}
