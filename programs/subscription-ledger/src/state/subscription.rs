use crate::error::ErrorCode;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Subscription {
    pub service_id: u64,
    pub subscriber: Pubkey,
    pub expiry: i64, // Unix timestamp; 0 until the first payment or gift
    pub bump: u8,
}

/// Expiry after paying for one more period.
///
/// Time left on a running subscription is kept, so paying before expiry
/// stacks the new period on top of the old expiry. A lapsed (or never
/// started) subscription restarts from `now`.
pub fn extended_expiry(current_expiry: i64, now: i64, period: i64) -> Result<i64> {
    current_expiry
        .max(now)
        .checked_add(period)
        .ok_or_else(|| error!(ErrorCode::ArithmeticOverflow))
}

impl Subscription {
    /// Stamps a freshly created record with its key. Existing records are left alone.
    pub fn open_if_new(&mut self, service_id: u64, subscriber: Pubkey, bump: u8) {
        if self.subscriber == Pubkey::default() {
            self.service_id = service_id;
            self.subscriber = subscriber;
            self.bump = bump;
        }
    }

    pub fn is_active(&self, now: i64) -> bool {
        self.expiry > now
    }

    /// Status read straight from raw account data. An account that was never
    /// created has no data and counts as not subscribed.
    pub fn active_in_account(data: &[u8], now: i64) -> Result<bool> {
        if data.is_empty() {
            return Ok(false);
        }
        let mut buf = data;
        Ok(Self::try_deserialize(&mut buf)?.is_active(now))
    }

    pub fn extend(&mut self, now: i64, period: i64) -> Result<i64> {
        self.expiry = extended_expiry(self.expiry, now, period)?;
        Ok(self.expiry)
    }

    /// Applies a gifted expiry. A recipient already holding a later expiry
    /// keeps it, so a gift never shortens access.
    pub fn receive_gift(&mut self, expiry: i64) -> i64 {
        self.expiry = self.expiry.max(expiry);
        self.expiry
    }

    /// Shares this subscription's expiry with `recipient` without touching our own.
    pub fn gift_to(&self, recipient: &mut Subscription, now: i64) -> Result<i64> {
        require_keys_neq!(recipient.subscriber, self.subscriber, ErrorCode::SelfGift);
        require!(self.is_active(now), ErrorCode::SubscriptionNotActive);

        Ok(recipient.receive_gift(self.expiry))
    }
}
