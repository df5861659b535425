use crate::error::ErrorCode;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Service {
    pub id: u64,
    pub owner: Pubkey,
    pub price: u64,  // In lamports
    pub period: i64, // Seconds of access granted per payment
    pub paused: bool,
    pub balance: u64, // Unwithdrawn lamports held on this account above rent
    pub bump: u8,
}

impl Service {
    /// A fresh, active service with an empty balance.
    pub fn new(id: u64, owner: Pubkey, price: u64, period: i64, bump: u8) -> Result<Self> {
        require!(period > 0, ErrorCode::InvalidPeriod);

        Ok(Self {
            id,
            owner,
            price,
            period,
            paused: false,
            balance: 0,
            bump,
        })
    }

    /// Owner check consulted first by every administrative instruction.
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Books a subscription payment. Nothing is mutated unless the service
    /// is active and the payment is exactly the current price.
    pub fn accept_payment(&mut self, payment: u64) -> Result<()> {
        require!(!self.paused, ErrorCode::ServicePaused);
        require!(payment == self.price, ErrorCode::InvalidPayment);

        self.balance = self
            .balance
            .checked_add(payment)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Empties the balance and returns what it held.
    pub fn take_balance(&mut self) -> u64 {
        std::mem::take(&mut self.balance)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Replaces the price and returns the previous one.
    pub fn set_price(&mut self, new_price: u64) -> u64 {
        std::mem::replace(&mut self.price, new_price)
    }
}
