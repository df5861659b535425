use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(service_id: u64, identity: Pubkey)]
pub struct IsSubscribed<'info> {
    /// CHECK: Address is pinned by the seeds; the account may not exist yet,
    /// in which case the identity has never subscribed.
    #[account(
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            service_id.to_le_bytes().as_ref(),
            identity.as_ref()
        ],
        bump
    )]
    pub subscription: UncheckedAccount<'info>,
}

impl<'info> IsSubscribed<'info> {
    pub fn is_subscribed(&self, service_id: u64, identity: Pubkey) -> Result<bool> {
        let now = Clock::get()?.unix_timestamp;
        let data = self.subscription.try_borrow_data()?;
        let active = Subscription::active_in_account(&data[..], now)?;

        msg!(
            "User {} subscription to service {}: {}",
            identity,
            service_id,
            if active { "ACTIVE" } else { "INACTIVE" }
        );

        Ok(active)
    }
}
