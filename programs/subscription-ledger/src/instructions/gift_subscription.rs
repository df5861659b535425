use crate::{constants::*, events::SubscriptionGifted, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(service_id: u64, recipient: Pubkey)]
pub struct GiftSubscription<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            service_id.to_le_bytes().as_ref(),
            sender.key().as_ref()
        ],
        bump = sender_subscription.bump
    )]
    pub sender_subscription: Account<'info, Subscription>,

    #[account(
        init_if_needed,
        payer = sender,
        space = DISCRIMINATOR_LEN + Subscription::INIT_SPACE,
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            service_id.to_le_bytes().as_ref(),
            recipient.as_ref()
        ],
        bump
    )]
    pub recipient_subscription: Account<'info, Subscription>,

    pub system_program: Program<'info, System>,
}

impl<'info> GiftSubscription<'info> {
    pub fn gift_subscription(
        &mut self,
        service_id: u64,
        recipient: Pubkey,
        bumps: &GiftSubscriptionBumps,
    ) -> Result<()> {
        self.recipient_subscription.open_if_new(
            service_id,
            recipient,
            bumps.recipient_subscription,
        );

        let now = Clock::get()?.unix_timestamp;
        let expiry = self
            .sender_subscription
            .gift_to(&mut self.recipient_subscription, now)?;

        emit!(SubscriptionGifted {
            service_id,
            from: self.sender.key(),
            to: recipient,
            expiry,
        });

        msg!(
            "User {} gifted service {} access to {} until {}",
            self.sender.key(),
            service_id,
            recipient,
            expiry
        );

        Ok(())
    }
}
