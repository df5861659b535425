use crate::{constants::*, events::Subscribed, state::*};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

#[derive(Accounts)]
#[instruction(service_id: u64)]
pub struct Subscribe<'info> {
    #[account(mut)]
    pub subscriber: Signer<'info>,

    #[account(
        mut,
        seeds = [SERVICE_SEED.as_bytes(), service_id.to_le_bytes().as_ref()],
        bump = service.bump
    )]
    pub service: Account<'info, Service>,

    #[account(
        init_if_needed,
        payer = subscriber,
        space = DISCRIMINATOR_LEN + Subscription::INIT_SPACE,
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            service_id.to_le_bytes().as_ref(),
            subscriber.key().as_ref()
        ],
        bump
    )]
    pub subscription: Account<'info, Subscription>,

    pub system_program: Program<'info, System>,
}

impl<'info> Subscribe<'info> {
    pub fn subscribe(
        &mut self,
        service_id: u64,
        payment: u64,
        bumps: &SubscribeBumps,
    ) -> Result<()> {
        // Rejects paused services and any amount other than the price
        self.service.accept_payment(payment)?;

        // Payments sit on the service account until the owner withdraws them
        let ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.subscriber.to_account_info(),
                to: self.service.to_account_info(),
            },
        );
        transfer(ctx, payment)?;

        let subscription = &mut self.subscription;
        subscription.open_if_new(service_id, self.subscriber.key(), bumps.subscription);

        let now = Clock::get()?.unix_timestamp;
        let expiry = subscription.extend(now, self.service.period)?;

        emit!(Subscribed {
            service_id,
            subscriber: self.subscriber.key(),
            expiry,
        });

        msg!(
            "User {} paid {} SOL for service {}, access until {} (balance: {} SOL)",
            self.subscriber.key(),
            payment as f64 / 1_000_000_000.0,
            service_id,
            expiry,
            self.service.balance as f64 / 1_000_000_000.0
        );

        Ok(())
    }
}
