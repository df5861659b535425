use crate::{constants::*, events::ServiceCreated, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CreateService<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = owner,
        space = DISCRIMINATOR_LEN + Service::INIT_SPACE,
        seeds = [
            SERVICE_SEED.as_bytes(),
            ledger.service_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub service: Account<'info, Service>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateService<'info> {
    pub fn create_service(
        &mut self,
        price: u64,
        period: i64,
        bumps: &CreateServiceBumps,
    ) -> Result<u64> {
        let service_id = self.ledger.allocate_service_id()?;

        self.service.set_inner(Service::new(
            service_id,
            self.owner.key(),
            price,
            period,
            bumps.service,
        )?);

        emit!(ServiceCreated {
            service_id,
            owner: self.owner.key(),
            price,
            period,
        });

        msg!(
            "Service {} created by {} at {} SOL per {} days",
            service_id,
            self.owner.key(),
            price as f64 / 1_000_000_000.0,
            period as f64 / SECONDS_PER_DAY as f64
        );

        Ok(service_id)
    }
}
