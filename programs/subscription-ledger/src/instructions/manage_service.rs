use crate::{
    constants::*,
    events::{PriceChanged, ServicePaused, ServiceResumed},
    state::*,
};
use anchor_lang::prelude::*;

/// Owner-only administration: pausing, resuming and repricing a service.
#[derive(Accounts)]
#[instruction(service_id: u64)]
pub struct ManageService<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [SERVICE_SEED.as_bytes(), service_id.to_le_bytes().as_ref()],
        bump = service.bump
    )]
    pub service: Account<'info, Service>,
}

impl<'info> ManageService<'info> {
    pub fn pause_service(&mut self, service_id: u64) -> Result<()> {
        self.service.authorize(&self.caller.key())?;
        self.service.set_paused(true);

        emit!(ServicePaused { service_id });
        msg!("Service {} paused by {}", service_id, self.caller.key());

        Ok(())
    }

    pub fn resume_service(&mut self, service_id: u64) -> Result<()> {
        self.service.authorize(&self.caller.key())?;
        self.service.set_paused(false);

        emit!(ServiceResumed { service_id });
        msg!("Service {} resumed by {}", service_id, self.caller.key());

        Ok(())
    }

    pub fn change_price(&mut self, service_id: u64, new_price: u64) -> Result<()> {
        self.service.authorize(&self.caller.key())?;
        let old_price = self.service.set_price(new_price);

        emit!(PriceChanged {
            service_id,
            old_price,
            new_price,
        });

        msg!(
            "Service {} price changed from {} SOL to {} SOL",
            service_id,
            old_price as f64 / 1_000_000_000.0,
            new_price as f64 / 1_000_000_000.0
        );

        Ok(())
    }
}
