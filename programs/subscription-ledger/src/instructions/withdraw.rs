use crate::{constants::*, events::Withdrawn, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(service_id: u64)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SERVICE_SEED.as_bytes(), service_id.to_le_bytes().as_ref()],
        bump = service.bump
    )]
    pub service: Account<'info, Service>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, service_id: u64) -> Result<()> {
        self.service.authorize(&self.owner.key())?;

        let service_info = self.service.to_account_info();
        let owner_info = self.owner.to_account_info();
        let amount = pay_out(&mut self.service, &service_info, &owner_info)?;

        emit!(Withdrawn {
            service_id,
            owner: self.owner.key(),
            amount,
        });

        msg!(
            "Owner {} withdrew {} SOL from service {}",
            self.owner.key(),
            amount as f64 / 1_000_000_000.0,
            service_id
        );

        Ok(())
    }
}

/// Moves the whole booked balance from the service account to `owner` and
/// returns the amount moved.
///
/// The balance is zeroed before any lamports move. The service account is
/// program-owned, so lamports above its rent reserve are debited directly
/// without a system transfer.
pub fn pay_out<'info>(
    service: &mut Service,
    service_info: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
) -> Result<u64> {
    let amount = service.take_balance();

    service_info.sub_lamports(amount)?;
    owner.add_lamports(amount)?;

    Ok(amount)
}
