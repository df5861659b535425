use crate::{constants::*, events::LedgerInitialized, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LEN + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED.as_bytes()],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.ledger.set_inner(Ledger {
            authority: self.authority.key(),
            service_count: 0,
            bump: bumps.ledger,
        });

        emit!(LedgerInitialized {
            authority: self.authority.key(),
        });

        msg!(
            "Subscription ledger initialized by authority: {}",
            self.authority.key()
        );

        Ok(())
    }
}
