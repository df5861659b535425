pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("H5UCDyN6D6gC8grZfGC4Vm7L76FJLxmujadjxshnEYsB");

#[program]
pub mod subscription_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    pub fn create_service(ctx: Context<CreateService>, price: u64, period: i64) -> Result<u64> {
        ctx.accounts.create_service(price, period, &ctx.bumps)
    }

    pub fn subscribe(ctx: Context<Subscribe>, service_id: u64, payment: u64) -> Result<()> {
        ctx.accounts.subscribe(service_id, payment, &ctx.bumps)
    }

    pub fn is_subscribed(
        ctx: Context<IsSubscribed>,
        service_id: u64,
        identity: Pubkey,
    ) -> Result<bool> {
        ctx.accounts.is_subscribed(service_id, identity)
    }

    pub fn gift_subscription(
        ctx: Context<GiftSubscription>,
        service_id: u64,
        recipient: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .gift_subscription(service_id, recipient, &ctx.bumps)
    }

    pub fn pause_service(ctx: Context<ManageService>, service_id: u64) -> Result<()> {
        ctx.accounts.pause_service(service_id)
    }

    pub fn resume_service(ctx: Context<ManageService>, service_id: u64) -> Result<()> {
        ctx.accounts.resume_service(service_id)
    }

    pub fn change_price(
        ctx: Context<ManageService>,
        service_id: u64,
        new_price: u64,
    ) -> Result<()> {
        ctx.accounts.change_price(service_id, new_price)
    }

    pub fn withdraw(ctx: Context<Withdraw>, service_id: u64) -> Result<()> {
        ctx.accounts.withdraw(service_id)
    }
}
