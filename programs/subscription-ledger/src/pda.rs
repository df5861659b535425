use crate::constants::*;
use anchor_lang::prelude::*;

// Client-side address derivation for the ledger, service and subscription PDAs

pub fn ledger_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_SEED.as_bytes()], &crate::ID)
}

pub fn service_address(service_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SERVICE_SEED.as_bytes(), service_id.to_le_bytes().as_ref()],
        &crate::ID,
    )
}

pub fn subscription_address(service_id: u64, subscriber: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SUBSCRIPTION_SEED.as_bytes(),
            service_id.to_le_bytes().as_ref(),
            subscriber.as_ref(),
        ],
        &crate::ID,
    )
}
