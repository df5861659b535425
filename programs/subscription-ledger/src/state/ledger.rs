use crate::error::ErrorCode;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Ledger {
    pub authority: Pubkey,
    // Number of services created so far, which is also the next service id
    pub service_count: u64,
    pub bump: u8,
}

impl Ledger {
    /// Hands out the next dense service id. Ids start at 0 and are never reused.
    pub fn allocate_service_id(&mut self) -> Result<u64> {
        let id = self.service_count;
        self.service_count = id.checked_add(1).ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(id)
    }
}
