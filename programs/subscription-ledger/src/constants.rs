use anchor_lang::prelude::*;

// Account seeds
#[constant]
pub const LEDGER_SEED: &str = "ledger";

#[constant]
pub const SERVICE_SEED: &str = "service";

#[constant]
pub const SUBSCRIPTION_SEED: &str = "subscription";

// Account layout
pub const DISCRIMINATOR_LEN: usize = 8; // Prefix written by Anchor

// Time
pub const SECONDS_PER_DAY: i64 = 86_400;
