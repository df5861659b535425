use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Authorization errors
    #[msg("Not service owner")]
    Unauthorized,

    // Payment errors
    #[msg("Payment must equal the service price")]
    InvalidPayment,

    // Service errors
    #[msg("Service is paused")]
    ServicePaused,
    #[msg("Service period must be positive")]
    InvalidPeriod,

    // Subscription errors
    #[msg("No active subscription")]
    SubscriptionNotActive,
    #[msg("Cannot gift a subscription to yourself")]
    SelfGift,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

#[cfg(test)]
pub(crate) fn code_of(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
    }
}
