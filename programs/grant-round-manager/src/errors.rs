use anchor_lang::prelude::*;

#[error_code]
pub enum GrantRoundManagerError {
    #[msg("GrantRoundManager: Invalid registry")]
    InvalidRegistry,
    #[msg("GrantRoundManager: Invalid registry response")]
    InvalidRegistryResponse,
    #[msg("GrantRoundManager: Invalid router")]
    InvalidRouter,
    #[msg("GrantRoundManager: Invalid token")]
    InvalidToken,
    #[msg("GrantRoundManager: Invalid donation vault")]
    InvalidDonationVault,
    #[msg("GrantRoundManager: Invalid matching token")]
    InvalidMatchingToken,
    #[msg("GrantRound: Start time must be before end time")]
    InvalidTimeRange,
    #[msg("GrantRound: Meta pointer too long")]
    MetaPtrTooLong,
    #[msg("GrantRoundManager: Must specify at least one round")]
    NoRounds,
    #[msg("GrantRoundManager: Grant does not exist in registry")]
    GrantDoesNotExist,
    #[msg("GrantRoundManager: GrantRound's donation token does not match GrantRoundManager's donation token")]
    DonationTokenMismatch,
    #[msg("GrantRoundManager: GrantRound is not active")]
    GrantRoundNotActive,
    #[msg("GrantRoundManager: GrantRound accounts do not match the requested rounds")]
    GrantRoundAccountMismatch,
    #[msg("GrantRoundManager: Account is not a GrantRound")]
    InvalidGrantRound,
    #[msg("GrantRoundManager: Missing donor token account")]
    MissingDonorTokenAccount,
    #[msg("GrantRoundManager: Missing exchange account")]
    MissingExchangeAccount,
    #[msg("GrantRoundManager: Swap deadline exceeded")]
    DeadlineExceeded,
    #[msg("GrantRoundManager: Fee tier does not match pool")]
    FeeTierMismatch,
    #[msg("GrantRoundManager: Pool does not match donation pair")]
    PoolMismatch,
    #[msg("GrantRoundManager: Insufficient output amount")]
    InsufficientOutputAmount,
    #[msg("GrantRoundManager: Payee token account does not belong to grant payee")]
    InvalidPayeeAccount,
    #[msg("GrantRoundManager: Math overflow")]
    MathOverflow,
}
