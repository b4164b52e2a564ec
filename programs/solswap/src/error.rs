use anchor_lang::prelude::*;

#[error_code]
pub enum SwapError {
    #[msg("Pool already initialized for this mint")]
    AlreadyInitialized,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Withdrawal exceeds recorded contribution")]
    InsufficientPosition,
    #[msg("Withdrawal exceeds pool reserves")]
    InsufficientReserve,
    #[msg("Swap output rounds to zero")]
    InsufficientOutput,
    #[msg("Pool has insufficient liquidity for this trade")]
    InsufficientLiquidity,
}
