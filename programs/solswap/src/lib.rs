/// SolSwap — minimal native-SOL / SPL-token constant-product pool.
///
/// 5 instructions:
///   initialize_pool    — create the pool record and register its two vaults
///   add_liquidity      — deposit SOL + tokens at caller-chosen amounts
///   remove_liquidity   — withdraw up to the caller's recorded contribution
///   swap_sol_for_token — sell lamports into the pool at x*y=k
///   swap_token_for_sol — sell tokens into the pool at x*y=k

// ─── Security contact ─────────────────────────────────────────────────────────

use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name:             "SolSwap",
    project_url:      "https://github.com/solswap-labs/solswap",
    contacts:         "email:security@solswap.dev",
    policy:           "Please report security vulnerabilities by emailing security@solswap.dev. \
                       We aim to respond within 48 hours.",
    source_code:      "https://github.com/solswap-labs/solswap",
    preferred_languages: "en"
}

pub mod constants;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;

use anchor_lang::prelude::*;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("CKKiv6Zt6jEPSToe9VZS5KxjfUgf3aSRKq52RhfAnG6j");

#[program]
pub mod solswap {
    use super::*;

    /// Create the pool for a token mint. Both reserves start at zero.
    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        initialize_pool::handler(ctx)
    }

    /// Deposit SOL and tokens. The amounts are credited verbatim to the
    /// caller's position; the first deposit sets the pool price.
    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        sol_amount: u64,
        token_amount: u64,
    ) -> Result<()> {
        add_liquidity::handler(ctx, sol_amount, token_amount)
    }

    /// Withdraw SOL and tokens, bounded by the caller's recorded contribution.
    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        sol_amount: u64,
        token_amount: u64,
    ) -> Result<()> {
        remove_liquidity::handler(ctx, sol_amount, token_amount)
    }

    /// Sell lamports to the pool for tokens.
    pub fn swap_sol_for_token(ctx: Context<SwapSolForToken>, sol_in: u64) -> Result<()> {
        swap_sol_for_token::handler(ctx, sol_in)
    }

    /// Sell tokens to the pool for lamports.
    pub fn swap_token_for_sol(ctx: Context<SwapTokenForSol>, token_in: u64) -> Result<()> {
        swap_token_for_sol::handler(ctx, token_in)
    }
}
