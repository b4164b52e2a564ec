use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, error::SwapError, state::Pool};

/// Create the pool record for a token mint and register its two vaults.
/// Anyone may initialize; the creator is recorded but keeps no control over
/// the custodied funds. Reserves stay at zero until the first deposit.
pub fn handler(ctx: Context<InitializePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require!(
        pool.token_mint == Pubkey::default(),
        SwapError::AlreadyInitialized
    );

    pool.authority = ctx.accounts.authority.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.sol_vault = ctx.accounts.sol_vault.key();
    pool.token_vault = ctx.accounts.token_vault.key();
    pool.sol_reserve = 0;
    pool.token_reserve = 0;
    pool.bump = ctx.bumps.pool;
    pool.sol_vault_bump = ctx.bumps.sol_vault;

    msg!("Pool initialized: mint={}", pool.token_mint);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_mint: Account<'info, Mint>,

    // init_if_needed plus the freshness guard in the handler, so a second
    // initialize for the same mint fails with the program's own error
    #[account(
        init_if_needed,
        payer = authority,
        space = Pool::LEN,
        seeds = [POOL_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub pool: Account<'info, Pool>,

    /// PDA system account that custodies the pool's lamports
    #[account(
        mut,
        seeds = [SOL_VAULT_SEED, pool.key().as_ref()],
        bump,
    )]
    pub sol_vault: SystemAccount<'info>,

    #[account(
        init,
        payer = authority,
        token::mint = token_mint,
        token::authority = pool,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
