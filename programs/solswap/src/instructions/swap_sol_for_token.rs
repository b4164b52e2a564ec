use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, state::Pool};

use super::swap_math::compute_swap;

/// Sell lamports to the pool for tokens at x*y=k.
///
/// Priced purely off the pool's current reserves; no position is read or
/// written. Both transfers and the reserve update commit together or not at
/// all.
pub fn handler(ctx: Context<SwapSolForToken>, sol_in: u64) -> Result<()> {
    let outcome = compute_swap(
        sol_in,
        ctx.accounts.pool.sol_reserve,
        ctx.accounts.pool.token_reserve,
    )?;

    // Lamports in.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.trader.to_account_info(),
                to: ctx.accounts.sol_vault.to_account_info(),
            },
        ),
        sol_in,
    )?;

    // Tokens out, signed by the pool account.
    let token_mint = ctx.accounts.pool.token_mint;
    let pool_bump = ctx.accounts.pool.bump;
    let pool_seeds: &[&[u8]] = &[POOL_SEED, token_mint.as_ref(), &[pool_bump]];
    let pool_signer = &[pool_seeds];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.trader_token_account.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            pool_signer,
        ),
        outcome.amount_out,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.sol_reserve = outcome.reserve_in_after;
    pool.token_reserve = outcome.reserve_out_after;

    msg!("Swapped {} lamports for {} tokens", sol_in, outcome.amount_out);
    Ok(())
}

#[derive(Accounts)]
pub struct SwapSolForToken<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [SOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.sol_vault_bump,
    )]
    pub sol_vault: SystemAccount<'info>,

    #[account(
        mut,
        constraint = token_vault.key() == pool.token_vault,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = trader_token_account.owner == trader.key(),
        constraint = trader_token_account.mint == pool.token_mint,
    )]
    pub trader_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
