use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, state::Pool};

use super::swap_math::compute_swap;

/// Sell tokens to the pool for lamports. Mirror of `swap_sol_for_token`.
pub fn handler(ctx: Context<SwapTokenForSol>, token_in: u64) -> Result<()> {
    let outcome = compute_swap(
        token_in,
        ctx.accounts.pool.token_reserve,
        ctx.accounts.pool.sol_reserve,
    )?;

    // Tokens in.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.trader_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.trader.to_account_info(),
            },
        ),
        token_in,
    )?;

    // Lamports out of the PDA vault under its own seeds.
    let pool_key = ctx.accounts.pool.key();
    let sol_vault_bump = ctx.accounts.pool.sol_vault_bump;
    let vault_seeds: &[&[u8]] = &[SOL_VAULT_SEED, pool_key.as_ref(), &[sol_vault_bump]];
    let vault_signer = &[vault_seeds];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.sol_vault.to_account_info(),
                to: ctx.accounts.trader.to_account_info(),
            },
            vault_signer,
        ),
        outcome.amount_out,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.token_reserve = outcome.reserve_in_after;
    pool.sol_reserve = outcome.reserve_out_after;

    msg!("Swapped {} tokens for {} lamports", token_in, outcome.amount_out);
    Ok(())
}

#[derive(Accounts)]
pub struct SwapTokenForSol<'info> {
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
