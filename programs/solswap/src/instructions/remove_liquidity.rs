use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    state::{LpPosition, Pool},
};

/// Withdraw SOL and tokens previously contributed by this provider.
///
/// The request is checked against the provider's own recorded contribution
/// first, then against the pool's live reserves. Swaps move reserves without
/// touching positions, so the two bounds can diverge; a contribution the
/// reserves can no longer cover is refused rather than clamped.
pub fn handler(ctx: Context<RemoveLiquidity>, sol_amount: u64, token_amount: u64) -> Result<()> {
    ctx.accounts
        .position
        .record_withdrawal(sol_amount, token_amount)?;
    ctx.accounts
        .pool
        .debit_reserves(sol_amount, token_amount)?;

    // Lamports leave the PDA vault under its own seeds.
    let pool_key = ctx.accounts.pool.key();
    let sol_vault_bump = ctx.accounts.pool.sol_vault_bump;
    let vault_seeds: &[&[u8]] = &[SOL_VAULT_SEED, pool_key.as_ref(), &[sol_vault_bump]];
    let vault_signer = &[vault_seeds];
    if sol_amount > 0 {
        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.sol_vault.to_account_info(),
                    to: ctx.accounts.provider.to_account_info(),
                },
                vault_signer,
            ),
            sol_amount,
        )?;
    }

    // Tokens leave the vault signed by the pool account.
    let token_mint = ctx.accounts.pool.token_mint;
    let pool_bump = ctx.accounts.pool.bump;
    let pool_seeds: &[&[u8]] = &[POOL_SEED, token_mint.as_ref(), &[pool_bump]];
    let pool_signer = &[pool_seeds];
    if token_amount > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.token_vault.to_account_info(),
                    to: ctx.accounts.provider_token_account.to_account_info(),
                    authority: ctx.accounts.pool.to_account_info(),
                },
                pool_signer,
            ),
            token_amount,
        )?;
    }

    msg!("Liquidity removed: sol={} tokens={}", sol_amount, token_amount);
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), provider.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == provider.key(),
        constraint = position.pool == pool.key(),
    )]
    pub position: Account<'info, LpPosition>,

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
        constraint = provider_token_account.owner == provider.key(),
        constraint = provider_token_account.mint == pool.token_mint,
    )]
    pub provider_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
