use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    error::SwapError,
    state::{LpPosition, Pool},
};

/// Deposit SOL and tokens into the pool at caller-chosen amounts.
///
/// The first deposit into an empty pool sets the price. Later deposits are
/// taken verbatim as well: the pool does not force the contribution onto the
/// current reserve ratio, it credits exactly what was moved. Both legs land
/// in the vaults within this transaction, and the reserve counters rise by
/// the same amounts recorded on the provider's position.
pub fn handler(ctx: Context<AddLiquidity>, sol_amount: u64, token_amount: u64) -> Result<()> {
    require!(sol_amount > 0 && token_amount > 0, SwapError::ZeroAmount);

    // Move the funds: lamports provider -> sol_vault, tokens provider -> vault.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.provider.to_account_info(),
                to: ctx.accounts.sol_vault.to_account_info(),
            },
        ),
        sol_amount,
    )?;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.provider_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.provider.to_account_info(),
            },
        ),
        token_amount,
    )?;

    // A fresh position still carries the default owner; a re-used record
    // keeps its fields across full withdrawals.
    let position = &mut ctx.accounts.position;
    if position.owner == Pubkey::default() {
        position.owner = ctx.accounts.provider.key();
        position.pool = ctx.accounts.pool.key();
        position.bump = ctx.bumps.position;
    }
    position.record_deposit(sol_amount, token_amount)?;

    ctx.accounts.pool.credit_reserves(sol_amount, token_amount)?;

    msg!("Liquidity added: sol={} tokens={}", sol_amount, token_amount);
    Ok(())
}

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = provider,
        space = LpPosition::LEN,
        seeds = [POSITION_SEED, pool.key().as_ref(), provider.key().as_ref()],
        bump,
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
    pub rent: Sysvar<'info, Rent>,
}
