use anchor_lang::prelude::*;

use crate::{error::SwapError, math};

// ─── Pool ──────────────────────────────────────────────────────────────────
// One pool per token mint. The reserve counters mirror the lamports held by
// sol_vault and the tokens held by token_vault; every instruction moves funds
// and updates the counters inside the same transaction, so the mirror never
// drifts.
#[account]
pub struct Pool {
    /// Signer that created the pool. Recorded only; no power over the funds.
    pub authority: Pubkey,      // 32
    pub token_mint: Pubkey,     // 32
    /// PDA system account custodying the pool's lamports
    pub sol_vault: Pubkey,      // 32
    /// Token account owned by the pool account itself
    pub token_vault: Pubkey,    // 32
    pub sol_reserve: u64,       // 8
    pub token_reserve: u64,     // 8
    pub bump: u8,               // 1
    pub sol_vault_bump: u8,     // 1
}

impl Pool {
    // 8 discriminator + 32+32+32+32+8+8+1+1 = 154
    pub const LEN: usize = 154;

    /// Raise both reserves by the deposited amounts.
    pub fn credit_reserves(&mut self, sol_amount: u64, token_amount: u64) -> Result<()> {
        let sol_reserve = math::add(self.sol_reserve, sol_amount)?;
        let token_reserve = math::add(self.token_reserve, token_amount)?;
        self.sol_reserve = sol_reserve;
        self.token_reserve = token_reserve;
        Ok(())
    }

    /// Lower both reserves by the withdrawn amounts. Rejects withdrawals the
    /// reserves cannot cover, and withdrawals that would zero exactly one
    /// side: a one-sided reserve has no defined price.
    pub fn debit_reserves(&mut self, sol_amount: u64, token_amount: u64) -> Result<()> {
        require!(sol_amount <= self.sol_reserve, SwapError::InsufficientReserve);
        require!(
            token_amount <= self.token_reserve,
            SwapError::InsufficientReserve
        );
        let sol_reserve = math::sub(self.sol_reserve, sol_amount)?;
        let token_reserve = math::sub(self.token_reserve, token_amount)?;
        require!(
            (sol_reserve == 0) == (token_reserve == 0),
            SwapError::InsufficientReserve
        );
        self.sol_reserve = sol_reserve;
        self.token_reserve = token_reserve;
        Ok(())
    }
}

// ─── LpPosition ────────────────────────────────────────────────────────────
// One provider's cumulative net contribution to a single pool. Created on the
// provider's first deposit and reused for the rest of its life. Withdrawals
// are capped by what this record says the provider put in, not by the pool's
// aggregate reserves; swaps never touch it.
#[account]
pub struct LpPosition {
    pub owner: Pubkey,          // 32
    /// Owning pool, for lookup only
    pub pool: Pubkey,           // 32
    pub sol_contributed: u64,   // 8
    pub token_contributed: u64, // 8
    pub bump: u8,               // 1
}

impl LpPosition {
    // 8 + 32+32+8+8+1 = 89
    pub const LEN: usize = 89;

    pub fn record_deposit(&mut self, sol_amount: u64, token_amount: u64) -> Result<()> {
        let sol_contributed = math::add(self.sol_contributed, sol_amount)?;
        let token_contributed = math::add(self.token_contributed, token_amount)?;
        self.sol_contributed = sol_contributed;
        self.token_contributed = token_contributed;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, sol_amount: u64, token_amount: u64) -> Result<()> {
        require!(
            sol_amount <= self.sol_contributed,
            SwapError::InsufficientPosition
        );
        require!(
            token_amount <= self.token_contributed,
            SwapError::InsufficientPosition
        );
        self.sol_contributed = math::sub(self.sol_contributed, sol_amount)?;
        self.token_contributed = math::sub(self.token_contributed, token_amount)?;
        Ok(())
    }
}
