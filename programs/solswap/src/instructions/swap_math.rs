use anchor_lang::prelude::*;

use crate::{error::SwapError, math};

/// Post-trade picture of one constant-product swap, shared by
/// `swap_sol_for_token` and `swap_token_for_sol`.
#[derive(Debug)]
pub struct SwapOutcome {
    /// Units of the output asset owed to the trader.
    pub amount_out: u64,
    /// Input-side reserve once the trade commits.
    pub reserve_in_after: u64,
    /// Output-side reserve once the trade commits.
    pub reserve_out_after: u64,
}

/// Price `amount_in` against the current reserves under x*y=k:
///
/// `amount_out = floor(reserve_out * amount_in / (reserve_in + amount_in))`
///
/// The floor means the reserve product never shrinks across a trade. Rejected
/// trades: zero input, input at or above the standing input-side reserve
/// (caps a single trade's price impact and refuses an input the size of the
/// pool), an output that rounds to zero, and an output that would empty the
/// output-side reserve.
pub fn compute_swap(amount_in: u64, reserve_in: u64, reserve_out: u64) -> Result<SwapOutcome> {
    require!(amount_in > 0, SwapError::ZeroAmount);
    require!(
        reserve_in > 0 && reserve_out > 0,
        SwapError::InsufficientLiquidity
    );
    require!(amount_in < reserve_in, SwapError::InsufficientLiquidity);

    let amount_out = math::mul_div(reserve_out, amount_in, math::add(reserve_in, amount_in)?)?;
    require!(amount_out > 0, SwapError::InsufficientOutput);
    require!(amount_out < reserve_out, SwapError::InsufficientLiquidity);

    Ok(SwapOutcome {
        amount_out,
        reserve_in_after: math::add(reserve_in, amount_in)?,
        reserve_out_after: math::sub(reserve_out, amount_out)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LpPosition, Pool};

    const SOL_RESERVE: u64 = 1_000_000_000;
    const TOKEN_RESERVE: u64 = 100_000_000_000;

    fn assert_swap_err(result: Result<SwapOutcome>, expected: SwapError) {
        let error_code = expected as u32 + 6000;
        assert!(matches!(
            result.unwrap_err(),
            anchor_lang::error::Error::AnchorError(error) if error.error_code_number == error_code
        ));
    }

    #[test]
    fn quotes_at_constant_product() {
        let sol_in = 300_000_000;
        let outcome = compute_swap(sol_in, SOL_RESERVE, TOKEN_RESERVE).unwrap();
        // floor(1e11 * 3e8 / 1.3e9)
        assert_eq!(outcome.amount_out, 23_076_923_076);
        assert!(outcome.amount_out < TOKEN_RESERVE);
        assert_eq!(outcome.reserve_in_after, SOL_RESERVE + sol_in);
        assert_eq!(outcome.reserve_out_after, TOKEN_RESERVE - 23_076_923_076);
    }

    #[test]
    fn reserve_product_never_shrinks() {
        let k_before = SOL_RESERVE as u128 * TOKEN_RESERVE as u128;
        for amount_in in [1_000, 777_777, 300_000_000, 999_999_999] {
            let outcome = compute_swap(amount_in, SOL_RESERVE, TOKEN_RESERVE).unwrap();
            let k_after = outcome.reserve_in_after as u128 * outcome.reserve_out_after as u128;
            assert!(k_after >= k_before, "k shrank for input {}", amount_in);
        }
    }

    #[test]
    fn output_grows_with_input() {
        let mut previous = 0;
        for amount_in in [1_000_000, 10_000_000, 100_000_000, 500_000_000] {
            let outcome = compute_swap(amount_in, SOL_RESERVE, TOKEN_RESERVE).unwrap();
            assert!(outcome.amount_out > previous);
            assert!(outcome.amount_out < TOKEN_RESERVE);
            previous = outcome.amount_out;
        }
    }

    #[test]
    fn zero_input_is_rejected() {
        assert_swap_err(
            compute_swap(0, SOL_RESERVE, TOKEN_RESERVE),
            SwapError::ZeroAmount,
        );
    }

    #[test]
    fn empty_pool_cannot_quote() {
        assert_swap_err(compute_swap(1, 0, 0), SwapError::InsufficientLiquidity);
        assert_swap_err(
            compute_swap(1, SOL_RESERVE, 0),
            SwapError::InsufficientLiquidity,
        );
    }

    #[test]
    fn dust_input_is_rejected_not_executed_for_free() {
        // 1 lamport against deep reserves floors to zero tokens out
        assert_swap_err(
            compute_swap(1, TOKEN_RESERVE, SOL_RESERVE),
            SwapError::InsufficientOutput,
        );
    }

    #[test]
    fn input_matching_reserve_cannot_drain_pool() {
        // selling token_reserve tokens into the pool must fail outright
        assert_swap_err(
            compute_swap(TOKEN_RESERVE, TOKEN_RESERVE, SOL_RESERVE),
            SwapError::InsufficientLiquidity,
        );
        assert_swap_err(
            compute_swap(TOKEN_RESERVE + 1, TOKEN_RESERVE, SOL_RESERVE),
            SwapError::InsufficientLiquidity,
        );
    }

    // End-to-end ledger walk: deposit, trade, withdraw. Reserves stay equal
    // to everything transferred in minus everything transferred out, and the
    // position cap is independent of swap-driven reserve movement.
    #[test]
    fn lifecycle_conserves_value() {
        let mut pool = Pool {
            authority: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            sol_vault: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            sol_reserve: 0,
            token_reserve: 0,
            bump: 254,
            sol_vault_bump: 253,
        };
        let mut lp = LpPosition {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            sol_contributed: 0,
            token_contributed: 0,
            bump: 252,
        };

        lp.record_deposit(SOL_RESERVE, TOKEN_RESERVE).unwrap();
        pool.credit_reserves(SOL_RESERVE, TOKEN_RESERVE).unwrap();

        let sol_in = 300_000_000;
        let outcome = compute_swap(sol_in, pool.sol_reserve, pool.token_reserve).unwrap();
        pool.sol_reserve = outcome.reserve_in_after;
        pool.token_reserve = outcome.reserve_out_after;

        assert_eq!(pool.sol_reserve, SOL_RESERVE + sol_in);
        assert_eq!(pool.token_reserve, TOKEN_RESERVE - outcome.amount_out);

        // the provider's recorded contribution did not move with the swap
        assert_eq!(lp.sol_contributed, SOL_RESERVE);
        assert_eq!(lp.token_contributed, TOKEN_RESERVE);

        // withdrawing the recorded token contribution now exceeds the live
        // token reserve and is refused at the pool
        let err = pool.debit_reserves(0, lp.token_contributed);
        let error_code = SwapError::InsufficientReserve as u32 + 6000;
        assert!(matches!(
            err.unwrap_err(),
            anchor_lang::error::Error::AnchorError(error) if error.error_code_number == error_code
        ));

        lp.record_withdrawal(200_000_000, 10_000_000_000).unwrap();
        pool.debit_reserves(200_000_000, 10_000_000_000).unwrap();
        assert_eq!(pool.sol_reserve, SOL_RESERVE + sol_in - 200_000_000);
        assert_eq!(
            pool.token_reserve,
            TOKEN_RESERVE - outcome.amount_out - 10_000_000_000
        );
    }
}
