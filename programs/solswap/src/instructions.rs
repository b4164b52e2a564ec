#![allow(ambiguous_glob_reexports)]

pub mod add_liquidity;
pub mod initialize_pool;
pub mod remove_liquidity;
pub mod swap_math;
pub mod swap_sol_for_token;
pub mod swap_token_for_sol;

pub use add_liquidity::*;
pub use initialize_pool::*;
pub use remove_liquidity::*;
pub use swap_math::*;
pub use swap_sol_for_token::*;
pub use swap_token_for_sol::*;
