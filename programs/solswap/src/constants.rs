/// PDA seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const SOL_VAULT_SEED: &[u8] = b"sol_vault";
pub const POSITION_SEED: &[u8] = b"position";
