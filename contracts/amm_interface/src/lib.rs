#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contractclient, contracttype, Address, Env, String};

/// Strkey of the all-zero ed25519 account. No key can sign for it, so it is
/// treated as the null identity by every contract in this workspace.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Fee tiers accepted by the AMM, in hundredths of a basis point.
pub const FEE_TIERS: [u32; 4] = [100, 500, 3000, 10000];

pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

pub fn is_null(env: &Env, address: &Address) -> bool {
    *address == null_address(env)
}

pub fn is_supported_fee_tier(fee_tier: u32) -> bool {
    FEE_TIERS.contains(&fee_tier)
}

/// A liquidity position minted by the position manager.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub id: u64,
    pub pool: Address,
    pub amount_0: i128,
    pub amount_1: i128,
}

/// AMM factory interface.
/// Returns the pool for `(token_a, token_b, fee_tier)`, creating it first if
/// the factory does not know it yet. The returned address is an opaque handle.
#[contractclient(name = "AmmFactoryClient")]
pub trait AmmFactory {
    fn create_or_get_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32) -> Address;
}

/// Position manager interface.
///
/// `provider` has already delivered `amount_0` of `token_0` to `pool` and has
/// granted the manager an allowance of `amount_1` on `token_1`. The manager
/// pulls `amount_1` from `provider` and mints a position, or traps and leaves
/// `token_1` untouched.
#[contractclient(name = "PositionManagerClient")]
pub trait PositionManager {
    fn deposit_liquidity(
        env: Env,
        provider: Address,
        pool: Address,
        token_0: Address,
        token_1: Address,
        amount_0: i128,
        amount_1: i128,
    ) -> Position;
}
