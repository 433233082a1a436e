#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod access;
mod errors;
mod events;
mod ledger;
mod registry;
mod seeder;
mod storage;

#[cfg(test)]
mod test;

use dlat_amm_interface::Position;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};
use storage::TokenConfig;

pub use errors::{ErrorKind, TokenError};

/// Fixed-point precision of every amount handled by the ledger.
pub const DECIMALS: u32 = 18;

#[contract]
pub struct DlatToken;

#[contractimpl]
impl DlatToken {
    /// Mints `initial_supply` to `admin`, makes `admin` the owner and pins the
    /// AMM collaborators. Callable once.
    pub fn initialize(
        env: Env,
        admin: Address,
        initial_supply: i128,
        factory: Address,
        position_manager: Address,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if storage::has_config(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();
        ledger::check_nonnegative_amount(initial_supply)?;

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: DECIMALS,
            name,
            symbol,
        });
        storage::set_config(&env, &TokenConfig { factory, position_manager });
        storage::set_owner(&env, &admin);
        ledger::mint_initial(&env, &admin, initial_supply)?;

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ---------- Ledger ----------

    pub fn total_supply(env: Env) -> i128 {
        ledger::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        ledger::transfer(&env, &from, &to, amount)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        ledger::approve(&env, &from, &spender, amount, expiration_ledger)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        ensure_initialized(&env)?;
        ledger::transfer_from(&env, &spender, &from, &to, amount)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        ensure_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        ensure_initialized(&env)?;
        Ok(TokenUtils::new(&env).metadata().get_metadata().symbol)
    }

    // ---------- Ownership ----------

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        access::owner(&env)
    }

    pub fn change_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), TokenError> {
        access::change_owner(&env, &caller, &new_owner)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ---------- Pools ----------

    pub fn create_pool(
        env: Env,
        caller: Address,
        counter_asset: Address,
        fee_tier: u32,
    ) -> Result<Address, TokenError> {
        let pool = registry::create_pool(&env, &caller, &counter_asset, fee_tier)?;
        storage::extend_instance_ttl(&env);
        Ok(pool)
    }

    pub fn pool(env: Env, counter_asset: Address, fee_tier: u32) -> Option<Address> {
        storage::get_pool(&env, &counter_asset, fee_tier)
    }

    pub fn pool_count(env: Env) -> u32 {
        storage::get_pool_count(&env)
    }

    pub fn seed_liquidity(
        env: Env,
        caller: Address,
        counter_asset: Address,
        amount_0: i128,
        amount_1: i128,
    ) -> Result<Position, TokenError> {
        let position = seeder::seed_liquidity(&env, &caller, &counter_asset, amount_0, amount_1)?;
        storage::extend_instance_ttl(&env);
        Ok(position)
    }

    /// Last position minted for `pool` by `seed_liquidity`.
    pub fn position(env: Env, pool: Address) -> Option<Position> {
        storage::get_position(&env, &pool)
    }

    pub fn factory(env: Env) -> Result<Address, TokenError> {
        storage::get_config(&env).map(|c| c.factory).ok_or(TokenError::NotInitialized)
    }

    pub fn position_manager(env: Env) -> Result<Address, TokenError> {
        storage::get_config(&env)
            .map(|c| c.position_manager)
            .ok_or(TokenError::NotInitialized)
    }
}

fn ensure_initialized(env: &Env) -> Result<(), TokenError> {
    if !storage::has_config(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(())
}
