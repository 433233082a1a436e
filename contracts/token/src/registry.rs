use dlat_amm_interface::{is_null, is_supported_fee_tier, AmmFactoryClient};
use soroban_sdk::{log, Address, Env};

use crate::{access, errors::TokenError, events::TokenEvents, storage};

/// Registers the pool for `(counter_asset, fee_tier)` with the AMM factory.
///
/// # Flow
/// 1. Owner check, then local validation (fee tier, counter asset).
/// 2. Duplicate check against the local registry. This runs before the
///    factory is touched, so a key is only ever recorded once even when the
///    factory already knows the pool.
/// 3. Factory call. A freshly created pool and an existing one are both
///    accepted; a trap or an unusable handle is `ExternalCallFailed`.
/// 4. Persist the record and emit `pool_created`.
///
/// Nothing is written before step 4.
pub fn create_pool(
    env: &Env,
    caller: &Address,
    counter_asset: &Address,
    fee_tier: u32,
) -> Result<Address, TokenError> {
    access::require_owner(env, caller)?;

    if !is_supported_fee_tier(fee_tier) {
        return Err(TokenError::InvalidFeeTier);
    }
    let token = env.current_contract_address();
    if *counter_asset == token {
        return Err(TokenError::IdenticalAssets);
    }
    if storage::get_pool(env, counter_asset, fee_tier).is_some() {
        return Err(TokenError::PoolAlreadyExists);
    }

    let config = storage::get_config(env).ok_or(TokenError::NotInitialized)?;
    let factory = AmmFactoryClient::new(env, &config.factory);
    let pool = match factory.try_create_or_get_pool(&token, counter_asset, &fee_tier) {
        Ok(Ok(pool)) => pool,
        _ => {
            log!(env, "factory rejected pool", counter_asset.clone(), fee_tier);
            return Err(TokenError::ExternalCallFailed);
        }
    };

    if is_null(env, &pool) || pool == token || pool == *counter_asset {
        log!(env, "factory returned unusable pool handle", pool);
        return Err(TokenError::ExternalCallFailed);
    }

    storage::set_pool(env, counter_asset, fee_tier, &pool);
    if storage::get_default_fee_tier(env, counter_asset).is_none() {
        storage::set_default_fee_tier(env, counter_asset, fee_tier);
    }
    let count = storage::get_pool_count(env).checked_add(1).ok_or(TokenError::Overflow)?;
    storage::set_pool_count(env, count);

    TokenEvents::pool_created(env, counter_asset, fee_tier, &pool);
    Ok(pool)
}

/// Pool used for seeding against `counter_asset`: the one registered under
/// the first fee tier recorded for that asset.
pub fn resolve_pool(env: &Env, counter_asset: &Address) -> Result<(u32, Address), TokenError> {
    let fee_tier =
        storage::get_default_fee_tier(env, counter_asset).ok_or(TokenError::PoolNotFound)?;
    let pool = storage::get_pool(env, counter_asset, fee_tier).ok_or(TokenError::PoolNotFound)?;
    Ok((fee_tier, pool))
}
