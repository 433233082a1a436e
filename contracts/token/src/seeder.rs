use dlat_amm_interface::{Position, PositionManagerClient};
use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::{
    access,
    errors::TokenError,
    events::TokenEvents,
    ledger, registry,
    storage::{self, AllowanceValue},
};

/// Ledgers an approval granted to the position manager stays valid.
const APPROVAL_WINDOW_LEDGERS: u32 = 100;

/// Allowances granted to the position manager for one seeding call.
///
/// Both allowances are revoked when the guard goes out of scope, whichever
/// way the call ends, so no approval outlives the deposit it was made for.
struct ApprovalGuard<'a> {
    env: &'a Env,
    counter_asset: TokenClient<'a>,
    holder: Address,
    spender: Address,
}

impl<'a> ApprovalGuard<'a> {
    fn grant(
        env: &'a Env,
        counter_asset: TokenClient<'a>,
        holder: &Address,
        spender: &Address,
        amount_0: i128,
        amount_1: i128,
    ) -> Result<Self, TokenError> {
        let expiration_ledger = env
            .ledger()
            .sequence()
            .checked_add(APPROVAL_WINDOW_LEDGERS)
            .ok_or(TokenError::Overflow)?;

        ledger::set_allowance(env, holder, spender, amount_0, expiration_ledger)?;
        counter_asset.approve(holder, spender, &amount_1, &expiration_ledger);

        Ok(Self { env, counter_asset, holder: holder.clone(), spender: spender.clone() })
    }
}

impl Drop for ApprovalGuard<'_> {
    fn drop(&mut self) {
        storage::set_allowance(self.env, &self.holder, &self.spender, &AllowanceValue::default());
        let sequence = self.env.ledger().sequence();
        self.counter_asset.approve(&self.holder, &self.spender, &0, &sequence);
    }
}

/// Deposits `amount_0` of this token and `amount_1` of `counter_asset` from
/// the contract's own holdings into the registered pool.
///
/// # Flow
/// 1. Owner check and amount validation.
/// 2. Resolve the pool from `counter_asset` and its recorded fee tier.
/// 3. Balance check on both assets. Fails before any collaborator is called.
/// 4. Approve the position manager on both assets. Only the counter-asset
///    allowance is ever used by the manager; the allowance on this token is
///    bookkeeping that bounds step 5.
/// 5. Settle this token's leg into the pool against that allowance. The
///    manager cannot re-enter this contract to pull it itself, so the
///    contract spends the allowance on the manager's behalf.
/// 6. Deposit through the position manager, which pulls the counter asset.
/// 7. On rejection, move the token leg back and fail with
///    `LiquidityDepositFailed`. Approvals are revoked on every exit.
///
/// # Errors
/// | Error                    | Condition                                      |
/// |--------------------------|------------------------------------------------|
/// | `Unauthorized`           | `caller` is not the owner                      |
/// | `InvalidAmount`          | Either amount is zero or negative              |
/// | `PoolNotFound`           | No pool registered for `counter_asset`         |
/// | `InsufficientBalance`    | Contract holds less than requested of either   |
/// | `LiquidityDepositFailed` | Position manager trapped or rejected           |
pub fn seed_liquidity(
    env: &Env,
    caller: &Address,
    counter_asset: &Address,
    amount_0: i128,
    amount_1: i128,
) -> Result<Position, TokenError> {
    access::require_owner(env, caller)?;

    if amount_0 <= 0 || amount_1 <= 0 {
        return Err(TokenError::InvalidAmount);
    }

    let (_fee_tier, pool) = registry::resolve_pool(env, counter_asset)?;
    let config = storage::get_config(env).ok_or(TokenError::NotInitialized)?;

    let contract = env.current_contract_address();
    let counter = TokenClient::new(env, counter_asset);
    if ledger::balance(env, &contract) < amount_0 || counter.balance(&contract) < amount_1 {
        log!(env, "seeding exceeds contract holdings", amount_0, amount_1);
        return Err(TokenError::InsufficientBalance);
    }

    let _approval =
        ApprovalGuard::grant(env, counter, &contract, &config.position_manager, amount_0, amount_1)?;

    ledger::spend_allowance(env, &contract, &config.position_manager, amount_0)?;
    ledger::move_balance(env, &contract, &pool, amount_0)?;

    let manager = PositionManagerClient::new(env, &config.position_manager);
    let position = match manager.try_deposit_liquidity(
        &contract,
        &pool,
        &contract,
        counter_asset,
        &amount_0,
        &amount_1,
    ) {
        Ok(Ok(position)) => position,
        _ => {
            log!(env, "deposit rejected, returning token leg", pool.clone());
            ledger::move_balance(env, &pool, &contract, amount_0)?;
            return Err(TokenError::LiquidityDepositFailed);
        }
    };

    storage::set_position(env, &pool, &position);
    TokenEvents::transfer(env, &contract, &pool, amount_0);
    TokenEvents::liquidity_seeded(env, &position);
    Ok(position)
}
