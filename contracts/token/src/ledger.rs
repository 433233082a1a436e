use dlat_amm_interface::is_null;
use soroban_sdk::{Address, Env};

use crate::{
    errors::TokenError,
    events::TokenEvents,
    storage::{self, AllowanceValue},
};

pub fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    storage::get_balance(env, id)
}

pub fn total_supply(env: &Env) -> i128 {
    storage::get_total_supply(env)
}

/// Credits the whole supply to `to`. Only reachable from `initialize`.
pub fn mint_initial(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    receive_balance(env, to, amount)?;
    storage::set_total_supply(env, amount);
    TokenEvents::mint(env, to, to, amount);
    Ok(())
}

fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, id);
    let updated = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
    storage::set_balance(env, id, updated);
    Ok(())
}

fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    storage::set_balance(env, id, balance - amount);
    Ok(())
}

/// Moves `amount` between two holders without emitting anything.
///
/// The debit and the credit both happen or neither does: every check runs
/// before the first write.
pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    if is_null(env, to) {
        return Err(TokenError::InvalidRecipient);
    }
    if from == to {
        return if storage::get_balance(env, from) < amount {
            Err(TokenError::InsufficientBalance)
        } else {
            Ok(())
        };
    }

    let to_balance = storage::get_balance(env, to);
    to_balance.checked_add(amount).ok_or(TokenError::Overflow)?;

    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    from.require_auth();
    move_balance(env, from, to, amount)?;
    TokenEvents::transfer(env, from, to, amount);
    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    spender.require_auth();
    check_nonnegative_amount(amount)?;
    if is_null(env, to) {
        return Err(TokenError::InvalidRecipient);
    }
    if storage::get_balance(env, from) < amount {
        return Err(TokenError::InsufficientBalance);
    }
    spend_allowance(env, from, spender, amount)?;
    move_balance(env, from, to, amount)?;
    TokenEvents::transfer(env, from, to, amount);
    Ok(())
}

/// Unexpired allowance of `spender` over `from`'s balance.
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let value = storage::get_allowance(env, from, spender);
    if value.expiration_ledger < env.ledger().sequence() {
        0
    } else {
        value.amount
    }
}

/// Writes an allowance without authorization or events.
pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }
    storage::set_allowance(env, from, spender, &AllowanceValue { amount, expiration_ledger });
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    from.require_auth();
    set_allowance(env, from, spender, amount, expiration_ledger)?;
    TokenEvents::approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let available = allowance(env, from, spender);
    if available < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        let value = storage::get_allowance(env, from, spender);
        storage::set_allowance(
            env,
            from,
            spender,
            &AllowanceValue { amount: available - amount, expiration_ledger: value.expiration_ledger },
        );
    }
    Ok(())
}
