use dlat_amm_interface::is_null;
use soroban_sdk::{log, Address, Env};

use crate::{errors::TokenError, events::TokenEvents, storage};

pub fn owner(env: &Env) -> Result<Address, TokenError> {
    storage::get_owner(env).ok_or(TokenError::NotInitialized)
}

/// Gate for every privileged entry point. Reads state, never writes it.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    let owner = owner(env)?;
    if *caller != owner {
        log!(env, "unauthorized caller", caller.clone());
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// One-step ownership transfer. The new owner takes over immediately and the
/// old owner keeps no rights.
pub fn change_owner(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), TokenError> {
    require_owner(env, caller)?;
    if is_null(env, new_owner) {
        return Err(TokenError::InvalidRecipient);
    }

    storage::set_owner(env, new_owner);
    TokenEvents::owner_changed(env, caller, new_owner);
    Ok(())
}
