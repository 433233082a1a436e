use dlat_amm_interface::Position;
use soroban_sdk::{symbol_short, Address, Env, Symbol};
use soroban_token_sdk::TokenUtils;

pub struct TokenEvents;

impl TokenEvents {
    /// SEP-41 `transfer`. Topics: `("transfer", from, to)`, data: `amount`.
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().transfer(from.clone(), to.clone(), amount);
    }

    /// SEP-41 `mint`. Topics: `("mint", admin, to)`, data: `amount`.
    pub fn mint(env: &Env, admin: &Address, to: &Address, amount: i128) {
        TokenUtils::new(env).events().mint(admin.clone(), to.clone(), amount);
    }

    pub fn approve(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        TokenUtils::new(env).events().approve(
            from.clone(),
            spender.clone(),
            amount,
            expiration_ledger,
        );
    }

    /// Ownership moved. Emitted in the SEP-41 `set_admin` shape so wallets
    /// and indexers already understand it.
    ///
    /// Topics: `("set_admin", old_owner)`, data: `new_owner`.
    pub fn owner_changed(env: &Env, old_owner: &Address, new_owner: &Address) {
        TokenUtils::new(env).events().set_admin(old_owner.clone(), new_owner.clone());
    }

    /// Topics: `("pool_created", counter_asset, fee_tier)`, data: `pool`.
    ///
    /// "pool_created" is 12 chars, over the 9-char `symbol_short!` limit.
    pub fn pool_created(env: &Env, counter_asset: &Address, fee_tier: u32, pool: &Address) {
        env.events().publish(
            (Symbol::new(env, "pool_created"), counter_asset.clone(), fee_tier),
            pool.clone(),
        );
    }

    /// Topics: `("seeded", pool)`, data: `(position_id, amount_0, amount_1)`.
    pub fn liquidity_seeded(env: &Env, position: &Position) {
        env.events().publish(
            (symbol_short!("seeded"), position.pool.clone()),
            (position.id, position.amount_0, position.amount_1),
        );
    }
}
