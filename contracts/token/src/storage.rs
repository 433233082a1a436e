use dlat_amm_interface::Position;
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 17280;
const PERSISTENT_BUMP_AMOUNT: u32 = 518400;

/// Collaborator addresses, fixed at initialization.
#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub factory: Address,
    pub position_manager: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Owner,
    TotalSupply,
    PoolCount,
    Balance(Address),
    Allowance(Address, Address),
    Pool(Address, u32),
    DefaultFeeTier(Address),
    Position(Address),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<TokenConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().get(&key).unwrap_or_default()
}

/// Allowances live in temporary storage until their expiration ledger.
pub fn set_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, value);

    let sequence = env.ledger().sequence();
    if value.amount > 0 && value.expiration_ledger > sequence {
        let live_for = value.expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn get_pool(env: &Env, counter_asset: &Address, fee_tier: u32) -> Option<Address> {
    let key = DataKey::Pool(counter_asset.clone(), fee_tier);
    env.storage().persistent().get(&key)
}

pub fn set_pool(env: &Env, counter_asset: &Address, fee_tier: u32, pool: &Address) {
    let key = DataKey::Pool(counter_asset.clone(), fee_tier);
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

pub fn get_default_fee_tier(env: &Env, counter_asset: &Address) -> Option<u32> {
    env.storage().persistent().get(&DataKey::DefaultFeeTier(counter_asset.clone()))
}

pub fn set_default_fee_tier(env: &Env, counter_asset: &Address, fee_tier: u32) {
    let key = DataKey::DefaultFeeTier(counter_asset.clone());
    env.storage().persistent().set(&key, &fee_tier);
    extend_persistent_ttl(env, &key);
}

pub fn get_pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::PoolCount).unwrap_or(0)
}

pub fn set_pool_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::PoolCount, &count);
}

pub fn get_position(env: &Env, pool: &Address) -> Option<Position> {
    env.storage().persistent().get(&DataKey::Position(pool.clone()))
}

pub fn set_position(env: &Env, pool: &Address, position: &Position) {
    let key = DataKey::Position(pool.clone());
    env.storage().persistent().set(&key, position);
    extend_persistent_ttl(env, &key);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
