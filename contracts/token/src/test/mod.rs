#![cfg(test)]

// ---------------------------------------------------------------------------
// Token test suite
//
// 1. ledger     — supply, balances, allowances, conservation
// 2. access     — owner gate and ownership transfer
// 3. registry   — pool creation against the mock factory
// 4. seeder     — liquidity seeding against the mock position manager
// 5. scenarios  — end-to-end deployment flows
// 6. errors     — error grouping
// ---------------------------------------------------------------------------


use dlat_mock_amm::{MockFactory, MockFactoryClient, MockPositionManager, MockPositionManagerClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String, Symbol, TryFromVal,
};

use crate::{DlatToken, DlatTokenClient};

/// 10_000 whole tokens at 18 decimals.
pub const INITIAL_SUPPLY: i128 = 10_000 * ONE;
pub const ONE: i128 = 1_000_000_000_000_000_000;
pub const FEE_TIER: u32 = 3000;

pub struct Setup<'a> {
    pub env: Env,
    pub token: DlatTokenClient<'a>,
    pub token_id: Address,
    pub owner: Address,
    pub factory: MockFactoryClient<'a>,
    pub manager: MockPositionManagerClient<'a>,
    pub manager_id: Address,
    /// Stellar asset standing in for WETH.
    pub weth: Address,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let factory_id = env.register_contract(None, MockFactory);
        let manager_id = env.register_contract(None, MockPositionManager);
        let token_id = env.register_contract(None, DlatToken);
        let token = DlatTokenClient::new(&env, &token_id);

        token.initialize(
            &owner,
            &INITIAL_SUPPLY,
            &factory_id,
            &manager_id,
            &String::from_str(&env, "Decent Lab Assignment Token"),
            &String::from_str(&env, "DLAT"),
        );

        let weth_admin = Address::generate(&env);
        let weth = env.register_stellar_asset_contract_v2(weth_admin).address();

        Setup {
            factory: MockFactoryClient::new(&env, &factory_id),
            manager: MockPositionManagerClient::new(&env, &manager_id),
            env,
            token,
            token_id,
            owner,
            manager_id,
            weth,
        }
    }

    pub fn weth_client(&self) -> TokenClient<'a> {
        TokenClient::new(&self.env, &self.weth)
    }

    pub fn mint_weth(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.weth).mint(to, &amount);
    }

    /// Registers the WETH pool at the default fee tier and returns its handle.
    pub fn create_weth_pool(&self) -> Address {
        self.token.create_pool(&self.owner, &self.weth, &FEE_TIER)
    }

    /// Moves `amount_0` DLAT from the owner and mints `amount_1` WETH into
    /// the token contract so it can seed liquidity.
    pub fn fund_contract(&self, amount_0: i128, amount_1: i128) {
        self.token.transfer(&self.owner, &self.token_id, &amount_0);
        self.mint_weth(&self.token_id, amount_1);
    }
}

/// Number of events published by `emitter` whose first topic is `name`.
///
/// The stand-in WETH asset publishes its own SEP-41 events, so filtering by
/// emitter is required.
pub fn count_events(env: &Env, emitter: &Address, name: &str) -> u32 {
    let expected = Symbol::new(env, name);
    let mut count = 0;
    for (contract, topics, _) in env.events().all().iter() {
        if contract != *emitter {
            continue;
        }
        let first = match topics.get(0) {
            Some(topic) => topic,
            None => continue,
        };
        if Symbol::try_from_val(env, &first).map(|s| s == expected).unwrap_or(false) {
            count += 1;
        }
    }
    count
}
