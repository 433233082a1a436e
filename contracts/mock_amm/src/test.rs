use dlat_amm_interface::null_address;
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use crate::{
    DepositBehaviour, FactoryBehaviour, MockFactory, MockFactoryClient, MockPositionManager,
    MockPositionManagerClient,
};

fn create_token(env: &Env, admin: &Address, recipient: &Address, amount: i128) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone()).address();
    StellarAssetClient::new(env, &token_id).mint(recipient, &amount);
    token_id
}

#[test]
fn factory_returns_same_pool_for_either_token_order() {
    let env = Env::default();
    let factory = MockFactoryClient::new(&env, &env.register_contract(None, MockFactory));
    let token_a = Address::generate(&env);
    let token_b = Address::generate(&env);

    let first = factory.create_or_get_pool(&token_a, &token_b, &3000);
    let again = factory.create_or_get_pool(&token_b, &token_a, &3000);

    assert_eq!(first, again);
    assert_eq!(factory.pools_created(), 1);
    assert_eq!(factory.get_pool(&token_a, &token_b, &3000), Some(first));
}

#[test]
fn factory_separates_fee_tiers() {
    let env = Env::default();
    let factory = MockFactoryClient::new(&env, &env.register_contract(None, MockFactory));
    let token_a = Address::generate(&env);
    let token_b = Address::generate(&env);

    let low = factory.create_or_get_pool(&token_a, &token_b, &500);
    let mid = factory.create_or_get_pool(&token_a, &token_b, &3000);

    assert_ne!(low, mid);
    assert_eq!(factory.pools_created(), 2);
}

#[test]
fn factory_rejecting_traps() {
    let env = Env::default();
    let factory = MockFactoryClient::new(&env, &env.register_contract(None, MockFactory));
    factory.set_factory_behaviour(&FactoryBehaviour::Reject);

    let result =
        factory.try_create_or_get_pool(&Address::generate(&env), &Address::generate(&env), &3000);
    assert!(result.is_err());
    assert_eq!(factory.pools_created(), 0);
}

#[test]
fn factory_null_handle_mode() {
    let env = Env::default();
    let factory = MockFactoryClient::new(&env, &env.register_contract(None, MockFactory));
    factory.set_factory_behaviour(&FactoryBehaviour::NullHandle);

    let pool = factory.create_or_get_pool(&Address::generate(&env), &Address::generate(&env), &3000);
    assert_eq!(pool, null_address(&env));
}

#[test]
fn factory_echo_modes() {
    let env = Env::default();
    let factory = MockFactoryClient::new(&env, &env.register_contract(None, MockFactory));
    let token_a = Address::generate(&env);
    let token_b = Address::generate(&env);

    factory.set_factory_behaviour(&FactoryBehaviour::EchoTokenA);
    assert_eq!(factory.create_or_get_pool(&token_a, &token_b, &3000), token_a);

    factory.set_factory_behaviour(&FactoryBehaviour::EchoTokenB);
    assert_eq!(factory.create_or_get_pool(&token_a, &token_b, &3000), token_b);
    assert_eq!(factory.pools_created(), 0);
}

#[test]
fn position_manager_pulls_counter_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let provider = Address::generate(&env);
    let pool = Address::generate(&env);
    let token_0 = Address::generate(&env);
    let token_1 = create_token(&env, &admin, &provider, 1_000);

    let manager_id = env.register_contract(None, MockPositionManager);
    let manager = MockPositionManagerClient::new(&env, &manager_id);

    let asset = TokenClient::new(&env, &token_1);
    asset.approve(&provider, &manager_id, &400, &(env.ledger().sequence() + 100));

    let position = manager.deposit_liquidity(&provider, &pool, &token_0, &token_1, &250, &400);

    assert_eq!(position.id, 0);
    assert_eq!(position.pool, pool);
    assert_eq!((position.amount_0, position.amount_1), (250, 400));
    assert_eq!(asset.balance(&pool), 400);
    assert_eq!(asset.balance(&provider), 600);
    assert_eq!(manager.deposit_count(), 1);
    assert_eq!(manager.position(&0), Some(position));
}

#[test]
fn position_manager_rejecting_moves_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let provider = Address::generate(&env);
    let pool = Address::generate(&env);
    let token_1 = create_token(&env, &admin, &provider, 1_000);

    let manager_id = env.register_contract(None, MockPositionManager);
    let manager = MockPositionManagerClient::new(&env, &manager_id);
    manager.set_deposit_behaviour(&DepositBehaviour::Reject);

    let asset = TokenClient::new(&env, &token_1);
    asset.approve(&provider, &manager_id, &400, &(env.ledger().sequence() + 100));

    let result = manager.try_deposit_liquidity(
        &provider,
        &pool,
        &Address::generate(&env),
        &token_1,
        &250,
        &400,
    );

    assert!(result.is_err());
    assert_eq!(asset.balance(&provider), 1_000);
    assert_eq!(manager.deposit_count(), 0);
}
