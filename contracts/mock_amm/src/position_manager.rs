use dlat_amm_interface::{Position, PositionManager};
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, token::TokenClient, Address, Env,
};

use crate::{DepositBehaviour, MockAmmError};

#[contracttype]
#[derive(Clone, Debug)]
pub enum ManagerKey {
    Behaviour,
    NextId,
    Position(u64),
}

#[contract]
pub struct MockPositionManager;

#[contractimpl]
impl MockPositionManager {
    pub fn set_deposit_behaviour(env: Env, behaviour: DepositBehaviour) {
        env.storage().instance().set(&ManagerKey::Behaviour, &behaviour);
    }

    /// Number of deposits that went through.
    pub fn deposit_count(env: Env) -> u64 {
        env.storage().instance().get(&ManagerKey::NextId).unwrap_or(0)
    }

    pub fn position(env: Env, id: u64) -> Option<Position> {
        env.storage().instance().get(&ManagerKey::Position(id))
    }
}

#[contractimpl]
impl PositionManager for MockPositionManager {
    fn deposit_liquidity(
        env: Env,
        provider: Address,
        pool: Address,
        _token_0: Address,
        token_1: Address,
        amount_0: i128,
        amount_1: i128,
    ) -> Position {
        let behaviour = env
            .storage()
            .instance()
            .get(&ManagerKey::Behaviour)
            .unwrap_or(DepositBehaviour::Accept);

        if behaviour == DepositBehaviour::Reject {
            panic_with_error!(&env, MockAmmError::Rejected);
        }
        if amount_0 <= 0 || amount_1 <= 0 {
            panic_with_error!(&env, MockAmmError::InvalidAmount);
        }

        let me = env.current_contract_address();
        TokenClient::new(&env, &token_1).transfer_from(&me, &provider, &pool, &amount_1);

        let id: u64 = env.storage().instance().get(&ManagerKey::NextId).unwrap_or(0);
        let position = Position { id, pool, amount_0, amount_1 };
        env.storage().instance().set(&ManagerKey::Position(id), &position);
        env.storage().instance().set(&ManagerKey::NextId, &(id + 1));

        position
    }
}
