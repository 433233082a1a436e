use dlat_amm_interface::{null_address, AmmFactory};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Bytes, Env};

use crate::{FactoryBehaviour, MockAmmError};

#[contracttype]
#[derive(Clone, Debug)]
pub enum FactoryKey {
    Behaviour,
    Pool(Address, Address, u32),
    PoolCount,
}

#[contract]
pub struct MockFactory;

#[contractimpl]
impl MockFactory {
    pub fn set_factory_behaviour(env: Env, behaviour: FactoryBehaviour) {
        env.storage().instance().set(&FactoryKey::Behaviour, &behaviour);
    }

    pub fn pools_created(env: Env) -> u32 {
        env.storage().instance().get(&FactoryKey::PoolCount).unwrap_or(0)
    }

    pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32) -> Option<Address> {
        let (token_0, token_1) = sort(token_a, token_b);
        env.storage().instance().get(&FactoryKey::Pool(token_0, token_1, fee_tier))
    }
}

#[contractimpl]
impl AmmFactory for MockFactory {
    fn create_or_get_pool(env: Env, token_a: Address, token_b: Address, fee_tier: u32) -> Address {
        let behaviour = env
            .storage()
            .instance()
            .get(&FactoryKey::Behaviour)
            .unwrap_or(FactoryBehaviour::Healthy);

        match behaviour {
            FactoryBehaviour::Reject => panic_with_error!(&env, MockAmmError::Rejected),
            FactoryBehaviour::NullHandle => return null_address(&env),
            FactoryBehaviour::EchoTokenA => return token_a,
            FactoryBehaviour::EchoTokenB => return token_b,
            FactoryBehaviour::Healthy => {}
        }

        let (token_0, token_1) = sort(token_a, token_b);
        let key = FactoryKey::Pool(token_0.clone(), token_1.clone(), fee_tier);
        if let Some(pool) = env.storage().instance().get::<_, Address>(&key) {
            return pool;
        }

        // Pools are never deployed here; the address a deployment would get
        // is enough to act as a handle.
        let mut salt_data = Bytes::new(&env);
        salt_data.append(&token_0.to_xdr(&env));
        salt_data.append(&token_1.to_xdr(&env));
        salt_data.extend_from_array(&fee_tier.to_be_bytes());
        let salt = env.crypto().sha256(&salt_data);
        let pool = env.deployer().with_current_contract(salt).deployed_address();

        env.storage().instance().set(&key, &pool);
        let count: u32 = env.storage().instance().get(&FactoryKey::PoolCount).unwrap_or(0);
        env.storage().instance().set(&FactoryKey::PoolCount, &(count + 1));

        pool
    }
}

fn sort(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}
