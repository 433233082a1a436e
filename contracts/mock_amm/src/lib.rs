#![no_std]

mod factory;
mod position_manager;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use soroban_sdk::{contracterror, contracttype};

pub use factory::{MockFactory, MockFactoryClient};
pub use position_manager::{MockPositionManager, MockPositionManagerClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockAmmError {
    Rejected = 900,
    InvalidAmount = 901,
}

/// How the mock factory answers `create_or_get_pool`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FactoryBehaviour {
    Healthy,
    Reject,
    NullHandle,
    /// Answers with `token_a` instead of a pool.
    EchoTokenA,
    /// Answers with `token_b` instead of a pool.
    EchoTokenB,
}

/// How the mock position manager answers `deposit_liquidity`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DepositBehaviour {
    Accept,
    Reject,
}
