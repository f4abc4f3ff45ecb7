#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

mod events;
mod storage;

pub use events::{BonusGranted, BonusRefused, DonationReceived};
pub use storage::{BonusGrant, PotStats};

use events::{emit_bonus_granted, emit_bonus_refused, emit_donation_received};
use storage::StorageKey;

#[contract]
pub struct PotMoneyContract;

fn require_initialized(env: &Env) {
    let initialized = env
        .storage()
        .persistent()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false);
    assert!(initialized, "Contract not initialized");
}

fn read_owner(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get::<_, Address>(&StorageKey::Owner)
        .expect("Owner not set")
}

fn read_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get::<_, Address>(&StorageKey::Token)
        .expect("Token not set")
}

fn read_stats(env: &Env) -> PotStats {
    env.storage()
        .persistent()
        .get::<_, PotStats>(&StorageKey::Stats)
        .unwrap_or_default()
}

fn write_stats(env: &Env, stats: &PotStats) {
    env.storage().persistent().set(&StorageKey::Stats, stats);
}

#[contractimpl]
impl PotMoneyContract {
    /// @notice Initializes the pot with its owner and payout token.
    /// @dev Can only be executed once. The owner is the only address allowed to grant bonuses.
    /// @param owner Platform account that grants bonuses.
    /// @param token Token contract holding the pot.
    pub fn initialize(env: Env, owner: Address, token: Address) {
        owner.require_auth();

        let initialized = env
            .storage()
            .persistent()
            .get::<_, bool>(&StorageKey::Initialized)
            .unwrap_or(false);
        assert!(!initialized, "Contract already initialized");

        env.storage().persistent().set(&StorageKey::Owner, &owner);
        env.storage().persistent().set(&StorageKey::Token, &token);
        env.storage()
            .persistent()
            .set(&StorageKey::Stats, &PotStats::default());
        env.storage().persistent().set(&StorageKey::Initialized, &true);
    }

    /// @notice Adds a donation to the pot.
    /// @param donor Address funding the pot.
    /// @param amount Token amount, must be positive.
    /// @return New pot balance.
    pub fn donate(env: Env, donor: Address, amount: i128) -> i128 {
        require_initialized(&env);
        donor.require_auth();
        assert!(amount > 0, "Amount must be positive");

        token::Client::new(&env, &read_token(&env)).transfer(
            &donor,
            &env.current_contract_address(),
            &amount,
        );

        let mut stats = read_stats(&env);
        stats.balance = stats.balance.checked_add(amount).expect("Amount overflow");
        stats.total_donations = stats
            .total_donations
            .checked_add(amount)
            .expect("Amount overflow");
        write_stats(&env, &stats);

        emit_donation_received(
            &env,
            DonationReceived {
                donor,
                amount,
                balance: stats.balance,
            },
        );
        stats.balance
    }

    /// @notice Pays a task bonus out of the pot if the pot covers it.
    /// @dev Check and debit happen in one invocation, so concurrent grants cannot overdraw.
    /// Returns false without transferring when the balance is short.
    /// @param owner Contract owner.
    /// @param task_id Completed task the bonus belongs to; each task is paid once.
    /// @param tasker Bonus recipient.
    /// @param amount Bonus amount, must be positive.
    /// @return Whether the bonus was paid.
    pub fn grant_bonus(
        env: Env,
        owner: Address,
        task_id: String,
        tasker: Address,
        amount: i128,
    ) -> bool {
        require_initialized(&env);
        owner.require_auth();
        assert!(owner == read_owner(&env), "Only owner can grant bonuses");
        assert!(amount > 0, "Amount must be positive");

        let grant_key = StorageKey::Grant(task_id.clone());
        assert!(
            !env.storage().persistent().has(&grant_key),
            "Bonus already granted for task"
        );

        let mut stats = read_stats(&env);
        if amount > stats.balance {
            emit_bonus_refused(
                &env,
                BonusRefused {
                    task_id,
                    amount,
                    balance: stats.balance,
                },
            );
            return false;
        }

        token::Client::new(&env, &read_token(&env)).transfer(
            &env.current_contract_address(),
            &tasker,
            &amount,
        );

        stats.balance -= amount;
        stats.total_bonuses_paid = stats
            .total_bonuses_paid
            .checked_add(amount)
            .expect("Amount overflow");
        stats.bonuses_granted = stats
            .bonuses_granted
            .checked_add(1)
            .expect("Grant count overflow");
        write_stats(&env, &stats);

        let grant = BonusGrant {
            task_id: task_id.clone(),
            tasker: tasker.clone(),
            amount,
            granted_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&grant_key, &grant);

        emit_bonus_granted(
            &env,
            BonusGranted {
                task_id,
                tasker,
                amount,
                balance: stats.balance,
            },
        );
        true
    }

    /// @notice Current pot balance.
    pub fn get_balance(env: Env) -> i128 {
        read_stats(&env).balance
    }

    pub fn get_stats(env: Env) -> PotStats {
        read_stats(&env)
    }

    /// @notice Bonus paid for a task, if any.
    pub fn get_grant(env: Env, task_id: String) -> Option<BonusGrant> {
        env.storage()
            .persistent()
            .get::<_, BonusGrant>(&StorageKey::Grant(task_id))
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().persistent().get::<_, Address>(&StorageKey::Owner)
    }
}
