use soroban_sdk::{contracttype, Address, String};

/// Running totals of the pot, in token base units.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PotStats {
    pub balance: i128,
    pub total_donations: i128,
    pub total_bonuses_paid: i128,
    pub bonuses_granted: u32,
}

/// Bonus paid out for one completed task.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusGrant {
    pub task_id: String,
    pub tasker: Address,
    pub amount: i128,
    pub granted_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Owner,
    Token,
    Stats,
    // task_id -> BonusGrant, at most one per task
    Grant(String),
}
