use soroban_sdk::{contractevent, Address, Env, String};

/// Event: Donation added to the pot
#[contractevent]
#[derive(Clone, Debug)]
pub struct DonationReceived {
    pub donor: Address,
    pub amount: i128,
    pub balance: i128,
}

/// Event: Bonus paid from the pot
#[contractevent]
#[derive(Clone, Debug)]
pub struct BonusGranted {
    pub task_id: String,
    pub tasker: Address,
    pub amount: i128,
    pub balance: i128,
}

/// Event: Bonus larger than the pot, nothing transferred
#[contractevent]
#[derive(Clone, Debug)]
pub struct BonusRefused {
    pub task_id: String,
    pub amount: i128,
    pub balance: i128,
}

pub fn emit_donation_received(e: &Env, event: DonationReceived) {
    event.publish(e);
}

pub fn emit_bonus_granted(e: &Env, event: BonusGranted) {
    event.publish(e);
}

pub fn emit_bonus_refused(e: &Env, event: BonusRefused) {
    event.publish(e);
}
