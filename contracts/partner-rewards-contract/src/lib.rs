#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod admin;
pub mod catalog;
pub mod claims;
pub mod levels;
pub mod maintenance;
pub mod partner;
pub mod tasks;
pub mod types;
pub mod wallet;
mod test;

use admin::AdminModule;
use claims::ClaimManager;
use maintenance::MaintenanceModule;
use partner::PartnerManager;
use tasks::TaskManager;
use types::{
    ClaimedOffer, Error, ExpirySweepSummary, ExpiryWarning, InactivePartner, Partner,
    PartnerDashboard, TaskType, VoucherResult, Wallet,
};

/// Main contract trait defining all available functions
pub trait PartnerRewardsTrait {
    // Admin / user directory
    fn init(env: Env, admin: Address) -> Result<(), Error>;
    fn update_admin(env: Env, new_admin: Address) -> Result<(), Error>;
    fn register_user(env: Env, user: Address, name: String, email: String) -> Result<(), Error>;

    // Partner lifecycle
    fn get_or_create_partner(env: Env, user: Address) -> Result<Partner, Error>;
    fn record_order(env: Env, user: Address, amount: i128) -> Result<Partner, Error>;
    fn get_partner_dashboard(env: Env, user: Address) -> Result<PartnerDashboard, Error>;
    fn request_payout(env: Env, user: Address, amount: i128) -> Result<Partner, Error>;

    // Claims
    fn claim_milestone_reward(env: Env, user: Address, order_count: u32) -> Result<Partner, Error>;
    fn claim_task_reward(env: Env, user: Address, title: String) -> Result<Partner, Error>;
    fn claim_jackpot_reward(env: Env, user: Address, spend_amount: i128) -> Result<Partner, Error>;
    fn claim_offer(env: Env, user: Address, title: String) -> Result<ClaimedOffer, Error>;
    fn apply_voucher(
        env: Env,
        user: Address,
        code: String,
        order_amount: i128,
    ) -> Result<VoucherResult, Error>;
    fn mark_voucher_used(env: Env, user: Address, code: String) -> Result<(), Error>;

    // Task progress
    fn update_task_progress(
        env: Env,
        user: Address,
        task_type: TaskType,
        progress: Option<u32>,
    ) -> Result<Partner, Error>;

    // Wallet
    fn get_wallet(env: Env, user: Address) -> Result<Wallet, Error>;

    // Maintenance sweeps (keeper entry points)
    fn process_expired_levels(env: Env) -> Result<ExpirySweepSummary, Error>;
    fn get_expiry_warnings(env: Env) -> Result<Vec<ExpiryWarning>, Error>;
    fn get_inactive_partners(env: Env) -> Result<Vec<InactivePartner>, Error>;
}

#[contract]
pub struct PartnerRewards;

#[contractimpl]
impl PartnerRewardsTrait for PartnerRewards {
    // Admin / user directory
    fn init(env: Env, admin: Address) -> Result<(), Error> {
        AdminModule::init(&env, &admin)
    }

    fn update_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        AdminModule::update_admin(&env, &new_admin)
    }

    fn register_user(env: Env, user: Address, name: String, email: String) -> Result<(), Error> {
        AdminModule::register_user(&env, &user, name, email)
    }

    // Partner lifecycle
    fn get_or_create_partner(env: Env, user: Address) -> Result<Partner, Error> {
        PartnerManager::get_or_create_partner(&env, &user)
    }

    fn record_order(env: Env, user: Address, amount: i128) -> Result<Partner, Error> {
        PartnerManager::record_order(&env, &user, amount)
    }

    fn get_partner_dashboard(env: Env, user: Address) -> Result<PartnerDashboard, Error> {
        PartnerManager::get_partner_dashboard(&env, &user)
    }

    fn request_payout(env: Env, user: Address, amount: i128) -> Result<Partner, Error> {
        PartnerManager::request_payout(&env, &user, amount)
    }

    // Claims
    fn claim_milestone_reward(env: Env, user: Address, order_count: u32) -> Result<Partner, Error> {
        ClaimManager::claim_milestone_reward(&env, &user, order_count)
    }

    fn claim_task_reward(env: Env, user: Address, title: String) -> Result<Partner, Error> {
        ClaimManager::claim_task_reward(&env, &user, title)
    }

    fn claim_jackpot_reward(env: Env, user: Address, spend_amount: i128) -> Result<Partner, Error> {
        ClaimManager::claim_jackpot_reward(&env, &user, spend_amount)
    }

    fn claim_offer(env: Env, user: Address, title: String) -> Result<ClaimedOffer, Error> {
        ClaimManager::claim_offer(&env, &user, title)
    }

    fn apply_voucher(
        env: Env,
        user: Address,
        code: String,
        order_amount: i128,
    ) -> Result<VoucherResult, Error> {
        ClaimManager::apply_voucher(&env, &user, code, order_amount)
    }

    fn mark_voucher_used(env: Env, user: Address, code: String) -> Result<(), Error> {
        ClaimManager::mark_voucher_used(&env, &user, code)
    }

    // Task progress
    fn update_task_progress(
        env: Env,
        user: Address,
        task_type: TaskType,
        progress: Option<u32>,
    ) -> Result<Partner, Error> {
        TaskManager::update_task_progress(&env, &user, task_type, progress)
    }

    // Wallet
    fn get_wallet(env: Env, user: Address) -> Result<Wallet, Error> {
        wallet::WalletManager::get_wallet(&env, &user)
    }

    // Maintenance sweeps
    fn process_expired_levels(env: Env) -> Result<ExpirySweepSummary, Error> {
        MaintenanceModule::process_expired_levels(&env)
    }

    fn get_expiry_warnings(env: Env) -> Result<Vec<ExpiryWarning>, Error> {
        MaintenanceModule::get_expiry_warnings(&env)
    }

    fn get_inactive_partners(env: Env) -> Result<Vec<InactivePartner>, Error> {
        MaintenanceModule::get_inactive_partners(&env)
    }
}
