//! Partner aggregate lifecycle: lazy creation seeded from the catalog,
//! order-completion progress updates, the dashboard view and payouts.

use crate::admin::AdminModule;
use crate::catalog::{self, SECONDS_PER_DAY};
use crate::levels::LevelEngine;
use crate::types::{
    ClaimableOffer, DashboardProfile, DataKey, Earnings, Error, LevelInfo, Partner,
    PartnerDashboard, PartnerStatus, TaskType,
};
use crate::wallet::WalletManager;
use soroban_sdk::{symbol_short, vec, Address, Env, Symbol, Vec};

pub struct PartnerManager;

impl PartnerManager {
    pub fn get_partner(env: &Env, user: &Address) -> Result<Partner, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Partner(user.clone()))
            .ok_or(Error::PartnerNotFound)
    }

    pub fn save_partner(env: &Env, partner: &Partner) {
        env.storage()
            .persistent()
            .set(&DataKey::Partner(partner.user.clone()), partner);
    }

    pub fn partner_exists(env: &Env, user: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Partner(user.clone()))
    }

    /// All partner addresses ever created, scanned by the maintenance sweeps
    pub fn registry(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::PartnerRegistry)
            .unwrap_or_else(|| vec![env])
    }

    fn register_partner(env: &Env, user: &Address) {
        let mut registry = Self::registry(env);
        registry.push_back(user.clone());
        env.storage()
            .persistent()
            .set(&DataKey::PartnerRegistry, &registry);
    }

    /// Fetch the partner for a user, creating it with catalog defaults on
    /// first access. Creation requires a user directory record for the
    /// partner's name and email.
    pub fn get_or_create_partner(env: &Env, user: &Address) -> Result<Partner, Error> {
        if let Some(partner) = env
            .storage()
            .persistent()
            .get(&DataKey::Partner(user.clone()))
        {
            return Ok(partner);
        }

        let profile = AdminModule::get_user_profile(env, user)?;

        let now = env.ledger().timestamp();
        let entry = catalog::level_config(env, crate::types::LevelTier::Partner);

        let partner = Partner {
            user: user.clone(),
            name: profile.name,
            email: profile.email,
            current_level: LevelInfo {
                tier: entry.tier,
                requirements: entry.requirements.clone(),
                achieved_at: now,
            },
            level_history: vec![env],
            total_orders: 0,
            orders_this_level: 0,
            total_spent: 0,
            join_date: now,
            level_start_date: now,
            valid_until: now + entry.requirements.timeframe_days * SECONDS_PER_DAY,
            milestones: catalog::seed_milestones(env),
            tasks: catalog::seed_tasks(env),
            jackpot_progress: catalog::seed_jackpots(env),
            claimable_offers: catalog::offers_for_tier(env, entry.tier, now),
            earnings: Earnings {
                total: 0,
                pending: 0,
                paid: 0,
                this_month: 0,
                last_month: 0,
            },
            last_bonus_order_count: 0,
            is_active: true,
            status: PartnerStatus::Active,
            last_activity: now,
        };

        Self::save_partner(env, &partner);
        Self::register_partner(env, user);

        env.events().publish(
            (symbol_short!("prt_new"), user.clone()),
            (entry.tier, now),
        );

        Ok(partner)
    }

    /// Mark milestones and jackpots whose thresholds the counters now cross.
    /// Returns true if anything newly unlocked.
    pub fn refresh_achievements(partner: &mut Partner) -> bool {
        let mut updated = false;

        for i in 0..partner.milestones.len() {
            let mut milestone = partner.milestones.get_unchecked(i);
            if !milestone.achieved && partner.total_orders >= milestone.order_count {
                milestone.achieved = true;
                partner.milestones.set(i, milestone);
                updated = true;
            }
        }

        for i in 0..partner.jackpot_progress.len() {
            let mut jackpot = partner.jackpot_progress.get_unchecked(i);
            if !jackpot.achieved && partner.total_spent >= jackpot.spend_amount {
                jackpot.achieved = true;
                partner.jackpot_progress.set(i, jackpot);
                updated = true;
            }
        }

        updated
    }

    /// Order-completion hook, invoked by the backend when an order settles.
    /// Bumps counters, unlocks achievements, advances the purchase task,
    /// applies an organic level upgrade if earned, fires the transaction
    /// bonus and finally resolves a lapsed window.
    pub fn record_order(env: &Env, user: &Address, amount: i128) -> Result<Partner, Error> {
        AdminModule::verify_admin(env)?;

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut partner = Self::get_or_create_partner(env, user)?;
        let now = env.ledger().timestamp();

        partner.total_orders += 1;
        partner.orders_this_level += 1;
        partner.total_spent += amount;
        partner.last_activity = now;

        Self::refresh_achievements(&mut partner);
        Self::advance_purchase_task(env, &mut partner, now);

        if LevelEngine::can_upgrade_level(env, &partner) {
            Self::apply_level_upgrade(env, user, &mut partner)?;
        }

        Self::check_transaction_bonus(env, user, &mut partner)?;

        // A lapsed window caught on the write path, same handling as the sweep
        let _ = LevelEngine::handle_level_expiry(env, &mut partner);

        Self::save_partner(env, &partner);

        env.events().publish(
            (symbol_short!("ord_rec"), user.clone()),
            (partner.total_orders, amount),
        );

        Ok(partner)
    }

    fn advance_purchase_task(_env: &Env, partner: &mut Partner, now: u64) {
        for i in 0..partner.tasks.len() {
            let mut task = partner.tasks.get_unchecked(i);
            if task.task_type == TaskType::Purchase && !task.completed {
                task.progress.current += 1;
                if task.progress.current >= task.progress.target {
                    task.completed = true;
                    task.completed_at = Some(now);
                }
                partner.tasks.set(i, task);
                break;
            }
        }
    }

    /// Upgrade plus its side effects: level bonus to earnings and wallet,
    /// and the new tier's offers appended (deduplicated by title)
    fn apply_level_upgrade(env: &Env, user: &Address, partner: &mut Partner) -> Result<(), Error> {
        LevelEngine::upgrade_level(env, partner);

        let new_tier = partner.current_level.tier;
        let bonus = new_tier.rank() as i128 * catalog::LEVEL_BONUS_PER_RANK;

        partner.earnings.total += bonus;
        partner.earnings.pending += bonus;
        partner.earnings.this_month += bonus;

        let mut wallet = WalletManager::get_or_create(env, user);
        WalletManager::credit_flat(&mut wallet, bonus)?;
        WalletManager::save(env, &wallet);

        let now = env.ledger().timestamp();
        let new_offers = catalog::offers_for_tier(env, new_tier, now);
        for offer in new_offers.iter() {
            if !Self::has_offer(partner, &offer) {
                partner.claimable_offers.push_back(offer);
            }
        }

        env.events().publish(
            (symbol_short!("lvl_up"), user.clone()),
            (new_tier, bonus),
        );

        Ok(())
    }

    fn has_offer(partner: &Partner, candidate: &ClaimableOffer) -> bool {
        for existing in partner.claimable_offers.iter() {
            if existing.title == candidate.title {
                return true;
            }
        }
        false
    }

    /// Automatic grant every `every` orders. The watermark makes re-running
    /// the check at the same order count a no-op, so concurrent order
    /// completions cannot double-credit.
    fn check_transaction_bonus(
        env: &Env,
        user: &Address,
        partner: &mut Partner,
    ) -> Result<(), Error> {
        let config = catalog::level_config(env, partner.current_level.tier);
        let bonus = match config.benefits.transaction_bonus {
            Some(bonus) => bonus,
            None => return Ok(()),
        };

        if partner.total_orders == 0
            || partner.total_orders % bonus.every != 0
            || partner.total_orders <= partner.last_bonus_order_count
        {
            return Ok(());
        }

        partner.last_bonus_order_count = partner.total_orders;

        partner.earnings.total += bonus.reward;
        partner.earnings.pending += bonus.reward;
        partner.earnings.this_month += bonus.reward;

        let mut wallet = WalletManager::get_or_create(env, user);
        WalletManager::credit_flat(&mut wallet, bonus.reward)?;
        WalletManager::save(env, &wallet);

        env.events().publish(
            (symbol_short!("txn_bonus"), user.clone()),
            (partner.total_orders, bonus.reward),
        );

        Ok(())
    }

    /// Aggregate dashboard view. Refreshes achievement flags from the current
    /// counters first so the view never lags the counters it displays.
    pub fn get_partner_dashboard(env: &Env, user: &Address) -> Result<PartnerDashboard, Error> {
        let mut partner = Self::get_partner(env, user)?;

        if Self::refresh_achievements(&mut partner) {
            Self::save_partner(env, &partner);
        }

        let profile = DashboardProfile {
            user: partner.user.clone(),
            name: partner.name.clone(),
            email: partner.email.clone(),
            tier: partner.current_level.tier,
            requirements: partner.current_level.requirements.clone(),
            orders_this_level: partner.orders_this_level,
            total_orders: partner.total_orders,
            total_spent: partner.total_spent,
            days_remaining: LevelEngine::days_remaining(env, &partner),
            orders_needed: LevelEngine::orders_needed_for_next_level(env, &partner),
            valid_until: partner.valid_until,
            earnings: partner.earnings.clone(),
        };

        Ok(PartnerDashboard {
            profile,
            milestones: partner.milestones.clone(),
            tasks: partner.tasks.clone(),
            jackpot_progress: partner.jackpot_progress.clone(),
            claimable_offers: partner.claimable_offers.clone(),
            faqs: catalog::faqs(env),
        })
    }

    /// Move pending earnings to paid. The actual transfer is settled by the
    /// payout processor off-chain.
    pub fn request_payout(env: &Env, user: &Address, amount: i128) -> Result<Partner, Error> {
        user.require_auth();

        let mut partner = Self::get_partner(env, user)?;

        if amount < catalog::PAYOUT_MINIMUM {
            return Err(Error::PayoutBelowMinimum);
        }
        if amount > partner.earnings.pending {
            return Err(Error::InsufficientEarnings);
        }

        partner.earnings.pending -= amount;
        partner.earnings.paid += amount;
        Self::save_partner(env, &partner);

        env.events().publish(
            (Symbol::new(env, "payout_requested"), user.clone()),
            (amount, env.ledger().timestamp()),
        );

        Ok(partner)
    }
}
