//! Level transition engine: decides upgrade eligibility and applies the
//! time-boxed renewal/upgrade/reset rules over a partner aggregate.

use crate::catalog::{self, SECONDS_PER_DAY};
use crate::types::{LevelInfo, Partner};
use soroban_sdk::Env;

pub struct LevelEngine;

/// What an expiry-handling pass did to the partner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpiryOutcome {
    Upgraded,
    Reset,
}

impl LevelEngine {
    /// Organic upgrade requires both the order quota for the next tier and
    /// the current level window still being open. Hitting the quota after the
    /// window lapsed goes through expiry handling instead.
    pub fn can_upgrade_level(env: &Env, partner: &Partner) -> bool {
        let next = match catalog::next_level(env, partner.current_level.tier) {
            Some(config) => config,
            None => return false,
        };

        let has_enough_orders = partner.orders_this_level >= next.requirements.orders;

        let now = env.ledger().timestamp();
        let days_since_start =
            now.saturating_sub(partner.level_start_date) / SECONDS_PER_DAY;
        let within_timeframe =
            days_since_start <= partner.current_level.requirements.timeframe_days;

        has_enough_orders && within_timeframe
    }

    pub fn is_level_expired(env: &Env, partner: &Partner) -> bool {
        env.ledger().timestamp() > partner.valid_until
    }

    /// Advance to the next tier: archive the current level, reset the window
    /// counters and open a fresh window sized by the new tier's timeframe.
    /// No-op at the top tier.
    pub fn upgrade_level(env: &Env, partner: &mut Partner) {
        let next = match catalog::next_level(env, partner.current_level.tier) {
            Some(config) => config,
            None => return,
        };

        let now = env.ledger().timestamp();

        partner.level_history.push_back(partner.current_level.clone());

        partner.current_level = LevelInfo {
            tier: next.tier,
            requirements: next.requirements.clone(),
            achieved_at: now,
        };
        partner.orders_this_level = 0;
        partner.level_start_date = now;
        partner.valid_until = now + next.requirements.timeframe_days * SECONDS_PER_DAY;
    }

    /// Resolve a lapsed level window. The order quota alone decides here:
    /// a partner who hit the count is upgraded even though the clock ran out,
    /// anyone else keeps the tier and gets a fresh window. Never a downgrade.
    pub fn handle_level_expiry(env: &Env, partner: &mut Partner) -> Option<ExpiryOutcome> {
        if !Self::is_level_expired(env, partner) {
            return None;
        }

        if let Some(next) = catalog::next_level(env, partner.current_level.tier) {
            if partner.orders_this_level >= next.requirements.orders {
                Self::upgrade_level(env, partner);
                return Some(ExpiryOutcome::Upgraded);
            }
        }

        let now = env.ledger().timestamp();
        partner.orders_this_level = 0;
        partner.level_start_date = now;
        partner.valid_until =
            now + partner.current_level.requirements.timeframe_days * SECONDS_PER_DAY;

        Some(ExpiryOutcome::Reset)
    }

    /// Whole days until the level window closes, rounded up, floored at 0
    pub fn days_remaining(env: &Env, partner: &Partner) -> u32 {
        let now = env.ledger().timestamp();
        let remaining = partner.valid_until.saturating_sub(now);
        remaining.div_ceil(SECONDS_PER_DAY) as u32
    }

    /// Orders still needed for the next tier, 0 at the top
    pub fn orders_needed_for_next_level(env: &Env, partner: &Partner) -> u32 {
        match catalog::next_level(env, partner.current_level.tier) {
            Some(next) => next.requirements.orders.saturating_sub(partner.orders_this_level),
            None => 0,
        }
    }
}
