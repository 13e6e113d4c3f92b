//! Maintenance sweeps, run periodically by an off-chain keeper: resolve
//! lapsed level windows, surface expiry warnings and report long-inactive
//! partners. Each partner is an independent unit of work; one bad record
//! never blocks the rest of the sweep.

use crate::admin::AdminModule;
use crate::catalog::{INACTIVITY_DAYS, SECONDS_PER_DAY, WARNING_WINDOW_DAYS};
use crate::levels::{ExpiryOutcome, LevelEngine};
use crate::partner::PartnerManager;
use crate::types::{Error, ExpirySweepSummary, ExpiryWarning, InactivePartner, LevelTier};
use soroban_sdk::{symbol_short, Env, Vec};

pub struct MaintenanceModule;

impl MaintenanceModule {
    /// Daily sweep: resolve every active partner whose level window has
    /// lapsed. Safe to re-run; handled partners get a future window and no
    /// longer match.
    pub fn process_expired_levels(env: &Env) -> Result<ExpirySweepSummary, Error> {
        AdminModule::verify_admin(env)?;

        let mut summary = ExpirySweepSummary {
            processed: 0,
            upgraded: 0,
            reset: 0,
        };

        for user in PartnerManager::registry(env).iter() {
            let mut partner = match PartnerManager::get_partner(env, &user) {
                Ok(partner) => partner,
                Err(_) => continue, // skip, keep sweeping
            };

            if !partner.is_active || !LevelEngine::is_level_expired(env, &partner) {
                continue;
            }

            match LevelEngine::handle_level_expiry(env, &mut partner) {
                Some(ExpiryOutcome::Upgraded) => {
                    summary.upgraded += 1;
                    env.events().publish(
                        (symbol_short!("lvl_up"), user.clone()),
                        (partner.current_level.tier, 0i128),
                    );
                }
                Some(ExpiryOutcome::Reset) => {
                    summary.reset += 1;
                    env.events().publish(
                        (symbol_short!("lvl_rst"), user.clone()),
                        (partner.current_level.tier, partner.valid_until),
                    );
                }
                None => continue,
            }

            summary.processed += 1;
            PartnerManager::save_partner(env, &partner);
        }

        env.events().publish(
            (symbol_short!("exp_swp"),),
            (summary.processed, summary.upgraded, summary.reset),
        );

        Ok(summary)
    }

    /// Weekly sweep: partners whose window closes within the next 7 days,
    /// with the numbers a notification sink needs to warn them.
    pub fn get_expiry_warnings(env: &Env) -> Result<Vec<ExpiryWarning>, Error> {
        AdminModule::verify_admin(env)?;

        let now = env.ledger().timestamp();
        let horizon = now + WARNING_WINDOW_DAYS * SECONDS_PER_DAY;
        let mut warnings = Vec::new(env);

        for user in PartnerManager::registry(env).iter() {
            let partner = match PartnerManager::get_partner(env, &user) {
                Ok(partner) => partner,
                Err(_) => continue,
            };

            if !partner.is_active || partner.valid_until <= now || partner.valid_until > horizon {
                continue;
            }

            warnings.push_back(ExpiryWarning {
                user: user.clone(),
                tier: partner.current_level.tier,
                days_remaining: LevelEngine::days_remaining(env, &partner),
                orders_needed: LevelEngine::orders_needed_for_next_level(env, &partner),
            });
        }

        Ok(warnings)
    }

    /// Weekly sweep: partners above the entry tier with no activity for
    /// 90+ days. Observation only; whether inactivity ever demotes a partner
    /// is an open product decision.
    pub fn get_inactive_partners(env: &Env) -> Result<Vec<InactivePartner>, Error> {
        AdminModule::verify_admin(env)?;

        let now = env.ledger().timestamp();
        let cutoff = now.saturating_sub(INACTIVITY_DAYS * SECONDS_PER_DAY);
        let mut inactive = Vec::new(env);

        for user in PartnerManager::registry(env).iter() {
            let partner = match PartnerManager::get_partner(env, &user) {
                Ok(partner) => partner,
                Err(_) => continue,
            };

            if partner.current_level.tier == LevelTier::Partner {
                continue;
            }
            if partner.last_activity < cutoff {
                inactive.push_back(InactivePartner {
                    user: user.clone(),
                    tier: partner.current_level.tier,
                    last_activity: partner.last_activity,
                });
            }
        }

        Ok(inactive)
    }
}
