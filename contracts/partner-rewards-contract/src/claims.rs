//! Claim orchestrator. Each claim moves one item from achieved-but-unclaimed
//! to claimed and credits the wallet in the same invocation. Any error aborts
//! the invocation before commit, so a failed claim leaves both the partner
//! aggregate and the wallet exactly as they were.
//!
//! Guard order is fixed for all four claim kinds: target lookup, then the
//! idempotency guard (already claimed), then the achievement guard.

use crate::admin::AdminModule;
use crate::partner::PartnerManager;
use crate::types::{ClaimedOffer, Error, Partner, RewardSpec, VoucherResult};
use crate::wallet::WalletManager;
use soroban_sdk::{symbol_short, Address, Env, String};

pub struct ClaimManager;

impl ClaimManager {
    /// Claim the reward for a milestone identified by its order count
    pub fn claim_milestone_reward(
        env: &Env,
        user: &Address,
        order_count: u32,
    ) -> Result<Partner, Error> {
        user.require_auth();

        let mut partner = PartnerManager::get_partner(env, user)?;

        let mut index = None;
        for i in 0..partner.milestones.len() {
            if partner.milestones.get_unchecked(i).order_count == order_count {
                index = Some(i);
                break;
            }
        }
        let index = index.ok_or(Error::MilestoneNotFound)?;
        let mut milestone = partner.milestones.get_unchecked(index);

        if milestone.claimed_at.is_some() {
            return Err(Error::AlreadyClaimed);
        }
        if !milestone.achieved {
            return Err(Error::NotYetEligible);
        }

        let now = env.ledger().timestamp();
        Self::credit_reward(env, user, &mut partner, &milestone.reward)?;

        milestone.claimed_at = Some(now);
        partner.milestones.set(index, milestone.clone());
        partner.last_activity = now;
        PartnerManager::save_partner(env, &partner);

        env.events().publish(
            (symbol_short!("ms_clm"), user.clone()),
            (order_count, milestone.reward.value, now),
        );

        Ok(partner)
    }

    /// Claim the reward for a completed task identified by its title
    pub fn claim_task_reward(env: &Env, user: &Address, title: String) -> Result<Partner, Error> {
        user.require_auth();

        let mut partner = PartnerManager::get_partner(env, user)?;

        let mut index = None;
        for i in 0..partner.tasks.len() {
            if partner.tasks.get_unchecked(i).title == title {
                index = Some(i);
                break;
            }
        }
        let index = index.ok_or(Error::TaskNotFound)?;
        let mut task = partner.tasks.get_unchecked(index);

        if task.claimed {
            return Err(Error::AlreadyClaimed);
        }
        if !task.completed {
            return Err(Error::NotYetEligible);
        }

        let now = env.ledger().timestamp();
        Self::credit_reward(env, user, &mut partner, &task.reward)?;

        task.claimed = true;
        task.claimed_at = Some(now);
        partner.tasks.set(index, task.clone());
        partner.last_activity = now;
        PartnerManager::save_partner(env, &partner);

        env.events().publish(
            (symbol_short!("task_clm"), user.clone()),
            (task.title, task.reward.value, now),
        );

        Ok(partner)
    }

    /// Claim the reward for a jackpot identified by its spend threshold
    pub fn claim_jackpot_reward(
        env: &Env,
        user: &Address,
        spend_amount: i128,
    ) -> Result<Partner, Error> {
        user.require_auth();

        let mut partner = PartnerManager::get_partner(env, user)?;

        let mut index = None;
        for i in 0..partner.jackpot_progress.len() {
            if partner.jackpot_progress.get_unchecked(i).spend_amount == spend_amount {
                index = Some(i);
                break;
            }
        }
        let index = index.ok_or(Error::JackpotNotFound)?;
        let mut jackpot = partner.jackpot_progress.get_unchecked(index);

        if jackpot.claimed_at.is_some() {
            return Err(Error::AlreadyClaimed);
        }
        if !jackpot.achieved {
            return Err(Error::NotYetEligible);
        }

        let now = env.ledger().timestamp();
        Self::credit_reward(env, user, &mut partner, &jackpot.reward)?;

        jackpot.claimed_at = Some(now);
        partner.jackpot_progress.set(index, jackpot.clone());
        partner.last_activity = now;
        PartnerManager::save_partner(env, &partner);

        env.events().publish(
            (symbol_short!("jp_clm"), user.clone()),
            (spend_amount, jackpot.reward.value, now),
        );

        Ok(partner)
    }

    /// Claim an offer: mints a voucher code, credits the voucher value to the
    /// wallet and returns the code alongside the updated partner
    pub fn claim_offer(env: &Env, user: &Address, title: String) -> Result<ClaimedOffer, Error> {
        user.require_auth();

        let mut partner = PartnerManager::get_partner(env, user)?;

        let mut index = None;
        for i in 0..partner.claimable_offers.len() {
            if partner.claimable_offers.get_unchecked(i).title == title {
                index = Some(i);
                break;
            }
        }
        let index = index.ok_or(Error::OfferNotFound)?;
        let mut offer = partner.claimable_offers.get_unchecked(index);

        if offer.claimed {
            return Err(Error::AlreadyClaimed);
        }
        let now = env.ledger().timestamp();
        if now < offer.valid_from || now > offer.valid_until {
            return Err(Error::OfferExpired);
        }

        let voucher_code = Self::mint_voucher_code(env);

        let voucher_value = if offer.max_discount > 0 {
            offer.max_discount
        } else {
            offer.discount as i128
        };

        let mut wallet = WalletManager::get_or_create(env, user);
        if voucher_value > 0 {
            WalletManager::credit_flat(&mut wallet, voucher_value)?;
        }
        wallet.statistics.vouchers_earned += 1;
        WalletManager::save(env, &wallet);

        offer.claimed = true;
        offer.claimed_at = Some(now);
        offer.voucher_code = Some(voucher_code.clone());
        partner.claimable_offers.set(index, offer);
        partner.last_activity = now;
        PartnerManager::save_partner(env, &partner);

        env.events().publish(
            (symbol_short!("off_clm"), user.clone()),
            (title, voucher_code.clone(), now),
        );

        Ok(ClaimedOffer {
            partner,
            voucher_code,
        })
    }

    /// Validate a claimed voucher against an order amount and compute the
    /// discount it grants. Read-only.
    pub fn apply_voucher(
        env: &Env,
        user: &Address,
        code: String,
        order_amount: i128,
    ) -> Result<VoucherResult, Error> {
        if order_amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let partner = PartnerManager::get_partner(env, user)?;

        for offer in partner.claimable_offers.iter() {
            if offer.voucher_code != Some(code.clone()) || !offer.claimed {
                continue;
            }

            let now = env.ledger().timestamp();
            if now > offer.valid_until {
                return Err(Error::OfferExpired);
            }
            if offer.min_purchase > 0 && order_amount < offer.min_purchase {
                return Err(Error::MinPurchaseNotMet);
            }

            // Up to 100 the discount is a percentage, above that a flat value
            let mut discount = if offer.discount <= 100 {
                order_amount * offer.discount as i128 / 100
            } else {
                offer.discount as i128
            };
            if offer.max_discount > 0 && discount > offer.max_discount {
                discount = offer.max_discount;
            }

            return Ok(VoucherResult {
                discount,
                offer_title: offer.title,
            });
        }

        Err(Error::InvalidVoucher)
    }

    /// Consume a voucher after the order it was applied to completes. Invoked
    /// by the backend; the carrying offer is removed from the partner.
    pub fn mark_voucher_used(env: &Env, user: &Address, code: String) -> Result<(), Error> {
        AdminModule::verify_admin(env)?;

        let mut partner = PartnerManager::get_partner(env, user)?;

        for i in 0..partner.claimable_offers.len() {
            let offer = partner.claimable_offers.get_unchecked(i);
            if offer.voucher_code == Some(code.clone()) {
                partner.claimable_offers.remove_unchecked(i);
                PartnerManager::save_partner(env, &partner);
                return Ok(());
            }
        }

        Err(Error::InvalidVoucher)
    }

    /// Wallet credit plus earnings bump shared by all claim kinds
    fn credit_reward(
        env: &Env,
        user: &Address,
        partner: &mut Partner,
        spec: &RewardSpec,
    ) -> Result<(), Error> {
        let mut wallet = WalletManager::get_or_create(env, user);
        WalletManager::credit(&mut wallet, spec)?;
        WalletManager::save(env, &wallet);

        partner.earnings.total += spec.value;
        partner.earnings.pending += spec.value;
        partner.earnings.this_month += spec.value;

        Ok(())
    }

    /// Voucher codes are "PARTNER" plus eight ledger-derived digits
    fn mint_voucher_code(env: &Env) -> String {
        let mut buf = *b"PARTNER00000000";
        let mut value =
            (env.ledger().timestamp() + env.ledger().sequence() as u64) % 100_000_000;
        let mut i = buf.len();
        while value > 0 && i > 7 {
            i -= 1;
            buf[i] = b'0' + (value % 10) as u8;
            value /= 10;
        }
        String::from_bytes(env, &buf)
    }
}
