//! Per-user wallet ledger. Claims and bonuses credit it inside the same
//! invocation that mutates the partner aggregate, so both commit or neither.

use crate::types::{DataKey, Error, RewardKind, RewardSpec, Wallet, WalletBalance, WalletStatistics};
use soroban_sdk::{Address, Env};

pub struct WalletManager;

impl WalletManager {
    pub fn get_wallet(env: &Env, user: &Address) -> Result<Wallet, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Wallet(user.clone()))
            .ok_or(Error::WalletNotFound)
    }

    /// Resolve the user's wallet, creating an empty one on first use
    pub fn get_or_create(env: &Env, user: &Address) -> Wallet {
        env.storage()
            .persistent()
            .get(&DataKey::Wallet(user.clone()))
            .unwrap_or_else(|| Wallet {
                owner: user.clone(),
                balance: WalletBalance {
                    total: 0,
                    available: 0,
                },
                loyalty_points: 0,
                statistics: WalletStatistics {
                    total_earned: 0,
                    total_cashback: 0,
                    vouchers_earned: 0,
                },
            })
    }

    pub fn save(env: &Env, wallet: &Wallet) {
        env.storage()
            .persistent()
            .set(&DataKey::Wallet(wallet.owner.clone()), wallet);
    }

    /// Apply a reward to the wallet. Cashback and voucher/product values land
    /// on the balance; points land on the loyalty points counter.
    pub fn credit(wallet: &mut Wallet, spec: &RewardSpec) -> Result<(), Error> {
        if spec.value <= 0 {
            return Err(Error::InvalidAmount);
        }

        match spec.kind {
            RewardKind::Points => {
                wallet.loyalty_points += spec.value;
            }
            RewardKind::Cashback => {
                wallet.balance.total += spec.value;
                wallet.balance.available += spec.value;
                wallet.statistics.total_earned += spec.value;
                wallet.statistics.total_cashback += spec.value;
            }
            RewardKind::Discount | RewardKind::Voucher | RewardKind::Product => {
                wallet.balance.total += spec.value;
                wallet.balance.available += spec.value;
                wallet.statistics.total_earned += spec.value;
            }
        }

        Ok(())
    }

    /// Flat monetary credit (level-upgrade and transaction bonuses)
    pub fn credit_flat(wallet: &mut Wallet, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        wallet.balance.total += amount;
        wallet.balance.available += amount;
        wallet.statistics.total_earned += amount;

        Ok(())
    }
}
