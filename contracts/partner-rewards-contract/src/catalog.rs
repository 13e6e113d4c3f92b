//! Static reward catalog: tier definitions, seeded milestone/task/jackpot
//! templates, tier offers and dashboard FAQs. Pure data, no storage access,
//! so the level engine and claim paths stay free of magic numbers.

use crate::types::{
    BenefitSet, ClaimableOffer, Faq, JackpotMilestone, LevelConfig, LevelRequirements, LevelTier,
    OrderMilestone, RewardKind, RewardSpec, RewardTask, TaskProgress, TaskType, TransactionBonus,
};
use soroban_sdk::{vec, Env, String, Vec};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Bonus credited on level upgrade: tier rank x 500
pub const LEVEL_BONUS_PER_RANK: i128 = 500;

/// Minimum payout request amount
pub const PAYOUT_MINIMUM: i128 = 100;

/// Horizon for expiry warnings
pub const WARNING_WINDOW_DAYS: u64 = 7;

/// Inactivity threshold for the observation sweep (~3 months)
pub const INACTIVITY_DAYS: u64 = 90;

/// Full tier configuration, including benefits
pub fn level_config(env: &Env, tier: LevelTier) -> LevelConfig {
    match tier {
        LevelTier::Partner => LevelConfig {
            tier,
            requirements: LevelRequirements {
                orders: 15,
                timeframe_days: 44,
            },
            benefits: BenefitSet {
                cashback_rate: 10,
                birthday_discount: 15,
                free_delivery_threshold: 500,
                priority_support: true,
                early_access_sales: true,
                transaction_bonus: Some(TransactionBonus {
                    every: 11,
                    reward: 100,
                }),
                descriptions: vec![
                    env,
                    String::from_str(env, "Exclusive partner offers"),
                    String::from_str(env, "Priority customer support"),
                    String::from_str(env, "Early access to sales"),
                    String::from_str(env, "Monthly bonus rewards"),
                ],
            },
        },
        LevelTier::Influencer => LevelConfig {
            tier,
            requirements: LevelRequirements {
                orders: 45,
                timeframe_days: 44,
            },
            benefits: BenefitSet {
                cashback_rate: 15,
                birthday_discount: 20,
                free_delivery_threshold: 0,
                priority_support: true,
                early_access_sales: true,
                transaction_bonus: Some(TransactionBonus {
                    every: 11,
                    reward: 200,
                }),
                descriptions: vec![
                    env,
                    String::from_str(env, "All Partner benefits"),
                    String::from_str(env, "Higher cashback rates"),
                    String::from_str(env, "Exclusive influencer events"),
                    String::from_str(env, "Special discount codes"),
                    String::from_str(env, "Referral bonuses"),
                ],
            },
        },
        LevelTier::Ambassador => LevelConfig {
            tier,
            requirements: LevelRequirements {
                orders: 100,
                timeframe_days: 90,
            },
            benefits: BenefitSet {
                cashback_rate: 20,
                birthday_discount: 25,
                free_delivery_threshold: 0,
                priority_support: true,
                early_access_sales: true,
                transaction_bonus: Some(TransactionBonus {
                    every: 11,
                    reward: 500,
                }),
                descriptions: vec![
                    env,
                    String::from_str(env, "All Influencer benefits"),
                    String::from_str(env, "VIP customer service"),
                    String::from_str(env, "Maximum cashback rates"),
                    String::from_str(env, "Quarterly reward packages"),
                    String::from_str(env, "Brand collaboration opportunities"),
                    String::from_str(env, "Lifetime premium perks"),
                ],
            },
        },
    }
}

/// Configuration of the tier above the given one, if any
pub fn next_level(env: &Env, tier: LevelTier) -> Option<LevelConfig> {
    tier.next().map(|next| level_config(env, next))
}

fn reward(env: &Env, kind: RewardKind, value: i128, title: &str) -> RewardSpec {
    RewardSpec {
        kind,
        value,
        title: String::from_str(env, title),
    }
}

/// Milestones every new partner starts with
pub fn seed_milestones(env: &Env) -> Vec<OrderMilestone> {
    vec![
        env,
        OrderMilestone {
            order_count: 5,
            reward: reward(env, RewardKind::Cashback, 100, "100 Cashback"),
            achieved: false,
            claimed_at: None,
        },
        OrderMilestone {
            order_count: 10,
            reward: reward(env, RewardKind::Voucher, 200, "200 Shopping Voucher"),
            achieved: false,
            claimed_at: None,
        },
        OrderMilestone {
            order_count: 15,
            reward: reward(env, RewardKind::Cashback, 500, "500 Cashback Bonus"),
            achieved: false,
            claimed_at: None,
        },
        OrderMilestone {
            order_count: 20,
            reward: reward(env, RewardKind::Points, 1000, "1000 Loyalty Points"),
            achieved: false,
            claimed_at: None,
        },
    ]
}

fn task(
    env: &Env,
    title: &str,
    description: &str,
    task_type: TaskType,
    spec: RewardSpec,
    target: u32,
) -> RewardTask {
    RewardTask {
        title: String::from_str(env, title),
        description: String::from_str(env, description),
        task_type,
        reward: spec,
        progress: TaskProgress { current: 0, target },
        completed: false,
        claimed: false,
        completed_at: None,
        claimed_at: None,
    }
}

/// Tasks every new partner starts with
pub fn seed_tasks(env: &Env) -> Vec<RewardTask> {
    vec![
        env,
        task(
            env,
            "Complete Your Profile",
            "Add your profile picture and complete all details",
            TaskType::Profile,
            reward(env, RewardKind::Points, 100, "100 Points"),
            1,
        ),
        task(
            env,
            "Write 5 Reviews",
            "Share your experience with products",
            TaskType::Review,
            reward(env, RewardKind::Cashback, 50, "50 Cashback"),
            5,
        ),
        task(
            env,
            "Refer 3 Friends",
            "Invite friends to join the program",
            TaskType::Referral,
            reward(env, RewardKind::Cashback, 150, "150 Cashback"),
            3,
        ),
        task(
            env,
            "Share on Social Media",
            "Share the platform on your social media",
            TaskType::Social,
            reward(env, RewardKind::Points, 200, "200 Points"),
            3,
        ),
        task(
            env,
            "Complete 10 Orders",
            "Place and complete ten orders",
            TaskType::Purchase,
            reward(env, RewardKind::Cashback, 100, "100 Cashback"),
            10,
        ),
    ]
}

/// The three fixed jackpot thresholds
pub fn seed_jackpots(env: &Env) -> Vec<JackpotMilestone> {
    vec![
        env,
        JackpotMilestone {
            spend_amount: 25_000,
            title: String::from_str(env, "Silver Jackpot"),
            description: String::from_str(env, "Spend 25,000 to unlock"),
            reward: reward(env, RewardKind::Cashback, 1000, "1000 Cashback"),
            achieved: false,
            claimed_at: None,
        },
        JackpotMilestone {
            spend_amount: 50_000,
            title: String::from_str(env, "Gold Jackpot"),
            description: String::from_str(env, "Spend 50,000 to unlock"),
            reward: reward(env, RewardKind::Voucher, 2500, "2500 Shopping Voucher"),
            achieved: false,
            claimed_at: None,
        },
        JackpotMilestone {
            spend_amount: 100_000,
            title: String::from_str(env, "Platinum Jackpot"),
            description: String::from_str(env, "Spend 100,000 to unlock"),
            reward: reward(env, RewardKind::Product, 5000, "Premium Gift Hamper Worth 5000"),
            achieved: false,
            claimed_at: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn offer(
    env: &Env,
    title: &str,
    description: &str,
    discount: u32,
    category: &str,
    min_purchase: i128,
    max_discount: i128,
    now: u64,
    validity_days: u64,
    terms: Vec<String>,
) -> ClaimableOffer {
    ClaimableOffer {
        title: String::from_str(env, title),
        description: String::from_str(env, description),
        discount,
        category: String::from_str(env, category),
        min_purchase,
        max_discount,
        valid_from: now,
        valid_until: now + validity_days * SECONDS_PER_DAY,
        terms,
        claimed: false,
        claimed_at: None,
        voucher_code: None,
    }
}

/// Offers unlocked at a given tier. Partner offers run 30 days, Influencer
/// 60, Ambassador 90, matching the tier's cadence.
pub fn offers_for_tier(env: &Env, tier: LevelTier, now: u64) -> Vec<ClaimableOffer> {
    match tier {
        LevelTier::Partner => vec![
            env,
            offer(
                env,
                "10% Off on Electronics",
                "Get 10% discount on all electronics",
                10,
                "Electronics",
                1000,
                500,
                now,
                30,
                vec![
                    env,
                    String::from_str(env, "Valid for 30 days from activation"),
                    String::from_str(env, "Minimum purchase of 1000"),
                    String::from_str(env, "Cannot be combined with other offers"),
                ],
            ),
            offer(
                env,
                "15% Off on Fashion",
                "Get 15% discount on fashion items",
                15,
                "Fashion",
                500,
                300,
                now,
                30,
                vec![
                    env,
                    String::from_str(env, "Valid for 30 days from activation"),
                    String::from_str(env, "Minimum purchase of 500"),
                    String::from_str(env, "Maximum discount 300"),
                ],
            ),
        ],
        LevelTier::Influencer => vec![
            env,
            offer(
                env,
                "20% Off on Food Delivery",
                "Get 20% discount on all food orders",
                20,
                "Food",
                300,
                200,
                now,
                60,
                vec![
                    env,
                    String::from_str(env, "Valid for 60 days from activation"),
                    String::from_str(env, "Minimum purchase of 300"),
                    String::from_str(env, "Maximum discount 200"),
                ],
            ),
            offer(
                env,
                "Free Delivery on Orders Above 500",
                "Enjoy free delivery on all orders above 500",
                0,
                "Delivery",
                500,
                50,
                now,
                60,
                vec![
                    env,
                    String::from_str(env, "Valid for 60 days from activation"),
                    String::from_str(env, "Minimum purchase of 500"),
                    String::from_str(env, "Applicable on all categories"),
                ],
            ),
        ],
        LevelTier::Ambassador => vec![
            env,
            offer(
                env,
                "25% Off on All Categories",
                "Premium discount on all product categories",
                25,
                "All",
                1000,
                1000,
                now,
                90,
                vec![
                    env,
                    String::from_str(env, "Valid for 90 days from activation"),
                    String::from_str(env, "Minimum purchase of 1000"),
                    String::from_str(env, "Maximum discount 1000"),
                    String::from_str(env, "Exclusive to Ambassador members"),
                ],
            ),
            offer(
                env,
                "Birthday Month 1000 Voucher",
                "Special 1000 voucher for your birthday month",
                1000,
                "Special",
                0,
                1000,
                now,
                90,
                vec![
                    env,
                    String::from_str(env, "Valid only during birthday month"),
                    String::from_str(env, "No minimum purchase required"),
                    String::from_str(env, "One-time use only"),
                ],
            ),
        ],
    }
}

fn faq(env: &Env, category: &str, question: &str, answer: &str) -> Faq {
    Faq {
        category: String::from_str(env, category),
        question: String::from_str(env, question),
        answer: String::from_str(env, answer),
    }
}

/// Dashboard FAQ entries
pub fn faqs(env: &Env) -> Vec<Faq> {
    vec![
        env,
        faq(
            env,
            "general",
            "What is the Partner Program?",
            "A loyalty program that rewards you for your purchases and engagement. As you make more orders, you unlock higher levels with better benefits.",
        ),
        faq(
            env,
            "levels",
            "How do I upgrade to the next level?",
            "Complete the required number of orders within the specified timeframe. For example, complete 45 orders within your 44-day window to move from Partner to Influencer.",
        ),
        faq(
            env,
            "rewards",
            "How do I claim my rewards?",
            "Once you achieve a milestone or complete a task, claim the reward from your partner dashboard. Rewards are added to your wallet or earnings.",
        ),
        faq(
            env,
            "rewards",
            "What happens when my partner status expires?",
            "If you don't reach the order quota within the timeframe, your progress for the window resets and you re-qualify for your level. Previous achievements are kept.",
        ),
        faq(
            env,
            "transactions",
            "How can I track my earnings?",
            "All partner earnings, including pending and paid amounts, appear in the earnings section of your partner dashboard.",
        ),
        faq(
            env,
            "general",
            "Can I share my partner benefits with family?",
            "Benefits are tied to your account, but referred family members earn both of you referral rewards.",
        ),
    ]
}
