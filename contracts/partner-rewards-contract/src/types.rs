use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

/// Partner program tiers with increasing benefits
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum LevelTier {
    Partner = 1,    // Entry level
    Influencer = 2, // Intermediate level
    Ambassador = 3, // Premium level
}

impl LevelTier {
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Next tier up, or None at the top
    pub fn next(&self) -> Option<LevelTier> {
        match self {
            LevelTier::Partner => Some(LevelTier::Influencer),
            LevelTier::Influencer => Some(LevelTier::Ambassador),
            LevelTier::Ambassador => None,
        }
    }
}

/// Order quota and time window required to hold/reach a tier
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelRequirements {
    pub orders: u32,
    pub timeframe_days: u64,
}

/// Automatic bonus granted every N orders
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionBonus {
    pub every: u32,
    pub reward: i128,
}

/// Benefits attached to a tier
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BenefitSet {
    pub cashback_rate: u32,      // Percentage (10 for 10%)
    pub birthday_discount: u32,  // Percentage
    pub free_delivery_threshold: i128, // Minimum order amount (0 = always free)
    pub priority_support: bool,
    pub early_access_sales: bool,
    pub transaction_bonus: Option<TransactionBonus>,
    pub descriptions: Vec<String>,
}

/// Static catalog entry for one tier
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelConfig {
    pub tier: LevelTier,
    pub requirements: LevelRequirements,
    pub benefits: BenefitSet,
}

/// Persisted level entry (current level or history)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelInfo {
    pub tier: LevelTier,
    pub requirements: LevelRequirements,
    pub achieved_at: u64,
}

/// Kinds of rewards a claimable item can grant
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardKind {
    Cashback,
    Discount,
    Points,
    Voucher,
    Product,
}

/// A concrete reward attached to a milestone, task, jackpot or offer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSpec {
    pub kind: RewardKind,
    pub value: i128,
    pub title: String,
}

/// One-time reward unlocked at a lifetime order count
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderMilestone {
    pub order_count: u32, // Unique per partner
    pub reward: RewardSpec,
    pub achieved: bool,
    pub claimed_at: Option<u64>,
}

/// Behavioral task categories
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TaskType {
    Review,
    Purchase,
    Referral,
    Social,
    Profile,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskProgress {
    pub current: u32,
    pub target: u32,
}

/// Repeatable-until-complete reward task
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTask {
    pub title: String, // Unique key within a partner
    pub description: String,
    pub task_type: TaskType,
    pub reward: RewardSpec,
    pub progress: TaskProgress,
    pub completed: bool,
    pub claimed: bool,
    pub completed_at: Option<u64>,
    pub claimed_at: Option<u64>,
}

/// One-time reward unlocked at a lifetime spend threshold
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JackpotMilestone {
    pub spend_amount: i128, // One of the seeded thresholds
    pub title: String,
    pub description: String,
    pub reward: RewardSpec,
    pub achieved: bool,
    pub claimed_at: Option<u64>,
}

/// Time-boxed voucher grant tied to a tier
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimableOffer {
    pub title: String, // Unique key within a partner
    pub description: String,
    pub discount: u32, // <= 100 percentage, > 100 flat amount
    pub category: String,
    pub min_purchase: i128,
    pub max_discount: i128,
    pub valid_from: u64,
    pub valid_until: u64,
    pub terms: Vec<String>,
    pub claimed: bool,
    pub claimed_at: Option<u64>,
    pub voucher_code: Option<String>,
}

/// Partner earnings ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Earnings {
    pub total: i128,
    pub pending: i128,
    pub paid: i128,
    pub this_month: i128,
    pub last_month: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PartnerStatus {
    Active,
    Inactive,
    Suspended,
}

/// Per-user aggregate tracking loyalty level, progress and claimable rewards
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partner {
    pub user: Address,
    pub name: String,
    pub email: String,
    pub current_level: LevelInfo,
    pub level_history: Vec<LevelInfo>,
    pub total_orders: u32,
    pub orders_this_level: u32,
    pub total_spent: i128,
    pub join_date: u64,
    pub level_start_date: u64,
    pub valid_until: u64,
    pub milestones: Vec<OrderMilestone>,
    pub tasks: Vec<RewardTask>,
    pub jackpot_progress: Vec<JackpotMilestone>,
    pub claimable_offers: Vec<ClaimableOffer>,
    pub earnings: Earnings,
    // Watermark for the transaction bonus, so re-running the check at the
    // same order count never double-credits
    pub last_bonus_order_count: u32,
    pub is_active: bool,
    pub status: PartnerStatus,
    pub last_activity: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletBalance {
    pub total: i128,
    pub available: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalletStatistics {
    pub total_earned: i128,
    pub total_cashback: i128,
    pub vouchers_earned: u32,
}

/// Monetary balance ledger credited by claims and bonuses
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Wallet {
    pub owner: Address,
    pub balance: WalletBalance,
    pub loyalty_points: i128,
    pub statistics: WalletStatistics,
}

/// User directory record, registered before partner creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Result of claiming an offer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedOffer {
    pub partner: Partner,
    pub voucher_code: String,
}

/// Result of validating a voucher against an order amount
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoucherResult {
    pub discount: i128,
    pub offer_title: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Faq {
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Profile section of the dashboard view
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DashboardProfile {
    pub user: Address,
    pub name: String,
    pub email: String,
    pub tier: LevelTier,
    pub requirements: LevelRequirements,
    pub orders_this_level: u32,
    pub total_orders: u32,
    pub total_spent: i128,
    pub days_remaining: u32,
    pub orders_needed: u32,
    pub valid_until: u64,
    pub earnings: Earnings,
}

/// Aggregate dashboard view returned to the caller
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartnerDashboard {
    pub profile: DashboardProfile,
    pub milestones: Vec<OrderMilestone>,
    pub tasks: Vec<RewardTask>,
    pub jackpot_progress: Vec<JackpotMilestone>,
    pub claimable_offers: Vec<ClaimableOffer>,
    pub faqs: Vec<Faq>,
}

/// Outcome counts of one expiry sweep run
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpirySweepSummary {
    pub processed: u32,
    pub upgraded: u32,
    pub reset: u32,
}

/// Partner whose level window lapses within the warning horizon
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpiryWarning {
    pub user: Address,
    pub tier: LevelTier,
    pub days_remaining: u32,
    pub orders_needed: u32,
}

/// Partner above entry tier with no recent activity (observation only)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InactivePartner {
    pub user: Address,
    pub tier: LevelTier,
    pub last_activity: u64,
}

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,                // Contract administrator
    UserProfile(Address), // User directory record
    Partner(Address),     // Partner aggregate
    Wallet(Address),      // Wallet ledger
    PartnerRegistry,      // All partner addresses, scanned by the sweeps
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,      // Contract not initialized
    AlreadyInitialized = 2,  // Contract already setup
    Unauthorized = 3,        // Caller lacks permission
    UserNotFound = 4,        // No user directory record
    PartnerNotFound = 5,     // Partner aggregate doesn't exist
    MilestoneNotFound = 6,   // No milestone at that order count
    TaskNotFound = 7,        // No task with that title/type
    JackpotNotFound = 8,     // Spend amount is not a seeded threshold
    OfferNotFound = 9,       // No offer with that title
    AlreadyClaimed = 10,     // Reward was already claimed
    NotYetEligible = 11,     // Not achieved / not completed
    OfferExpired = 12,       // Offer validity window has lapsed
    WalletNotFound = 13,     // Wallet doesn't exist
    InvalidAmount = 14,      // Non-positive or malformed amount
    InvalidVoucher = 15,     // Unknown or unclaimed voucher code
    MinPurchaseNotMet = 16,  // Order below the offer's minimum purchase
    InsufficientEarnings = 17, // Payout exceeds pending earnings
    PayoutBelowMinimum = 18, // Payout below the minimum amount
}
