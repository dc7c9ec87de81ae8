use serde::{Deserialize, Serialize};

/// A deposit that is queued for withdrawal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Q4W {
    pub amount: i128, // the amount of shares queued for withdrawal
    pub exp: u64,     // the expiration of the withdrawal
}

/// A user's balance with a pool's backstop
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBalance {
    pub shares: i128,  // the balance of shares the user owns, excludes Q4W
    pub q4w: Vec<Q4W>, // a list of queued withdrawals
}

impl UserBalance {
    /// The total number of shares queued for withdrawal
    pub fn total_q4w(&self) -> i128 {
        self.q4w.iter().map(|q4w| q4w.amount).sum()
    }

    /// The number of queued shares that can be withdrawn at `timestamp`
    pub fn unlocked_q4w(&self, timestamp: u64) -> i128 {
        self.q4w
            .iter()
            .filter(|q4w| q4w.exp <= timestamp)
            .map(|q4w| q4w.amount)
            .sum()
    }
}
