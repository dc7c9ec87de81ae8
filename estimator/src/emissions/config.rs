use fixed_math::Scaled;
use serde::{Deserialize, Serialize};

/// The emission configuration for a reserve token or backstop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionConfig {
    pub eps: Scaled,     // the tokens emitted per second, in the emitted token's decimals
    pub expiration: u64, // the time emissions stop
}

/// The emission index for a reserve token or backstop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionData {
    pub index: Scaled,  // the emitted tokens accrued per token of supply
    pub last_time: u64, // the last time the index was updated
}

/// A user's emission state for a reserve token or backstop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEmissions {
    pub index: Scaled,   // the index the user last accrued at
    pub accrued: Scaled, // the emitted tokens accrued but not claimed
}

impl UserEmissions {
    /// The emission state of a user without a stored record
    ///
    /// The index starts at zero, so a user holding a balance before emissions began is
    /// due every emission recorded in the index.
    pub fn empty(data: &EmissionData, config: &EmissionConfig) -> UserEmissions {
        UserEmissions {
            index: Scaled::zero(data.index.decimals),
            accrued: Scaled::zero(config.eps.decimals),
        }
    }
}
