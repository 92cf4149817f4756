//! Flywheel reward accrual and claims

use super::encode::{address_arg, encode_function_data};
use crate::error::SdkResult;

pub const ACCRUE: &str = "accrue(address,address)";
pub const ACCRUE_PAIR: &str = "accrue(address,address,address)";
pub const CLAIM_REWARDS: &str = "claimRewards(address)";

/// Accrue `user`'s rewards on `strategy`
pub fn accrue(strategy: &str, user: &str) -> SdkResult<Vec<u8>> {
    encode_function_data(ACCRUE, &[address_arg("strategy", strategy)?, address_arg("user", user)?])
}

/// Accrue two users at once, e.g. both sides of a transfer
pub fn accrue_pair(strategy: &str, user: &str, second_user: &str) -> SdkResult<Vec<u8>> {
    encode_function_data(
        ACCRUE_PAIR,
        &[
            address_arg("strategy", strategy)?,
            address_arg("user", user)?,
            address_arg("second_user", second_user)?,
        ],
    )
}

pub fn claim_rewards(user: &str) -> SdkResult<Vec<u8>> {
    encode_function_data(CLAIM_REWARDS, &[address_arg("user", user)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::crypto::selector;

    const STRATEGY: &str = "0x00000000000000000000000000000000000000aa";
    const USER: &str = "0x00000000000000000000000000000000000000bb";

    #[test]
    fn test_overloads_have_distinct_selectors() {
        let single = accrue(STRATEGY, USER).unwrap();
        let pair = accrue_pair(STRATEGY, USER, USER).unwrap();
        assert_ne!(&single[..4], &pair[..4]);
        assert_eq!(single.len(), 4 + 64);
        assert_eq!(pair.len(), 4 + 96);
    }

    #[test]
    fn test_claim_rewards() {
        let data = claim_rewards(USER).unwrap();
        assert_eq!(&data[..4], &selector(CLAIM_REWARDS));
        assert_eq!(data[4 + 31], 0xbb);
    }

    #[test]
    fn test_bad_user_named() {
        let err = accrue_pair(STRATEGY, USER, "").unwrap_err();
        assert!(err.message.contains("second_user"));
    }
}
