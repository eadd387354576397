use crate::domain::model::{OverflowPolicy, Sum};
use crate::utils::error::{CalcError, Result};

/// Adds two integers, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Adds two integers under an explicit overflow policy.
pub fn add_with(policy: OverflowPolicy, a: i32, b: i32) -> Result<i32> {
    tracing::debug!("add {} + {} ({})", a, b, policy);
    match policy {
        OverflowPolicy::Wrapping => Ok(add(a, b)),
        OverflowPolicy::Saturating => Ok(a.saturating_add(b)),
        OverflowPolicy::Checked => a.checked_add(b).ok_or(CalcError::Overflow { a, b }),
    }
}

pub fn sum(policy: OverflowPolicy, a: i32, b: i32) -> Result<Sum> {
    let result = add_with(policy, a, b)?;
    Ok(Sum {
        a,
        b,
        result,
        policy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-5, 5), 0);
        assert_eq!(add(-7, -8), -15);
    }

    #[test]
    fn test_add_matches_plain_arithmetic() {
        for a in -50..50 {
            for b in [-1000, -1, 0, 1, 999] {
                assert_eq!(add(a, b), a + b);
            }
        }
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_add_with_saturating() {
        assert_eq!(add_with(OverflowPolicy::Saturating, i32::MAX, 10).unwrap(), i32::MAX);
        assert_eq!(add_with(OverflowPolicy::Saturating, i32::MIN, -10).unwrap(), i32::MIN);
        assert_eq!(add_with(OverflowPolicy::Saturating, 2, 3).unwrap(), 5);
    }

    #[test]
    fn test_add_with_checked() {
        assert_eq!(add_with(OverflowPolicy::Checked, -5, 5).unwrap(), 0);
        let err = add_with(OverflowPolicy::Checked, i32::MAX, 1).unwrap_err();
        assert!(matches!(err, CalcError::Overflow { a: i32::MAX, b: 1 }));
    }

    #[test]
    fn test_sum_keeps_operands() {
        let s = sum(OverflowPolicy::Wrapping, 2, 3).unwrap();
        assert_eq!((s.a, s.b, s.result), (2, 3, 5));
        assert_eq!(s.policy, OverflowPolicy::Wrapping);
    }
}
