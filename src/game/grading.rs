//! Final score grading.

use crate::config::game::{EXCELLENT_MIN_SCORE, GOOD_MIN_SCORE, NORMAL_MIN_SCORE, TOP_TIER_MIN_SCORE};
use crate::game::types::Grade;

/// Map a final score to its grade tier.
pub fn grade_for_score(score: u32) -> Grade {
    if score >= TOP_TIER_MIN_SCORE {
        Grade::TopTier
    } else if score >= EXCELLENT_MIN_SCORE {
        Grade::Excellent
    } else if score >= GOOD_MIN_SCORE {
        Grade::Good
    } else if score >= NORMAL_MIN_SCORE {
        Grade::Normal
    } else {
        Grade::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for_score(0), Grade::Poor);
        assert_eq!(grade_for_score(9), Grade::Poor);
        assert_eq!(grade_for_score(10), Grade::Normal);
        assert_eq!(grade_for_score(14), Grade::Normal);
        assert_eq!(grade_for_score(15), Grade::Good);
        assert_eq!(grade_for_score(19), Grade::Good);
        assert_eq!(grade_for_score(20), Grade::Excellent);
        assert_eq!(grade_for_score(24), Grade::Excellent);
        assert_eq!(grade_for_score(25), Grade::TopTier);
        assert_eq!(grade_for_score(300), Grade::TopTier);
    }

    #[test]
    fn test_top_tiers_share_style() {
        assert_eq!(Grade::TopTier.style(), Grade::Excellent.style());
        assert_ne!(Grade::TopTier.label(), Grade::Excellent.label());
        assert_eq!(Grade::Poor.style(), "poor");
    }
}
