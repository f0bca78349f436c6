//! Rating → emoji / color classification.
//!
//! One six-bucket step function is canonical for everything: the emoji
//! stored on a new entry, the preview shown next to the rating input, and
//! the color used for display. Buckets are lower-exclusive/upper-inclusive
//! except the first, which is exactly 0.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MoodBucket {
    Sad,
    Concerned,
    Neutral,
    SlightSmile,
    Happy,
    Elated,
}

impl MoodBucket {
    /// Total over `u8`; anything above 8 is `Elated`.
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            0 => Self::Sad,
            1..=2 => Self::Concerned,
            3..=4 => Self::Neutral,
            5..=6 => Self::SlightSmile,
            7..=8 => Self::Happy,
            _ => Self::Elated,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Sad => "😢",
            Self::Concerned => "😕",
            Self::Neutral => "😐",
            Self::SlightSmile => "🙂",
            Self::Happy => "😊",
            Self::Elated => "😄",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Sad => "#FF3B30",
            Self::Concerned => "#FF9500",
            Self::Neutral => "#FFCC00",
            Self::SlightSmile => "#34C759",
            Self::Happy => "#5856D6",
            Self::Elated => "#FF2D55",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Concerned => "concerned",
            Self::Neutral => "neutral",
            Self::SlightSmile => "slight smile",
            Self::Happy => "happy",
            Self::Elated => "elated",
        }
    }
}

pub fn emoji_for(rating: u8) -> &'static str {
    MoodBucket::from_rating(rating).emoji()
}

pub fn color_for(rating: u8) -> &'static str {
    MoodBucket::from_rating(rating).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_fall_in_upper_inclusive_bucket() {
        assert_eq!(MoodBucket::from_rating(0), MoodBucket::Sad);
        assert_eq!(MoodBucket::from_rating(2), MoodBucket::Concerned);
        assert_eq!(MoodBucket::from_rating(4), MoodBucket::Neutral);
        assert_eq!(MoodBucket::from_rating(6), MoodBucket::SlightSmile);
        assert_eq!(MoodBucket::from_rating(8), MoodBucket::Happy);
        assert_eq!(MoodBucket::from_rating(10), MoodBucket::Elated);
    }

    #[test]
    fn test_just_above_boundaries() {
        assert_eq!(MoodBucket::from_rating(1), MoodBucket::Concerned);
        assert_eq!(MoodBucket::from_rating(3), MoodBucket::Neutral);
        assert_eq!(MoodBucket::from_rating(5), MoodBucket::SlightSmile);
        assert_eq!(MoodBucket::from_rating(7), MoodBucket::Happy);
        assert_eq!(MoodBucket::from_rating(9), MoodBucket::Elated);
    }

    #[test]
    fn test_every_rating_is_classified_monotonically() {
        let buckets: Vec<_> = (0..=10u8).map(MoodBucket::from_rating).collect();
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(buckets.first(), Some(&MoodBucket::Sad));
        assert_eq!(buckets.last(), Some(&MoodBucket::Elated));
    }

    #[test]
    fn test_emoji_and_color_share_buckets() {
        assert_eq!(emoji_for(0), "😢");
        assert_eq!(color_for(0), "#FF3B30");
        assert_eq!(emoji_for(7), "😊");
        assert_eq!(color_for(7), "#5856D6");
        assert_eq!(emoji_for(10), "😄");
        assert_eq!(color_for(10), "#FF2D55");
    }

    #[test]
    fn test_out_of_range_is_still_total() {
        assert_eq!(emoji_for(u8::MAX), "😄");
    }
}
