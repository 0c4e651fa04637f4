use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, MatchResult, Score};

/// Numeric field a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankField {
    AiScore,
    MatchPercentage,
}

/// Records that can be ordered by the shared ranking.
pub trait Ranked {
    fn ai_score(&self) -> Score;
    fn match_percentage(&self) -> Option<Score>;

    fn rank_value(&self, field: RankField) -> Option<Score> {
        match field {
            RankField::AiScore => Some(self.ai_score()),
            RankField::MatchPercentage => self.match_percentage(),
        }
    }
}

impl Ranked for Candidate {
    fn ai_score(&self) -> Score {
        self.ai_score
    }

    fn match_percentage(&self) -> Option<Score> {
        None
    }
}

impl Ranked for MatchResult {
    fn ai_score(&self) -> Score {
        self.candidate.ai_score
    }

    fn match_percentage(&self) -> Option<Score> {
        Some(self.match_percentage)
    }
}

impl<T: Ranked> Ranked for &T {
    fn ai_score(&self) -> Score {
        (**self).ai_score()
    }

    fn match_percentage(&self) -> Option<Score> {
        (**self).match_percentage()
    }
}

/// Order records by `field`, highest first. Ties keep their input order; records without
/// the field sort last.
pub fn rank<T, I>(items: I, field: RankField) -> Vec<T>
where
    T: Ranked,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<T> = items.into_iter().collect();
    ranked.sort_by_key(|item| Reverse(item.rank_value(field)));
    ranked
}

/// Presentation tier for an AI score or match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    Low,
    Medium,
    MediumHigh,
    High,
}

impl ScoreTier {
    pub const fn from_score(score: Score) -> Self {
        match score.value() {
            90..=u8::MAX => ScoreTier::High,
            80..=89 => ScoreTier::MediumHigh,
            70..=79 => ScoreTier::Medium,
            _ => ScoreTier::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::MediumHigh => "medium-high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }

    pub const fn accent(self) -> &'static str {
        match self {
            ScoreTier::High => "green",
            ScoreTier::MediumHigh => "blue",
            ScoreTier::Medium => "yellow",
            ScoreTier::Low => "red",
        }
    }
}

impl From<Score> for ScoreTier {
    fn from(score: Score) -> Self {
        Self::from_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(value: u8) -> ScoreTier {
        ScoreTier::from_score(Score::saturating(value))
    }

    #[test]
    fn tier_boundaries_are_inclusive_upwards() {
        assert_eq!(tier(95).label(), "high");
        assert_eq!(tier(85).label(), "medium-high");
        assert_eq!(tier(75).label(), "medium");
        assert_eq!(tier(65).label(), "low");

        assert_eq!(tier(90), ScoreTier::High);
        assert_eq!(tier(89), ScoreTier::MediumHigh);
        assert_eq!(tier(80), ScoreTier::MediumHigh);
        assert_eq!(tier(79), ScoreTier::Medium);
        assert_eq!(tier(70), ScoreTier::Medium);
        assert_eq!(tier(69), ScoreTier::Low);
        assert_eq!(tier(0), ScoreTier::Low);
        assert_eq!(tier(100), ScoreTier::High);
    }

    #[test]
    fn tier_serializes_as_kebab_label() {
        let json = serde_json::to_string(&ScoreTier::MediumHigh).expect("tier serializes");
        assert_eq!(json, "\"medium-high\"");
    }
}
