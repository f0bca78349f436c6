//! Coping strategies suggested after a mood entry is recorded.

use serde::Serialize;

use crate::models::symptom;

/// Cap on symptom-specific suggestions per plan.
pub const MAX_SYMPTOM_STRATEGIES: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTier {
    GetSupport,
    SelfCare,
    KeepMoving,
    Momentum,
}

impl StrategyTier {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            0..=2 => Self::GetSupport,
            3..=4 => Self::SelfCare,
            5..=6 => Self::KeepMoving,
            _ => Self::Momentum,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::GetSupport => "Get Support Now",
            Self::SelfCare => "Take Care of Yourself",
            Self::KeepMoving => "Keep Moving Forward",
            Self::Momentum => "Maintain Your Momentum",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::GetSupport => "heart",
            Self::SelfCare => "leaf",
            Self::KeepMoving => "star",
            Self::Momentum => "sunny",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::GetSupport => "#FF3B30",
            Self::SelfCare => "#FF9500",
            Self::KeepMoving => "#FFCC00",
            Self::Momentum => "#34C759",
        }
    }

    pub fn defaults(self) -> &'static [&'static str] {
        match self {
            Self::GetSupport => &[
                "Book a meeting with your therapist",
                "Call a trusted friend or family member",
            ],
            Self::SelfCare => &["Practice mindfulness meditation", "Write in your journal"],
            Self::KeepMoving => &["Plan a small reward for yourself", "Connect with a friend"],
            Self::Momentum => &[
                "Share your positive energy with others",
                "Document what made your day great",
            ],
        }
    }
}

pub fn strategy_for_symptom(id: &str) -> Option<&'static str> {
    let text = match id {
        "anxiety" => "Practice deep breathing for 5 minutes",
        "depression" => "Take a short walk outside",
        "irritability" => "Listen to calming music",
        "overwhelm" => "Break tasks into smaller steps",
        "headache" => "Drink water and rest in a quiet space",
        "fatigue" => "Take a 20-minute power nap",
        "insomnia" => "Create a relaxing bedtime routine",
        "appetite" => "Eat small, nutritious snacks",
        "work" => "Set clear boundaries and take breaks",
        "social" => "Practice saying \"no\" when needed",
        "health" => "Schedule a check-up with your doctor",
        "family" => "Set aside time for self-care",
        _ => return None,
    };
    Some(text)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SymptomStrategy {
    pub symptom: String,
    pub label: &'static str,
    pub strategy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyPlan {
    pub tier: StrategyTier,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub defaults: &'static [&'static str],
    pub symptom_strategies: Vec<SymptomStrategy>,
}

impl StrategyPlan {
    /// Symptoms are considered in the order given; unknown ids are skipped.
    pub fn build(rating: u8, symptoms: &[String]) -> Self {
        let tier = StrategyTier::from_rating(rating);

        let symptom_strategies = symptoms
            .iter()
            .filter_map(|id| {
                let known = symptom::find(id)?;
                Some(SymptomStrategy {
                    symptom: id.clone(),
                    label: known.label,
                    strategy: strategy_for_symptom(id)?,
                })
            })
            .take(MAX_SYMPTOM_STRATEGIES)
            .collect();

        Self {
            tier,
            title: tier.title(),
            icon: tier.icon(),
            color: tier.color(),
            defaults: tier.defaults(),
            symptom_strategies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StrategyTier::from_rating(0), StrategyTier::GetSupport);
        assert_eq!(StrategyTier::from_rating(2), StrategyTier::GetSupport);
        assert_eq!(StrategyTier::from_rating(3), StrategyTier::SelfCare);
        assert_eq!(StrategyTier::from_rating(4), StrategyTier::SelfCare);
        assert_eq!(StrategyTier::from_rating(6), StrategyTier::KeepMoving);
        assert_eq!(StrategyTier::from_rating(7), StrategyTier::Momentum);
        assert_eq!(StrategyTier::from_rating(10), StrategyTier::Momentum);
    }

    #[test]
    fn test_every_vocabulary_symptom_has_a_strategy() {
        for s in symptom::all() {
            assert!(strategy_for_symptom(s.id).is_some(), "{} has no strategy", s.id);
        }
    }

    #[test]
    fn test_plan_caps_symptom_strategies() {
        let symptoms: Vec<String> = vec!["boredom".into(), "insomnia".into(), "work".into(), "anxiety".into()];
        let plan = StrategyPlan::build(1, &symptoms);
        assert_eq!(plan.title, "Get Support Now");
        assert_eq!(plan.defaults.len(), 2);
        assert_eq!(
            plan.symptom_strategies,
            vec![
                SymptomStrategy {
                    symptom: "insomnia".into(),
                    label: "Insomnia",
                    strategy: "Create a relaxing bedtime routine",
                },
                SymptomStrategy {
                    symptom: "work".into(),
                    label: "Work Stress",
                    strategy: "Set clear boundaries and take breaks",
                },
            ]
        );
    }

    #[test]
    fn test_plan_without_symptoms() {
        let plan = StrategyPlan::build(8, &[]);
        assert_eq!(plan.tier, StrategyTier::Momentum);
        assert_eq!(plan.icon, "sunny");
        assert!(plan.symptom_strategies.is_empty());
    }
}
