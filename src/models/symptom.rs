use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Symptom {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SymptomCategory {
    pub name: &'static str,
    pub symptoms: &'static [Symptom],
}

/// The fixed symptom checklist. Validation, label lookup and strategy
/// lookup all read from here.
pub static VOCABULARY: &[SymptomCategory] = &[
    SymptomCategory {
        name: "Emotional",
        symptoms: &[
            Symptom { id: "anxiety", label: "Anxiety" },
            Symptom { id: "depression", label: "Depression" },
            Symptom { id: "irritability", label: "Irritability" },
            Symptom { id: "overwhelm", label: "Overwhelmed" },
        ],
    },
    SymptomCategory {
        name: "Physical",
        symptoms: &[
            Symptom { id: "headache", label: "Headache" },
            Symptom { id: "fatigue", label: "Fatigue" },
            Symptom { id: "insomnia", label: "Insomnia" },
            Symptom { id: "appetite", label: "Appetite Changes" },
        ],
    },
    SymptomCategory {
        name: "Triggers",
        symptoms: &[
            Symptom { id: "work", label: "Work Stress" },
            Symptom { id: "social", label: "Social Pressure" },
            Symptom { id: "health", label: "Health Concerns" },
            Symptom { id: "family", label: "Family Issues" },
        ],
    },
];

pub fn all() -> impl Iterator<Item = &'static Symptom> {
    VOCABULARY.iter().flat_map(|c| c.symptoms.iter())
}

pub fn find(id: &str) -> Option<&'static Symptom> {
    all().find(|s| s.id == id)
}

pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}

pub fn label_for(id: &str) -> Option<&'static str> {
    find(id).map(|s| s.label)
}
