//! Derived statistics over a mood history.
//!
//! Every function here is a pure function of the slice it is handed; the
//! slice is expected in stored order (most recent first, since new entries
//! are prepended).
//!
//! Tie-breaks:
//! - recency: `date` desc, then `timestamp` desc (missing timestamps last),
//!   then stored position.
//! - symptoms: count desc, then first-seen position scanning entries in
//!   stored order and each entry's symptoms in their stored order.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::models::mood_entry::MoodEntry;
use crate::models::symptom;
use crate::services::classify::color_for;

pub fn sorted_by_recency(entries: &[MoodEntry]) -> Vec<MoodEntry> {
    let mut sorted = entries.to_vec();
    // Stable, so equal keys keep stored order.
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| match (a.timestamp, b.timestamp) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
    sorted
}

pub fn average_rating(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u64 = entries.iter().map(|e| u64::from(e.rating)).sum();
    sum as f64 / entries.len() as f64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCount {
    pub id: String,
    pub count: usize,
}

/// All symptom ids with their occurrence counts, ranked.
pub fn symptom_counts(entries: &[MoodEntry]) -> Vec<SymptomCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SymptomCount> = Vec::new();

    for id in entries.iter().flat_map(|e| e.symptoms.iter()) {
        match index.get(id.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(id.as_str(), counts.len());
                counts.push(SymptomCount {
                    id: id.clone(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn top_symptoms(entries: &[MoodEntry], k: usize) -> Vec<String> {
    symptom_counts(entries)
        .into_iter()
        .take(k)
        .map(|c| c.id)
        .collect()
}

pub fn first_n(entries: &[MoodEntry], n: usize) -> &[MoodEntry] {
    &entries[..n.min(entries.len())]
}

#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub preview_len: usize,
    pub top_k: usize,
    pub show_all: bool,
}

#[derive(Debug, Serialize)]
pub struct TopSymptom {
    pub id: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub color: &'static str,
}

/// Everything the history view needs, computed in one pass over a loaded
/// history.
#[derive(Debug, Serialize)]
pub struct HistorySummary {
    pub total_entries: usize,
    pub average_rating: f64,
    /// Mean rounded to one decimal place, as shown to the user.
    pub average_display: String,
    pub top_symptoms: Vec<TopSymptom>,
    pub entries: Vec<EntryView>,
    pub showing_all: bool,
    pub has_more: bool,
}

impl HistorySummary {
    pub fn build(entries: &[MoodEntry], options: SummaryOptions) -> Self {
        let average = average_rating(entries);

        let top_symptoms = symptom_counts(entries)
            .into_iter()
            .take(options.top_k)
            .map(|c| TopSymptom {
                // Stored ids are not re-validated; unknown ones show as-is.
                label: symptom::label_for(&c.id).unwrap_or(&c.id).to_string(),
                id: c.id,
                count: c.count,
            })
            .collect();

        let sorted = sorted_by_recency(entries);
        let visible = if options.show_all {
            &sorted[..]
        } else {
            first_n(&sorted, options.preview_len)
        };

        Self {
            total_entries: entries.len(),
            average_rating: average,
            average_display: format!("{:.1}", average),
            top_symptoms,
            entries: visible
                .iter()
                .map(|e| EntryView {
                    color: color_for(e.rating),
                    entry: e.clone(),
                })
                .collect(),
            showing_all: options.show_all,
            has_more: visible.len() < entries.len(),
        }
    }
}
