//! Symptom-to-diagnosis matching for triage.

use std::collections::HashSet;

use crate::entities::{Diagnosis, DiagnosisMatch};

fn normalize(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

/// Score every diagnosis against the reported symptoms.
///
/// Comparison is case-insensitive on trimmed text. A diagnosis scores
/// `matched / its symptom count`; diagnoses with no matched symptom are
/// dropped. Results are ordered by score (highest first), then by name.
#[must_use]
pub fn match_symptoms(symptoms: &[String], diagnoses: &[Diagnosis]) -> Vec<DiagnosisMatch> {
    let reported: HashSet<String> = symptoms
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();

    let mut matches: Vec<DiagnosisMatch> = diagnoses
        .iter()
        .filter(|d| !d.symptoms.is_empty())
        .filter_map(|diagnosis| {
            let matched: Vec<String> = diagnosis
                .symptoms
                .iter()
                .filter(|s| reported.contains(&normalize(s)))
                .cloned()
                .collect();
            if matched.is_empty() {
                return None;
            }
            #[allow(clippy::cast_precision_loss)]
            let score = matched.len() as f64 / diagnosis.symptoms.len() as f64;
            Some(DiagnosisMatch {
                diagnosis: diagnosis.name.clone(),
                code: diagnosis.code.clone(),
                matched_symptoms: matched,
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.diagnosis.cmp(&b.diagnosis))
    });
    matches
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn diagnosis(name: &str, symptoms: &[&str]) -> Diagnosis {
        Diagnosis {
            id: None,
            name: name.to_string(),
            code: None,
            symptoms: symptoms.iter().map(ToString::to_string).collect(),
        }
    }

    fn reported(symptoms: &[&str]) -> Vec<String> {
        symptoms.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn scores_by_fraction_of_diagnosis_symptoms() {
        let list = vec![
            diagnosis("Generalized anxiety", &["worry", "restlessness", "insomnia", "fatigue"]),
            diagnosis("Insomnia disorder", &["insomnia", "fatigue"]),
            diagnosis("Panic disorder", &["palpitations", "dread"]),
        ];
        let matches = match_symptoms(&reported(&[" Insomnia ", "FATIGUE"]), &list);

        let names: Vec<&str> = matches.iter().map(|m| m.diagnosis.as_str()).collect();
        assert_eq!(names, vec!["Insomnia disorder", "Generalized anxiety"]);
        assert!((matches[0].score - 1.0).abs() < f64::EPSILON);
        assert!((matches[1].score - 0.5).abs() < f64::EPSILON);
        assert_eq!(matches[1].matched_symptoms, vec!["insomnia", "fatigue"]);
    }

    #[test]
    fn equal_scores_order_by_name() {
        let list = vec![
            diagnosis("Zeta", &["worry"]),
            diagnosis("Alpha", &["worry"]),
        ];
        let matches = match_symptoms(&reported(&["worry"]), &list);
        assert_eq!(matches[0].diagnosis, "Alpha");
    }

    #[test]
    fn blank_symptoms_match_nothing() {
        let list = vec![diagnosis("Empty", &[]), diagnosis("Blank", &[""])];
        assert!(match_symptoms(&reported(&["", "  "]), &list).is_empty());
    }
}
