//! pSORTb batch report cleaner.
//!
//! The report interleaves `SeqID:` headers with multi-line result blocks;
//! the prediction sits on the line after `Final Prediction:`, carrying a
//! numeric score that gets stripped.

use std::path::Path;

use annot_ingest::read_lines;
use annot_model::Result;
use tracing::debug;

use crate::output::{CleanOutcome, render_lines, suffixed_path};

/// Suffix appended to the input stem for the cleaned report.
pub const CLEANED_SUFFIX: &str = "_cleaned.txt";

/// Pair sequence identifiers with their final predictions.
///
/// `SeqID:` lines set the pending identifier. `Final Prediction:` arms
/// capture of the following line, read with its ASCII digits stripped and
/// trimmed. A pair is emitted only when both halves are non-empty; an
/// empty prediction drops the pending identifier too.
pub fn clean_lines(lines: &[String]) -> Vec<String> {
    let mut records = Vec::new();
    let mut pending_id: Option<String> = None;
    let mut capture_prediction = false;
    for line in lines {
        if capture_prediction {
            capture_prediction = false;
            let stripped: String = line.chars().filter(|c| !c.is_ascii_digit()).collect();
            let prediction = stripped.trim();
            if prediction.is_empty() {
                pending_id = None;
            } else if let Some(id) = pending_id.take() {
                records.push(format!("{id}\t{prediction}"));
            }
        } else if let Some(rest) = line.strip_prefix("SeqID:") {
            pending_id = Some(rest.trim().to_string());
        } else if line.starts_with("Final Prediction:") {
            capture_prediction = true;
        }
    }
    records
}

/// Clean one pSORTb report into `<stem>_cleaned.txt`.
pub fn clean_psortb_file(input: &Path, out_dir: Option<&Path>) -> Result<CleanOutcome> {
    let lines = read_lines(input)?;
    let records = clean_lines(&lines);
    let output = suffixed_path(input, out_dir, CLEANED_SUFFIX);
    std::fs::write(&output, render_lines(&records))?;
    debug!(
        path = %input.display(),
        lines = lines.len(),
        records = records.len(),
        "cleaned pSORTb report"
    );
    Ok(CleanOutcome {
        output,
        lines_read: lines.len(),
        records: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| (*line).to_string()).collect()
    }

    #[test]
    fn pairs_identifiers_with_predictions() {
        let input = lines(&[
            "SeqID: P00001 putative transporter",
            "  Analysis Report:",
            "  Final Prediction:",
            "    Cytoplasmic 9.97",
            "SeqID: P00002",
            "  Final Prediction:",
            "    Membrane 3",
        ]);
        assert_eq!(
            clean_lines(&input),
            vec![
                "P00001 putative transporter\tCytoplasmic .",
                "P00002\tMembrane",
            ]
        );
    }

    #[test]
    fn score_digits_are_stripped_not_the_rest() {
        let input = lines(&["SeqID: P1", "Final Prediction:", "  Unknown 2of5 hits"]);
        assert_eq!(clean_lines(&input), vec!["P1\tUnknown of hits"]);
    }

    #[test]
    fn empty_prediction_clears_the_pair() {
        let input = lines(&[
            "SeqID: P1",
            "Final Prediction:",
            "   12345",
            "SeqID: P2",
            "Final Prediction:",
            "   Periplasmic 8",
        ]);
        assert_eq!(clean_lines(&input), vec!["P2\tPeriplasmic"]);
    }

    #[test]
    fn prediction_without_identifier_is_dropped() {
        let input = lines(&["Final Prediction:", "  Cytoplasmic 5", "SeqID: P1"]);
        assert!(clean_lines(&input).is_empty());
    }

    #[test]
    fn arming_line_at_end_of_input_is_harmless() {
        let input = lines(&["SeqID: P1", "Final Prediction:"]);
        assert!(clean_lines(&input).is_empty());
    }

    #[test]
    fn identifier_without_prediction_emits_nothing() {
        let input = lines(&["SeqID: P1", "some other content"]);
        assert!(clean_lines(&input).is_empty());
    }
}
