//! JSON output for scripted use.

use crate::error::Result;
use crate::models::Report;
use tracing::{debug, instrument};

/// Serialize a [`Report`] as pretty-printed JSON.
#[instrument(level = "debug", skip_all, fields(headline = %report.headline()))]
pub fn to_json(report: &Report) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    debug!(bytes = json.len(), "Serialized report");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quote;

    #[test]
    fn test_to_json_random_report() {
        let report = Report::Random {
            source: "speech.txt".to_string(),
            headline: "speech.txt".to_string(),
            author: String::new(),
            sentence_count: 2,
            quotes: Quote::numbered(vec![" World".to_string()]),
        };

        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "random");
        assert_eq!(value["quotes"][0]["text"], " World");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_smart_report() {
        let report = Report::Smart {
            source: "https://www.cnn.com/x".to_string(),
            headline: "Headline".to_string(),
            author: "By Someone".to_string(),
            summary: "A line.\nAnother line.".to_string(),
            keywords: vec!["bitcoin".to_string()],
        };

        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["mode"], "smart");
        assert_eq!(value["summary"], "A line.\nAnother line.");
        assert_eq!(value["keywords"][0], "bitcoin");
    }
}
