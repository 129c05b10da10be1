//! JSON-serializable hash reports

use serde::Serialize;

use crate::algorithm::{CascadeTrace, DIGEST_SIZE, VERSION};

/// Output of one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: &'static str,
    pub output: String,
}

/// Result of hashing one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashReport {
    /// Algorithm version (ZR5 = 5)
    pub version: u8,
    pub input_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<usize>,
    pub order: Vec<&'static str>,
    /// Low 256 bits, hex
    pub digest: String,
    /// Full 512-bit cascade output, hex
    pub full: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<StageReport>>,
}

impl HashReport {
    pub fn from_trace(input_len: usize, trace: &CascadeTrace, with_stages: bool) -> Self {
        let stages = with_stages.then(|| {
            trace
                .stages
                .iter()
                .zip(trace.intermediates.iter())
                .map(|(algo, output)| StageReport {
                    stage: algo.name(),
                    output: hex::encode(output),
                })
                .collect()
        });

        Self {
            version: VERSION,
            input_len,
            order_index: trace.order_index,
            order: trace.stages.iter().map(|algo| algo.name()).collect(),
            digest: hex::encode(trace.digest()),
            full: hex::encode(trace.full()),
            stages,
        }
    }
}

/// Digest of one line of a batch file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub input_len: usize,
    pub digest: String,
}

impl BatchEntry {
    pub fn new(index: usize, input_len: usize, digest: &[u8; DIGEST_SIZE]) -> Self {
        Self {
            index,
            input_len,
            digest: hex::encode(digest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{hash, trace, Cascade, STAGES};

    #[test]
    fn test_report_matches_trace() {
        let t = trace(b"report");
        let report = HashReport::from_trace(6, &t, true);

        assert_eq!(report.input_len, 6);
        assert_eq!(report.digest, hex::encode(hash(b"report")));
        assert_eq!(report.full.len(), 128);
        assert_eq!(report.order.len(), STAGES);
        assert_eq!(report.order[0], "keccak");

        let stages = report.stages.as_ref().unwrap();
        assert_eq!(stages.len(), STAGES);
        assert_eq!(stages[STAGES - 1].output, report.full);
    }

    #[test]
    fn test_stages_omitted_from_json_when_not_requested() {
        let report = HashReport::from_trace(3, &trace(b"abc"), false);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("stages").is_none());
        assert_eq!(report.order_index, Some(8));
        assert_eq!(json["order_index"], 8);
        assert_eq!(json["digest"], report.digest);
        assert_eq!(json["version"], 5);
    }

    #[test]
    fn test_fixed_cascade_report_has_no_order_index() {
        let cascade = Cascade::for_order(8);
        let report = HashReport::from_trace(3, &cascade.trace(b"abc"), false);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("order_index").is_none());
        assert_eq!(report.digest, hex::encode(hash(b"abc")));
    }

    #[test]
    fn test_batch_entry_json() {
        let entry = BatchEntry::new(2, 0, &[0xAB; DIGEST_SIZE]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"index\":2"));
        assert!(json.contains(&"ab".repeat(DIGEST_SIZE)));
    }
}
