//! Known-answer self test
//!
//! Checks each stage against its published empty-message / reference vector,
//! the cascade against pinned digests and an explicit stage-by-stage
//! recomputation, so a miscompiled or mislinked primitive is caught before
//! any proof is checked.

use serde::Serialize;

use crate::algorithm::{blake, select_order, trace, zr_cascade, Algorithm, ORDERS, STAGES};

/// One self-test check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

impl Check {
    fn new(name: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self {
            name: name.into(),
            passed: expected == actual,
            expected,
            actual,
        }
    }
}

/// Published 512-bit vectors (input, expected digest)
const STAGE_VECTORS: &[(Algorithm, &[u8], &str)] = &[
    (
        Algorithm::Keccak,
        b"",
        "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
         c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e",
    ),
    (
        Algorithm::Groestl,
        b"",
        "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba\
         8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8",
    ),
    (
        Algorithm::Jh,
        b"",
        "90ecf2f76f9d2c8017d979ad5ab96b87d58fc8fc4b83060f3f900774faa2c8fa\
         be69c5f4ff1ec2b61d6b316941cedee117fb04b1f4c5bc1b919ae841c50eec4f",
    ),
    (
        Algorithm::Skein,
        b"",
        "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4\
         1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a",
    ),
    (
        Algorithm::Blake,
        &[0u8],
        "97961587f6d970faba6d2478045de6d1fabd09b61ae50932054d52bc29d31be4\
         ff9102b9f69e2bbdb83be13d4b9c06091e5fa0b48bd081b634058be0ec49beb3",
    ),
];

/// End-to-end digests produced by this implementation (input, expected
/// digest); not yet confirmed against a network node
const CASCADE_VECTORS: &[(&[u8], &str)] = &[
    (
        b"",
        "69e0284368c2f18ad290043b3c9b1b10713c0343157bc58d25726733645b774a",
    ),
    (
        b"abc",
        "a6e00965aaf3cdaff63fc2be6d243f96fd856017c1038b97118a1af48907c781",
    ),
];

/// Inputs for the cascade recomputation checks
const CASCADE_INPUTS: &[&[u8]] = &[b"", b"abc", &[0u8; 80]];

/// Run every check
pub fn run() -> Vec<Check> {
    let mut checks = Vec::new();

    for (algo, input, expected) in STAGE_VECTORS {
        checks.push(Check::new(
            format!("{} ({} byte input)", algo, input.len()),
            *expected,
            hex::encode(algo.hash512(input)),
        ));
    }

    checks.push(Check::new(
        "blake (144 zero bytes)",
        "313717d608e9cf758dcb1eb0f0c3cf9fc150b2d500fb33f51c52afc99d358a2f\
         1374b8a38bba7974e7f6ef79cab16f22ce1e649d6e01ad9589c213045d545dde",
        hex::encode(blake::blake512(&[0u8; 144])),
    ));

    for (input, expected) in CASCADE_VECTORS {
        checks.push(Check::new(
            format!("zr5 ({} byte input)", input.len()),
            *expected,
            hex::encode(zr_cascade(input)),
        ));
    }

    for input in CASCADE_INPUTS {
        let t = trace(input);

        let mut state = Algorithm::Keccak.hash512(input);
        let order = ORDERS[select_order(&state)];
        for algo in order {
            state = algo.hash512(&state);
        }

        checks.push(Check::new(
            format!("cascade ({} byte input, {} stages)", input.len(), STAGES),
            hex::encode(&state[..32]),
            hex::encode(t.digest()),
        ));
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let checks = run();
        assert_eq!(
            checks.len(),
            STAGE_VECTORS.len() + 1 + CASCADE_VECTORS.len() + CASCADE_INPUTS.len()
        );
        for check in &checks {
            assert!(
                check.passed,
                "{}: expected {} got {}",
                check.name,
                check.expected,
                check.actual
            );
        }
    }

    #[test]
    fn test_check_detects_mismatch() {
        let check = Check::new("x", "00", "01");
        assert!(!check.passed);
    }
}
