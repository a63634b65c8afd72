//! Catalog extraction — web-service function names and shape identifiers.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Function names appear in doc comments as `Params of <name> WS.`
static RE_PARAMS_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Params of ([a-z0-9_]+)").unwrap());

static RE_PARAM_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+WSParams").unwrap());

static RE_RESPONSE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+WSResponse").unwrap());

/// Everything declared in the normalized document.
#[derive(Debug)]
pub struct Catalog {
    /// Distinct function names, lexically sorted.
    pub functions: Vec<String>,
    /// `…WSParams` identifiers in first-seen order. Duplicates are kept;
    /// the matcher's exactly-one check rejects them per function.
    pub params: Vec<String>,
    /// `…WSResponse` identifiers in first-seen order.
    pub responses: Vec<String>,
}

/// Scan the normalized document for all declared names and shapes.
pub fn extract(content: &str) -> Catalog {
    let functions: BTreeSet<String> = RE_PARAMS_OF
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect();

    Catalog {
        functions: functions.into_iter().collect(),
        params: RE_PARAM_SHAPE
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect(),
        responses: RE_RESPONSE_SHAPE
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}
