//! Shape matching for one web-service function name.
//!
//! Shape identifiers follow a loose naming convention: most embed the
//! capitalized module and function name (`ModAssignViewSubmissionStatusWS…`),
//! sometimes with a pluralized module (`CoreCoursesGetContentsWS…`), while a
//! couple of `tool` modules embed only the function name. Matching is strict:
//! each function must resolve to exactly one shape per kind, anything else
//! aborts the run.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static RE_SNAKE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.)").unwrap());

/// Modules under the `tool` namespace whose shape names omit the module
/// prefix. Externally-imposed naming fact, do not extend without checking
/// the live structure document.
const TOOL_BARE_MODULES: &[&str] = &["lp", "mobile"];

/// Which shape sequence a match ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Params,
    Response,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Params => f.write_str("params"),
            ShapeKind::Response => f.write_str("response"),
        }
    }
}

/// The naming convention did not resolve to a single shape.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("expected exactly one {kind} shape for `{name}`, found {}: {candidates:?}", .candidates.len())]
    Ambiguous {
        name: String,
        kind: ShapeKind,
        candidates: Vec<String>,
    },
}

/// A function name split on its first two underscores. The third component
/// keeps any further underscores (`mod_assign_view_submission_status` →
/// `view_submission_status`).
#[derive(Debug, Clone, Copy)]
pub struct ProcedureName<'a> {
    pub full: &'a str,
    pub namespace: &'a str,
    pub module: &'a str,
    pub func_name: &'a str,
}

impl<'a> ProcedureName<'a> {
    pub fn parse(full: &'a str) -> Option<Self> {
        let mut parts = full.splitn(3, '_');
        let namespace = parts.next()?;
        let module = parts.next()?;
        let func_name = parts.next()?;
        Some(Self {
            full,
            namespace,
            module,
            func_name,
        })
    }
}

/// Convert `snake_case` to `camelCase`; with `capitalize_first`, to
/// `CamelCase`.
pub fn snake_to_camel(s: &str, capitalize_first: bool) -> String {
    let camel = RE_SNAKE_SEGMENT.replace_all(s, |caps: &regex::Captures| caps[1].to_uppercase());
    if capitalize_first {
        let mut chars = camel.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        camel.into_owned()
    }
}

/// Naming-convention predicate for one candidate identifier.
fn matches_shape(name: &ProcedureName, candidate: &str) -> bool {
    let func_camel = snake_to_camel(name.func_name, true);

    if name.namespace == "tool" && TOOL_BARE_MODULES.contains(&name.module) {
        return candidate.contains(&format!("{func_camel}WS"));
    }

    let module_camel = snake_to_camel(name.module, true);
    candidate.contains(&format!("{module_camel}{func_camel}WS"))
        || candidate.contains(&format!("{module_camel}s{func_camel}WS"))
}

/// Find the unique candidate matching the naming convention for `name`.
/// Zero or multiple matches is fatal — the source document's convention is
/// a strict precondition, not something to guess around.
pub fn match_shape<'c>(
    name: &ProcedureName,
    candidates: &'c [String],
    kind: ShapeKind,
) -> Result<&'c str, MatchError> {
    let found: Vec<&'c str> = candidates
        .iter()
        .map(String::as_str)
        .filter(|candidate| matches_shape(name, candidate))
        .collect();

    if let [single] = found.as_slice() {
        return Ok(*single);
    }
    Err(MatchError::Ambiguous {
        name: name.full.to_string(),
        kind,
        candidates: found.iter().map(|s| (*s).to_string()).collect(),
    })
}

/// Recover the `WS Description:` line from the block comment introducing
/// `Params of <name> WS.` in the normalized document. Absence is non-fatal.
pub fn find_description(content: &str, full_name: &str) -> Option<String> {
    let pattern = format!(
        r"\* Params of {} WS\.\s+\*\s+\* WS Description: (.*?)\n",
        regex::escape(full_name)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(content).map(|caps| caps[1].to_string())
}
