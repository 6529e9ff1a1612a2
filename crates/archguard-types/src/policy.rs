use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One FORBIDDEN declaration discovered in an architecture policy document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ForbiddenPattern {
    /// The declared pattern text: a regular expression, or a literal
    /// substring when the text does not compile as one.
    pub pattern: String,
    /// 1-based line in the policy document where `FORBIDDEN:` occurs.
    pub line: u32,
}
