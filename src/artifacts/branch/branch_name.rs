use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::GitletError;
use anyhow::Context;

const REF_PREFIX: &str = "refs/heads/";

/// A branch name safe to use as a path under `refs/heads`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a name against the git ref-name rules
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        let forbidden = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .context("branch name rules do not compile")?;

        if name.is_empty() || forbidden.is_match(&name) {
            anyhow::bail!(GitletError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    /// Parse the target of a `ref: refs/heads/<name>` symbolic reference
    pub fn try_parse_ref_path(ref_path: &str) -> anyhow::Result<Self> {
        let name = ref_path.strip_prefix(REF_PREFIX).with_context(|| {
            format!("symbolic ref must start with '{REF_PREFIX}', got '{ref_path}'")
        })?;

        Self::try_parse(name.to_string())
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }

    /// `refs/heads/<name>`, as written in HEAD
    pub fn to_ref_path(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
