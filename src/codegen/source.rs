use std::fmt;

use crate::config::MaxArity;

use super::branch::Branch;

/// The terminal arm: selected for any aggregate with more than `max_arity`
/// members, where it fails compilation with a diagnostic naming the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowBranch {
    max_arity: MaxArity,
    text: String,
}

impl OverflowBranch {
    pub(crate) fn new(max_arity: MaxArity) -> Self {
        let text = format!(
            r#"
    /// Largest member count `visit_members` supports.
    pub const MAX_ARITY: usize = {max_arity};

    /// Implemented for member tuples of at most `MAX_ARITY` elements.
    #[diagnostic::on_unimplemented(
        message = "{message}",
        label = "this aggregate has more than {max_arity} members",
        note = "regenerate the visitor with a larger max arity"
    )]
    pub trait WithinMaxArity {{}}
"#,
            message = Self::message_for(max_arity),
        );

        Self { max_arity, text }
    }

    /// The compile-time failure message carried by this arm.
    pub fn message_for(max_arity: MaxArity) -> String {
        format!("too many members; max supported is {max_arity}")
    }

    pub fn max_arity(&self) -> MaxArity {
        self.max_arity
    }

    pub fn message(&self) -> String {
        Self::message_for(self.max_arity)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The full output of one generation run.
///
/// Sections are kept apart so callers can inspect individual arms; the
/// [`Display`](fmt::Display) impl yields the text in emission order:
/// preamble, every branch by ascending arity, overflow branch, postamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub(crate) preamble: String,
    pub(crate) branches: Vec<Branch>,
    pub(crate) overflow: OverflowBranch,
    pub(crate) postamble: String,
}

impl GeneratedSource {
    pub fn max_arity(&self) -> MaxArity {
        self.overflow.max_arity
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Every regular arm, starting at arity 0.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn branch(&self, arity: usize) -> Option<&Branch> {
        self.branches.get(arity)
    }

    pub fn overflow(&self) -> &OverflowBranch {
        &self.overflow
    }

    pub fn postamble(&self) -> &str {
        &self.postamble
    }

    /// Number of arms in the construct, the overflow arm included.
    pub fn arm_count(&self) -> usize {
        self.branches.len() + 1
    }

    /// Length in bytes of the rendered text.
    pub(crate) fn len(&self) -> usize {
        self.preamble.len()
            + self.branches.iter().map(|b| b.text().len()).sum::<usize>()
            + self.overflow.text.len()
            + self.postamble.len()
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preamble)?;
        for branch in &self.branches {
            f.write_str(branch.text())?;
        }
        f.write_str(&self.overflow.text)?;
        f.write_str(&self.postamble)
    }
}
