//! Emits the `visit_members` construct.
//!
//! The output is a Rust module holding a visitor trait, a decomposition trait
//! implemented once per member tuple arity `0..=max_arity`, and an entry point
//! generic over any type implementing the downstream `Reflect` trait. An
//! aggregate with more members than the configured maximum has no matching
//! arm and fails to compile with a diagnostic naming the limit.

use tracing::instrument;

use crate::config::MaxArity;

pub use branch::{Branch, Invocation};
pub use source::{GeneratedSource, OverflowBranch};

mod branch;
mod source;

/// Everything that shapes the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Largest supported member count.
    pub max_arity: MaxArity,
    /// Module the generated items live in.
    pub module_name: String,
    /// Path to the reflection trait providing `MEMBER_COUNT`, `MEMBER_NAMES`
    /// and `members()`.
    pub reflect_path: String,
    /// Bound each member type must satisfy to be handed to the visitor.
    pub member_bound: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_arity: MaxArity::DEFAULT,
            module_name: "visit".to_owned(),
            reflect_path: "crate::Reflect".to_owned(),
            member_bound: "::core::fmt::Debug".to_owned(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_max_arity(max_arity: MaxArity) -> Self {
        Self {
            max_arity,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    #[instrument(level = "debug", skip(self), fields(max_arity = %self.options.max_arity))]
    pub fn generate(&self) -> GeneratedSource {
        let max_arity = self.options.max_arity;

        let branches: Vec<Branch> = (0..=max_arity.get())
            .map(|arity| Branch::new(arity, &self.options))
            .collect();

        let source = GeneratedSource {
            preamble: self.preamble(),
            branches,
            overflow: OverflowBranch::new(max_arity),
            postamble: self.postamble(),
        };
        tracing::debug!(
            "generated {} arms, {} bytes",
            source.arm_count(),
            source.len()
        );

        source
    }

    fn preamble(&self) -> String {
        let GeneratorOptions {
            max_arity,
            module_name,
            reflect_path,
            member_bound,
        } = &self.options;
        let overflow_message = OverflowBranch::message_for(*max_arity);

        format!(
            r#"// @generated by reflectgen. Do not edit.
// Supports aggregates with up to {max_arity} members.

pub mod {module_name} {{
    use {reflect_path};

    /// Receives every member of a reflected aggregate, in declaration order.
    pub trait MemberVisitor {{
        fn visit<M>(&mut self, member: &M, name: &'static str)
        where
            M: ?Sized + {member_bound};
    }}

    /// Structural decomposition of a borrowed member tuple.
    #[diagnostic::on_unimplemented(
        message = "{overflow_message}",
        label = "this aggregate has more than {max_arity} members",
        note = "regenerate the visitor with a larger max arity"
    )]
    pub trait VisitMembers {{
        /// Number of members the tuple holds.
        const ARITY: usize;

        fn visit_each<V: MemberVisitor>(self, names: &[&'static str], func: &mut V);
    }}

    /// Calls `func` once per member of `object`, in declaration order, with the
    /// member and its name.
    pub fn visit_members<'a, T, V>(object: &'a T, func: &mut V)
    where
        T: Reflect + ?Sized + 'a,
        T::Members<'a>: VisitMembers + WithinMaxArity,
        V: MemberVisitor,
    {{
        const {{
            assert!(
                T::MEMBER_NAMES.len() == T::MEMBER_COUNT,
                "member name table length differs from member count"
            );
            assert!(
                <T::Members<'a> as VisitMembers>::ARITY == T::MEMBER_COUNT,
                "member tuple arity differs from member count"
            );
        }};

        object.members().visit_each(T::MEMBER_NAMES, func);
    }}
"#
        )
    }

    fn postamble(&self) -> String {
        format!(
            "}}\n\npub use {module}::{{MAX_ARITY, MemberVisitor, VisitMembers, visit_members}};\n",
            module = self.options.module_name
        )
    }
}

/// Generates the construct for `max_arity` with default rendering options.
pub fn generate(max_arity: MaxArity) -> GeneratedSource {
    Generator::new(GeneratorOptions::with_max_arity(max_arity)).generate()
}
