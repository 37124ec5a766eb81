use itertools::Itertools;

use super::GeneratorOptions;

/// One visitor call inside a branch: `func.visit(m{binding}, names[{name_index}])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Invocation {
    pub binding: usize,
    pub name_index: usize,
}

/// The arm of the generated construct handling aggregates with exactly
/// `arity` members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    arity: usize,
    bindings: Vec<String>,
    invocations: Vec<Invocation>,
    text: String,
}

impl Branch {
    pub(crate) fn new(arity: usize, options: &GeneratorOptions) -> Self {
        let bindings: Vec<String> = (0..arity).map(binding_name).collect();
        let invocations = (0..arity)
            .map(|i| Invocation {
                binding: i,
                name_index: i,
            })
            .collect();

        let mut branch = Self {
            arity,
            bindings,
            invocations,
            text: String::new(),
        };
        branch.text = branch.render(&options.member_bound);
        branch
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Names introduced by destructuring the member tuple, in declaration order.
    pub fn bindings(&self) -> &[String] {
        &self.bindings
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn render(&self, member_bound: &str) -> String {
        if self.arity == 0 {
            return ZERO_ARITY.to_owned();
        }

        let params = (0..self.arity).map(|i| format!("M{i}")).join(", ");
        let tuple = tuple_type(self.arity);
        let bounds = (0..self.arity)
            .map(|i| format!("        M{i}: ?Sized + {member_bound},\n"))
            .join("");
        let pattern = tuple_pattern(&self.bindings);
        let calls = self
            .invocations
            .iter()
            .map(|call| {
                format!(
                    "            func.visit({}, names[{}]);\n",
                    self.bindings[call.binding], call.name_index
                )
            })
            .join("");
        let unsized_params = (0..self.arity).map(|i| format!("M{i}: ?Sized")).join(", ");

        format!(
            "
    impl<'a, {params}> VisitMembers for {tuple}
    where
{bounds}    {{
        const ARITY: usize = {arity};

        fn visit_each<V: MemberVisitor>(self, names: &[&'static str], func: &mut V) {{
            let {pattern} = self;
{calls}        }}
    }}

    impl<'a, {unsized_params}> WithinMaxArity for {tuple} {{}}
",
            arity = self.arity,
        )
    }
}

const ZERO_ARITY: &str = "
    impl VisitMembers for () {
        const ARITY: usize = 0;

        fn visit_each<V: MemberVisitor>(self, _names: &[&'static str], _func: &mut V) {}
    }

    impl WithinMaxArity for () {}
";

fn binding_name(index: usize) -> String {
    format!("m{index}")
}

/// `(&'a M0,)` for a single member, `(&'a M0, &'a M1)` otherwise.
fn tuple_type(arity: usize) -> String {
    let elements = (0..arity).map(|i| format!("&'a M{i}")).join(", ");
    if arity == 1 {
        format!("({elements},)")
    } else {
        format!("({elements})")
    }
}

fn tuple_pattern(bindings: &[String]) -> String {
    if bindings.len() == 1 {
        format!("({},)", bindings[0])
    } else {
        format!("({})", bindings.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Branch, Invocation};
    use crate::codegen::GeneratorOptions;

    #[test]
    fn zero_arity_does_nothing() {
        let branch = Branch::new(0, &GeneratorOptions::default());

        assert!(branch.bindings().is_empty());
        assert!(branch.invocations().is_empty());
        assert!(branch.text().contains("impl VisitMembers for ()"));
        assert!(!branch.text().contains("func.visit"));
    }

    #[test_case(1 ; "one")]
    #[test_case(2 ; "two")]
    #[test_case(7 ; "seven")]
    #[test_case(64 ; "sixty four")]
    fn bindings_and_invocations_line_up(arity: usize) {
        let branch = Branch::new(arity, &GeneratorOptions::default());

        assert_eq!(branch.arity(), arity);
        assert_eq!(branch.bindings().len(), arity);
        assert_eq!(branch.invocations().len(), arity);
        for (i, call) in branch.invocations().iter().enumerate() {
            assert_eq!(
                *call,
                Invocation {
                    binding: i,
                    name_index: i
                }
            );
            assert_eq!(branch.bindings()[i], format!("m{i}"));
            assert!(
                branch
                    .text()
                    .contains(&format!("func.visit(m{i}, names[{i}]);")),
                "missing call {i} in\n{}",
                branch.text()
            );
        }
        assert_eq!(branch.text().matches("func.visit(").count(), arity);
    }

    #[test]
    fn single_member_uses_one_tuple() {
        let branch = Branch::new(1, &GeneratorOptions::default());

        assert!(branch.text().contains("for (&'a M0,)"));
        assert!(branch.text().contains("let (m0,) = self;"));
    }

    #[test]
    fn renders_two_members() {
        let branch = Branch::new(2, &GeneratorOptions::default());

        let expected = "
    impl<'a, M0, M1> VisitMembers for (&'a M0, &'a M1)
    where
        M0: ?Sized + ::core::fmt::Debug,
        M1: ?Sized + ::core::fmt::Debug,
    {
        const ARITY: usize = 2;

        fn visit_each<V: MemberVisitor>(self, names: &[&'static str], func: &mut V) {
            let (m0, m1) = self;
            func.visit(m0, names[0]);
            func.visit(m1, names[1]);
        }
    }

    impl<'a, M0: ?Sized, M1: ?Sized> WithinMaxArity for (&'a M0, &'a M1) {}
";
        assert_eq!(branch.text(), expected);
    }

    #[test]
    fn member_bound_is_configurable() {
        let options = GeneratorOptions {
            member_bound: "::core::any::Any".to_owned(),
            ..Default::default()
        };
        let branch = Branch::new(3, &options);

        assert_eq!(branch.text().matches("?Sized + ::core::any::Any,").count(), 3);
        assert!(!branch.text().contains("Debug"));
    }
}
