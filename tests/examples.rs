use reflectgen::{Generator, GeneratorOptions, MaxArity, generate};
use test_case::test_case;

#[test]
fn max_arity_zero() {
    let source = generate("0".parse().unwrap());
    let text = source.to_string();

    assert_eq!(source.arm_count(), 2);
    assert!(text.contains("impl VisitMembers for () {"));
    assert!(!text.contains("impl<'a, M0"));
    assert!(source.overflow().message().contains('0'));
}

#[test]
fn max_arity_three() {
    let source = generate("3".parse().unwrap());

    let arms: Vec<(usize, Vec<&str>)> = source
        .branches()
        .iter()
        .map(|b| (b.arity(), b.bindings().iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        arms,
        vec![
            (0, vec![]),
            (1, vec!["m0"]),
            (2, vec!["m0", "m1"]),
            (3, vec!["m0", "m1", "m2"]),
        ]
    );
    assert!(source.overflow().text().contains("max supported is 3"));
}

#[test_case(MaxArity::new(0), MaxArity::new(1) ; "zero to one")]
#[test_case(MaxArity::new(6), MaxArity::new(7) ; "six to seven")]
fn growth_only_inserts_before_overflow(smaller: MaxArity, larger: MaxArity) {
    let before = generate(smaller);
    let after = generate(larger);

    let before_branches: String = before.branches().iter().map(|b| b.text()).collect();
    let after_branches: String = after.branches().iter().map(|b| b.text()).collect();
    assert!(after_branches.starts_with(&before_branches));
    assert_eq!(
        &after_branches[before_branches.len()..],
        after.branch(larger.get()).unwrap().text()
    );
}

#[test]
fn shape_depends_only_on_options() {
    let options = GeneratorOptions::with_max_arity(MaxArity::new(10));

    let first = Generator::new(options.clone()).generate();
    let second = Generator::new(options).generate();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
