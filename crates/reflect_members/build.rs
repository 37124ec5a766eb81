use std::env::var;

use reflectgen::{Generator, GeneratorOptions, MaxArity, output::emit_to_out_dir};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=REFLECT_MAX_ARITY");

    let max_arity = match var("REFLECT_MAX_ARITY") {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("REFLECT_MAX_ARITY should be a non-negative integer: {e}")),
        Err(_) => MaxArity::DEFAULT,
    };

    let source = Generator::new(GeneratorOptions::with_max_arity(max_arity)).generate();
    emit_to_out_dir("visit_members.rs", &source).expect("visit_members.rs should be writable");
}
