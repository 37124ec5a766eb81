use std::{
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

/// Runs the `reflectgen` binary with `args`, feeding `stdin` to it.
pub fn run_generator(args: &[&str], stdin: &str) -> Result<Output, std::io::Error> {
    run_generator_in(None, args, stdin)
}

pub fn run_generator_in(
    dir: Option<&Path>,
    args: &[&str],
    stdin: &str,
) -> Result<Output, std::io::Error> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_reflectgen"));
    command
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let mut child = command.spawn()?;
    let mut pipe = child.stdin.take().expect("stdin is piped");
    // The generator does not read stdin when the max arity comes from elsewhere.
    match pipe.write_all(stdin.as_bytes()) {
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e),
        _ => {}
    }
    drop(pipe);

    child.wait_with_output()
}

#[allow(unused)] // not every test binary checks failures
#[track_caller]
pub fn generate_ok(args: &[&str], stdin: &str) -> String {
    let output = run_generator(args, stdin).expect("failed to run");
    assert!(
        output.status.success(),
        "generator failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("generated source is utf-8")
}
