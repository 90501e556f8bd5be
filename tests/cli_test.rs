//! Headless binary runs

use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_road_flow_sim"))
        .args(args)
        .env("RUST_LOG", "warn,road_flow_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that a short seeded run completes and reports every tick
#[test]
fn test_headless_run_completes() {
    let output = run_sim(&["--ticks", "5", "--seed", "1"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "Simulation failed. stderr: {}",
        stderr
    );

    for tick in 0..5 {
        let prefix = format!("Tick {}:", tick);
        assert!(
            stdout.lines().any(|line| line.starts_with(&prefix)),
            "Missing '{}' line. stdout: {}",
            prefix,
            stdout
        );
    }
    assert!(!stdout.contains("Tick 5:"));

    assert!(
        stderr.contains("=== SIMULATION COMPLETE ==="),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Total vehicles injected:"));
    assert!(stderr.contains("Total vehicles exited:"));
    assert!(stderr.contains("Peak vehicles:"));
}

/// Test that verbose output lists vehicles and seeded runs repeat
#[test]
fn test_verbose_seeded_runs_match() {
    let first = run_sim(&["--ticks", "30", "--seed", "4", "--verbose"]);
    let second = run_sim(&["--ticks", "30", "--seed", "4", "--verbose"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(
        stdout.contains("vehicle-0 on "),
        "Verbose output should list vehicles. stdout: {}",
        stdout
    );
}

/// Test that an out-of-range exit probability is rejected
#[test]
fn test_invalid_exit_probability_fails() {
    let output = run_sim(&["--ticks", "5", "--exit-probability", "1.5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("exit probability"),
        "Expected the configuration error. stderr: {}",
        stderr
    );
}
