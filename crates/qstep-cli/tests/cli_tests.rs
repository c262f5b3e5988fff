//! CLI argument parsing and end-to-end tests.
//!
//! Argument parsing is checked against a mirror of the clap definitions;
//! the end-to-end tests drive the built `qstep` binary.

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand, ValueEnum};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    enum TestFormat {
        Text,
        Json,
    }

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "qstep")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[arg(long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Parse {
            #[arg(required_unless_present = "sample", conflicts_with = "sample")]
            input: Option<String>,
            #[arg(short, long)]
            sample: Option<String>,
            #[arg(long)]
            emit: bool,
        },
        Run {
            #[arg(required_unless_present = "sample", conflicts_with = "sample")]
            input: Option<String>,
            #[arg(short, long)]
            sample: Option<String>,
            #[arg(short, long)]
            delay_ms: Option<u64>,
            #[arg(short, long, value_enum, default_value_t = TestFormat::Text)]
            format: TestFormat,
            #[arg(long)]
            steps: bool,
        },
        Samples,
        Version,
    }

    // --- Parse command ---

    #[test]
    fn test_parse_with_file() {
        let cli = TestCli::try_parse_from(["qstep", "parse", "bell.qs"]).unwrap();
        match cli.command {
            TestCommands::Parse {
                input,
                sample,
                emit,
            } => {
                assert_eq!(input.as_deref(), Some("bell.qs"));
                assert!(sample.is_none());
                assert!(!emit);
            }
            _ => panic!("expected parse"),
        }
    }

    #[test]
    fn test_parse_with_sample_and_emit() {
        let cli =
            TestCli::try_parse_from(["qstep", "parse", "--sample", "grover", "--emit"]).unwrap();
        match cli.command {
            TestCommands::Parse { input, sample, emit } => {
                assert!(input.is_none());
                assert_eq!(sample.as_deref(), Some("grover"));
                assert!(emit);
            }
            _ => panic!("expected parse"),
        }
    }

    #[test]
    fn test_parse_requires_input_or_sample() {
        assert!(TestCli::try_parse_from(["qstep", "parse"]).is_err());
    }

    #[test]
    fn test_parse_rejects_input_and_sample() {
        let result = TestCli::try_parse_from(["qstep", "parse", "a.qs", "--sample", "bell"]);
        assert!(result.is_err());
    }

    // --- Run command ---

    #[test]
    fn test_run_defaults() {
        let cli = TestCli::try_parse_from(["qstep", "run", "-s", "bell"]).unwrap();
        match cli.command {
            TestCommands::Run {
                delay_ms,
                format,
                steps,
                ..
            } => {
                assert!(delay_ms.is_none());
                assert_eq!(format, TestFormat::Text);
                assert!(!steps);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_all_options() {
        let cli = TestCli::try_parse_from([
            "qstep",
            "run",
            "circuit.qs",
            "--delay-ms",
            "0",
            "--format",
            "json",
            "--steps",
            "--config",
            "/tmp/qstep.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/qstep.yaml")));
        match cli.command {
            TestCommands::Run {
                input,
                delay_ms,
                format,
                steps,
                ..
            } => {
                assert_eq!(input.as_deref(), Some("circuit.qs"));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(format, TestFormat::Json);
                assert!(steps);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let result = TestCli::try_parse_from(["qstep", "run", "-s", "bell", "--format", "xml"]);
        assert!(result.is_err());
    }

    // --- Other commands ---

    #[test]
    fn test_parse_samples_and_version() {
        let cli = TestCli::try_parse_from(["qstep", "samples"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Samples));
        let cli = TestCli::try_parse_from(["qstep", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_parse_verbose_vvv() {
        let cli = TestCli::try_parse_from(["qstep", "-vvv", "version"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_no_subcommand() {
        assert!(TestCli::try_parse_from(["qstep"]).is_err());
    }
}

// ============================================================================
// End-to-end runs of the binary
// ============================================================================

mod binary {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};

    use qstep_dsl::Sample;

    /// Run `qstep` with an isolated home directory and no colors.
    fn qstep(home: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_qstep"))
            .args(args)
            .env("HOME", home)
            .env("CLICOLOR", "0")
            .env_remove("QSTEP_CONFIG")
            .env_remove("QSTEP_STEP_DELAY_MS")
            .env_remove("QSTEP_MAX_QUBITS")
            .output()
            .unwrap()
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8(output.stdout.clone()).unwrap()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8(output.stderr.clone()).unwrap()
    }

    #[test]
    fn test_run_bell_sample() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(home.path(), &["run", "--sample", "bell", "--delay-ms", "0"]);
        assert!(output.status.success(), "{}", stderr(&output));

        let out = stdout(&output);
        assert!(out.contains("|00⟩: 0.707 (50.0%)"));
        assert!(out.contains("|11⟩: 0.707 (50.0%)"));
        assert!(!out.contains("|01⟩"));
    }

    #[test]
    fn test_run_file_with_steps() {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join("flip.qs");
        fs::write(&path, "qubits 2\nX(0)\nSWAP(0, 1)\n").unwrap();

        let output = qstep(
            home.path(),
            &["run", path.to_str().unwrap(), "--delay-ms", "0", "--steps"],
        );
        assert!(output.status.success(), "{}", stderr(&output));

        let out = stdout(&output);
        assert!(out.contains("Step 1: X(0)"));
        assert!(out.contains("|01⟩: 1.000 (100.0%)"));
        assert!(out.contains("Step 2: SWAP(0, 1)"));
        assert!(out.contains("|10⟩: 1.000 (100.0%)"));
    }

    #[test]
    fn test_run_json_output() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(
            home.path(),
            &["run", "-s", "teleportation", "-d", "0", "--format", "json"],
        );
        assert!(output.status.success(), "{}", stderr(&output));

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["circuit"]["num_qubits"], 3);
        assert_eq!(
            report["result"]["intermediate_states"]
                .as_array()
                .unwrap()
                .len(),
            6
        );
    }

    #[test]
    fn test_parse_emit_matches_library() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(home.path(), &["parse", "--sample", "grover", "--emit"]);
        assert!(output.status.success());

        let circuit = Sample::Grover.circuit().unwrap();
        assert_eq!(stdout(&output), qstep_dsl::emit(&circuit));
    }

    #[test]
    fn test_parse_lists_gates() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(home.path(), &["parse", "-s", "bell"]);
        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("Bell State"));
        assert!(out.contains("CNOT(0, 1)"));
    }

    #[test]
    fn test_samples_lists_every_key() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(home.path(), &["samples"]);
        assert!(output.status.success());
        let out = stdout(&output);
        for sample in Sample::ALL {
            assert!(out.contains(sample.key()), "missing {sample}");
        }
    }

    #[test]
    fn test_missing_file_fails() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(home.path(), &["run", "/nonexistent/circuit.qs"]);
        assert_eq!(output.status.code(), Some(1));
        let err = stderr(&output);
        assert!(err.contains("Error:"));
        assert!(err.contains("File not found"));
    }

    #[test]
    fn test_unknown_sample_fails() {
        let home = tempfile::tempdir().unwrap();
        let output = qstep(home.path(), &["parse", "--sample", "shor"]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_config_limits_qubits() {
        let home = tempfile::tempdir().unwrap();
        let config = home.path().join("qstep.yaml");
        fs::write(&config, "step_delay_ms: 0\nmax_qubits: 2\n").unwrap();

        let output = qstep(
            home.path(),
            &["run", "-s", "grover", "--config", config.to_str().unwrap()],
        );
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("limited to 2"));
    }

    #[test]
    fn test_default_config_is_picked_up() {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join(".qstep");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yaml"), "step_delay_ms: 0\nmax_qubits: 1\n").unwrap();

        let output = qstep(home.path(), &["run", "-s", "bell"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("limited to 1"));
    }
}
