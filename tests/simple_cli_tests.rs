use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::tempdir;

/// Tests that `--help` is handled successfully by the CLI.
///
/// This test verifies:
/// 1. Running `taskcards-cli --help` exits successfully
/// 2. The help text lists every subcommand
/// 3. No unexpected stderr output is produced
#[test]
fn test_cli_help_success() {
  let mut cmd = cargo_bin_cmd!("taskcards-cli");

  let assert = cmd.arg("--help").assert().success();

  let out = assert.get_output();
  let stdout = String::from_utf8_lossy(&out.stdout);

  for subcommand in ["create", "list", "get"] {
  	assert!(stdout.contains(subcommand), "expected `{}` in --help output:\n{}", subcommand, stdout);
  }
  assert!(
  	out.stderr.is_empty(),
  	"expected empty stderr for --help, got:\n{}",
  	String::from_utf8_lossy(&out.stderr)
  );
}

/// Tests that the CLI exits non-zero when no server is listening.
#[test]
fn test_cli_reports_unreachable_server() {
  let mut cmd = cargo_bin_cmd!("taskcards-cli");

  let assert = cmd
  	.args(["--server-url", "http://127.0.0.1:9", "list"])
  	.assert()
  	.failure();

  let out = assert.get_output();
  assert!(
  	String::from_utf8_lossy(&out.stderr).starts_with("Error:"),
  	"expected an error message on stderr"
  );
}

/// Tests that the server binary parses its own flags.
#[test]
fn test_server_help_success() {
  let mut cmd = cargo_bin_cmd!("taskcards");

  let assert = cmd.arg("--help").assert().success();

  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
  assert!(stdout.contains("--database-url"));
  assert!(stdout.contains("--allowed-origins"));
}

/// Tests that problems found while loading the config file reach the log.
///
/// The config directory is taken from `XDG_CONFIG_HOME`, so this only holds on Linux.
#[cfg(target_os = "linux")]
#[test]
fn test_server_logs_bad_config_file() {
  let config_home = tempdir().unwrap();
  let config_dir = config_home.path().join("taskcards");
  fs::create_dir_all(&config_dir).unwrap();
  fs::write(config_dir.join("config.toml"), "allowed_origins = \"not a list\"\n").unwrap();
  let database_path = config_home.path().join("cards.db");

  let mut cmd = cargo_bin_cmd!("taskcards");

  // An unparsable bind address stops the server right after startup
  let assert = cmd
  	.env("XDG_CONFIG_HOME", config_home.path())
  	.env_remove("RUST_LOG")
  	.env_remove("TASKCARDS_LOG_DIR")
  	.args(["--database-url", database_path.to_str().unwrap(), "--bind-address", "not-an-address"])
  	.assert()
  	.failure();

  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
  assert!(stdout.contains("Ignoring config file"), "expected the config warning in:\n{}", stdout);
  assert!(stdout.contains("Final configuration"), "expected the merged config in:\n{}", stdout);
}
