use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const SECRET: &str = "cli-flow-secret-key";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_encstore"))
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("data").join("store.db")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn command(&self, secret: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("ENCSTORE_SECRET", secret)
            .env("ENCSTORE_PATH", self.store_path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.dir.path().join("xdg-data"))
            .env_remove("ENCSTORE_CONFIG")
            .env_remove("ENCSTORE_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_secret(SECRET, args)
    }

    fn run_with_secret(&self, secret: &str, args: &[&str]) -> Output {
        self.command(secret, args).output().expect("run encstore")
    }

    fn write_config(&self, contents: &str) {
        let path = self.config_home().join("encstore").join("config.toml");
        std::fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        std::fs::write(path, contents).expect("write config");
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_set_and_get_round_trip() {
    let sandbox = Sandbox::new();

    assert_success(&sandbox.run(&["set", "greeting", "hello"]));
    let output = sandbox.run(&["get", "greeting"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "hello");

    assert_success(&sandbox.run(&["set", "user", r#"{"id":1,"name":"Ada"}"#, "--json"]));
    let output = sandbox.run(&["get", "user"]);
    assert_success(&output);
    assert_eq!(stdout(&output), r#"{"id":1,"name":"Ada"}"#);
}

#[test]
fn test_store_holds_only_ciphertext() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["set", "token", "plain-text-marker"]));

    let bytes = std::fs::read(sandbox.store_path()).expect("read store");
    let haystack = String::from_utf8_lossy(&bytes);
    assert!(!haystack.contains("plain-text-marker"));
}

#[test]
fn test_get_missing_key_exits_not_found() {
    let sandbox = Sandbox::new();
    assert_exit(&sandbox.run(&["get", "absent"]), 3);
}

#[test]
fn test_short_secret_exits_invalid_input() {
    let sandbox = Sandbox::new();
    assert_exit(&sandbox.run_with_secret("short", &["len"]), 4);
    assert_exit(&sandbox.run_with_secret("short", &["set", "k", "v"]), 4);
    assert!(!sandbox.store_path().exists());
    assert!(!sandbox.store_path().parent().expect("store parent").exists());

    assert_exit(&sandbox.run_with_secret("short", &["encrypt", "text"]), 4);
}

#[test]
fn test_session_storage_config_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[engine]\nstorage_type = \"session\"\n");

    let output = sandbox.run(&["set", "k", "v"]);
    assert_exit(&output, 4);
    assert!(String::from_utf8_lossy(&output.stderr).contains("session"));
    assert!(!sandbox.store_path().exists());

    // Encrypting text needs no store, so the storage type does not matter.
    let output = sandbox.run(&["encrypt", "text"]);
    assert_success(&output);
}

#[test]
fn test_invalid_json_value_exits_invalid_input() {
    let sandbox = Sandbox::new();
    assert_exit(&sandbox.run(&["set", "bad", "{not json", "--json"]), 4);
}

#[test]
fn test_wrong_secret_exits_decrypt_failed() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["set", "note", "hello"]));

    let output = sandbox.run_with_secret("a-different-secret", &["get", "note"]);
    assert_exit(&output, 5);
}

#[test]
fn test_find_and_purge() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["set", "12345678:user", "A"]));
    assert_success(&sandbox.run(&["set", "12345678:item", "B"]));
    assert_success(&sandbox.run(&["set", "other", "C"]));

    let output = sandbox.run(&["find", "12345678"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        r#"{"12345678:user":"A","12345678:item":"B"}"#
    );

    let output = sandbox.run(&["find", "12345678", "--first"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "A");

    assert_exit(&sandbox.run(&["find", "nothing-here"]), 3);

    assert_success(&sandbox.run(&["purge", "12345678"]));
    let output = sandbox.run(&["len"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "1");
}

#[test]
fn test_prefix_namespaces_keys() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["--prefix", "app", "set", "user", "A"]));

    let output = sandbox.run(&["key", "0"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "app:user");

    assert_exit(&sandbox.run(&["get", "user"]), 3);
    let output = sandbox.run(&["--prefix", "app", "get", "user"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "A");

    assert_exit(&sandbox.run(&["key", "5"]), 3);
}

#[test]
fn test_remove_and_clear() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.run(&["set", "a", "1"]));
    assert_success(&sandbox.run(&["set", "b", "2"]));

    assert_success(&sandbox.run(&["remove", "a"]));
    assert_exit(&sandbox.run(&["get", "a"]), 3);

    assert_exit(&sandbox.run(&["clear"]), 4);
    assert_eq!(stdout(&sandbox.run(&["len"])), "1");

    assert_success(&sandbox.run(&["clear", "--yes"]));
    assert_eq!(stdout(&sandbox.run(&["len"])), "0");
}

#[test]
fn test_encrypt_then_decrypt() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["encrypt", "ad-hoc text"]);
    assert_success(&output);
    let ciphertext = stdout(&output);
    assert_ne!(ciphertext, "ad-hoc text");

    let output = sandbox.run(&["decrypt", &ciphertext]);
    assert_success(&output);
    assert_eq!(stdout(&output), "ad-hoc text");

    assert!(!sandbox.store_path().exists());
}

#[test]
fn test_config_file_selects_algorithm_and_prefix() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[engine]\nprefix = \"cfg\"\nenc_algorithm = \"XChaCha20\"\n");

    assert_success(&sandbox.run(&["set", "item", "B"]));
    assert_eq!(stdout(&sandbox.run(&["key", "0"])), "cfg:item");

    // An AES engine cannot open an XChaCha20 value.
    let output = sandbox.run(&["--algorithm", "aes", "get", "item"]);
    assert_exit(&output, 5);
}

#[test]
fn test_unknown_algorithm_exits_invalid_input() {
    let sandbox = Sandbox::new();
    assert_exit(&sandbox.run(&["--algorithm", "rabbit", "len"]), 4);
}

#[test]
fn test_completions_do_not_need_a_secret() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command("", &["completions", "bash"])
        .env_remove("ENCSTORE_SECRET")
        .output()
        .expect("run encstore");
    assert_success(&output);
    assert!(stdout(&output).contains("encstore"));
}
