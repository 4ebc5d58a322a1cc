//! Integration tests for idmap

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn idmap() -> Command {
        let mut cmd = cargo_bin_cmd!("idmap");
        cmd.env_remove("IDMAP_SALT").env_remove("RUST_LOG");
        cmd
    }

    /// Write a config that seeds from small account files inside `dir`
    fn seeded_config(dir: &Path) -> PathBuf {
        let passwd = dir.join("passwd");
        let group = dir.join("group");
        std::fs::write(
            &passwd,
            "alice:x:4242:4242::/home/alice:/bin/sh\nbob:x:4243:4243::/home/bob:/bin/sh\n",
        )
        .unwrap();
        std::fs::write(&group, "builders:x:5151:alice,bob\n").unwrap();

        let config = dir.join("config.toml");
        std::fs::write(
            &config,
            format!(
                "[mapping]\nsalt = \"s\"\npasswd_path = {:?}\ngroup_path = {:?}\n",
                passwd.display().to_string(),
                group.display().to_string()
            ),
        )
        .unwrap();
        config
    }

    #[test]
    fn help_displays() {
        idmap()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("identity mapping"));
    }

    #[test]
    fn version_displays() {
        idmap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("idmap"));
    }

    #[test]
    fn synth_prints_known_id() {
        idmap()
            .args(["--salt", "s", "synth", "ghost"])
            .assert()
            .success()
            .stdout("1745000180\n");
    }

    #[test]
    fn synth_digest_shows_md5() {
        idmap()
            .args(["--salt", "s", "synth", "ghost", "--digest"])
            .assert()
            .success()
            .stdout(predicate::str::contains("86e6d8ea23b884337270da82af064a41"));
    }

    #[test]
    fn salt_from_environment() {
        let mut cmd = idmap();
        cmd.env("IDMAP_SALT", "s")
            .args(["synth", "ghost"])
            .assert()
            .success()
            .stdout("1745000180\n");
    }

    #[test]
    fn absent_user_gets_synthetic_id() {
        let name = "idmap-test-absent-user";
        let expected = idmap::synthetic_id("s", name);
        idmap()
            .args(["--no-seed", "--salt", "s", "user", name])
            .assert()
            .success()
            .stdout(format!("{} {}\n", name, expected));
    }

    #[test]
    fn seeded_accounts_resolve_both_ways() {
        let temp = TempDir::new().unwrap();
        let config = seeded_config(temp.path());

        idmap()
            .arg("--config")
            .arg(&config)
            .args(["uid", "4242", "4243"])
            .assert()
            .success()
            .stdout("alice 4242\nbob 4243\n");

        idmap()
            .arg("--config")
            .arg(&config)
            .args(["group", "builders"])
            .assert()
            .success()
            .stdout("builders 5151\n");
    }

    #[test]
    fn unknown_gid_resolves_to_decimal_name() {
        idmap()
            .args(["--no-seed", "gid", "4000000000"])
            .assert()
            .success()
            .stdout("4000000000 4000000000\n");
    }

    #[test]
    fn dump_json_lists_seeded_entries() {
        let temp = TempDir::new().unwrap();
        let config = seeded_config(temp.path());

        idmap()
            .arg("--config")
            .arg(&config)
            .args(["dump", "--format", "json"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("\"alice\"")
                    .and(predicate::str::contains("\"builders\""))
                    .and(predicate::str::contains("5151")),
            );
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");
        idmap()
            .arg("--config")
            .arg(&config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        idmap()
            .arg("--config")
            .arg(temp.path().join("missing.toml"))
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[mapping]"));
    }

    #[test]
    fn config_set_then_synth_uses_salt() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");

        idmap()
            .arg("--config")
            .arg(&config)
            .args(["config", "set", "mapping.salt", "s"])
            .assert()
            .success();

        idmap()
            .arg("--config")
            .arg(&config)
            .args(["synth", "ghost"])
            .assert()
            .success()
            .stdout("1745000180\n");
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        idmap()
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn invalid_config_reports_hint() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[mapping\n").unwrap();

        idmap()
            .arg("--config")
            .arg(&config)
            .args(["synth", "ghost"])
            .assert()
            .failure()
            .stderr(
                predicate::str::contains("Invalid configuration")
                    .and(predicate::str::contains("Hint:")),
            );
    }
}
