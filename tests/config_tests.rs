//! Integration tests for the local configuration and credential commands.
//!
//! Every test points IDCLI_CONFIG_DIR at its own temporary directory so
//! that nothing touches the real configuration or the OS keyring (the
//! default `dev-keyring` feature stores credentials next to the
//! configuration file).

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn idcli(config_dir: &TempDir) -> Command {
        let mut cmd = Command::cargo_bin("idcli").unwrap();
        cmd.env("IDCLI_CONFIG_DIR", config_dir.path());
        cmd.env_remove("IDCLI_API_TOKEN");
        cmd
    }

    #[test]
    fn config_path_points_into_config_dir() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["config", "path"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains(dir.path().to_str().unwrap()))
            .stdout(predicate::str::contains("config.yml"));
    }

    #[test]
    fn config_get_creates_default_configuration() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["config", "get"]);

        cmd.assert().success();
        assert!(dir.path().join("config.yml").exists());
    }

    #[test]
    fn config_set_persists_org_url() {
        let dir = TempDir::new().unwrap();

        idcli(&dir)
            .args(["config", "set", "--url", "https://example.identity.test"])
            .assert()
            .success();

        idcli(&dir)
            .args(["config", "get"])
            .assert()
            .success()
            .stdout(predicate::str::contains("org_url"))
            .stdout(predicate::str::contains("example.identity.test"));
    }

    #[test]
    fn config_set_rejects_invalid_url() {
        let dir = TempDir::new().unwrap();

        idcli(&dir)
            .args(["config", "set", "--url", "not a url"])
            .assert()
            .failure();
    }

    #[test]
    fn config_export_and_import_round_trip() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let export_path = source_dir.path().join("exported.yml");

        idcli(&source_dir)
            .args(["config", "set", "--url", "https://org.identity.test"])
            .assert()
            .success();

        idcli(&source_dir)
            .args(["config", "export", "--output", export_path.to_str().unwrap()])
            .assert()
            .success();

        idcli(&target_dir)
            .args(["config", "import", "--file", export_path.to_str().unwrap()])
            .assert()
            .success();

        idcli(&target_dir)
            .args(["config", "get"])
            .assert()
            .success()
            .stdout(predicate::str::contains("org.identity.test"));
    }

    #[test]
    fn auth_status_reports_no_token_initially() {
        let dir = TempDir::new().unwrap();

        idcli(&dir)
            .args(["auth", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No API token configured"));
    }

    #[test]
    fn auth_login_stores_token_without_printing_it() {
        let dir = TempDir::new().unwrap();

        idcli(&dir)
            .args(["auth", "login", "--token", "00secret-token-value"])
            .assert()
            .success()
            .stdout(predicate::str::contains("00secret-token-value").not());

        idcli(&dir)
            .args(["auth", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("API token configured"))
            .stdout(predicate::str::contains("00secret-token-value").not());
    }

    #[test]
    fn auth_logout_removes_token() {
        let dir = TempDir::new().unwrap();

        idcli(&dir)
            .args(["auth", "login", "--token", "00secret-token-value"])
            .assert()
            .success();

        idcli(&dir).args(["auth", "logout"]).assert().success();

        idcli(&dir)
            .args(["auth", "status"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No API token configured"));
    }

    #[test]
    fn auth_status_prefers_environment_token() {
        let dir = TempDir::new().unwrap();

        let mut cmd = idcli(&dir);
        cmd.env("IDCLI_API_TOKEN", "env-token");
        cmd.args(["auth", "status"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("IDCLI_API_TOKEN"))
            .stdout(predicate::str::contains("env-token").not());
    }
}
