//! Integration tests for the command line surface.
//!
//! These tests exercise the parser only; they never reach the network.

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
    fn top_level_help_lists_resource_groups() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.arg("--help");

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("user"))
            .stdout(predicate::str::contains("group"))
            .stdout(predicate::str::contains("app"))
            .stdout(predicate::str::contains("policy"))
            .stdout(predicate::str::contains("authenticator"))
            .stdout(predicate::str::contains("role"))
            .stdout(predicate::str::contains("resource-set"))
            .stdout(predicate::str::contains("trusted-origin"))
            .stdout(predicate::str::contains("org"))
            .stdout(predicate::str::contains("config"))
            .stdout(predicate::str::contains("auth"));
    }

    #[test]
    fn user_list_help_shows_filter_options() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["user", "list", "--help"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("-q"))
            .stdout(predicate::str::contains("--filter"))
            .stdout(predicate::str::contains("--search"))
            .stdout(predicate::str::contains("--limit"))
            .stdout(predicate::str::contains("--after"))
            .stdout(predicate::str::contains("--format"))
            .stdout(predicate::str::contains("--pretty"));
    }

    #[test]
    fn user_create_help_shows_data_option() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["user", "create", "--help"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("--data"))
            .stdout(predicate::str::contains("--activate"));
    }

    #[test]
    fn policy_rule_commands_are_present() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["policy", "--help"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("list-rules"))
            .stdout(predicate::str::contains("create-rule"))
            .stdout(predicate::str::contains("activate-rule"));
    }

    #[test]
    fn authenticator_method_commands_are_present() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["authenticator", "--help"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("list-methods"))
            .stdout(predicate::str::contains("update-method"));
    }

    #[test]
    fn resource_set_binding_commands_are_present() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["resource-set", "--help"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("list-resources"))
            .stdout(predicate::str::contains("add-resources"))
            .stdout(predicate::str::contains("list-bindings"))
            .stdout(predicate::str::contains("create-binding"));
    }

    #[test]
    fn missing_subcommand_fails() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);

        cmd.assert().failure();
    }

    #[test]
    fn user_get_requires_user_id() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["user", "get"]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("--user-id"));
    }

    #[test]
    fn user_create_requires_data() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["user", "create"]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("--data"));
    }

    #[test]
    fn policy_list_requires_type() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["policy", "list"]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("--type"));
    }

    #[test]
    fn unknown_resource_fails() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.arg("widget");

        cmd.assert().failure();
    }

    #[test]
    fn format_rejects_unknown_values() {
        let dir = TempDir::new().unwrap();
        let mut cmd = idcli(&dir);
        cmd.args(["user", "list", "--format", "xml"]);

        cmd.assert().failure();
    }
}
