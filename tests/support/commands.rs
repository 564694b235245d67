//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an env2secret command running inside the test directory.
    ///
    /// Configuration variables are cleared so the host environment cannot
    /// leak into a test.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("env2secret").expect("failed to find env2secret binary");
        cmd.current_dir(self.dir.path());
        for var in [
            "ENV2SECRET_ENV",
            "ENV2SECRET_OUTPUT",
            "ENV2SECRET_NAMESPACE",
            "ENV2SECRET_NAME",
            "ENV2SECRET_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run env2secret with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run env2secret")
    }

    /// Run env2secret with defaults.
    pub fn convert(&self) -> Output {
        self.run(&[])
    }
}
