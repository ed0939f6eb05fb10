use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_pawnote(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    work: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            work: tempfile::tempdir().expect("create temporary working dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run the binary with extra environment variables layered on top of the
    /// isolated defaults. The DeepSeek credential is always cleared first, so
    /// tests opt into it explicitly.
    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_pawnote"));
        command
            .args(args)
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env_remove("DEEPSEEK_API_KEY");
        for (key, value) in envs {
            command.env(key, value);
        }
        command.output().expect("failed to execute pawnote binary")
    }

    /// Write a config.toml into the isolated XDG config directory.
    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_dir = self.config.path().join("pawnote");
        std::fs::create_dir_all(&config_dir).expect("create config directory");
        std::fs::write(config_dir.join("config.toml"), contents).expect("write config file");
    }

    /// Drop a consultation record into the working directory and return its name.
    #[allow(dead_code)]
    pub fn write_input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.path().join(name);
        std::fs::write(&path, contents).expect("write consultation record");
        path
    }

    /// Path where a note for the given input stem would be written.
    #[allow(dead_code)]
    pub fn solution_path(&self, stem: &str) -> PathBuf {
        self.work
            .path()
            .join("solution")
            .join(format!("{stem}_output.json"))
    }

    #[allow(dead_code)]
    pub fn solution_dir(&self) -> PathBuf {
        self.work.path().join("solution")
    }
}
