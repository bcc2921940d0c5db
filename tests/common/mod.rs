//! Shared testing utilities for provis CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A manifest that passes `provis check` with no findings.
#[allow(dead_code)]
pub const VALID_MANIFEST: &str = "\
project:
  name: cerebrum
  description: Brain-region model construction workspace.
  homepage: https://github.com/apache/airavata-cerebrum
  authors: [someone@example.edu]
  tags: [neuroscience, v1]
workspace:
  resources:
    min_cpu: 4
    min_gpu: 1
    min_mem: 16384
    min_gpu_mem: 8192
  model_collection:
    - source: cybershuttle
      identifier: mouse-v1-2024
      mount_point: /models/mouse-v1
  data_collection: []
additional_dependencies:
  modules: [cuda/12.2]
  conda:
    - python=3.10
    - numpy>=1.26
    - pyyaml
  pip:
    - git+https://github.com/apache/airavata-cerebrum.git@main#egg=airavata-cerebrum
";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `provis` binary within the
    /// default workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `provis` binary within a
    /// custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("provis").expect("Failed to locate provis binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.root.path());
        cmd
    }

    /// Path to the workspace.yml in the work directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.work_dir.join("workspace.yml")
    }

    /// Write manifest content into the work directory.
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.manifest_path(), content).expect("Failed to write test manifest");
    }

    /// Read a file from the work directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}
