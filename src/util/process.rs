//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{bail, Context, Result};

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }

    /// Execute with inherited stdio and return the exit status.
    pub fn status(&self) -> Result<ExitStatus> {
        let mut cmd = self.build_command();
        cmd.status()
            .with_context(|| format!("failed to execute `{}`", self.display_command()))
    }

    /// Execute with inherited stdio and require success.
    ///
    /// Framework builds print their own progress, so their output is passed
    /// straight through instead of captured.
    pub fn status_and_check(&self) -> Result<()> {
        let status = self.status()?;
        if !status.success() {
            bail!(
                "`{}` failed with exit code {:?}",
                self.display_command(),
                status.code()
            );
        }
        Ok(())
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Find the npm client.
pub fn find_npm() -> Option<PathBuf> {
    // Check NPM environment variable first
    if let Ok(npm) = std::env::var("NPM") {
        if let Some(path) = find_executable(&npm) {
            return Some(path);
        }
    }

    find_executable("npm")
}

/// Build a command running a script from the project's `package.json`.
///
/// Arguments are forwarded to the script after `--`.
pub fn pkg_json_script(project_dir: &Path, script: &str, args: &[&str]) -> Result<ProcessBuilder> {
    let Some(npm) = find_npm() else {
        bail!("could not find `npm` in PATH\nhelp: install Node.js or set the NPM environment variable");
    };

    let mut pb = ProcessBuilder::new(npm).args(["run", script]).cwd(project_dir);
    if !args.is_empty() {
        pb = pb.arg("--").args(args);
    }

    Ok(pb)
}

/// Build a command running an executable installed in `node_modules/.bin`.
///
/// The lookup walks up from `project_dir` like Node's module resolution.
pub fn node_modules_bin(project_dir: &Path, name: &str) -> Result<ProcessBuilder> {
    let file_name = if cfg!(windows) {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    };

    for ancestor in project_dir.ancestors() {
        let candidate = ancestor.join("node_modules").join(".bin").join(&file_name);
        if candidate.is_file() {
            return Ok(ProcessBuilder::new(candidate).cwd(project_dir));
        }
    }

    bail!(
        "could not find `{}` in node_modules/.bin\nhelp: run `npm install` in {}",
        name,
        project_dir.display()
    )
}
