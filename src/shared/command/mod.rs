use crate::shared::error::CollectionError;
use log::debug;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use which::which;

pub const VCGENCMD: &str = "vcgencmd";

/// One query understood by `vcgencmd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Request {
    MeasureTemp,
    MeasureClock(&'static str),
    MeasureVolts(&'static str),
    GetThrottled,
}

impl Request {
    pub fn args(&self) -> Vec<&'static str> {
        match *self {
            Request::MeasureTemp => vec!["measure_temp"],
            Request::MeasureClock(device) => vec!["measure_clock", device],
            Request::MeasureVolts(rail) => vec!["measure_volts", rail],
            Request::GetThrottled => vec!["get_throttled"],
        }
    }

    /// Measurement category the answer is parsed as.
    pub fn category(&self) -> &'static str {
        match self {
            Request::MeasureTemp => "temperature",
            Request::MeasureClock(_) => "clock",
            Request::MeasureVolts(_) => "voltage",
            Request::GetThrottled => "throttled",
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}

/// Runs a diagnostics request and hands back its captured stdout.
///
/// Implementations must run requests one at a time and return the raw text
/// untouched; interpreting it is the parsers' job.
pub trait CommandRunner {
    fn run(&self, request: Request) -> Result<String, CollectionError>;
    fn validate(&self) -> Result<(), CollectionError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, request: Request) -> Result<String, CollectionError> {
        (**self).run(request)
    }

    fn validate(&self) -> Result<(), CollectionError> {
        (**self).validate()
    }
}

/// The real `vcgencmd` binary.
#[derive(Debug, Clone)]
pub struct Vcgencmd {
    program: PathBuf,
}

impl Vcgencmd {
    /// Looks the tool up on `PATH`.
    pub fn locate() -> Result<Self, CollectionError> {
        let program = which(VCGENCMD)?;
        debug!("Using {} at {}", VCGENCMD, program.display());
        Ok(Self { program })
    }

    pub fn with_path(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, request: Request) -> String {
        format!("{} {}", self.program.display(), request)
    }
}

impl CommandRunner for Vcgencmd {
    fn run(&self, request: Request) -> Result<String, CollectionError> {
        let command = self.command_line(request);
        debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(request.args())
            .output()
            .map_err(|source| CollectionError::Execution {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CollectionError::ExitStatus {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            CollectionError::parse(
                request.category(),
                String::from_utf8_lossy(e.as_bytes()).into_owned(),
            )
        })?;
        debug!("{} -> {:?}", command, stdout);
        Ok(stdout)
    }

    fn validate(&self) -> Result<(), CollectionError> {
        which(&self.program)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_arguments() {
        assert_eq!(Request::MeasureTemp.args(), vec!["measure_temp"]);
        assert_eq!(Request::MeasureClock("arm").args(), vec!["measure_clock", "arm"]);
        assert_eq!(Request::MeasureVolts("sdram_c").to_string(), "measure_volts sdram_c");
        assert_eq!(Request::GetThrottled.category(), "throttled");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let runner = Vcgencmd::with_path("echo");
        let out = runner.run(Request::MeasureClock("arm")).unwrap();
        assert_eq!(out, "measure_clock arm\n");
    }

    #[cfg(unix)]
    #[test]
    fn abnormal_exit_is_an_execution_failure() {
        let runner = Vcgencmd::with_path("false");
        match runner.run(Request::GetThrottled) {
            Err(CollectionError::ExitStatus { command, status, .. }) => {
                assert!(command.ends_with("get_throttled"));
                assert!(!status.success());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_output_is_a_parse_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("vcgencmd");
        std::fs::write(&script, "#!/bin/sh\nprintf 'temp=4\\3778.0'\\''C\\n'\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = Vcgencmd::with_path(&script);
        match runner.run(Request::MeasureTemp) {
            Err(CollectionError::Parse { category, raw }) => {
                assert_eq!(category, "temperature");
                assert_eq!(raw, "temp=4\u{FFFD}8.0'C\n");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_binary_fails_to_start() {
        let runner = Vcgencmd::with_path("/nonexistent/vcgencmd");
        assert!(matches!(
            runner.run(Request::MeasureTemp),
            Err(CollectionError::Execution { .. })
        ));
        assert!(runner.validate().is_err());
    }
}
