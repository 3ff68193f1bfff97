use crate::{
    error::{GenerateError, Result},
    record::load_records,
    utils::{
        constants::{DEFAULT_INPUT_FILE_NAME, DEFAULT_OUTPUT_FILE_NAME},
        defaults::render_contract,
    },
};
use smart_grid_tracing::println_warning;
use std::{fs, io, path::PathBuf};
use tracing::debug;

/// Where to read users from and where the contract goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Compare against the existing output instead of writing it.
    pub check: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE_NAME),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE_NAME),
            check: false,
        }
    }
}

/// The outcome of a successful generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    /// Number of constructor statements emitted.
    pub users: usize,
    /// Size of the rendered contract.
    pub bytes: usize,
    /// Only set in check mode, where the output was left untouched.
    pub up_to_date: bool,
}

/// Load the users, render the contract and write it out in a single pass.
///
/// Every input error is raised before the output path is touched, so a failed run leaves
/// any previous output as it was. An existing output is overwritten without asking.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateSummary> {
    debug!("loading users from {}", opts.input.display());
    let users = load_records(&opts.input)?;
    if users.is_empty() {
        println_warning(&format!(
            "{} contains no users, the constructor will only set the owner",
            opts.input.display()
        ));
    }

    let contents = render_contract(&users);
    let mut summary = GenerateSummary {
        output: opts.output.clone(),
        users: users.len(),
        bytes: contents.len(),
        up_to_date: false,
    };

    if opts.check {
        let existing = match fs::read_to_string(&opts.output) {
            Ok(existing) => Some(existing),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(GenerateError::OutputReadFailed {
                    path: opts.output.clone(),
                    source,
                })
            }
        };
        if existing.as_deref() != Some(contents.as_str()) {
            return Err(GenerateError::OutputOutOfDate {
                path: opts.output.clone(),
            });
        }
        summary.up_to_date = true;
        return Ok(summary);
    }

    debug!("writing {} bytes to {}", contents.len(), opts.output.display());
    fs::write(&opts.output, &contents).map_err(|source| GenerateError::OutputWriteFailed {
        path: opts.output.clone(),
        source,
    })?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ONE_USER: &str =
        r#"[{"UserType":"prosumer","EnergyBalance":120,"Price":5,"Classification":1,"Radian":3}]"#;

    fn options_in(dir: &std::path::Path) -> GenerateOptions {
        GenerateOptions {
            input: dir.join(DEFAULT_INPUT_FILE_NAME),
            output: dir.join(DEFAULT_OUTPUT_FILE_NAME),
            check: false,
        }
    }

    #[test]
    fn default_paths_are_relative_file_names() {
        let opts = GenerateOptions::default();
        assert_eq!(opts.input, PathBuf::from("users.json"));
        assert_eq!(opts.output, PathBuf::from("SmartGridMappingGenerated.sol"));
        assert!(!opts.check);
    }

    #[test]
    fn writes_contract_and_reports_summary() {
        let dir = tempdir().unwrap();
        let opts = options_in(dir.path());
        fs::write(&opts.input, ONE_USER).unwrap();

        let summary = generate(&opts).unwrap();
        let written = fs::read_to_string(&opts.output).unwrap();
        assert_eq!(summary.users, 1);
        assert_eq!(summary.bytes, written.len());
        assert!(!summary.up_to_date);
        assert!(written.contains(
            "users.push(User(\"prosumer\", 120, 5, 1, 3, false, type(uint).max));"
        ));
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let opts = options_in(dir.path());
        fs::write(&opts.input, "[]").unwrap();
        fs::write(&opts.output, "stale").unwrap();

        generate(&opts).unwrap();
        let written = fs::read_to_string(&opts.output).unwrap();
        assert!(written.starts_with("\n// SPDX-License-Identifier: MIT\n"));
    }

    #[test]
    fn check_mode_never_writes() {
        let dir = tempdir().unwrap();
        let mut opts = options_in(dir.path());
        fs::write(&opts.input, ONE_USER).unwrap();
        opts.check = true;

        let err = generate(&opts).unwrap_err();
        assert!(matches!(err, GenerateError::OutputOutOfDate { .. }), "{err}");
        assert!(!opts.output.exists());

        opts.check = false;
        generate(&opts).unwrap();
        opts.check = true;
        let summary = generate(&opts).unwrap();
        assert!(summary.up_to_date);
    }

    #[test]
    fn check_mode_reports_unreadable_output() {
        let dir = tempdir().unwrap();
        let mut opts = options_in(dir.path());
        fs::write(&opts.input, ONE_USER).unwrap();
        opts.output = dir.path().join("contracts");
        fs::create_dir(&opts.output).unwrap();
        opts.check = true;

        let err = generate(&opts).unwrap_err();
        assert!(matches!(err, GenerateError::OutputReadFailed { .. }), "{err}");
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempdir().unwrap();
        let mut opts = options_in(dir.path());
        fs::write(&opts.input, ONE_USER).unwrap();
        opts.output = dir.path().join("missing-dir").join(DEFAULT_OUTPUT_FILE_NAME);

        let err = generate(&opts).unwrap_err();
        assert!(matches!(err, GenerateError::OutputWriteFailed { .. }), "{err}");
    }
}
