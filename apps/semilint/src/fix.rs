//! In-place rewriting through a sibling temporary file.
//!
//! The rewritten lines go to `<file>.autofix.tmp`, which is then renamed
//! over the original. The original is only replaced on the success path.
//! If the rename fails, removal of the temporary file is attempted once;
//! a stray `.autofix.tmp` can remain when that also fails.

use crate::error::{Result, SemilintError};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const TEMP_SUFFIX: &str = ".autofix.tmp";

/// Sibling temporary path used while rewriting `path`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Replace `path` with `lines`, each terminated by `\n`.
pub fn write_lines_atomically<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let tmp = temp_path_for(path);
    let file = File::create(&tmp).map_err(|source| SemilintError::TempCreate {
        path: tmp.clone(),
        source,
    })?;

    if let Err(source) = write_lines(file, lines) {
        let _ = fs::remove_file(&tmp);
        return Err(SemilintError::TempWrite { path: tmp, source });
    }

    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(SemilintError::Replace {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn write_lines<S: AsRef<str>>(file: File, lines: &[S]) -> std::io::Result<()> {
    let mut out = BufWriter::new(file);
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_path_is_a_sibling() {
        assert_eq!(
            temp_path_for(Path::new("scripts/a.js")),
            PathBuf::from("scripts/a.js.autofix.tmp")
        );
    }

    #[test]
    fn test_write_replaces_and_cleans_up() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a.js");
        fs::write(&target, "x\r\ny").unwrap();

        write_lines_atomically(&target, &["x;", "y;"]).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "x;\ny;\n");
        assert!(!temp_path_for(&target).exists());
    }

    #[test]
    fn test_create_failure_leaves_original() {
        let dir = tempdir().unwrap();
        // parent directory does not exist, so the temp file cannot be created
        let target = dir.path().join("missing").join("a.js");
        let err = write_lines_atomically(&target, &["x;"]).unwrap_err();
        assert!(matches!(err, SemilintError::TempCreate { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_rename_failure_leaves_original() {
        let dir = tempdir().unwrap();
        // renaming a file over a non-empty directory fails on every platform
        let target = dir.path().join("a.js");
        fs::create_dir_all(target.join("inner")).unwrap();
        let err = write_lines_atomically(&target, &["x;"]).unwrap_err();
        assert!(matches!(err, SemilintError::Replace { .. }));
        assert!(target.join("inner").is_dir());
    }
}
