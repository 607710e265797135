//! Output path resolution and staged writes.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// File extension of device files.
pub const DEVICE_EXTENSION: &str = "amxd";

/// Returns the default output path for an input document.
///
/// The input's extension is replaced with `.amxd`, keeping the device next
/// to its source (`ShadeOSC.maxpat` becomes `ShadeOSC.amxd`).
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(DEVICE_EXTENSION)
}

/// Returns true when `output` names the same file as the existing `input`.
///
/// Both sides are resolved through symlinks and `..` components. An output
/// that does not exist yet is resolved through its parent directory; if the
/// parent is missing too, it cannot be the input.
pub fn is_same_file(input: &Path, output: &Path) -> io::Result<bool> {
    let input = fs::canonicalize(input)?;

    if let Ok(resolved) = fs::canonicalize(output) {
        return Ok(resolved == input);
    }

    let Some(name) = output.file_name() else {
        return Ok(false);
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match fs::canonicalize(parent) {
        Ok(parent) => Ok(parent.join(name) == input),
        Err(_) => Ok(false),
    }
}

/// Writes a file at `path`, replacing any existing file.
///
/// `write` fills a temporary file in the destination directory, which is
/// renamed over `path` only once it returns successfully. On error the
/// temporary file is removed and `path` is left untouched.
///
/// A new file gets the usual creation mode (`0o666` less the umask); a
/// replaced file keeps the permissions it had.
pub fn write_atomic<F, E>(path: &Path, write: F) -> Result<(), E>
where
    F: FnOnce(&mut File) -> Result<(), E>,
    E: From<io::Error>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The kernel applies the umask to the creation mode.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut staged = builder.tempfile_in(dir)?;

    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions)?;
    }

    write(staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| E::from(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_bytes(path: &Path, bytes: &[u8]) -> io::Result<()> {
        write_atomic(path, |file| file.write_all(bytes))
    }

    #[test]
    fn test_default_output_path_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("m4l/ShadeOSC.maxpat")),
            PathBuf::from("m4l/ShadeOSC.amxd")
        );
    }

    #[test]
    fn test_default_output_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("patch")),
            PathBuf::from("patch.amxd")
        );
    }

    #[test]
    fn test_write_atomic_creates_and_replaces() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("device.amxd");

        write_bytes(&path, b"first").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");

        write_bytes(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        // Only the target remains; no staged files left behind.
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_atomic_missing_directory_fails_without_output() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("device.amxd");

        assert!(write_bytes(&path, b"bytes").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_atomic_failed_write_keeps_previous_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("device.amxd");
        fs::write(&path, b"previous").unwrap();

        let result: io::Result<()> = write_atomic(&path, |file| {
            file.write_all(b"partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "interrupted"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read(&path).unwrap(), b"previous");
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_uses_creation_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();

        // A plain create shows what the current umask yields.
        let reference = tmp.path().join("reference.maxpat");
        fs::write(&reference, b"{}").unwrap();
        let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

        let path = tmp.path().join("device.amxd");
        write_bytes(&path, b"bytes").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;

        assert_eq!(mode, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_replacement_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("device.amxd");
        fs::write(&path, b"old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_bytes(&path, b"new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_is_same_file_plain_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.maxpat");
        fs::write(&input, b"{}").unwrap();

        assert!(is_same_file(&input, &input).unwrap());
        assert!(!is_same_file(&input, &tmp.path().join("in.amxd")).unwrap());
        assert!(!is_same_file(&input, &tmp.path().join("missing").join("in.maxpat")).unwrap());
    }

    #[test]
    fn test_is_same_file_through_parent_alias() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.maxpat");
        fs::write(&input, b"{}").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let alias = tmp.path().join("sub").join("..").join("in.maxpat");
        assert!(is_same_file(&input, &alias).unwrap());

        let sibling = tmp.path().join("sub").join("..").join("out.amxd");
        assert!(!is_same_file(&input, &sibling).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_is_same_file_through_symlink() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.maxpat");
        fs::write(&input, b"{}").unwrap();
        let link = tmp.path().join("link.amxd");
        std::os::unix::fs::symlink(&input, &link).unwrap();

        assert!(is_same_file(&input, &link).unwrap());
    }
}
