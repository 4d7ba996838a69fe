use super::{LoadError, LoadedText};
use std::path::Path;

/// Load a UTF-8 text file.
///
/// Missing files, unreadable files and files with nothing but whitespace
/// are all reported as errors.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedText, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }

    Ok(LoadedText {
        text,
        source: format!("file:{}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tedious-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_empty_file_error() {
        let test_file = temp_path("empty.txt");
        File::create(&test_file).unwrap();

        let result = load(&test_file);
        assert!(matches!(result, Err(LoadError::Empty(_))));

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_whitespace_file_error() {
        let test_file = temp_path("blank.txt");
        fs::write(&test_file, " \n\t\n").unwrap();

        assert!(matches!(load(&test_file), Err(LoadError::Empty(_))));

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load("nonexistent_file_12345.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let test_file = temp_path("valid.txt");
        let mut file = File::create(&test_file).unwrap();
        file.write_all(b"hello world").unwrap();

        let loaded = load(&test_file).unwrap();
        assert_eq!(loaded.text, "hello world");
        assert!(loaded.source.starts_with("file:"));

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let test_file = temp_path("binary.txt");
        fs::write(&test_file, [0xff, 0xfe, 0xfd]).unwrap();

        assert!(matches!(load(&test_file), Err(LoadError::Io { .. })));

        fs::remove_file(test_file).unwrap();
    }
}
