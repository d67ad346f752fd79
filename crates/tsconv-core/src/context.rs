//! Context types for rule execution.

use std::path::Path;

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file as discovered.
    pub path: &'a Path,
    /// File contents as a string. Empty when only the path is available.
    pub content: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self { path, content }
    }

    /// Creates a context for path-only rules, without file contents.
    #[must_use]
    pub fn path_only(path: &'a Path) -> Self {
        Self::new(path, "")
    }

    /// Returns the file name, lossily decoded.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Iterates over lines with their 1-indexed line numbers.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. A trailing terminator
    /// does not start an extra empty line.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        let mut rest = self.content;
        std::iter::from_fn(move || {
            if rest.is_empty() {
                return None;
            }
            let Some(i) = rest.find(|c: char| c == '\r' || c == '\n') else {
                return Some(std::mem::take(&mut rest));
            };
            let line = &rest[..i];
            let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[i + skip..];
            Some(line)
        })
        .enumerate()
        .map(|(i, l)| (i + 1, l))
    }

    /// Returns the 1-indexed line containing the given byte offset.
    ///
    /// Line breaks are counted the same way as in [`FileContext::lines`].
    #[must_use]
    pub fn line_at(&self, offset: usize) -> usize {
        let bytes = self.content.as_bytes();
        let end = offset.min(bytes.len());
        bytes[..end]
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
            .count()
            + 1
    }
}

/// Context provided to project-wide rules.
#[derive(Debug, Clone)]
pub struct ProjectContext<'a> {
    /// Root directory of the project.
    pub root: &'a Path,
}

impl<'a> ProjectContext<'a> {
    /// Creates a new project context.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(content: &str) -> Vec<(usize, &str)> {
        FileContext::new(Path::new("a.ts"), content).lines().collect()
    }

    #[test]
    fn test_file_name() {
        let ctx = FileContext::path_only(Path::new("/project/src/app.ts"));
        assert_eq!(ctx.file_name(), "app.ts");
        assert!(ctx.content.is_empty());
    }

    #[test]
    fn test_lines_are_one_indexed() {
        assert_eq!(
            numbered("one\ntwo\r\nthree"),
            vec![(1, "one"), (2, "two"), (3, "three")]
        );
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        assert_eq!(
            numbered("// a\r\rlong\r// TODO fix\r"),
            vec![(1, "// a"), (2, ""), (3, "long"), (4, "// TODO fix")]
        );
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(numbered("a\n\n"), vec![(1, "a"), (2, "")]);
        assert!(numbered("").is_empty());
    }

    #[test]
    fn test_line_at_offset() {
        let content = "line1\nline2\nline3";
        let ctx = FileContext::new(Path::new("a.ts"), content);

        assert_eq!(ctx.line_at(0), 1);
        assert_eq!(ctx.line_at(6), 2);
        assert_eq!(ctx.line_at(14), 3);
        assert_eq!(ctx.line_at(1000), 3);
    }

    #[test]
    fn test_line_at_mixed_endings() {
        let content = "a\r\nb\rc\nd";
        let ctx = FileContext::new(Path::new("a.ts"), content);

        assert_eq!(ctx.line_at(3), 2);
        assert_eq!(ctx.line_at(5), 3);
        assert_eq!(ctx.line_at(7), 4);
    }
}
