//! File selection for document-typed form fields.
//!
//! The picker scans the working directory (gitignore-aware, capped) and fuzzy
//! filters by subsequence. Only the relative file name is ever handed back;
//! file contents are never read.

use std::path::Path;

use ignore::WalkBuilder;

/// Stop scanning after this many files to stay responsive on huge trees.
const MAX_FILES_SCAN: usize = 10_000;

/// Cap on rows shown in the overlay.
const MAX_DISPLAY_RESULTS: usize = 15;

/// The file-picker collaborator's answer: a name, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
}

/// Scanned file list plus the current filtered view into it.
#[derive(Debug, Clone, Default)]
pub struct DocumentPicker {
    names: Vec<String>,
    filtered: Vec<usize>,
}

impl DocumentPicker {
    /// Scan `root` for candidate files, respecting gitignore rules and
    /// skipping VCS/build directories.
    pub fn scan(root: &Path) -> Self {
        let mut names = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !matches!(name.as_ref(), ".git" | "node_modules" | "target")
            })
            .build();

        for entry in walker.flatten() {
            if names.len() >= MAX_FILES_SCAN {
                break;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let display = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            if !display.is_empty() {
                names.push(display);
            }
        }

        names.sort();

        let mut picker = Self {
            names,
            filtered: Vec::new(),
        };
        picker.set_filter("");
        picker
    }

    /// Build a picker from fixed names. Used by tests and by callers that
    /// already know the candidate set.
    pub fn from_names(names: Vec<String>) -> Self {
        let mut picker = Self {
            names,
            filtered: Vec::new(),
        };
        picker.set_filter("");
        picker
    }

    /// Recompute the filtered view for `filter`, best matches first.
    pub fn set_filter(&mut self, filter: &str) {
        if filter.is_empty() {
            self.filtered = (0..self.names.len().min(MAX_DISPLAY_RESULTS)).collect();
            return;
        }

        let needle: Vec<char> = filter.to_lowercase().chars().collect();
        let mut scored: Vec<(usize, i32)> = self
            .names
            .iter()
            .enumerate()
            .filter_map(|(idx, name)| subsequence_score(name, &needle).map(|s| (idx, s)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| self.names[a.0].len().cmp(&self.names[b.0].len()))
        });

        self.filtered = scored
            .into_iter()
            .take(MAX_DISPLAY_RESULTS)
            .map(|(idx, _)| idx)
            .collect();
    }

    /// Names currently visible, in rank order.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().filter_map(|&idx| {
            self.names.get(idx).map(String::as_str)
        })
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.names.len()
    }

    /// Resolve the row at `selected` to a picked file.
    pub fn pick(&self, selected: usize) -> Option<PickedFile> {
        let idx = *self.filtered.get(selected)?;
        self.names.get(idx).map(|name| PickedFile { name: name.clone() })
    }
}

/// Score a case-insensitive subsequence match of `needle` in `name`.
///
/// `None` means no match. Adjacent matched characters and matches at path
/// component boundaries score higher; longer names score slightly lower.
fn subsequence_score(name: &str, needle: &[char]) -> Option<i32> {
    if needle.is_empty() {
        return Some(1);
    }

    let haystack: Vec<char> = name.to_lowercase().chars().collect();
    let mut positions = Vec::with_capacity(needle.len());
    let mut next = 0;

    for (i, &c) in haystack.iter().enumerate() {
        if next < needle.len() && c == needle[next] {
            positions.push(i);
            next += 1;
        }
    }

    if next != needle.len() {
        return None;
    }

    let mut score = 100;
    for pair in positions.windows(2) {
        if pair[1] == pair[0] + 1 {
            score += 10;
        }
    }
    for &pos in &positions {
        let at_boundary = pos == 0
            || matches!(haystack.get(pos - 1), Some('/' | '.' | '_' | '-'));
        if at_boundary {
            score += 15;
        }
    }
    score -= (name.len() / 10) as i32;

    Some(score.max(1))
}
