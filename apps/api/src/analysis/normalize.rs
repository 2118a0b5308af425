/// Views over the résumé text computed once per call and shared by all analyzers.
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    /// Text exactly as extracted.
    pub original: &'a str,
    pub lower: String,
    /// `\n`-separated lines whose trimmed form is non-empty. Not trimmed.
    pub lines: Vec<&'a str>,
    pub words: Vec<&'a str>,
}

impl<'a> NormalizedText<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lower: original.to_lowercase(),
            lines: original
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .collect(),
            words: original.split_whitespace().collect(),
        }
    }

    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }

    pub fn contains_all(&self, keywords: &[&str]) -> bool {
        keywords.iter().all(|k| self.lower.contains(k))
    }

    /// Number of distinct keywords present at least once.
    pub fn count_present(&self, keywords: &[&str]) -> usize {
        keywords.iter().filter(|k| self.lower.contains(*k)).count()
    }

    /// The first `n` lines joined by a single space, lower-cased.
    pub fn leading_window(&self, n: usize) -> String {
        self.lines
            .iter()
            .take(n)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Mean length in characters over non-empty lines, `None` without lines.
    pub fn mean_line_length(&self) -> Option<f64> {
        if self.lines.is_empty() {
            return None;
        }
        let total: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        Some(total as f64 / self.lines.len() as f64)
    }
}
