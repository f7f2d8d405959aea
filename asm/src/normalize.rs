const COMMENT: &str = "//";

/// A non-empty source line with whitespace and comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based index of the raw line it came from
    pub idx: usize,
    pub text: String,
}

impl Line {
    pub fn new(idx: usize, text: impl Into<String>) -> Self {
        Line {
            idx,
            text: text.into(),
        }
    }
}

pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Vec<Line> {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let mut text: String = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if let Some(pos) = text.find(COMMENT) {
                text.truncate(pos);
            }
            (!text.is_empty()).then(|| Line::new(idx, text))
        })
        .collect()
}
