/// A hit and the context shown around it, clamped to the subject boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitWindow {
    start: usize,
    end: usize,
    left: usize,
    right: usize,
}

impl HitWindow {
    pub fn new(subject_len: usize, start: usize, pattern_len: usize, context: usize) -> HitWindow {
        let start = usize::min(start, subject_len);
        let end = usize::min(start + pattern_len, subject_len);

        HitWindow {
            start,
            end,
            left: usize::min(context, start),
            right: usize::min(context, subject_len - end),
        }
    }

    /// 1-based, inclusive coordinates of the hit
    pub fn location(&self) -> (usize, usize) {
        (self.start + 1, self.end)
    }

    /// Returns the pattern and subject lines, with the pattern aligned under
    /// the hit and the hit separated from its context by single spaces.
    pub fn format(&self, pattern: &[u8], subject: &[u8]) -> (String, String) {
        let pattern_line = format!(
            "{}{}",
            " ".repeat(self.left + 1),
            String::from_utf8_lossy(pattern)
        );

        let subject_line = format!(
            "{} {} {}",
            String::from_utf8_lossy(&subject[self.start - self.left..self.start]),
            String::from_utf8_lossy(&subject[self.start..self.end]),
            String::from_utf8_lossy(&subject[self.end..self.end + self.right]),
        );

        (pattern_line, subject_line.trim_end().to_owned())
    }
}
