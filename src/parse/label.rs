/// Role of a labeled path in a drawing, decoded from its Inkscape label.
///
/// Indices start at 1. Labels are matched exactly: no surrounding whitespace, no sign, digits
/// only after the prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathLabel {
    /// `inner{n}`
    Inner(usize),
    /// `outer{n}`
    Outer(usize),
    /// `anim{n}`
    Anim(usize),
    /// `mask`
    Mask,
    /// `segment{n}` or `segment{n}-{m}-...`, one index per curve of the path.
    Segment(Vec<usize>),
    /// `start{n}`
    Start(usize),
    /// `end{n}`
    End(usize),
    /// `end{n}-start{m}`: one line setting both slopes.
    EndStart {
        /// Segment whose end slope this sets.
        end: usize,
        /// Segment whose start slope this sets.
        start: usize,
    },
}

impl PathLabel {
    /// Decode `label`, or `None` if it follows none of the known patterns.
    pub fn parse(label: &str) -> Option<Self> {
        if label == "mask" {
            return Some(Self::Mask);
        }
        if let Some(rest) = label.strip_prefix("segment") {
            return rest
                .split('-')
                .map(parse_index)
                .collect::<Option<Vec<_>>>()
                .map(Self::Segment);
        }
        if let Some((end, start)) = label.split_once('-') {
            return Some(Self::EndStart {
                end: indexed(end, "end")?,
                start: indexed(start, "start")?,
            });
        }
        indexed(label, "inner")
            .map(Self::Inner)
            .or_else(|| indexed(label, "outer").map(Self::Outer))
            .or_else(|| indexed(label, "anim").map(Self::Anim))
            .or_else(|| indexed(label, "start").map(Self::Start))
            .or_else(|| indexed(label, "end").map(Self::End))
    }
}

fn indexed(label: &str, prefix: &str) -> Option<usize> {
    label.strip_prefix(prefix).and_then(parse_index)
}

fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/parse/label.rs"]
mod tests;
