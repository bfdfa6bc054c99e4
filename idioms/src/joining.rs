// joining.rs - A mergeable string reducer and an iterator adapter over it

/// Accumulates strings as `prefix a delim b delim c suffix`.
///
/// Two combiners built over separate halves of a sequence can be merged,
/// which is what lets the reduction run on split input.
#[derive(Clone, Debug)]
pub struct StringCombiner {
    delim: String,
    prefix: String,
    suffix: String,
    buf: String,
    started: bool,
}

impl StringCombiner {
    pub fn new(delim: &str, prefix: &str, suffix: &str) -> Self {
        Self {
            delim: delim.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            buf: String::new(),
            started: false,
        }
    }

    fn open_or_separate(&mut self) {
        if self.started {
            self.buf.push_str(&self.delim);
        } else {
            self.buf.push_str(&self.prefix);
            self.started = true;
        }
    }

    pub fn add(&mut self, element: &str) -> &mut Self {
        self.open_or_separate();
        self.buf.push_str(element);
        self
    }

    /// Appends everything `other` accumulated, minus its prefix.
    pub fn merge(&mut self, other: StringCombiner) -> &mut Self {
        if other.started {
            self.open_or_separate();
            self.buf.push_str(&other.buf[other.prefix.len()..]);
        }
        self
    }

    pub fn finish(mut self) -> String {
        if !self.started {
            self.buf.push_str(&self.prefix);
        }
        self.buf.push_str(&self.suffix);
        self.buf
    }
}

pub trait Joining: Iterator {
    fn join_with(self, delim: &str, prefix: &str, suffix: &str) -> String
    where
        Self: Sized,
        Self::Item: AsRef<str>,
    {
        self.fold(StringCombiner::new(delim, prefix, suffix), |mut acc, item| {
            acc.add(item.as_ref());
            acc
        })
        .finish()
    }
}

impl<I: Iterator> Joining for I {}

/// Joins `items` chunk by chunk, then merges the partial results.
pub fn join_chunked<S: AsRef<str>>(
    items: &[S],
    chunk: usize,
    delim: &str,
    prefix: &str,
    suffix: &str,
) -> String {
    items
        .chunks(chunk.max(1))
        .map(|part| {
            part.iter().fold(StringCombiner::new(delim, prefix, suffix), |mut acc, s| {
                acc.add(s.as_ref());
                acc
            })
        })
        .fold(StringCombiner::new(delim, prefix, suffix), |mut acc, part| {
            acc.merge(part);
            acc
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_brackets() {
        let names = ["John", "Paul", "Ringo"];
        assert_eq!(names.iter().join_with(", ", "[", "]"), "[John, Paul, Ringo]");
    }

    #[test]
    fn empty_input_is_prefix_and_suffix() {
        let none: [&str; 0] = [];
        assert_eq!(none.iter().join_with(", ", "[", "]"), "[]");
        assert_eq!(StringCombiner::new("/", "", "").finish(), "");
    }

    #[test]
    fn merging_empty_is_a_no_op() {
        let mut left = StringCombiner::new(", ", "<", ">");
        left.add("a");
        left.merge(StringCombiner::new(", ", "<", ">"));
        assert_eq!(left.finish(), "<a>");
    }

    #[test]
    fn merge_into_empty_keeps_one_prefix() {
        let mut right = StringCombiner::new(", ", "<", ">");
        right.add("b").add("c");
        let mut left = StringCombiner::new(", ", "<", ">");
        left.merge(right);
        assert_eq!(left.finish(), "<b, c>");
    }

    #[test]
    fn chunked_join_matches_sequential() {
        let words: Vec<String> = (0..17).map(|i| format!("w{i}")).collect();
        let sequential = words.iter().join_with(" | ", "{", "}");
        for chunk in [1, 2, 5, 17, 100] {
            assert_eq!(join_chunked(&words, chunk, " | ", "{", "}"), sequential);
        }
    }
}
