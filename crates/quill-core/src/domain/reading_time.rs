//! Reading time estimation.

/// Average reading speed used for the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Estimate how long a body takes to read, formatted as `"<N> min read"`.
///
/// Words are whitespace-delimited tokens; the count is divided by 200
/// words/minute and rounded up. An empty or whitespace-only body yields
/// `"1 min read"` - the estimate never drops below one minute.
pub fn estimate_reading_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_word_is_one_minute() {
        assert_eq!(estimate_reading_time("hello"), "1 min read");
    }

    #[test]
    fn exactly_two_hundred_words_is_one_minute() {
        let body = vec!["word"; 200].join(" ");
        assert_eq!(estimate_reading_time(&body), "1 min read");
    }

    #[test]
    fn two_hundred_and_one_words_rounds_up() {
        let body = vec!["word"; 201].join(" ");
        assert_eq!(estimate_reading_time(&body), "2 min read");
    }

    #[test]
    fn four_hundred_words_is_two_minutes() {
        let body = vec!["word"; 400].join(" ");
        assert_eq!(estimate_reading_time(&body), "2 min read");
    }

    #[test]
    fn empty_body_is_one_minute() {
        assert_eq!(estimate_reading_time(""), "1 min read");
    }

    #[test]
    fn whitespace_only_body_is_one_minute() {
        assert_eq!(estimate_reading_time("  \n\t  "), "1 min read");
    }

    #[test]
    fn whitespace_runs_count_as_single_separators() {
        assert_eq!(estimate_reading_time("one\n\ntwo   three\tfour"), "1 min read");
    }
}
