//! Functions that log, made pure by returning their log fragment through [`Writer`].

use algebra::writer::{self, Writer};

/// Boolean negation that reports what it did.
pub fn negate(b: bool) -> Writer<bool> {
    Writer::new(!b, "Not so! ".to_string())
}

/// Upper-cases every character.
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Splits on every whitespace character. Consecutive whitespace yields empty words, and the
/// result always holds at least one (possibly empty) word.
pub fn words(s: &str) -> Vec<String> {
    s.split(char::is_whitespace).map(str::to_owned).collect()
}

/// [`to_upper`] as a writer arrow.
pub fn up_case(s: String) -> Writer<String> {
    Writer::new(to_upper(&s), "up_case ".to_string())
}

/// [`words`] as a writer arrow.
pub fn to_words(s: String) -> Writer<Vec<String>> {
    Writer::new(words(&s), "to_words ".to_string())
}

/// Upper-cases and splits a string, logging both steps.
pub fn process() -> impl Fn(String) -> Writer<Vec<String>> {
    writer::compose(up_case, to_words)
}

#[cfg(test)]
mod tests {
    use algebra::writer;

    use super::{negate, process, words};

    #[test]
    fn process_logs_each_step_in_order() {
        let (value, log) = process()("hello world".to_string()).into_parts();
        assert_eq!(value, vec!["HELLO", "WORLD"]);
        assert_eq!(log, "up_case to_words ");
    }

    #[test]
    fn double_negation_logs_twice() {
        let (value, log) = writer::compose(negate, negate)(true).into_parts();
        assert!(value);
        assert_eq!(log, "Not so! Not so! ");
    }

    #[test]
    fn words_keeps_empty_runs() {
        assert_eq!(words(""), vec![""]);
        assert_eq!(words("a  b"), vec!["a", "", "b"]);
    }
}
