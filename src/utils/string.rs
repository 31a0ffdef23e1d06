//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Remove every comma so the name fits the unquoted CSV writer
pub fn strip_commas(name: &str) -> String {
    name.replace(',', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("actor", 0), "actors");
        assert_eq!(pluralize("actor", 1), "actor");
        assert_eq!(pluralize("edge", 5), "edges");
    }

    #[test]
    fn test_strip_commas() {
        assert_eq!(strip_commas("Robert Downey, Jr."), "Robert Downey Jr.");
        assert_eq!(strip_commas(",,"), "");
        assert_eq!(strip_commas("Keanu Reeves"), "Keanu Reeves");
    }
}
