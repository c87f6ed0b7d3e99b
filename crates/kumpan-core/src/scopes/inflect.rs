//! English singular forms for scope directory names (`components` -> `component`)

/// Words whose singular is not derived by suffix rules
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("indices", "index"),
    ("utilities", "utility"),
];

/// Words that are the same in both forms or already singular
const UNCOUNTABLE: &[&str] = &["data", "info", "media", "series", "news", "status"];

/// Return the singular form of a plural English noun, preserving a leading capital
pub fn singular(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, single)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return match_case(word, single);
    }

    if lower.ends_with("ies") && lower.len() > 3 {
        return format!("{}y", &word[..word.len() - 3]);
    }

    let stem_len = if ["sses", "shes", "ches", "xes", "zes"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        word.len() - 2
    } else if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        word.len()
    } else if lower.ends_with('s') && lower.len() > 1 {
        word.len() - 1
    } else {
        word.len()
    };

    word[..stem_len].to_string()
}

fn match_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(singular("components"), "component");
        assert_eq!(singular("hooks"), "hook");
        assert_eq!(singular("tests"), "test");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(singular("libraries"), "library");
        assert_eq!(singular("boxes"), "box");
        assert_eq!(singular("switches"), "switch");
        assert_eq!(singular("classes"), "class");
    }

    #[test]
    fn test_already_singular() {
        assert_eq!(singular("test"), "test");
        assert_eq!(singular("class"), "class");
        assert_eq!(singular("status"), "status");
        assert_eq!(singular("data"), "data");
    }

    #[test]
    fn test_irregular_keeps_capital() {
        assert_eq!(singular("children"), "child");
        assert_eq!(singular("Utilities"), "Utility");
    }
}
