/// Formats an uploaded file name as a display title: the extension is
/// stripped, `-`/`_` separators become spaces, and each word is capitalized.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);

    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_extension_and_spaces_separators() {
        assert_eq!(
            title_from_file_name("q3-financial_report.pdf"),
            "Q3 Financial Report"
        );
    }

    #[test]
    fn test_keeps_inner_dots_in_stem() {
        assert_eq!(title_from_file_name("v2.1-release-notes.pdf"), "V2.1 Release Notes");
    }

    #[test]
    fn test_plain_name_without_extension() {
        assert_eq!(title_from_file_name("whitepaper"), "Whitepaper");
    }

    #[test]
    fn test_collapses_repeated_separators() {
        assert_eq!(title_from_file_name("annual__report--2025.pdf"), "Annual Report 2025");
    }

    #[test]
    fn test_empty_name_yields_empty_title() {
        assert_eq!(title_from_file_name(""), "");
    }
}
