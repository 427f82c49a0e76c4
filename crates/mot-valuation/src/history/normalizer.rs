pub(crate) fn normalize_kind(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '_', '-'], " ");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_uppercase()
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_kind(value)
}
