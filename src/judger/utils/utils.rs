/// Strips surrounding spaces and line terminators from a scraped text field.
/// Fields that end up empty become `None`, so applying it twice changes nothing.
pub fn space_and_enter_strip(data: Option<String>) -> Option<String> {
    let data = data?;
    let stripped = data.trim_matches(|c: char| c == ' ' || c == '\r' || c == '\n');
    if stripped.is_empty() {
        return None;
    }
    if stripped.len() == data.len() {
        return Some(data);
    }
    Some(stripped.to_string())
}
