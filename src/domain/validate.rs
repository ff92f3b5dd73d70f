use crate::domain::DomainError;

/// Maximum length of a list or todo name, in characters.
pub const NAME_LIMIT: usize = 100;

/// Validate a candidate list name against the names already in the session.
///
/// The candidate is trimmed before any check. Uniqueness is a case-sensitive
/// exact match; when renaming, the list's own current name must not be in
/// `existing`, so an unchanged name passes. Returns the trimmed name, which
/// is what gets stored.
pub fn validate_list_name<'a>(
    candidate: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> Result<String, DomainError> {
    let name = candidate.trim();
    if !valid_length(name) {
        return Err(DomainError::InvalidLength("The list name"));
    }
    if existing.into_iter().any(|other| other == name) {
        return Err(DomainError::DuplicateName);
    }
    Ok(name.to_string())
}

/// Validate todo text. Trims, checks length, returns the trimmed text.
/// Todo names carry no uniqueness constraint.
pub fn validate_todo_text(candidate: &str) -> Result<String, DomainError> {
    let name = candidate.trim();
    if !valid_length(name) {
        return Err(DomainError::InvalidLength("Todo"));
    }
    Ok(name.to_string())
}

fn valid_length(name: &str) -> bool {
    (1..=NAME_LIMIT).contains(&name.chars().count())
}
