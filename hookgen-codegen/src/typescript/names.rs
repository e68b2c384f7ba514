//! Identifier derivation for generated source.

/// Derives the operation constant identifier from a field name.
///
/// An underscore is inserted before every ASCII uppercase letter (a leading
/// uppercase letter yields a leading underscore) and the whole result is
/// uppercased: `getUser` becomes `GET_USER`.
#[must_use]
pub fn constant_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() {
            name.push('_');
        }
        name.push(ch);
    }
    name.to_uppercase()
}

/// Derives the hook identifier from a field name: `use` plus the field name
/// with its first character uppercased. `getUser` becomes `useGetUser`.
#[must_use]
pub fn hook_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!("use{}{}", first.to_uppercase(), chars.as_str()),
        None => "use".to_string(),
    }
}
