//! String cleanup shared by the composer and the resolver

/// Uppercase and drop everything outside `[A-Z0-9_]`
pub fn sanitize_key(key: &str) -> String {
    key.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Normalize a caliber string, e.g. "Caliber556x45NATO" -> "556X45"
pub fn clean_caliber(caliber: &str) -> String {
    caliber
        .to_uppercase()
        .replacen("CALIBER", "", 1)
        .replacen("PARA", "", 1)
        .replacen("NATO", "", 1)
        .replacen("1143X23ACP", "45ACP", 1)
}

/// Turn a display name into a key segment: uppercase, `- . ( )` removed,
/// spaces become underscores
pub fn clean_display_name(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | '(' | ')'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Prefix a non-empty fragment with an underscore separator
pub fn with_separator(fragment: String) -> String {
    if fragment.is_empty() || fragment.starts_with('_') {
        fragment
    } else {
        format!("_{}", fragment)
    }
}

/// Content of a trailing `(...)` group, e.g. "Mosin (Sniper)" -> "Sniper"
pub fn bracket_suffix(name: &str) -> Option<&str> {
    let inner = name.strip_suffix(')')?;
    let open = inner.find('(')?;
    let content = &inner[open + 1..];
    (!content.is_empty()).then_some(content)
}

/// Digits of a trailing `#123` marker
pub fn number_suffix(name: &str) -> Option<&str> {
    let (_, digits) = name.rsplit_once('#')?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}
