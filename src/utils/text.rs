//! Token normalization for case-field values.
//!
//! Every table lookup and sentinel check in the engine goes through
//! [`normalize_token`] so that surface casing, accents and separator style
//! never influence a score. Normalization is centralized here; call sites
//! never roll their own.

/// Maximum length of the evidence excerpt kept for audit/export.
pub const EVIDENCE_MAX_CHARS: usize = 140;

/// Placeholder tokens that mean "this field was never really filled".
///
/// Matched against the *normalized* token. Untouched dropdown placeholders
/// are covered by the `seleccion`/`select` prefix rule in [`is_placeholder`].
const PLACEHOLDER_TOKENS: &[&str] = &[
    "no_reportado",
    "no_reporta",
    "na",
    "n_a",
    "sin_dato",
    "sin_informacion",
];

/// Normalize a raw field value into a lookup token.
///
/// Strips diacritics, lowercases, and collapses whitespace and separator
/// runs (space, `-`, `/`, `.`) into single underscores. Leading and trailing
/// separators are trimmed.
pub fn normalize_token(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for c in raw.chars() {
        let c = fold_diacritic(c);
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        } else {
            // Whitespace, punctuation and existing underscores all collapse
            // into a single separator.
            pending_sep = true;
        }
    }

    out
}

/// Fold the Latin diacritics that appear in Spanish-language case data.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'Á' | 'À' | 'Ä' | 'Â' => 'A',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

/// Whether a *normalized* token is a placeholder meaning "not filled".
pub fn is_placeholder(token: &str) -> bool {
    if token.is_empty() {
        return true;
    }
    if PLACEHOLDER_TOKENS.contains(&token) {
        return true;
    }
    // Untouched dropdown placeholders: "Seleccione...", "Select an option".
    token.starts_with("seleccion") || token.starts_with("select")
}

/// Truncate a raw field value to the evidence excerpt length, appending an
/// ellipsis marker when anything was cut.
pub fn truncate_evidence(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= EVIDENCE_MAX_CHARS {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(EVIDENCE_MAX_CHARS).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize_token("Semiconfinado"), "semiconfinado");
        assert_eq!(normalize_token("Doméstico"), "domestico");
        assert_eq!(normalize_token("Sí"), "si");
        assert_eq!(normalize_token("Kárstico"), "karstico");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_token("  residual   tratada "), "residual_tratada");
        assert_eq!(normalize_token("apta con-tratamiento"), "apta_con_tratamiento");
        assert_eq!(normalize_token("N/A"), "n_a");
        assert_eq!(normalize_token("en trámite"), "en_tramite");
    }

    #[test]
    fn test_placeholder_tokens() {
        assert!(is_placeholder(&normalize_token("No reportado")));
        assert!(is_placeholder(&normalize_token("SIN DATO")));
        assert!(is_placeholder(&normalize_token("Seleccione una opción")));
        assert!(is_placeholder(&normalize_token("select...")));
        assert!(is_placeholder(""));
        assert!(!is_placeholder(&normalize_token("Libre")));
    }

    #[test]
    fn test_evidence_truncation() {
        let short = "Río Cauca, tramo medio";
        assert_eq!(truncate_evidence(short), short);

        let long = "x".repeat(200);
        let evidence = truncate_evidence(&long);
        assert_eq!(evidence.chars().count(), EVIDENCE_MAX_CHARS + 1);
        assert!(evidence.ends_with('…'));
    }
}
