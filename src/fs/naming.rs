//! Filename sanitization.

/// Replace characters that are not allowed in filenames on most OSes.
///
/// Each of `\ / * ? : " < > |` becomes `_`; everything else (including
/// Unicode, spaces, and leading/trailing dots) passes through unchanged.
/// Total function: never fails, never produces an empty result for a
/// non-empty input.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}
