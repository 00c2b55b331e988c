//! Pure string operations over slash-delimited allele lists.
//!
//! Submissions report their alleles as a `/`-separated list on whatever
//! strand the submitter happened to use. Tokens may carry surrounding
//! whitespace, and a dash (or a blank token) is the placeholder for "no base"
//! at an insertion or deletion position. Everything here is stateless; the
//! strand bookkeeping lives on
//! [`SubSnpRecord`](crate::models::SubSnpRecord).

/// Separator between alleles in a submitted allele list.
pub const ALLELE_SEPARATOR: &str = "/";

/// Trim a submitted allele token and normalize the no-base placeholder.
///
/// A dash or blank token always becomes the empty string, so downstream
/// output never carries a literal `-`.
pub fn normalize_allele(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "-" {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Split a raw allele list into normalized tokens.
///
/// Every position is preserved: consecutive separators yield empty tokens
/// and nothing is ever dropped.
pub fn split_alleles(raw: &str) -> Vec<String> {
    raw.split(ALLELE_SEPARATOR).map(normalize_allele).collect()
}

/// Reverse complement of a single allele token.
///
/// A/T and C/G swap within the input's case class; any other character
/// passes through unchanged. The empty placeholder token maps to itself.
pub fn reverse_complement(allele: &str) -> String {
    allele.chars().rev().map(complement).collect()
}

const fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'a' => 't',
        'T' => 'A',
        't' => 'a',
        'C' => 'G',
        'c' => 'g',
        'G' => 'C',
        'g' => 'c',
        other => other,
    }
}
