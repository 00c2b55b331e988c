use serde::{Deserialize, Serialize};

use crate::alleles;
use crate::errors::UndefinedHgvsAlleleError;
use crate::models::{HgvsAnnotation, LocusType, Orientation, Region};

/// One assembled sub-SNP submission, immutable once built.
///
/// Wraps the SS id, its cluster id when one has been assigned, contig and
/// (optionally) chromosome coordinates, up to two HGVS annotations, and the
/// strand bookkeeping needed to express the submitted alleles on the forward
/// strand. Equality and hashing are full structural value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubSnpRecord {
    pub ss_id: i64,
    pub rs_id: Option<i64>,
    pub subsnp_orientation: Orientation,
    pub snp_orientation: Orientation,
    pub contig_orientation: Orientation,
    pub locus_type: LocusType,
    pub contig_region: Region,
    pub chromosome_region: Option<Region>,
    /// Chromosome-mapped HGVS annotation, if one exists.
    pub hgvs_c: Option<HgvsAnnotation>,
    /// Contig-mapped HGVS annotation, if one exists.
    pub hgvs_t: Option<HgvsAnnotation>,
    /// Alternate allele exactly as submitted.
    pub alternate: Option<String>,
    /// Reference and alternate alleles as submitted, slash-delimited.
    pub alleles: String,
    pub batch: String,
}

/// The annotation bundle anchoring reference/alternate strand resolution.
///
/// The chromosome-mapped bundle always wins over the contig-mapped one; the
/// choice is made here and nowhere else so the precedence rule stays
/// auditable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HgvsAnchor<'a> {
    Chromosome(&'a HgvsAnnotation),
    Contig(&'a HgvsAnnotation),
}

impl<'a> HgvsAnchor<'a> {
    pub fn annotation(self) -> &'a HgvsAnnotation {
        match self {
            HgvsAnchor::Chromosome(annotation) | HgvsAnchor::Contig(annotation) => annotation,
        }
    }
}

impl SubSnpRecord {
    /// The annotation anchoring reference/alternate resolution, if any.
    pub fn hgvs_anchor(&self) -> Option<HgvsAnchor<'_>> {
        if let Some(hgvs_c) = &self.hgvs_c {
            Some(HgvsAnchor::Chromosome(hgvs_c))
        } else {
            self.hgvs_t.as_ref().map(HgvsAnchor::Contig)
        }
    }

    /// Whether the submitted allele list reads against the forward strand.
    ///
    /// Net effect of the submission, SNP, and contig orientations; an even
    /// number of reversals cancels out.
    fn allele_list_is_reverse(&self) -> bool {
        self.subsnp_orientation.is_reverse()
            ^ self.snp_orientation.is_reverse()
            ^ self.contig_orientation.is_reverse()
    }

    /// Whether the anchored reference/alternate read against the forward
    /// strand. The chromosome bundle composes through the SNP orientation,
    /// the contig bundle through the contig orientation.
    fn anchor_is_reverse(&self, anchor: HgvsAnchor<'_>) -> bool {
        match anchor {
            HgvsAnchor::Chromosome(annotation) => {
                self.subsnp_orientation.is_reverse()
                    ^ self.snp_orientation.is_reverse()
                    ^ annotation.orientation.is_reverse()
            }
            HgvsAnchor::Contig(annotation) => {
                self.subsnp_orientation.is_reverse()
                    ^ self.contig_orientation.is_reverse()
                    ^ annotation.orientation.is_reverse()
            }
        }
    }

    /// The submitted allele list expressed on the forward strand.
    ///
    /// Resolvable from the three base orientations alone; no HGVS annotation
    /// is consulted and this accessor never fails. When the net orientation
    /// is reverse, the whole list is reverse complemented: token order flips
    /// together with each token's bases. Token count and the `/` layout are
    /// preserved either way.
    pub fn alleles_forward_strand(&self) -> String {
        let mut tokens = alleles::split_alleles(&self.alleles);
        if self.allele_list_is_reverse() {
            tokens.reverse();
            for token in &mut tokens {
                *token = alleles::reverse_complement(token);
            }
        }
        tokens.join(alleles::ALLELE_SEPARATOR)
    }

    /// The reference allele on the forward strand.
    ///
    /// The reference is the anchoring annotation's own stored reference
    /// allele; with no annotation there is nothing to anchor the strand and
    /// the call fails.
    pub fn reference_forward_strand(&self) -> Result<String, UndefinedHgvsAlleleError> {
        let anchor = self.anchor()?;
        Ok(self.oriented_allele(&anchor.annotation().reference, anchor))
    }

    /// The alternate allele on the forward strand.
    pub fn alternate_forward_strand(&self) -> Result<String, UndefinedHgvsAlleleError> {
        let anchor = self.anchor()?;
        Ok(self.oriented_allele(self.alternate.as_deref().unwrap_or(""), anchor))
    }

    /// Alternate alleles beyond the primary pair, on the forward strand.
    ///
    /// One occurrence each of the submitted (normalized) primary reference
    /// and alternate is dropped from the forward-strand list; the remaining
    /// tokens keep their order. With no HGVS annotation there is no
    /// submitted reference to drop, so this accessor never fails.
    pub fn secondary_alternates_forward_strand(&self) -> Vec<String> {
        let mut tokens = alleles::split_alleles(&self.alleles_forward_strand());
        if let Some(anchor) = self.hgvs_anchor() {
            remove_first(
                &mut tokens,
                &alleles::normalize_allele(&anchor.annotation().reference),
            );
        }
        remove_first(
            &mut tokens,
            &alleles::normalize_allele(self.alternate.as_deref().unwrap_or("")),
        );
        tokens
    }

    fn anchor(&self) -> Result<HgvsAnchor<'_>, UndefinedHgvsAlleleError> {
        self.hgvs_anchor()
            .ok_or(UndefinedHgvsAlleleError { ss_id: self.ss_id })
    }

    fn oriented_allele(&self, raw: &str, anchor: HgvsAnchor<'_>) -> String {
        let token = alleles::normalize_allele(raw);
        if self.anchor_is_reverse(anchor) {
            alleles::reverse_complement(&token)
        } else {
            token
        }
    }
}

/// Drop the first token equal to `value`, if any.
fn remove_first(tokens: &mut Vec<String>, value: &str) {
    if let Some(position) = tokens.iter().position(|token| token == value) {
        tokens.remove(position);
    }
}
