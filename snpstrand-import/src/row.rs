use snpstrand_core::{FieldError, HgvsAnnotation, LocusType, Orientation, Region, SubSnpRecord};

/// One raw row of the legacy submission join.
///
/// A submission appears once per associated annotation row, so several
/// consecutive rows may share one `ss_id`. Coordinates, orientation codes,
/// and nullable columns are kept exactly as the schema stores them; decoding
/// and validation happen when a closed group is turned into a
/// [`SubSnpRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubSnpRow {
    pub ss_id: i64,
    pub rs_id: Option<i64>,
    pub subsnp_orientation: i32,
    pub snp_orientation: i32,
    pub contig_orientation: i32,
    pub contig: String,
    pub contig_start: i64,
    pub contig_end: i64,
    pub chromosome: Option<String>,
    pub chromosome_start: Option<i64>,
    pub chromosome_end: Option<i64>,
    pub locus_type: i32,
    pub hgvs_c_reference: Option<String>,
    pub hgvs_c_string: Option<String>,
    pub hgvs_c_start: Option<i64>,
    pub hgvs_c_stop: Option<i64>,
    pub hgvs_c_orientation: i32,
    pub hgvs_t_reference: Option<String>,
    pub hgvs_t_string: Option<String>,
    pub hgvs_t_start: Option<i64>,
    pub hgvs_t_stop: Option<i64>,
    pub hgvs_t_orientation: i32,
    pub alternate: Option<String>,
    pub alleles: String,
    pub batch: String,
}

impl SubSnpRow {
    fn hgvs_c(&self) -> Result<Option<HgvsAnnotation>, FieldError> {
        HgvsAnnotation::from_columns(
            self.hgvs_c_reference.clone(),
            self.hgvs_c_string.clone(),
            self.hgvs_c_start,
            self.hgvs_c_stop,
            Orientation::from_code(self.hgvs_c_orientation)?,
        )
    }

    fn hgvs_t(&self) -> Result<Option<HgvsAnnotation>, FieldError> {
        HgvsAnnotation::from_columns(
            self.hgvs_t_reference.clone(),
            self.hgvs_t_string.clone(),
            self.hgvs_t_start,
            self.hgvs_t_stop,
            Orientation::from_code(self.hgvs_t_orientation)?,
        )
    }
}

/// Build one record from the rows of a closed group.
///
/// The first row supplies the shared submission fields. The first row
/// carrying a complete bundle of each HGVS kind supplies that annotation;
/// later bundles of the same kind are ignored. `rows` is never empty: the
/// assembler only closes a group it has opened with a row.
pub(crate) fn record_from_group(rows: &[SubSnpRow]) -> Result<SubSnpRecord, FieldError> {
    let first = &rows[0];

    let mut hgvs_c = None;
    let mut hgvs_t = None;
    for row in rows {
        if hgvs_c.is_none() {
            hgvs_c = row.hgvs_c()?;
        }
        if hgvs_t.is_none() {
            hgvs_t = row.hgvs_t()?;
        }
    }

    Ok(SubSnpRecord {
        ss_id: first.ss_id,
        rs_id: first.rs_id,
        subsnp_orientation: Orientation::from_code(first.subsnp_orientation)?,
        snp_orientation: Orientation::from_code(first.snp_orientation)?,
        contig_orientation: Orientation::from_code(first.contig_orientation)?,
        locus_type: LocusType::from_code(first.locus_type),
        contig_region: Region::new(first.contig.clone(), first.contig_start, first.contig_end)?,
        chromosome_region: Region::from_nullable(
            first.chromosome.clone(),
            first.chromosome_start,
            first.chromosome_end,
        )?,
        hgvs_c,
        hgvs_t,
        alternate: first.alternate.clone(),
        alleles: first.alleles.clone(),
        batch: first.batch.clone(),
    })
}
