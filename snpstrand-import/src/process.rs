use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use snpstrand_core::SubSnpRecord;

use crate::assembler::SubSnpAssembler;
use crate::errors::AssembleError;
use crate::source::RowSource;

/// Drain an assembler into memory, reporting progress as groups close.
///
/// The record count is unknown until the last page arrives, so this shows a
/// running counter rather than a bar. The first error aborts the drain and
/// is returned as-is.
pub fn collect_records<S: RowSource>(
    assembler: SubSnpAssembler<S>,
) -> Result<Vec<SubSnpRecord>, AssembleError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {pos} submissions assembled")
            .unwrap(),
    );

    let mut records = Vec::new();
    for record in assembler {
        records.push(record?);
        spinner.inc(1);
    }

    spinner.finish_and_clear();
    Ok(records)
}

/// Resolve the forward-strand allele list for every record.
///
/// Assembled records are immutable and independent, so resolution fans out
/// across the rayon pool with no coordination beyond collecting the results;
/// output order matches input order.
pub fn resolve_alleles_parallel(records: &[SubSnpRecord]) -> Vec<String> {
    records
        .par_iter()
        .map(SubSnpRecord::alleles_forward_strand)
        .collect()
}
