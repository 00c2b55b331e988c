mod hgvs;
mod locus_type;
mod orientation;
mod region;
mod subsnp;

pub use hgvs::HgvsAnnotation;
pub use locus_type::LocusType;
pub use orientation::Orientation;
pub use region::Region;
pub use subsnp::{HgvsAnchor, SubSnpRecord};
