use serde::{Deserialize, Serialize};

use crate::errors::AssembleError;

/// Caller-supplied settings for one import pass.
///
/// The assembly fields are the contract with the Row Source: which assembly
/// the contig coordinates must belong to and which assembly-type labels are
/// acceptable. Rows are filtered there, before they ever reach the
/// assembler. `page_size` bounds how many rows each page may carry.
///
/// Loading (CLI flags, files, environment) is the caller's business; this
/// struct only carries and validates the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    pub assembly: String,
    pub assembly_types: Vec<String>,
    pub page_size: usize,
}

impl ImportConfig {
    pub fn validate(&self) -> Result<(), AssembleError> {
        if self.page_size == 0 {
            return Err(AssembleError::InvalidPageSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ImportConfig;
    use crate::errors::AssembleError;

    #[test]
    fn test_parses_from_json() {
        let config: ImportConfig = serde_json::from_str(
            r#"{
                "assembly": "Gallus_gallus-5.0",
                "assembly_types": ["Primary_Assembly"],
                "page_size": 2000
            }"#,
        )
        .unwrap();
        assert_eq!(config.assembly, "Gallus_gallus-5.0");
        assert_eq!(config.assembly_types, vec!["Primary_Assembly"]);
        assert_eq!(config.page_size, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_fails_validation() {
        let config = ImportConfig {
            assembly: "Gallus_gallus-5.0".to_string(),
            assembly_types: vec!["Primary_Assembly".to_string()],
            page_size: 0,
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            AssembleError::InvalidPageSize
        ));
    }
}
