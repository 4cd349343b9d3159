mod table;

pub use table::{CompatibilityTable, TrailerClasses};

use super::domain::{AnnotatedTruck, LicenseCategory, Truck};

/// Stamps the license-compatibility verdict onto truck views.
///
/// Holds the (immutable) compatibility table as a value, so tests can swap
/// in a different table without touching global state.
#[derive(Debug, Clone, Default)]
pub struct EligibilityAnnotator {
    table: CompatibilityTable,
}

impl EligibilityAnnotator {
    pub fn new(table: CompatibilityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CompatibilityTable {
        &self.table
    }

    /// Annotate `trucks` with the verdict for `category`.
    ///
    /// Order and length are preserved and no other truck field changes. The
    /// verdict is recomputed per call: the same truck list annotated under
    /// two operators with different categories yields different flags.
    pub fn annotate(&self, trucks: Vec<Truck>, category: LicenseCategory) -> Vec<AnnotatedTruck> {
        trucks
            .into_iter()
            .map(|truck| {
                let is_license_compatible = self.table.permits(category, truck.trailer_type);
                AnnotatedTruck {
                    truck,
                    is_license_compatible,
                }
            })
            .collect()
    }
}
