use super::super::domain::{LicenseCategory, TrailerType};

/// Set over the two trailer classes. Closed and `Copy`, so table lookups
/// hand out values rather than borrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrailerClasses {
    light: bool,
    heavy: bool,
}

impl TrailerClasses {
    pub const NONE: Self = Self {
        light: false,
        heavy: false,
    };
    pub const LIGHT_ONLY: Self = Self {
        light: true,
        heavy: false,
    };
    pub const ALL: Self = Self {
        light: true,
        heavy: true,
    };

    pub const fn contains(self, trailer: TrailerType) -> bool {
        match trailer {
            TrailerType::Light => self.light,
            TrailerType::Heavy => self.heavy,
        }
    }

    pub const fn is_empty(self) -> bool {
        !self.light && !self.heavy
    }

    pub fn iter(self) -> impl Iterator<Item = TrailerType> {
        TrailerType::ALL
            .into_iter()
            .filter(move |trailer| self.contains(*trailer))
    }
}

/// Legal mapping from license category to the trailer classes it permits
/// towing. Total over [`LicenseCategory`] by construction: the backing array
/// is indexed by the category discriminant and filled by sampling every
/// category, so an entry can never be absent and no runtime fallback exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityTable {
    permitted: [TrailerClasses; LicenseCategory::ALL.len()],
}

impl CompatibilityTable {
    /// Build a table by sampling `permits` once per category.
    pub fn from_fn(mut permits: impl FnMut(LicenseCategory) -> TrailerClasses) -> Self {
        let mut permitted = [TrailerClasses::NONE; LicenseCategory::ALL.len()];
        for category in LicenseCategory::ALL {
            permitted[category.index()] = permits(category);
        }
        Self { permitted }
    }

    pub fn permitted_types(&self, category: LicenseCategory) -> TrailerClasses {
        self.permitted[category.index()]
    }

    pub fn permits(&self, category: LicenseCategory, trailer: TrailerType) -> bool {
        self.permitted_types(category).contains(trailer)
    }
}

impl Default for CompatibilityTable {
    fn default() -> Self {
        Self::from_fn(statutory_classes)
    }
}

/// The statutory rule: A-only licenses tow nothing, B-class licenses tow
/// light trailers, everything from C upward tows both classes.
const fn statutory_classes(category: LicenseCategory) -> TrailerClasses {
    match category {
        LicenseCategory::A => TrailerClasses::NONE,
        LicenseCategory::B | LicenseCategory::AB => TrailerClasses::LIGHT_ONLY,
        LicenseCategory::C
        | LicenseCategory::D
        | LicenseCategory::E
        | LicenseCategory::AC
        | LicenseCategory::AD
        | LicenseCategory::AE => TrailerClasses::ALL,
    }
}
