use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for tow-truck operators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TruckId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YardId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GovernmentBodyId(pub String);

/// Soft-delete lifecycle flag carried by every directory entity. Inactive
/// records stay stored but drop out of regular views and dispatch matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    pub const fn is_active(self) -> bool {
        matches!(self, EntityStatus::Active)
    }

    pub const fn label(self) -> &'static str {
        match self {
            EntityStatus::Active => "active",
            EntityStatus::Inactive => "inactive",
        }
    }
}

/// Driving-license class held by an operator. Closed set; immutable once
/// assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseCategory {
    A,
    B,
    C,
    D,
    E,
    AB,
    AC,
    AD,
    AE,
}

impl LicenseCategory {
    pub const ALL: [LicenseCategory; 9] = [
        LicenseCategory::A,
        LicenseCategory::B,
        LicenseCategory::C,
        LicenseCategory::D,
        LicenseCategory::E,
        LicenseCategory::AB,
        LicenseCategory::AC,
        LicenseCategory::AD,
        LicenseCategory::AE,
    ];

    /// Position in [`Self::ALL`]; used to index total per-category tables.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            LicenseCategory::A => "A",
            LicenseCategory::B => "B",
            LicenseCategory::C => "C",
            LicenseCategory::D => "D",
            LicenseCategory::E => "E",
            LicenseCategory::AB => "AB",
            LicenseCategory::AC => "AC",
            LicenseCategory::AD => "AD",
            LicenseCategory::AE => "AE",
        }
    }
}

/// Hauling class of a tow truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailerType {
    Light,
    Heavy,
}

impl TrailerType {
    pub const ALL: [TrailerType; 2] = [TrailerType::Light, TrailerType::Heavy];

    pub const fn label(self) -> &'static str {
        match self {
            TrailerType::Light => "light",
            TrailerType::Heavy => "heavy",
        }
    }
}

/// A tow truck as stored: unique plate, one trailer class, one owning company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    pub plate: String,
    pub model: String,
    pub trailer_type: TrailerType,
    pub status: EntityStatus,
    pub company_id: CompanyId,
    pub registered_at: DateTime<Utc>,
}

/// A truck plus the per-operator compatibility verdict. The flag is required,
/// never optional: "not computed" is not a representable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedTruck {
    #[serde(flatten)]
    pub truck: Truck,
    pub is_license_compatible: bool,
}

/// Yard affiliation reduced to what dispatchers need to route a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardSummary {
    pub id: YardId,
    pub name: String,
    pub maps_link: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentBodySummary {
    pub id: GovernmentBodyId,
    pub name: String,
}

/// An operator as returned by the directory collaborator: the operator row
/// joined with its owning company's name and its associated collections,
/// already filtered according to the requested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorWithAssociations {
    pub id: OperatorId,
    pub name: String,
    pub phone: String,
    pub license_category: LicenseCategory,
    pub status: EntityStatus,
    pub company_name: String,
    pub registered_at: DateTime<Utc>,
    pub trucks: Vec<Truck>,
    pub yards: Vec<YardSummary>,
    pub government_bodies: Vec<GovernmentBodySummary>,
}

/// The response shape of every operator read: the same operator with its
/// truck list replaced by the annotated version. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchCandidate {
    pub id: OperatorId,
    pub name: String,
    pub phone: String,
    pub license_category: LicenseCategory,
    pub status: EntityStatus,
    pub company_name: String,
    pub registered_at: DateTime<Utc>,
    pub trucks: Vec<AnnotatedTruck>,
    pub yards: Vec<YardSummary>,
    pub government_bodies: Vec<GovernmentBodySummary>,
}

/// Visibility scope for roster reads: regular users see active records only,
/// admins see everything including soft-deleted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterScope {
    Active,
    Full,
}

impl RosterScope {
    pub const fn includes_inactive(self) -> bool {
        matches!(self, RosterScope::Full)
    }
}
