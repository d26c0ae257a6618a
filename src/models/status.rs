//! Borrow record lifecycle status

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status carried by a borrow record.
///
/// The store holds plain strings. Absent or empty values map to `Pending`,
/// anything outside the known set is kept verbatim in `Unknown` so that it
/// round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum BorrowStatus {
    Borrowed,
    Returned,
    Damaged,
    Lost,
    PartiallyDamaged,
    #[default]
    Pending,
    Unknown(String),
}

impl BorrowStatus {
    /// Statuses a borrow record may be closed with on return
    pub const RETURN_OUTCOMES: [BorrowStatus; 4] = [
        BorrowStatus::Returned,
        BorrowStatus::Damaged,
        BorrowStatus::Lost,
        BorrowStatus::PartiallyDamaged,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BorrowStatus::Borrowed => "Borrowed",
            BorrowStatus::Returned => "Returned",
            BorrowStatus::Damaged => "Damaged",
            BorrowStatus::Lost => "Lost",
            BorrowStatus::PartiallyDamaged => "Partially Damaged",
            BorrowStatus::Pending => "Pending",
            BorrowStatus::Unknown(raw) => raw,
        }
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, BorrowStatus::Returned)
    }

    pub fn is_return_outcome(&self) -> bool {
        Self::RETURN_OUTCOMES.contains(self)
    }

    /// Value written to the store; `Pending` is stored as NULL
    pub fn stored_value(&self) -> Option<&str> {
        match self {
            BorrowStatus::Pending => None,
            other => Some(other.as_str()),
        }
    }
}

impl From<&str> for BorrowStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "Borrowed" => BorrowStatus::Borrowed,
            "Returned" => BorrowStatus::Returned,
            "Damaged" => BorrowStatus::Damaged,
            "Lost" => BorrowStatus::Lost,
            "Partially Damaged" => BorrowStatus::PartiallyDamaged,
            "" | "Pending" => BorrowStatus::Pending,
            other => BorrowStatus::Unknown(other.to_string()),
        }
    }
}

impl From<Option<String>> for BorrowStatus {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map(BorrowStatus::from).unwrap_or_default()
    }
}

impl std::fmt::Display for BorrowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BorrowStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BorrowStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<String>::deserialize(deserializer).map(BorrowStatus::from)
    }
}
