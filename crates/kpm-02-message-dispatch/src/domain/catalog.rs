//! RIC message type numbers and their symbolic names.

use std::collections::HashMap;
use std::fmt;

/// Message types known to the xApp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RicMessageType {
    HealthCheckReq,
    HealthCheckResp,
    SubReq,
    SubResp,
    SubFailure,
    SubDelReq,
    SubDelResp,
    Indication,
}

impl RicMessageType {
    const ALL: [RicMessageType; 8] = [
        Self::HealthCheckReq,
        Self::HealthCheckResp,
        Self::SubReq,
        Self::SubResp,
        Self::SubFailure,
        Self::SubDelReq,
        Self::SubDelResp,
        Self::Indication,
    ];

    /// Router message type number.
    pub fn mtype(&self) -> i32 {
        match self {
            Self::HealthCheckReq => 100,
            Self::HealthCheckResp => 101,
            Self::SubReq => 12010,
            Self::SubResp => 12011,
            Self::SubFailure => 12012,
            Self::SubDelReq => 12020,
            Self::SubDelResp => 12021,
            Self::Indication => 12050,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HealthCheckReq => "RIC_HEALTH_CHECK_REQ",
            Self::HealthCheckResp => "RIC_HEALTH_CHECK_RESP",
            Self::SubReq => "RIC_SUB_REQ",
            Self::SubResp => "RIC_SUB_RESP",
            Self::SubFailure => "RIC_SUB_FAILURE",
            Self::SubDelReq => "RIC_SUB_DEL_REQ",
            Self::SubDelResp => "RIC_SUB_DEL_RESP",
            Self::Indication => "RIC_INDICATION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn from_mtype(mtype: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.mtype() == mtype)
    }

    pub fn all() -> impl Iterator<Item = RicMessageType> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for RicMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric-to-name table, seeded with the standard RIC message types.
///
/// Deployments with additional router types can extend it with
/// [`RicMessageCatalog::with_entry`].
#[derive(Debug, Clone)]
pub struct RicMessageCatalog {
    names: HashMap<i32, String>,
}

impl RicMessageCatalog {
    pub fn standard() -> Self {
        Self {
            names: RicMessageType::all()
                .map(|t| (t.mtype(), t.name().to_string()))
                .collect(),
        }
    }

    /// Add or replace the name for `mtype`.
    pub fn with_entry(mut self, mtype: i32, name: impl Into<String>) -> Self {
        self.names.insert(mtype, name.into());
        self
    }

    pub fn get(&self, mtype: i32) -> Option<&str> {
        self.names.get(&mtype).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for RicMessageCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_numbers() {
        assert_eq!(RicMessageType::HealthCheckReq.mtype(), 100);
        assert_eq!(RicMessageType::SubResp.mtype(), 12011);
        assert_eq!(RicMessageType::Indication.mtype(), 12050);
    }

    #[test]
    fn test_name_and_number_lookups_agree() {
        for t in RicMessageType::all() {
            assert_eq!(RicMessageType::from_name(t.name()), Some(t));
            assert_eq!(RicMessageType::from_mtype(t.mtype()), Some(t));
        }
        assert_eq!(RicMessageType::from_name("RIC_E2_SETUP_REQ"), None);
        assert_eq!(RicMessageType::from_mtype(-1), None);
    }

    #[test]
    fn test_catalog_lookup_and_extension() {
        let catalog = RicMessageCatalog::standard();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.get(12050), Some("RIC_INDICATION"));
        assert_eq!(catalog.get(99999), None);

        let catalog = catalog.with_entry(12001, "RIC_E2_SETUP_REQ");
        assert_eq!(catalog.get(12001), Some("RIC_E2_SETUP_REQ"));
    }
}
