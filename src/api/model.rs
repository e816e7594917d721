use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct CheckDomainParams {
    pub domain: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct CheckDomainResult {
    pub domain: String,
    pub allowed: bool,
}
