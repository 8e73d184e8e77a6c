use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vehicle record. Only the plate matters for binding and conflict keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Vehicle {
    #[serde(default)]
    pub plate: String,
}

/// Vehicle table keyed by vehicle id.
pub type VehicleTable = BTreeMap<String, Vehicle>;
