//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the RSEMS bucket.

use uuid::Uuid;

pub const DAILY_LOGS_PREFIX: &str = "daily-logs/";

pub fn patient_logs_prefix(owner: Uuid) -> String {
    format!("{DAILY_LOGS_PREFIX}{owner}/")
}

pub fn daily_log(owner: Uuid, id: Uuid) -> String {
    format!("{DAILY_LOGS_PREFIX}{owner}/{id}.json")
}

/// One overwritable copy of each patient's most recent log.
pub const LATEST_LOGS_PREFIX: &str = "latest-logs/";

pub fn latest_log(owner: Uuid) -> String {
    format!("{LATEST_LOGS_PREFIX}{owner}.json")
}

pub const PROFILES_PREFIX: &str = "profiles/";

pub fn profile(id: Uuid) -> String {
    format!("{PROFILES_PREFIX}{id}.json")
}

pub const SYMPTOM_CATALOG: &str = "catalog/symptoms.json";
