// Record filters used by catalog listing
use crate::RawRecord;

pub trait Filter {
    fn matches(&self, record: &RawRecord) -> bool;
}

/// Substring match on `name`. An empty needle matches everything.
#[derive(Debug, Clone)]
pub struct NameFilter {
    needle: String,
    case_insensitive: bool,
}

impl NameFilter {
    pub fn new(needle: &str, case_insensitive: bool) -> Self {
        let needle = if case_insensitive {
            needle.to_lowercase()
        } else {
            needle.to_string()
        };
        Self {
            needle,
            case_insensitive,
        }
    }

    pub fn case_insensitive(needle: &str) -> Self {
        Self::new(needle, true)
    }
}

impl Filter for NameFilter {
    fn matches(&self, record: &RawRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        if self.case_insensitive {
            record.name.to_lowercase().contains(&self.needle)
        } else {
            record.name.contains(&self.needle)
        }
    }
}
