use serde::Serialize;

/// The closed vocabulary of checkbox preferences.
///
/// Variant order is the order bullets appear in the prompt, which is not the
/// order the checkboxes are shown in (see [`Preference::FORM_ORDER`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    TravelTime,
    TransportSuggestions,
    OpeningHours,
    CostEstimates,
    DietaryFilter,
    KidSafe,
    EmergencyInfo,
}

#[derive(Debug, Serialize)]
pub struct PreferenceOption {
    pub label: &'static str,
    pub instruction: &'static str,
}

impl Preference {
    pub const ALL: [Preference; 7] = [
        Preference::TravelTime,
        Preference::TransportSuggestions,
        Preference::OpeningHours,
        Preference::CostEstimates,
        Preference::DietaryFilter,
        Preference::KidSafe,
        Preference::EmergencyInfo,
    ];

    pub const FORM_ORDER: [Preference; 7] = [
        Preference::TravelTime,
        Preference::TransportSuggestions,
        Preference::KidSafe,
        Preference::CostEstimates,
        Preference::DietaryFilter,
        Preference::OpeningHours,
        Preference::EmergencyInfo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::TravelTime => "Show travel time",
            Preference::TransportSuggestions => "Include transport suggestions",
            Preference::OpeningHours => "Show opening hours",
            Preference::CostEstimates => "Include cost estimates",
            Preference::DietaryFilter => "Dietary filter (veg/non-veg)",
            Preference::KidSafe => "Only kid-safe places",
            Preference::EmergencyInfo => "Include emergency info",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Preference::TravelTime => "- travel time between stops",
            Preference::TransportSuggestions => "- transport suggestions",
            Preference::OpeningHours => "- opening hours",
            Preference::CostEstimates => "- cost estimation",
            Preference::DietaryFilter => "- dietary accommodations",
            Preference::KidSafe => "- kid-friendly notes",
            Preference::EmergencyInfo => "- emergency info",
        }
    }

    /// Exact, case-sensitive match against the checkbox labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preference| preference.label() == label)
    }

    pub fn option(self) -> PreferenceOption {
        PreferenceOption {
            label: self.label(),
            instruction: self.instruction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_round_trip() {
        for preference in Preference::ALL {
            assert_eq!(Preference::from_label(preference.label()), Some(preference));
        }
    }

    #[test]
    fn test_unknown_labels_are_inert() {
        assert_eq!(Preference::from_label("Show travel times"), None);
        assert_eq!(Preference::from_label("show travel time"), None);
        assert_eq!(Preference::from_label(""), None);
    }

    #[test]
    fn test_form_order_covers_the_vocabulary() {
        let all: HashSet<_> = Preference::ALL.into_iter().collect();
        let form: HashSet<_> = Preference::FORM_ORDER.into_iter().collect();
        assert_eq!(all, form);
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_instructions_are_distinct_bullets() {
        let instructions: HashSet<_> = Preference::ALL.iter().map(|p| p.instruction()).collect();
        assert_eq!(instructions.len(), 7);
        assert!(instructions.iter().all(|line| line.starts_with("- ")));
    }
}
