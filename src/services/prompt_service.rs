use crate::models::{
    preference::Preference,
    trip::{ChatMessage, TripState},
};

pub const SYSTEM_PROMPT: &str = "You are a smart travel assistant.";

/// One instruction line per selected preference, in vocabulary order.
/// Unknown labels and repeats add nothing; no selection gives "".
pub fn bullet_list(preferences: &[String]) -> String {
    let selected: Vec<Preference> = preferences
        .iter()
        .filter_map(|label| Preference::from_label(label))
        .collect();

    Preference::ALL
        .into_iter()
        .filter(|preference| selected.contains(preference))
        .map(Preference::instruction)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the system and human messages for one itinerary request.
/// City, weather and interests go in verbatim.
pub fn build_prompt(state: &TripState, weather: &str) -> Vec<ChatMessage> {
    let bullets = bullet_list(&state.preferences);
    let request = if bullets.is_empty() {
        "Generate a day trip itinerary.".to_string()
    } else {
        format!("Generate a day trip itinerary with:\n{}", bullets)
    };

    let human = format!(
        "City: {}\nWeather: {}\nInterests: {}\nPreferences: {}\n\n{}\nUse bullet points.",
        state.city,
        weather,
        state.interests.join(", "),
        state.preferences.join(", "),
        request
    );

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::human(human)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::Role;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_bullets_follow_vocabulary_order_not_selection_order() {
        let prefs = labels(&["Show opening hours", "Include cost estimates"]);
        assert_eq!(bullet_list(&prefs), "- opening hours\n- cost estimation");

        let reversed = labels(&["Include cost estimates", "Show opening hours"]);
        assert_eq!(bullet_list(&reversed), "- opening hours\n- cost estimation");
    }

    #[test]
    fn test_every_subset_yields_one_line_per_match() {
        // Walk all 128 subsets of the vocabulary, in form order, plus noise.
        for mask in 0u32..(1 << 7) {
            let mut prefs: Vec<String> = Preference::FORM_ORDER
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, p)| p.label().to_string())
                .collect();
            prefs.push("Bring an umbrella".to_string());

            let expected: Vec<&str> = Preference::ALL
                .into_iter()
                .filter(|p| prefs.iter().any(|label| label == p.label()))
                .map(Preference::instruction)
                .collect();

            let list = bullet_list(&prefs);
            if expected.is_empty() {
                assert_eq!(list, "");
            } else {
                assert_eq!(list.lines().collect::<Vec<_>>(), expected);
            }
        }
    }

    #[test]
    fn test_unknown_and_duplicate_labels() {
        assert_eq!(bullet_list(&labels(&["Free wifi", "show travel time"])), "");
        assert_eq!(
            bullet_list(&labels(&["Show travel time", "Show travel time"])),
            "- travel time between stops"
        );
    }

    #[test]
    fn test_prompt_has_system_then_human() {
        let state = TripState::new("Mumbai", labels(&["food"]), vec![]);
        let messages = build_prompt(&state, "Haze, 30°C");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You are a smart travel assistant.");
        assert_eq!(messages[1].role, Role::Human);
    }

    #[test]
    fn test_prompt_contains_city_and_weather_verbatim() {
        let city = "Saint-Jean-de-Luz <Côte Basque> & \"more\"";
        let weather = "Scattered clouds, 18.25°C";
        let state = TripState::new(city, vec![], vec![]);

        let human = &build_prompt(&state, weather)[1].content;
        assert!(human.contains(&format!("City: {}\n", city)));
        assert!(human.contains(&format!("Weather: {}\n", weather)));
    }

    #[test]
    fn test_interests_joined_with_comma_space() {
        let state = TripState::new("Rome", labels(&["food", "culture"]), vec![]);
        let human = &build_prompt(&state, "Clear sky, 25°C")[1].content;
        assert!(human.contains("Interests: food, culture\n"));
    }

    #[test]
    fn test_full_prompt_with_preferences() {
        let state = TripState::new(
            "Mumbai",
            labels(&["food", "culture"]),
            labels(&["Show opening hours", "Include cost estimates"]),
        );
        let human = &build_prompt(&state, "Haze, 30°C")[1].content;
        assert_eq!(
            human,
            "City: Mumbai\n\
             Weather: Haze, 30°C\n\
             Interests: food, culture\n\
             Preferences: Show opening hours, Include cost estimates\n\
             \n\
             Generate a day trip itinerary with:\n\
             - opening hours\n\
             - cost estimation\n\
             Use bullet points."
        );
    }

    #[test]
    fn test_empty_preferences_leave_no_dangling_section() {
        let state = TripState::new("Mumbai", labels(&["food"]), vec![]);
        let human = &build_prompt(&state, "Unknown weather")[1].content;

        assert!(!human.contains("with:"));
        assert!(!human.contains("\n\n\n"));
        assert!(human.ends_with("Generate a day trip itinerary.\nUse bullet points."));
        assert!(human.contains("Preferences: \n"));
    }
}
