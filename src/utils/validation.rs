//! Light-touch checks on user input.
//!
//! Country and city strings are forwarded to the prayer-times service
//! verbatim; nothing here matches them against a list of known places.

/// Prefix of the callback payload attached to each country button.
pub const COUNTRY_CALLBACK_PREFIX: &str = "country_";

/// Extracts the country from a `country_<name>` callback payload.
///
/// Returns `None` for any other payload or an empty name.
pub fn parse_country_callback(data: &str) -> Option<&str> {
    data.strip_prefix(COUNTRY_CALLBACK_PREFIX)
        .filter(|country| !country.trim().is_empty())
}

/// Builds the callback payload for a country button.
pub fn country_callback_data(country: &str) -> String {
    format!("{COUNTRY_CALLBACK_PREFIX}{country}")
}

/// Trims a free-text city reply, returning `None` when nothing is left.
pub fn normalize_city_input(text: &str) -> Option<&str> {
    let city = text.trim();
    if city.is_empty() {
        None
    } else {
        Some(city)
    }
}

/// True for text that was meant as a command the bot does not know.
pub fn looks_like_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country_callback_valid() {
        assert_eq!(parse_country_callback("country_مصر"), Some("مصر"));
        assert_eq!(parse_country_callback("country_Egypt"), Some("Egypt"));
        // Only the first prefix is stripped
        assert_eq!(
            parse_country_callback("country_country_X"),
            Some("country_X")
        );
    }

    #[test]
    fn test_parse_country_callback_invalid() {
        assert_eq!(parse_country_callback(""), None);
        assert_eq!(parse_country_callback("country_"), None);
        assert_eq!(parse_country_callback("country_   "), None);
        assert_eq!(parse_country_callback("settings:close"), None);
        assert_eq!(parse_country_callback("Country_Egypt"), None);
    }

    #[test]
    fn test_country_callback_data_roundtrip() {
        let data = country_callback_data("قطر");
        assert_eq!(data, "country_قطر");
        assert_eq!(parse_country_callback(&data), Some("قطر"));
    }

    #[test]
    fn test_normalize_city_input() {
        assert_eq!(normalize_city_input("  Cairo \n"), Some("Cairo"));
        assert_eq!(normalize_city_input("الإسكندرية"), Some("الإسكندرية"));
        assert_eq!(normalize_city_input(""), None);
        assert_eq!(normalize_city_input(" \t\n"), None);
    }

    #[test]
    fn test_looks_like_command() {
        assert!(looks_like_command("/settings"));
        assert!(looks_like_command("  /foo bar"));
        assert!(!looks_like_command("Cairo"));
        assert!(!looks_like_command("Cairo/Giza"));
    }
}
