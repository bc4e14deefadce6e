//! Interactive collection of the search keyword and location.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

pub(crate) const KEYWORD_PROMPT: &str = "Enter keyword (e.g., Restaurant, Hospital, IT Company)";
pub(crate) const LOCATION_PROMPT: &str = "Enter location (e.g., New York, Chennai)";

/// Returns the trimmed flag value, or prompts for one when the flag was not
/// given.
pub(crate) fn value_or_prompt(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value.trim().to_owned());
    }

    let entered: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(entered.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_value_is_trimmed_without_prompting() {
        let value = value_or_prompt(Some("  Hospital \t".to_owned()), KEYWORD_PROMPT).unwrap();
        assert_eq!(value, "Hospital");
    }

    #[test]
    fn empty_flag_value_is_kept() {
        let value = value_or_prompt(Some(String::new()), LOCATION_PROMPT).unwrap();
        assert_eq!(value, "");
    }
}
