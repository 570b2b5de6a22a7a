//! User-visible strings.
//!
//! Every label, button caption and message template is looked up by a
//! [`MessageKey`] through a [`Localizer`]. [`StringCatalog`] is the bundled
//! implementation; the UI only depends on the trait.

mod catalog;

pub use catalog::{CatalogError, Language, StringCatalog};

use serde::{Deserialize, Serialize};

/// Identifier of a user-visible string.
///
/// The serialized names double as the keys of the `[strings]` table in the
/// configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    AppTitle,
    CalculateTip,
    BillAmount,
    /// Percentage field label; `{}` receives the current percentage.
    TipPercentage,
    RoundUpTip,
    #[serde(rename = "tip_calculate")]
    CalculateButton,
    /// Result label; `{}` receives the formatted tip.
    TipAmount,
    /// Validation message; `{}` receives the field name.
    #[serde(rename = "greater_than")]
    GreaterThanZero,
    FieldTipPercentage,
    FieldBillAmount,
}

impl MessageKey {
    pub const ALL: [MessageKey; 10] = [
        MessageKey::AppTitle,
        MessageKey::CalculateTip,
        MessageKey::BillAmount,
        MessageKey::TipPercentage,
        MessageKey::RoundUpTip,
        MessageKey::CalculateButton,
        MessageKey::TipAmount,
        MessageKey::GreaterThanZero,
        MessageKey::FieldTipPercentage,
        MessageKey::FieldBillAmount,
    ];

    /// Whether the template for this key carries a `{}` placeholder.
    pub fn takes_argument(&self) -> bool {
        matches!(
            self,
            MessageKey::TipPercentage | MessageKey::TipAmount | MessageKey::GreaterThanZero
        )
    }
}

/// Placeholder substituted by [`fill_template`].
pub const PLACEHOLDER: &str = "{}";

/// Replaces the first `{}` in `template` with `arg`.
///
/// Without an argument the template is returned as is.
pub fn fill_template(
    template: &str,
    arg: Option<&str>,
) -> String {
    match arg {
        Some(arg) => template.replacen(PLACEHOLDER, arg, 1),
        None => template.to_string(),
    }
}

/// Resolves message keys to localized text.
pub trait Localizer {
    /// The raw template for `key`, placeholder included.
    fn template(
        &self,
        key: MessageKey,
    ) -> &str;

    /// The template for `key` with its placeholder filled by `arg`.
    fn resolve(
        &self,
        key: MessageKey,
        arg: Option<&str>,
    ) -> String {
        fill_template(self.template(key), arg)
    }

    /// Text for a key that takes no argument.
    fn text(
        &self,
        key: MessageKey,
    ) -> String {
        self.resolve(key, None)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fill_template_replaces_placeholder() {
        let result = fill_template("The {} must be greater than zero", Some("bill amount"));

        assert_eq!(result, "The bill amount must be greater than zero");
    }

    #[test]
    fn fill_template_replaces_only_first_placeholder() {
        let result = fill_template("{} and {}", Some("a"));

        assert_eq!(result, "a and {}");
    }

    #[test]
    fn fill_template_without_argument_is_verbatim() {
        let result = fill_template("Tip Amount: {}", None);

        assert_eq!(result, "Tip Amount: {}");
    }

    #[test]
    fn message_keys_use_resource_names_when_serialized() {
        let keys: Vec<String> = [
            MessageKey::CalculateButton,
            MessageKey::GreaterThanZero,
            MessageKey::RoundUpTip,
        ]
        .iter()
        .map(|k| serde_json::to_string(k).unwrap())
        .collect();

        assert_eq!(keys, ["\"tip_calculate\"", "\"greater_than\"", "\"round_up_tip\""]);
    }

    #[test]
    fn only_value_carrying_templates_take_arguments() {
        let with_argument: Vec<_> = MessageKey::ALL
            .into_iter()
            .filter(MessageKey::takes_argument)
            .collect();

        assert_eq!(
            with_argument,
            [
                MessageKey::TipPercentage,
                MessageKey::TipAmount,
                MessageKey::GreaterThanZero
            ]
        );
    }
}
