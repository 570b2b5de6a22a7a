use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use super::{Localizer, MessageKey, PLACEHOLDER};

/// Errors raised while building a [`StringCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An override for a key that takes an argument has no `{}` to put it in.
    #[error("template for '{key:?}' must contain a '{{}}' placeholder, got {template:?}")]
    MissingPlaceholder { key: MessageKey, template: String },
}

/// Languages with a bundled string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    German,
    French,
}

impl Language {
    /// Picks the language from the primary subtag of a locale tag.
    /// Unknown languages map to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Self::Spanish,
            "de" => Self::German,
            "fr" => Self::French,
            _ => Self::English,
        }
    }

    fn builtin(
        self,
        key: MessageKey,
    ) -> &'static str {
        use MessageKey::*;

        match self {
            Self::English => match key {
                AppTitle => "Tip Time",
                CalculateTip => "Calculate Tip",
                BillAmount => "Bill Amount",
                TipPercentage => "Tip Percentage ({}%)",
                RoundUpTip => "Round up tip?",
                CalculateButton => "Calculate",
                TipAmount => "Tip Amount: {}",
                GreaterThanZero => "The {} must be greater than zero",
                FieldTipPercentage => "tip percentage",
                FieldBillAmount => "bill amount",
            },
            Self::Spanish => match key {
                AppTitle => "Propina",
                CalculateTip => "Calcular propina",
                BillAmount => "Monto de la cuenta",
                TipPercentage => "Porcentaje de propina ({}%)",
                RoundUpTip => "¿Redondear la propina?",
                CalculateButton => "Calcular",
                TipAmount => "Propina: {}",
                GreaterThanZero => "El {} debe ser mayor que cero",
                FieldTipPercentage => "porcentaje de propina",
                FieldBillAmount => "monto de la cuenta",
            },
            Self::German => match key {
                AppTitle => "Trinkgeld",
                CalculateTip => "Trinkgeld berechnen",
                BillAmount => "Rechnungsbetrag",
                TipPercentage => "Trinkgeld in Prozent ({} %)",
                RoundUpTip => "Trinkgeld aufrunden?",
                CalculateButton => "Berechnen",
                TipAmount => "Trinkgeld: {}",
                GreaterThanZero => "Der Wert für {} muss größer als null sein",
                FieldTipPercentage => "Trinkgeld in Prozent",
                FieldBillAmount => "Rechnungsbetrag",
            },
            Self::French => match key {
                AppTitle => "Pourboire",
                CalculateTip => "Calculer le pourboire",
                BillAmount => "Montant de l'addition",
                TipPercentage => "Pourcentage du pourboire ({} %)",
                RoundUpTip => "Arrondir le pourboire ?",
                CalculateButton => "Calculer",
                TipAmount => "Pourboire : {}",
                GreaterThanZero => "Le champ {} doit être supérieur à zéro",
                FieldTipPercentage => "pourcentage du pourboire",
                FieldBillAmount => "montant de l'addition",
            },
        }
    }
}

/// Bundled [`Localizer`]: one language table plus optional per-key overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringCatalog {
    language: Language,
    overrides: BTreeMap<MessageKey, String>,
}

impl StringCatalog {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            overrides: BTreeMap::new(),
        }
    }

    /// Catalog for the language of a locale tag such as `"es-MX"`.
    pub fn for_locale(tag: &str) -> Self {
        Self::new(Language::from_tag(tag))
    }

    /// Replaces bundled templates with the given ones.
    ///
    /// Overrides for keys that take an argument must keep the `{}`
    /// placeholder.
    pub fn with_overrides(
        mut self,
        overrides: BTreeMap<MessageKey, String>,
    ) -> Result<Self, CatalogError> {
        for (key, template) in &overrides {
            if key.takes_argument() && !template.contains(PLACEHOLDER) {
                return Err(CatalogError::MissingPlaceholder {
                    key: *key,
                    template: template.clone(),
                });
            }
        }

        debug!(count = overrides.len(), "applying string overrides");
        self.overrides.extend(overrides);
        Ok(self)
    }
}

impl Localizer for StringCatalog {
    fn template(
        &self,
        key: MessageKey,
    ) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| self.language.builtin(key))
    }
}
