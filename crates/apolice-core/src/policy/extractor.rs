//! Rule-based field extraction over raw page text.

use tracing::trace;

use super::fields::Field;

/// One extracted value per schema field, in [`Field::ALL`] order.
///
/// Every field is always present; a pattern that did not match holds the
/// empty string. This is the fixed-schema replacement for a loose
/// name -> value map: lookups cannot miss and columns cannot be omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    values: [String; Field::COUNT],
}

impl FieldValues {
    /// Create a value set with every field empty.
    pub fn empty() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
        }
    }

    /// Value for a field; empty string when the pattern did not match.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Set the value for a field.
    pub fn set(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }

    /// Iterate (field, value) pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .map(move |&field| (field, self.get(field)))
    }

    /// True when no pattern matched at all.
    pub fn is_all_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::empty()
    }
}

/// Applies the fixed pattern table to page text.
///
/// Stateless; the patterns themselves are process-wide compiled
/// constants, so construction is free and extraction never fails: a
/// non-matching pattern yields an empty value, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyFieldExtractor;

impl PolicyFieldExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all schema fields from the raw text of one page.
    ///
    /// For each field, the first match of its pattern wins and capture
    /// group 1 is taken with surrounding whitespace trimmed. The result
    /// always covers exactly the [`Field::COUNT`] fields of the schema.
    pub fn extract_fields(&self, page_text: &str) -> FieldValues {
        let mut values = FieldValues::empty();

        for field in Field::ALL {
            if let Some(caps) = field.pattern().captures(page_text) {
                if let Some(group) = caps.get(1) {
                    let value = group.as_str().trim();
                    if !value.is_empty() {
                        trace!("matched {:?}: {:?}", field, value);
                        values.set(field, value.to_string());
                    }
                }
            }
        }

        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_field_present_regardless_of_match() {
        let extractor = PolicyFieldExtractor::new();
        let values = extractor.extract_fields("no policy data here");
        assert_eq!(values.iter().count(), Field::COUNT);
        assert!(values.is_all_empty());
    }

    #[test]
    fn test_empty_input() {
        let extractor = PolicyFieldExtractor::new();
        let values = extractor.extract_fields("");
        assert!(values.is_all_empty());
    }

    #[test]
    fn test_idempotent() {
        let extractor = PolicyFieldExtractor::new();
        let text = "Susep: 12345\nLMG: 1.500.000,00\nSeguradora: ACME SEGUROS LTDA";
        assert_eq!(extractor.extract_fields(text), extractor.extract_fields(text));
    }

    #[test]
    fn test_matched_value_is_trimmed() {
        let extractor = PolicyFieldExtractor::new();
        let values = extractor.extract_fields("UF:   SP");
        assert_eq!(values.get(Field::Uf), "SP");
    }

    #[test]
    fn test_shared_pattern_fields_agree() {
        let extractor = PolicyFieldExtractor::new();
        let values = extractor.extract_fields("Código Susep: 987654\nProdutos de Limpeza");

        assert_eq!(values.get(Field::NumeroSusepTransportadora), "987654");
        assert_eq!(
            values.get(Field::NumeroSusepTransportadora),
            values.get(Field::CodigoSusepCorretora)
        );
        assert_eq!(
            values.get(Field::CodigoSusepCorretora),
            values.get(Field::CodigoSusepApolice)
        );

        assert_eq!(values.get(Field::ProdutosHigieneLimpeza), "Limpeza");
        assert_eq!(
            values.get(Field::ProdutosHigieneLimpeza),
            values.get(Field::ArtigosHigieneLimpeza)
        );
    }

    #[test]
    fn test_acme_scenario() {
        let extractor = PolicyFieldExtractor::new();
        let values = extractor.extract_fields("Susep: 12345\nSeguradora: ACME SEGUROS LTDA");

        assert_eq!(values.get(Field::Seguradora), "ACME SEGUROS LTDA");
        assert_eq!(values.get(Field::NumeroSusepTransportadora), "12345");
        assert_eq!(values.get(Field::CodigoSusepCorretora), "12345");
        assert_eq!(values.get(Field::CodigoSusepApolice), "12345");

        for (field, value) in values.iter() {
            match field {
                Field::Seguradora
                | Field::NumeroSusepTransportadora
                | Field::CodigoSusepCorretora
                | Field::CodigoSusepApolice => assert!(!value.is_empty()),
                _ => assert_eq!(value, "", "unexpected value for {:?}", field),
            }
        }
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = PolicyFieldExtractor::new();
        let values = extractor.extract_fields("Susep: 111\nSusep: 222");
        assert_eq!(values.get(Field::NumeroSusepTransportadora), "111");
    }
}
