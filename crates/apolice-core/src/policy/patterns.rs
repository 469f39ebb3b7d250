//! Regex patterns for Brazilian insurance-policy field extraction.
//!
//! One compiled pattern per distinct expression. Some fields of the
//! schema share a pattern (the three SUSEP-code fields and the two
//! hygiene/cleaning goods fields); the duplication comes from the
//! original authoring of the pattern table and is kept as observed
//! behavior. Capture group 1 is always the extracted value.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Party names (carrier, insurer, broker)
    pub static ref TRANSPORTADORA: Regex = Regex::new(
        r"(?i)Transportadora[:\s\-]*([A-Z0-9\s\.\-&]+)"
    ).unwrap();

    pub static ref SEGURADORA: Regex = Regex::new(
        r"(?i)Seguradora[:\s\-]*([A-Z0-9\s\.\-&]+)"
    ).unwrap();

    pub static ref CORRETORA: Regex = Regex::new(
        r"(?i)Corretora[:\s\-]*([A-Z0-9\s\.\-&]+)"
    ).unwrap();

    // CNPJ (Brazilian company tax ID: XX.XXX.XXX/XXXX-XX, separators optional)
    pub static ref CNPJ_SEGURADO: Regex = Regex::new(
        r"(?i)CNPJ.*?(\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2})"
    ).unwrap();

    pub static ref CNPJ_CORRETORA: Regex = Regex::new(
        r"(?i)Corretora.*?(\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2})"
    ).unwrap();

    // Coverage period (vigência)
    pub static ref INICIO_VIGENCIA: Regex = Regex::new(
        r"(?i)In[íi]cio Vig[eê]ncia[:\s\-]*([0-9/]+)"
    ).unwrap();

    pub static ref FIM_VIGENCIA: Regex = Regex::new(
        r"(?i)Fim Vig[eê]ncia[:\s\-]*([0-9/]+)"
    ).unwrap();

    pub static ref VIGENCIA: Regex = Regex::new(
        r"(?i)Vig[eê]ncia[:\s\-]*([0-9A-Za-z\s/ até]+)"
    ).unwrap();

    // SUSEP registration code; shared by three schema fields
    pub static ref SUSEP_CODE: Regex = Regex::new(
        r"(?i)Susep[:\s\-]*([0-9]+)"
    ).unwrap();

    // Policy classification
    pub static ref GRUPO: Regex = Regex::new(
        r"(?i)Grupo[:\s\-]*([A-Z0-9\s]+)"
    ).unwrap();

    pub static ref RAMO: Regex = Regex::new(
        r"(?i)Ramo[:\s\-]*([A-Z\s]+)"
    ).unwrap();

    // Monetary caps
    pub static ref LIMITE_MAXIMO: Regex = Regex::new(
        r"(?i)Limite M[aá]ximo.*?([\d\.,]+)"
    ).unwrap();

    pub static ref LMG: Regex = Regex::new(
        r"(?i)LMG[:\s\-]*([\d\.,]+)"
    ).unwrap();

    // Covered goods keywords; shared by two schema fields
    pub static ref HIGIENE_LIMPEZA: Regex = Regex::new(
        r"(?i)(Higiene|Limpeza|Cosm[eé]tico|Perfume|Perfumaria)"
    ).unwrap();

    // Contact data
    pub static ref CELULAR: Regex = Regex::new(
        r"(?i)Celular[:\s\-]*([0-9\s\(\)\-]+)"
    ).unwrap();

    pub static ref TELEFONE: Regex = Regex::new(
        r"(?i)Telefone[:\s\-]*([0-9\s\(\)\-]+)"
    ).unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"(?i)Email[:\s\-]*([a-z0-9\.\-_]+@[a-z0-9\.\-]+)"
    ).unwrap();

    pub static ref RESPONSAVEL: Regex = Regex::new(
        r"(?i)Respons[aá]vel[:\s\-]*([A-Z\s]+)"
    ).unwrap();

    // Location
    pub static ref ESTADO: Regex = Regex::new(
        r"(?i)Estado[:\s\-]*([A-Z]{2})"
    ).unwrap();

    pub static ref UF: Regex = Regex::new(
        r"(?i)UF[:\s\-]*([A-Z]{2})"
    ).unwrap();

    pub static ref ENDERECO: Regex = Regex::new(
        r"(?i)Endere[cç]o[:\s\-]*([A-Z0-9\s\.,\-]+)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_susep_code_captures_digits() {
        let caps = SUSEP_CODE.captures("Código Susep: 15414.002").unwrap();
        assert_eq!(&caps[1], "15414");
    }

    #[test]
    fn test_cnpj_with_and_without_separators() {
        let caps = CNPJ_SEGURADO
            .captures("CNPJ do Segurado: 12.345.678/0001-90")
            .unwrap();
        assert_eq!(&caps[1], "12.345.678/0001-90");

        let caps = CNPJ_SEGURADO.captures("CNPJ 12345678000190").unwrap();
        assert_eq!(&caps[1], "12345678000190");
    }

    #[test]
    fn test_vigencia_dates() {
        let caps = INICIO_VIGENCIA
            .captures("Início Vigência: 01/01/2024")
            .unwrap();
        assert_eq!(&caps[1], "01/01/2024");

        // Unaccented spelling matches too
        let caps = INICIO_VIGENCIA
            .captures("Inicio Vigencia - 15/03/2024")
            .unwrap();
        assert_eq!(&caps[1], "15/03/2024");
    }

    #[test]
    fn test_hygiene_keywords() {
        for text in ["Produtos de Higiene", "limpeza em geral", "Cosméticos"] {
            assert!(HIGIENE_LIMPEZA.is_match(text), "no match for {text:?}");
        }
        assert!(!HIGIENE_LIMPEZA.is_match("Carga geral"));
    }

    #[test]
    fn test_email_capture() {
        let caps = EMAIL.captures("Email: contato@acme.com.br\n").unwrap();
        assert_eq!(&caps[1], "contato@acme.com.br");
    }

    #[test]
    fn test_case_insensitive_labels() {
        assert!(SEGURADORA.is_match("SEGURADORA: ACME"));
        assert!(SEGURADORA.is_match("seguradora: acme"));
    }
}
