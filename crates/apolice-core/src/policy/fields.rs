//! The fixed field schema of the extraction table.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns;

/// A named field of the policy extraction schema.
///
/// Variants are declared in the authoring order of the pattern table;
/// [`Field::ALL`] exposes that order and every consumer (extraction,
/// display, export encoders) iterates it. The schema is closed: adding a
/// field means adding a variant, a label, and a pattern here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Transportadora,
    Seguradora,
    CnpjSegurado,
    InicioVigenciaApolice,
    FimVigenciaApolice,
    Vigencia,
    NumeroSusepTransportadora,
    Grupo,
    Ramo,
    CodigoSusepCorretora,
    Corretora,
    CnpjCorretora,
    CodigoSusepApolice,
    LimiteMaximoGarantia,
    Lmg,
    ProdutosHigieneLimpeza,
    ArtigosHigieneLimpeza,
    CelularTransportadora,
    TelefoneTransportadora,
    Estado,
    Uf,
    Endereco,
    EmailTransportador,
    NomeResponsavelTransportadora,
}

impl Field {
    /// Number of fields in the schema.
    pub const COUNT: usize = 24;

    /// All fields, in the fixed extraction and column order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Transportadora,
        Field::Seguradora,
        Field::CnpjSegurado,
        Field::InicioVigenciaApolice,
        Field::FimVigenciaApolice,
        Field::Vigencia,
        Field::NumeroSusepTransportadora,
        Field::Grupo,
        Field::Ramo,
        Field::CodigoSusepCorretora,
        Field::Corretora,
        Field::CnpjCorretora,
        Field::CodigoSusepApolice,
        Field::LimiteMaximoGarantia,
        Field::Lmg,
        Field::ProdutosHigieneLimpeza,
        Field::ArtigosHigieneLimpeza,
        Field::CelularTransportadora,
        Field::TelefoneTransportadora,
        Field::Estado,
        Field::Uf,
        Field::Endereco,
        Field::EmailTransportador,
        Field::NomeResponsavelTransportadora,
    ];

    /// Position of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column label, verbatim from the source documents' vocabulary.
    pub fn label(self) -> &'static str {
        match self {
            Field::Transportadora => "Transportadora",
            Field::Seguradora => "Seguradora",
            Field::CnpjSegurado => "CNPJ Segurado",
            Field::InicioVigenciaApolice => "Inicio Vigência Apólice",
            Field::FimVigenciaApolice => "Fim Vigência Apólice",
            Field::Vigencia => "Vigência",
            Field::NumeroSusepTransportadora => "NÚMERO SUSEP TRANSPORTADORA",
            Field::Grupo => "GRUPO",
            Field::Ramo => "RAMO",
            Field::CodigoSusepCorretora => "Código Susep Corretora",
            Field::Corretora => "Corretora",
            Field::CnpjCorretora => "CNPJ Corretora",
            Field::CodigoSusepApolice => "Código Susep apólice",
            Field::LimiteMaximoGarantia => "Limite Máximo de Garantia",
            Field::Lmg => "LMG",
            Field::ProdutosHigieneLimpeza => {
                "Produto de higiene e limpeza, Cosméticos/ Perfumes e artigos de perfumaria"
            }
            Field::ArtigosHigieneLimpeza => {
                "Artigos de higiene e limpeza, Cosméticos/ Perfumes e artigos de perfumaria"
            }
            Field::CelularTransportadora => "CELULAR Transportadora",
            Field::TelefoneTransportadora => "TELEFONE Transportadora",
            Field::Estado => "Estado",
            Field::Uf => "UF",
            Field::Endereco => "ENDEREÇO",
            Field::EmailTransportador => "Email Transportador",
            Field::NomeResponsavelTransportadora => "Nome Responsável Transportadora",
        }
    }

    /// The compiled pattern for this field.
    ///
    /// Note the shared patterns: the three SUSEP-code fields all resolve
    /// to [`patterns::SUSEP_CODE`] and the two hygiene/cleaning goods
    /// fields to [`patterns::HIGIENE_LIMPEZA`], so those groups always
    /// extract identical values from the same page.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Field::Transportadora => &patterns::TRANSPORTADORA,
            Field::Seguradora => &patterns::SEGURADORA,
            Field::CnpjSegurado => &patterns::CNPJ_SEGURADO,
            Field::InicioVigenciaApolice => &patterns::INICIO_VIGENCIA,
            Field::FimVigenciaApolice => &patterns::FIM_VIGENCIA,
            Field::Vigencia => &patterns::VIGENCIA,
            Field::NumeroSusepTransportadora => &patterns::SUSEP_CODE,
            Field::Grupo => &patterns::GRUPO,
            Field::Ramo => &patterns::RAMO,
            Field::CodigoSusepCorretora => &patterns::SUSEP_CODE,
            Field::Corretora => &patterns::CORRETORA,
            Field::CnpjCorretora => &patterns::CNPJ_CORRETORA,
            Field::CodigoSusepApolice => &patterns::SUSEP_CODE,
            Field::LimiteMaximoGarantia => &patterns::LIMITE_MAXIMO,
            Field::Lmg => &patterns::LMG,
            Field::ProdutosHigieneLimpeza => &patterns::HIGIENE_LIMPEZA,
            Field::ArtigosHigieneLimpeza => &patterns::HIGIENE_LIMPEZA,
            Field::CelularTransportadora => &patterns::CELULAR,
            Field::TelefoneTransportadora => &patterns::TELEFONE,
            Field::Estado => &patterns::ESTADO,
            Field::Uf => &patterns::UF,
            Field::Endereco => &patterns::ENDERECO,
            Field::EmailTransportador => &patterns::EMAIL,
            Field::NomeResponsavelTransportadora => &patterns::RESPONSAVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant_once() {
        assert_eq!(Field::ALL.len(), Field::COUNT);
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_labels_are_unique() {
        for a in Field::ALL {
            for b in Field::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }

    #[test]
    fn test_shared_patterns() {
        assert!(std::ptr::eq(
            Field::NumeroSusepTransportadora.pattern(),
            Field::CodigoSusepCorretora.pattern()
        ));
        assert!(std::ptr::eq(
            Field::CodigoSusepCorretora.pattern(),
            Field::CodigoSusepApolice.pattern()
        ));
        assert!(std::ptr::eq(
            Field::ProdutosHigieneLimpeza.pattern(),
            Field::ArtigosHigieneLimpeza.pattern()
        ));
    }
}
