//! Legal document generation: kinds, prompt templates, and PDF layout.

pub mod prompts;
pub mod render;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use prompts::build_prompt;
pub use render::{Layout, render_document, render_receipt};

/// Body text used when the generation endpoint fails. The document is still
/// rendered and offered for download.
pub const PLACEHOLDER_BODY: &str = "Contenido no generado debido a un error.";

/// The closed set of document kinds the practice produces. Unrecognized
/// tags deserialize to `Otro`, which uses the generic private-contract
/// template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Recibo,
    ContratoPrivado,
    Arrendamiento,
    Compraventa,
    ServiciosProfesionales,
    Mutuo,
    Sociedad,
    Mandato,
    MedidasPrecautorias,
    ContratoTrabajo,
    Donacion,
    Hipoteca,
    DemandaCivilOrdinaria,
    DemandaEjecutiva,
    DemandaLaboral,
    DemandaMercantil,
    DemandaDivorcio,
    PensionAlimenticia,
    Desahucio,
    Amparo,
    QuerellaPenal,
    DenunciaPenal,
    Reivindicacion,
    NulidadContractual,
    #[serde(other)]
    Otro,
}

impl DocumentKind {
    /// Every concrete kind, in menu order. `Otro` is a deserialization
    /// fallback and is not listed.
    pub const ALL: [Self; 24] = [
        Self::Recibo,
        Self::ContratoPrivado,
        Self::Arrendamiento,
        Self::Compraventa,
        Self::ServiciosProfesionales,
        Self::Mutuo,
        Self::Sociedad,
        Self::Mandato,
        Self::MedidasPrecautorias,
        Self::ContratoTrabajo,
        Self::Donacion,
        Self::Hipoteca,
        Self::DemandaCivilOrdinaria,
        Self::DemandaEjecutiva,
        Self::DemandaLaboral,
        Self::DemandaMercantil,
        Self::DemandaDivorcio,
        Self::PensionAlimenticia,
        Self::Desahucio,
        Self::Amparo,
        Self::QuerellaPenal,
        Self::DenunciaPenal,
        Self::Reivindicacion,
        Self::NulidadContractual,
    ];

    /// Stable tag used in file names and the kinds listing.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Recibo => "recibo",
            Self::ContratoPrivado | Self::Otro => "contrato_privado",
            Self::Arrendamiento => "arrendamiento",
            Self::Compraventa => "compraventa",
            Self::ServiciosProfesionales => "servicios_profesionales",
            Self::Mutuo => "mutuo",
            Self::Sociedad => "sociedad",
            Self::Mandato => "mandato",
            Self::MedidasPrecautorias => "medidas_precautorias",
            Self::ContratoTrabajo => "contrato_trabajo",
            Self::Donacion => "donacion",
            Self::Hipoteca => "hipoteca",
            Self::DemandaCivilOrdinaria => "demanda_civil_ordinaria",
            Self::DemandaEjecutiva => "demanda_ejecutiva",
            Self::DemandaLaboral => "demanda_laboral",
            Self::DemandaMercantil => "demanda_mercantil",
            Self::DemandaDivorcio => "demanda_divorcio",
            Self::PensionAlimenticia => "pension_alimenticia",
            Self::Desahucio => "desahucio",
            Self::Amparo => "amparo",
            Self::QuerellaPenal => "querella_penal",
            Self::DenunciaPenal => "denuncia_penal",
            Self::Reivindicacion => "reivindicacion",
            Self::NulidadContractual => "nulidad_contractual",
        }
    }

    /// Receipts are assembled from structured fields; no text generation.
    #[must_use]
    pub const fn bypasses_generation(self) -> bool {
        matches!(self, Self::Recibo)
    }
}

/// Values captured from the document form. `party_one` is always required;
/// the rest depend on the kind and are interpolated verbatim into the
/// prompt when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFields {
    /// Client / first party / plaintiff name (DPI where applicable).
    pub party_one: String,

    /// Second party / defendant name.
    #[serde(default)]
    pub party_two: Option<String>,

    /// Subject matter (objeto del contrato).
    #[serde(default)]
    pub subject: Option<String>,

    /// Grounds (motivo de la demanda).
    #[serde(default)]
    pub grounds: Option<String>,

    /// Relief sought (pretensión).
    #[serde(default)]
    pub relief: Option<String>,

    /// Amount in quetzales.
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A generated, downloadable artifact. Ephemeral: lives only for the one
/// request that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub body_text: String,
}

/// Download name: `{kind}_{party}_{YYYYMMDD}.pdf`. The party is reduced to
/// ASCII alphanumerics so the name is valid in a plain
/// `Content-Disposition: filename=` parameter; accented letters become `_`.
#[must_use]
pub fn file_name(kind: DocumentKind, party: &str, date: NaiveDate) -> String {
    let party: String = party
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let party = party.trim_matches('_');
    format!("{}_{}_{}.pdf", kind.tag(), party, date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_falls_back_to_generic_contract() {
        let kind: DocumentKind = serde_json::from_str("\"carta_poder_especial\"").unwrap();
        assert_eq!(kind, DocumentKind::Otro);
        assert_eq!(kind.tag(), "contrato_privado");
    }

    #[test]
    fn only_receipts_skip_generation() {
        assert!(DocumentKind::Recibo.bypasses_generation());
        for kind in DocumentKind::ALL {
            if kind != DocumentKind::Recibo {
                assert!(!kind.bypasses_generation(), "{kind:?}");
            }
        }
    }

    #[test]
    fn file_name_embeds_kind_party_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(
            file_name(DocumentKind::Recibo, "Juan Perez", date),
            "recibo_Juan_Perez_20240110.pdf"
        );
    }

    #[test]
    fn file_name_stays_ascii_for_accented_parties() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let name = file_name(DocumentKind::Recibo, "Juan Pérez", date);
        assert_eq!(name, "recibo_Juan_P_rez_20240110.pdf");
        assert!(name.is_ascii());
    }
}
