//! Prompt construction for the generation endpoint.
//!
//! One static table maps every document kind to its template: a display
//! title, the overall shape of the instruction, and the fixed clause citing
//! the applicable Guatemalan law. Prompt assembly is a single pure function
//! over that table; adding a kind means adding a table row.

use crate::fees::format_quetzales;

use super::{DocumentFields, DocumentKind};

/// How the instruction is phrased: contracts are drafted "entre X y Y",
/// claims name a plaintiff and a defendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Contract,
    Claim,
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub title: &'static str,
    pub shape: Shape,
    pub legal_basis: &'static str,
}

const GENERIC_CONTRACT: Template = Template {
    title: "Contrato Privado",
    shape: Shape::Contract,
    legal_basis: "el Código Civil de Guatemala (Decreto-Ley 106)",
};

const TEMPLATES: &[(DocumentKind, Template)] = &[
    (
        DocumentKind::Recibo,
        Template {
            title: "Recibo de Honorarios",
            shape: Shape::Contract,
            legal_basis: "el Código de Comercio de Guatemala (Decreto 2-70)",
        },
    ),
    (DocumentKind::ContratoPrivado, GENERIC_CONTRACT),
    (
        DocumentKind::Arrendamiento,
        Template {
            title: "Contrato de Arrendamiento",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 1880 y siguientes",
        },
    ),
    (
        DocumentKind::Compraventa,
        Template {
            title: "Contrato de Compraventa",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 1790 y siguientes",
        },
    ),
    (
        DocumentKind::ServiciosProfesionales,
        Template {
            title: "Contrato de Servicios Profesionales",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 2027 y siguientes",
        },
    ),
    (
        DocumentKind::Mutuo,
        Template {
            title: "Contrato de Mutuo",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 1942 y siguientes",
        },
    ),
    (
        DocumentKind::Sociedad,
        Template {
            title: "Contrato de Sociedad",
            shape: Shape::Contract,
            legal_basis: "el Código de Comercio de Guatemala (Decreto 2-70)",
        },
    ),
    (
        DocumentKind::Mandato,
        Template {
            title: "Mandato",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 1686 y siguientes",
        },
    ),
    (
        DocumentKind::MedidasPrecautorias,
        Template {
            title: "Solicitud de Medidas Precautorias",
            shape: Shape::Claim,
            legal_basis:
                "el Código Procesal Civil y Mercantil de Guatemala, artículos 516 y siguientes",
        },
    ),
    (
        DocumentKind::ContratoTrabajo,
        Template {
            title: "Contrato Individual de Trabajo",
            shape: Shape::Contract,
            legal_basis: "el Código de Trabajo de Guatemala (Decreto 1441)",
        },
    ),
    (
        DocumentKind::Donacion,
        Template {
            title: "Contrato de Donación",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 1855 y siguientes",
        },
    ),
    (
        DocumentKind::Hipoteca,
        Template {
            title: "Constitución de Hipoteca",
            shape: Shape::Contract,
            legal_basis: "el Código Civil de Guatemala, artículos 822 y siguientes",
        },
    ),
    (
        DocumentKind::DemandaCivilOrdinaria,
        Template {
            title: "Demanda Civil Ordinaria",
            shape: Shape::Claim,
            legal_basis: "el Código Procesal Civil y Mercantil de Guatemala (juicio ordinario)",
        },
    ),
    (
        DocumentKind::DemandaEjecutiva,
        Template {
            title: "Demanda Ejecutiva",
            shape: Shape::Claim,
            legal_basis:
                "el Código Procesal Civil y Mercantil de Guatemala, vía ejecutiva, artículos 327 y siguientes",
        },
    ),
    (
        DocumentKind::DemandaLaboral,
        Template {
            title: "Demanda Laboral",
            shape: Shape::Claim,
            legal_basis: "el Código de Trabajo de Guatemala (juicio ordinario laboral)",
        },
    ),
    (
        DocumentKind::DemandaMercantil,
        Template {
            title: "Demanda Mercantil",
            shape: Shape::Claim,
            legal_basis:
                "el Código de Comercio y el Código Procesal Civil y Mercantil de Guatemala",
        },
    ),
    (
        DocumentKind::DemandaDivorcio,
        Template {
            title: "Demanda de Divorcio",
            shape: Shape::Claim,
            legal_basis:
                "el Código Civil de Guatemala en materia de divorcio y el Código Procesal Civil y Mercantil",
        },
    ),
    (
        DocumentKind::PensionAlimenticia,
        Template {
            title: "Demanda de Pensión Alimenticia",
            shape: Shape::Claim,
            legal_basis:
                "el Código Civil de Guatemala en materia de alimentos y la Ley de Tribunales de Familia",
        },
    ),
    (
        DocumentKind::Desahucio,
        Template {
            title: "Demanda de Desahucio",
            shape: Shape::Claim,
            legal_basis:
                "el Código Procesal Civil y Mercantil de Guatemala (juicio sumario de desocupación)",
        },
    ),
    (
        DocumentKind::Amparo,
        Template {
            title: "Acción de Amparo",
            shape: Shape::Claim,
            legal_basis:
                "la Ley de Amparo, Exhibición Personal y de Constitucionalidad (Decreto 1-86)",
        },
    ),
    (
        DocumentKind::QuerellaPenal,
        Template {
            title: "Querella Penal",
            shape: Shape::Claim,
            legal_basis: "el Código Procesal Penal de Guatemala (Decreto 51-92)",
        },
    ),
    (
        DocumentKind::DenunciaPenal,
        Template {
            title: "Denuncia Penal",
            shape: Shape::Claim,
            legal_basis: "el Código Procesal Penal de Guatemala (Decreto 51-92)",
        },
    ),
    (
        DocumentKind::Reivindicacion,
        Template {
            title: "Demanda de Reivindicación de la Propiedad",
            shape: Shape::Claim,
            legal_basis:
                "el Código Civil de Guatemala en materia de propiedad y el Código Procesal Civil y Mercantil",
        },
    ),
    (
        DocumentKind::NulidadContractual,
        Template {
            title: "Demanda de Nulidad Contractual",
            shape: Shape::Claim,
            legal_basis:
                "el Código Civil de Guatemala en materia de nulidad del negocio jurídico",
        },
    ),
];

impl DocumentKind {
    /// Template lookup; kinds without a row (the `Otro` fallback) draft as
    /// a generic private contract.
    #[must_use]
    pub fn template(self) -> Template {
        TEMPLATES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or(GENERIC_CONTRACT, |(_, template)| *template)
    }

    /// Form fields this kind expects, for the kinds listing.
    #[must_use]
    pub fn field_names(self) -> &'static [&'static str] {
        if self.bypasses_generation() {
            &["party_one", "amount"]
        } else {
            match self.template().shape {
                Shape::Contract => &["party_one", "party_two", "subject", "amount"],
                Shape::Claim => &["party_one", "party_two", "grounds", "relief"],
            }
        }
    }
}

/// Build the natural-language instruction sent to the generation endpoint.
/// Pure interpolation: every supplied field value appears verbatim.
#[must_use]
pub fn build_prompt(kind: DocumentKind, fields: &DocumentFields) -> String {
    let template = kind.template();

    match template.shape {
        Shape::Contract => {
            let mut prompt = format!(
                "Redacta un {} conforme a las leyes de Guatemala",
                template.title
            );
            match &fields.party_two {
                Some(party_two) => {
                    prompt.push_str(&format!(
                        " entre {} y {party_two}",
                        fields.party_one
                    ));
                }
                None => prompt.push_str(&format!(" a favor de {}", fields.party_one)),
            }
            if let Some(subject) = &fields.subject {
                prompt.push_str(&format!(", con el objeto: '{subject}'"));
            }
            if let Some(amount) = fields.amount {
                prompt.push_str(&format!(", por un monto de {}", format_quetzales(amount)));
            }
            prompt.push_str(
                ". Incluye cláusulas estándar como cumplimiento, resolución y jurisdicción \
                 en Guatemala.",
            );
            prompt.push_str(&format!(
                " Fundamenta el documento en {}.",
                template.legal_basis
            ));
            prompt
        }
        Shape::Claim => {
            let mut prompt = format!(
                "Redacta una {} conforme a {}. Demandante: {}",
                template.title, template.legal_basis, fields.party_one
            );
            if let Some(party_two) = &fields.party_two {
                prompt.push_str(&format!(", Demandado: {party_two}"));
            }
            if let Some(grounds) = &fields.grounds {
                prompt.push_str(&format!(", Motivo: '{grounds}'"));
            }
            if let Some(relief) = &fields.relief {
                prompt.push_str(&format!(", Pretensión: '{relief}'"));
            }
            if let Some(amount) = fields.amount {
                prompt.push_str(&format!(
                    ", Monto reclamado: {}",
                    format_quetzales(amount)
                ));
            }
            prompt.push_str(
                ". Incluye estructura formal y referencia a leyes guatemaltecas.",
            );
            prompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> DocumentFields {
        DocumentFields {
            party_one: "Juan Pérez".to_string(),
            party_two: Some("María López".to_string()),
            subject: Some("arrendamiento de local comercial".to_string()),
            grounds: Some("incumplimiento de pago".to_string()),
            relief: Some("pago de lo adeudado".to_string()),
            amount: Some(2500.0),
        }
    }

    #[test]
    fn every_kind_embeds_supplied_parties_verbatim() {
        let fields = full_fields();
        for kind in DocumentKind::ALL {
            let prompt = build_prompt(kind, &fields);
            assert!(prompt.contains("Juan Pérez"), "{kind:?}: {prompt}");
            assert!(prompt.contains("María López"), "{kind:?}: {prompt}");
            assert!(prompt.contains("Q2500.00"), "{kind:?}: {prompt}");
        }
    }

    #[test]
    fn every_kind_cites_its_legal_basis() {
        let fields = full_fields();
        for kind in DocumentKind::ALL {
            if kind.bypasses_generation() {
                continue;
            }
            let prompt = build_prompt(kind, &fields);
            assert!(
                prompt.contains(kind.template().legal_basis),
                "{kind:?}: {prompt}"
            );
        }
    }

    #[test]
    fn contract_shape_carries_subject_and_claim_shape_carries_relief() {
        let fields = full_fields();
        let contract = build_prompt(DocumentKind::Arrendamiento, &fields);
        assert!(contract.contains("arrendamiento de local comercial"));

        let claim = build_prompt(DocumentKind::DemandaCivilOrdinaria, &fields);
        assert!(claim.contains("incumplimiento de pago"));
        assert!(claim.contains("pago de lo adeudado"));
    }

    #[test]
    fn missing_optional_fields_do_not_leave_holes() {
        let fields = DocumentFields {
            party_one: "Juan Pérez".to_string(),
            ..DocumentFields::default()
        };
        let prompt = build_prompt(DocumentKind::Amparo, &fields);
        assert!(prompt.contains("Juan Pérez"));
        assert!(!prompt.contains("''"));
        assert!(!prompt.contains("None"));
    }

    #[test]
    fn fallback_kind_uses_generic_contract_template() {
        let fields = full_fields();
        let prompt = build_prompt(DocumentKind::Otro, &fields);
        assert!(prompt.contains("Contrato Privado"));
        assert!(prompt.contains("Decreto-Ley 106"));
    }
}
