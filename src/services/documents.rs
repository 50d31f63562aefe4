//! One generation-and-download interaction, end to end.
//!
//! Builds the prompt, calls the generation endpoint, substitutes the
//! placeholder body on endpoint failure, and lays the result out as a PDF.
//! Nothing here is persisted; the returned artifact lives only for the
//! request that produced it.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::warn;

use crate::clients::gemini::GeminiClient;
use crate::documents::{
    DocumentFields, DocumentKind, GeneratedDocument, Layout, PLACEHOLDER_BODY, build_prompt,
    file_name, render_document, render_receipt,
};
use crate::fees::format_quetzales;

pub struct DocumentService {
    gemini: Arc<GeminiClient>,
    layout: Layout,
}

impl DocumentService {
    #[must_use]
    pub fn new(gemini: Arc<GeminiClient>, layout: Layout) -> Self {
        Self { gemini, layout }
    }

    /// Produce the downloadable artifact for one form submission. Endpoint
    /// failure is recovered here: the document is still rendered, with the
    /// fixed placeholder as its body.
    pub async fn generate(
        &self,
        kind: DocumentKind,
        fields: &DocumentFields,
        today: NaiveDate,
    ) -> Result<GeneratedDocument> {
        let name = file_name(kind, &fields.party_one, today);

        if kind.bypasses_generation() {
            let bytes = render_receipt(&fields.party_one, fields.amount.unwrap_or(0.0), today)?;
            return Ok(GeneratedDocument {
                file_name: name,
                bytes,
                body_text: String::new(),
            });
        }

        let prompt = build_prompt(kind, fields);
        let body = match self.gemini.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Content generation failed, using placeholder: {e}");
                PLACEHOLDER_BODY.to_string()
            }
        };

        let template = kind.template();
        let field_lines = Self::field_lines(fields);
        let bytes = render_document(self.layout, template.title, &field_lines, &body)?;

        Ok(GeneratedDocument {
            file_name: name,
            bytes,
            body_text: body,
        })
    }

    fn field_lines(fields: &DocumentFields) -> Vec<String> {
        let mut lines = vec![format!("Parte: {}", fields.party_one)];
        if let Some(party_two) = &fields.party_two {
            lines.push(format!("Contraparte: {party_two}"));
        }
        if let Some(amount) = fields.amount {
            lines.push(format!("Monto: {}", format_quetzales(amount)));
        }
        lines
    }
}
