use anyhow::{Context, Result};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entities::{cases, prelude::*};
use crate::models::{Case, CaseStatus, CaseType};

pub struct CaseRepository {
    conn: DatabaseConnection,
}

impl CaseRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_case_model(model: cases::Model) -> Result<Case> {
        let case_type: CaseType = model
            .case_type
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        let status: CaseStatus = model.status.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        let start_date = NaiveDate::parse_from_str(&model.start_date, "%Y-%m-%d")
            .with_context(|| format!("Invalid start date in store: {}", model.start_date))?;

        Ok(Case {
            id: model.id,
            client: model.client,
            case_type,
            start_date,
            status,
            owner: model.owner,
        })
    }

    /// Append a new case; the store assigns the id. Owner is written once
    /// and never updated afterwards.
    pub async fn add(
        &self,
        client: &str,
        case_type: CaseType,
        start_date: NaiveDate,
        status: CaseStatus,
        owner: Option<&str>,
    ) -> Result<i32> {
        let active = cases::ActiveModel {
            client: Set(client.to_string()),
            case_type: Set(case_type.as_str().to_string()),
            start_date: Set(start_date.format("%Y-%m-%d").to_string()),
            status: Set(status.as_str().to_string()),
            owner: Set(owner.map(ToString::to_string)),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let res = Cases::insert(active).exec(&self.conn).await?;
        info!("Added case for client {} ({})", client, case_type);
        Ok(res.last_insert_id)
    }

    /// All cases in insertion order, optionally filtered to one owner.
    /// The filter is a bound parameter, never interpolated SQL.
    pub async fn list(&self, owner: Option<&str>) -> Result<Vec<Case>> {
        let mut query = Cases::find().order_by_asc(cases::Column::Id);
        if let Some(owner) = owner {
            query = query.filter(cases::Column::Owner.eq(owner));
        }

        let rows = query
            .all(&self.conn)
            .await
            .context("Failed to list cases")?;

        rows.into_iter().map(Self::map_case_model).collect()
    }
}
