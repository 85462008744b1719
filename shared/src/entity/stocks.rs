//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub symbol: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub company_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub sector: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 8)))", nullable)]
    pub entry_price: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 8)))", nullable)]
    pub target_price: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 8)))", nullable)]
    pub stop_loss: Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub risk_reward_ratio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub technical_signal: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reasoning: Option<String>,
    pub added_date: DateTimeUtc,
    pub status: StockStatus,
}

/// Watchlist lifecycle. Removal is a flip to `Inactive`, never a row delete;
/// inactive rows keep holding their symbol for uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
