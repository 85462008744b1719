//! Watchlist persistence over the `stocks` table.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Schema, SqlErr,
};

use crate::database::DbConn;
use crate::entity::stocks::{self, StockStatus};
use crate::error::StoreError;
use crate::models::{StockPayload, StockUpdate};

#[derive(Clone)]
pub struct WatchlistStore {
    db: DbConn,
}

impl WatchlistStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Idempotently ensure the stocks table exists. Safe to call on every
    /// process start.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        let builder = self.db.get_database_backend();
        let schema = Schema::new(builder);
        let mut stmt = schema.create_table_from_entity(stocks::Entity);
        stmt.if_not_exists();
        self.db.execute(builder.build(&stmt)).await?;
        Ok(())
    }

    /// Insert a new stock. `added_date` and `status` are server-assigned; a
    /// symbol collision with any existing row, active or inactive, is
    /// reported as `DuplicateSymbol`.
    pub async fn add(&self, payload: StockPayload) -> Result<(), StoreError> {
        let stock = stocks::ActiveModel {
            symbol: Set(payload.symbol),
            company_name: Set(payload.company_name),
            sector: Set(payload.sector),
            entry_price: Set(payload.entry_price),
            target_price: Set(payload.target_price),
            stop_loss: Set(payload.stop_loss),
            risk_reward_ratio: Set(payload.risk_reward_ratio),
            technical_signal: Set(payload.technical_signal),
            reasoning: Set(payload.reasoning),
            added_date: Set(Utc::now()),
            status: Set(StockStatus::Active),
            ..Default::default()
        };

        stocks::Entity::insert(stock)
            .exec(&self.db)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateSymbol,
                _ => StoreError::Database(err),
            })?;
        Ok(())
    }

    /// All active stocks, most recently added first.
    pub async fn get_all(&self) -> Result<Vec<stocks::Model>, StoreError> {
        let stocks = stocks::Entity::find()
            .filter(stocks::Column::Status.eq(StockStatus::Active))
            .order_by_desc(stocks::Column::AddedDate)
            .all(&self.db)
            .await?;
        Ok(stocks)
    }

    /// A single active stock by symbol. Inactive rows are treated as absent.
    pub async fn get_one(&self, symbol: &str) -> Result<Option<stocks::Model>, StoreError> {
        let stock = stocks::Entity::find()
            .filter(stocks::Column::Symbol.eq(symbol))
            .filter(stocks::Column::Status.eq(StockStatus::Active))
            .one(&self.db)
            .await?;
        Ok(stock)
    }

    /// Active stocks whose sector matches exactly (case-sensitive), in
    /// storage order.
    pub async fn get_by_sector(&self, sector: &str) -> Result<Vec<stocks::Model>, StoreError> {
        let stocks = stocks::Entity::find()
            .filter(stocks::Column::Sector.eq(sector))
            .filter(stocks::Column::Status.eq(StockStatus::Active))
            .all(&self.db)
            .await?;
        Ok(stocks)
    }

    /// Apply the supplied subset of mutable fields to the row matching
    /// `symbol`, regardless of status. A symbol with no matching row, or an
    /// update carrying no recognized field, is a no-op success.
    pub async fn update(&self, symbol: &str, update: StockUpdate) -> Result<(), StoreError> {
        if update.is_empty() {
            return Ok(());
        }

        let mut stock = stocks::ActiveModel::default();
        if let Some(v) = update.company_name {
            stock.company_name = Set(Some(v));
        }
        if let Some(v) = update.sector {
            stock.sector = Set(Some(v));
        }
        if let Some(v) = update.entry_price {
            stock.entry_price = Set(Some(v));
        }
        if let Some(v) = update.target_price {
            stock.target_price = Set(Some(v));
        }
        if let Some(v) = update.stop_loss {
            stock.stop_loss = Set(Some(v));
        }
        if let Some(v) = update.risk_reward_ratio {
            stock.risk_reward_ratio = Set(Some(v));
        }
        if let Some(v) = update.technical_signal {
            stock.technical_signal = Set(Some(v));
        }
        if let Some(v) = update.reasoning {
            stock.reasoning = Set(Some(v));
        }
        if let Some(v) = update.status {
            stock.status = Set(v);
        }

        stocks::Entity::update_many()
            .set(stock)
            .filter(stocks::Column::Symbol.eq(symbol))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Flip the row matching `symbol` to inactive. Zero rows affected is not
    /// an error.
    pub async fn soft_delete(&self, symbol: &str) -> Result<(), StoreError> {
        let stock = stocks::ActiveModel {
            status: Set(StockStatus::Inactive),
            ..Default::default()
        };
        stocks::Entity::update_many()
            .set(stock)
            .filter(stocks::Column::Symbol.eq(symbol))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
