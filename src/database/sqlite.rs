use crate::database::BakeryRepository;
use crate::domain::{BakedGood, Bakery};
use crate::features::baked_goods::model::DbBakedGood;
use crate::features::bakeries::model::DbBakery;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakeryRepository for SqliteRepository {
    async fn all_bakeries(&self) -> Result<Vec<Bakery>> {
        let db_bakeries = sqlx::query_as::<_, DbBakery>("SELECT * FROM bakeries")
            .fetch_all(&self.pool)
            .await?;

        // translate to pure Bakery models
        Ok(db_bakeries.into_iter().map(Bakery::from).collect())
    }

    async fn bakery_by_id(&self, id: i64) -> Result<Option<Bakery>> {
        let db_bakery_opt = sqlx::query_as::<_, DbBakery>("SELECT * FROM bakeries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(db_bakery_opt.map(Bakery::from))
    }

    async fn baked_goods_for_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>> {
        let db_goods =
            sqlx::query_as::<_, DbBakedGood>("SELECT * FROM baked_goods WHERE bakery_id = ?")
                .bind(bakery_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(db_goods.into_iter().map(BakedGood::from).collect())
    }

    async fn baked_goods_by_price_desc(&self) -> Result<Vec<BakedGood>> {
        // id breaks price ties so the ordering is stable
        let db_goods =
            sqlx::query_as::<_, DbBakedGood>("SELECT * FROM baked_goods ORDER BY price DESC, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(db_goods.into_iter().map(BakedGood::from).collect())
    }

    async fn most_expensive_baked_good(&self) -> Result<Option<BakedGood>> {
        let db_good_opt = sqlx::query_as::<_, DbBakedGood>(
            "SELECT * FROM baked_goods ORDER BY price DESC, id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(db_good_opt.map(BakedGood::from))
    }
}
