use crate::domain::BakedGood;
use crate::features::ISO_8601_FORMAT;
use chrono::NaiveDateTime;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, PartialEq, Clone, Display)]
#[display("{}", name)]
pub struct DbBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub bakery_id: i64,
}

impl From<DbBakedGood> for BakedGood {
    fn from(db_good: DbBakedGood) -> Self {
        BakedGood {
            id: db_good.id,
            name: db_good.name,
            price: db_good.price,
            created_at: db_good.created_at,
            bakery_id: db_good.bakery_id,
        }
    }
}

// the standalone representation keeps bakery_id so callers can walk back
// to the owning bakery
#[derive(Serialize, Deserialize)]
pub struct JsonBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
    pub bakery_id: i64,
}

impl From<&BakedGood> for JsonBakedGood {
    fn from(good: &BakedGood) -> Self {
        JsonBakedGood {
            id: good.id,
            name: good.name.to_owned(),
            price: good.price,
            created_at: good.created_at.format(ISO_8601_FORMAT).to_string(),
            bakery_id: good.bakery_id,
        }
    }
}
