use crate::domain::{BakedGood, Bakery};
use crate::features::ISO_8601_FORMAT;
use chrono::NaiveDateTime;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Eq, PartialEq, Clone, Display)]
#[display("{}", name)]
pub struct DbBakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<DbBakery> for Bakery {
    fn from(db_bakery: DbBakery) -> Self {
        Bakery {
            id: db_bakery.id,
            name: db_bakery.name,
            created_at: db_bakery.created_at,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct JsonBakery {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<&Bakery> for JsonBakery {
    fn from(bakery: &Bakery) -> Self {
        JsonBakery {
            id: bakery.id,
            name: bakery.name.to_owned(),
            created_at: bakery.created_at.format(ISO_8601_FORMAT).to_string(),
        }
    }
}

// a baked good as it appears nested under its bakery, no bakery_id since
// the parent is right there in the payload
#[derive(Serialize, Deserialize)]
pub struct JsonNestedBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
}

impl From<&BakedGood> for JsonNestedBakedGood {
    fn from(good: &BakedGood) -> Self {
        JsonNestedBakedGood {
            id: good.id,
            name: good.name.to_owned(),
            price: good.price,
            created_at: good.created_at.format(ISO_8601_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct JsonBakeryDetail {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub baked_goods: Vec<JsonNestedBakedGood>,
}

impl JsonBakeryDetail {
    pub fn from_parts(bakery: &Bakery, baked_goods: &[BakedGood]) -> Self {
        JsonBakeryDetail {
            id: bakery.id,
            name: bakery.name.to_owned(),
            created_at: bakery.created_at.format(ISO_8601_FORMAT).to_string(),
            baked_goods: baked_goods.iter().map(JsonNestedBakedGood::from).collect(),
        }
    }
}
