use chrono::NaiveDateTime;

// no Eq here: price is an f64
#[derive(Debug, Clone, PartialEq)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub bakery_id: i64,
}
