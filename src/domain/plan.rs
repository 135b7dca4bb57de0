use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PricingPlan {
    pub id: i32,
    pub name: String,
    pub price_cents: i32,
    pub billing_cycle: String,
    pub features: Vec<String>,
    pub is_featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PricingPlan {
    /// Price formatted in whole dollars for the pricing table.
    pub fn price_display(&self) -> String {
        let dollars = self.price_cents / 100;
        let cents = self.price_cents % 100;
        if cents == 0 {
            format!("${dollars}")
        } else {
            format!("${dollars}.{cents:02}")
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlan {
    pub name: String,
    pub price_cents: i32,
    pub billing_cycle: String,
    pub features: Vec<String>,
    pub is_featured: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePlan {
    pub name: String,
    pub price_cents: i32,
    pub billing_cycle: String,
    pub features: Vec<String>,
    pub is_featured: bool,
}
