use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::plan::{
    NewPlan as DomainNewPlan, PricingPlan as DomainPlan, UpdatePlan as DomainUpdatePlan,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::pricing_plans)]
/// Diesel model for [`crate::domain::plan::PricingPlan`].
pub struct PricingPlan {
    pub id: i32,
    pub name: String,
    pub price_cents: i32,
    pub billing_cycle: String,
    pub features: String,
    pub is_featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pricing_plans)]
/// Insertable form of [`PricingPlan`]. Features travel as a JSON array in a
/// text column.
pub struct NewPlan<'a> {
    pub name: &'a str,
    pub price_cents: i32,
    pub billing_cycle: &'a str,
    pub features: String,
    pub is_featured: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::pricing_plans)]
/// Data used when updating a [`PricingPlan`] record.
pub struct UpdatePlan<'a> {
    pub name: &'a str,
    pub price_cents: i32,
    pub billing_cycle: &'a str,
    pub features: String,
    pub is_featured: bool,
    pub updated_at: NaiveDateTime,
}

fn features_to_json(features: &[String]) -> String {
    serde_json::to_string(features).unwrap_or_else(|_| "[]".to_string())
}

impl From<PricingPlan> for DomainPlan {
    fn from(plan: PricingPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            price_cents: plan.price_cents,
            billing_cycle: plan.billing_cycle,
            features: serde_json::from_str(&plan.features).unwrap_or_default(),
            is_featured: plan.is_featured,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPlan> for NewPlan<'a> {
    fn from(plan: &'a DomainNewPlan) -> Self {
        Self {
            name: plan.name.as_str(),
            price_cents: plan.price_cents,
            billing_cycle: plan.billing_cycle.as_str(),
            features: features_to_json(&plan.features),
            is_featured: plan.is_featured,
        }
    }
}

impl<'a> From<&'a DomainUpdatePlan> for UpdatePlan<'a> {
    fn from(plan: &'a DomainUpdatePlan) -> Self {
        Self {
            name: plan.name.as_str(),
            price_cents: plan.price_cents,
            billing_cycle: plan.billing_cycle.as_str(),
            features: features_to_json(&plan.features),
            is_featured: plan.is_featured,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
