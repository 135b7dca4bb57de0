use serde::Deserialize;
use validator::Validate;

use crate::domain::plan::{NewPlan, UpdatePlan};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a pricing plan. An absent `id` means
/// create.
pub struct SavePlanForm {
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    /// Dollar amount as typed, e.g. `49` or `49.99`.
    pub price: String,
    #[validate(length(min = 1))]
    pub billing_cycle: String,
    /// One feature per line.
    #[serde(default)]
    pub features: String,
    /// Checkbox: present when checked.
    pub is_featured: Option<String>,
}

impl SavePlanForm {
    fn parse_price_cents(&self) -> Result<i32, FormError> {
        let raw = self.price.trim().trim_start_matches('$');
        let (dollars_str, cents_str) = match raw.split_once('.') {
            Some((d, c)) => (d, c),
            None => (raw, ""),
        };
        let dollars: i32 = dollars_str.parse().map_err(|_| FormError::InvalidPrice)?;
        let cents: i32 = match cents_str.len() {
            0 => 0,
            1 => {
                cents_str
                    .parse::<i32>()
                    .map_err(|_| FormError::InvalidPrice)?
                    * 10
            }
            2 => cents_str.parse().map_err(|_| FormError::InvalidPrice)?,
            _ => return Err(FormError::InvalidPrice),
        };
        if dollars < 0 || cents < 0 {
            return Err(FormError::InvalidPrice);
        }
        Ok(dollars * 100 + cents)
    }

    fn parse_features(&self) -> Vec<String> {
        self.features
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn to_new_plan(&self) -> Result<NewPlan, FormError> {
        Ok(NewPlan {
            name: self.name.trim().to_string(),
            price_cents: self.parse_price_cents()?,
            billing_cycle: self.billing_cycle.trim().to_string(),
            features: self.parse_features(),
            is_featured: self.is_featured.is_some(),
        })
    }

    pub fn to_update_plan(&self) -> Result<UpdatePlan, FormError> {
        let plan = self.to_new_plan()?;
        Ok(UpdatePlan {
            name: plan.name,
            price_cents: plan.price_cents,
            billing_cycle: plan.billing_cycle,
            features: plan.features,
            is_featured: plan.is_featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str) -> SavePlanForm {
        SavePlanForm {
            id: None,
            name: "Growth".to_string(),
            price: price.to_string(),
            billing_cycle: "monthly".to_string(),
            features: "Unlimited conversations\n\n  Priority support  \n".to_string(),
            is_featured: Some("on".to_string()),
        }
    }

    #[test]
    fn parses_whole_dollar_price() {
        assert_eq!(form("49").to_new_plan().unwrap().price_cents, 4900);
        assert_eq!(form("$49").to_new_plan().unwrap().price_cents, 4900);
    }

    #[test]
    fn parses_fractional_price() {
        assert_eq!(form("49.99").to_new_plan().unwrap().price_cents, 4999);
        assert_eq!(form("49.5").to_new_plan().unwrap().price_cents, 4950);
    }

    #[test]
    fn rejects_garbage_price() {
        assert!(form("free").to_new_plan().is_err());
        assert!(form("49.999").to_new_plan().is_err());
        assert!(form("-5").to_new_plan().is_err());
    }

    #[test]
    fn features_split_per_line() {
        let plan = form("49").to_new_plan().unwrap();
        assert_eq!(
            plan.features,
            vec!["Unlimited conversations", "Priority support"]
        );
        assert!(plan.is_featured);
    }
}
