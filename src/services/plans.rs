use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::plan::PricingPlan;
use crate::forms::plan::SavePlanForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{PlanReader, PlanWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads every plan for the admin pricing table.
pub fn load_plans<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<PricingPlan>>
where
    R: PlanReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.list_plans().map_err(ServiceError::from)
}

/// Validates the plan form and creates or updates the plan.
pub fn save_plan<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SavePlanForm,
) -> ServiceResult<PricingPlan>
where
    R: PlanWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate plan form: {err}");
        return Err(ServiceError::Form("Please fill in every required field".to_string()));
    }

    match form.id {
        Some(id) => {
            let updates = form
                .to_update_plan()
                .map_err(|e| ServiceError::Form(e.to_string()))?;
            repo.update_plan(id, &updates).map_err(ServiceError::from)
        }
        None => {
            let new_plan = form
                .to_new_plan()
                .map_err(|e| ServiceError::Form(e.to_string()))?;
            repo.create_plan(&new_plan).map_err(ServiceError::from)
        }
    }
}

/// Deletes a plan permanently.
pub fn delete_plan<R>(repo: &R, user: &AuthenticatedUser, plan_id: i32) -> ServiceResult<()>
where
    R: PlanWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_plan(plan_id).map_err(ServiceError::from)
}
