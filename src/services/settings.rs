use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::settings::SiteSettings;
use crate::forms::settings::SaveSettingsForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{SettingsReader, SettingsWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the settings for the admin form, seeding defaults on first use.
pub fn load_settings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<SiteSettings>
where
    R: SettingsReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_settings().map_err(ServiceError::from)
}

/// Validates and persists the settings form.
pub fn save_settings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &SaveSettingsForm,
) -> ServiceResult<()>
where
    R: SettingsWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate settings form: {err}");
        return Err(ServiceError::Form("Please check the form fields".to_string()));
    }

    let settings: SiteSettings = form.into();
    repo.save_settings(&settings).map_err(ServiceError::from)
}

/// Restores the default settings.
pub fn reset_settings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<()>
where
    R: SettingsWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.save_settings(&SiteSettings::default())
        .map_err(ServiceError::from)
}
