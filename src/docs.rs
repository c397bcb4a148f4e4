use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, UserIdentity};
use crate::modules::paralelos::model::{
    CreateParaleloDto, Paralelo, ParaleloStats, ParaleloWithTeacher, TeacherSummary,
    UpdateParaleloDto,
};
use crate::modules::settings::model::{
    BulkSettingItem, BulkSettingResult, BulkSettingsDto, GroupedSetting, InitializeResult,
    Setting, SettingResponse, SettingType, UpdateSettingDto,
};
use crate::modules::users::model::{
    CreateUserDto, RoleCounts, UpdateUserDto, User, UserRole, UserStats,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::me,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user_stats,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::paralelos::controller::get_paralelos,
        crate::modules::paralelos::controller::get_paralelo_stats,
        crate::modules::paralelos::controller::get_paralelo,
        crate::modules::paralelos::controller::create_paralelo,
        crate::modules::paralelos::controller::update_paralelo,
        crate::modules::paralelos::controller::delete_paralelo,
        crate::modules::settings::controller::get_all_settings,
        crate::modules::settings::controller::get_setting,
        crate::modules::settings::controller::update_setting,
        crate::modules::settings::controller::bulk_update_settings,
        crate::modules::settings::controller::initialize_settings,
    ),
    components(schemas(
        ErrorResponse,
        LoginRequest,
        LoginResponse,
        UserIdentity,
        User,
        UserRole,
        UserStats,
        RoleCounts,
        CreateUserDto,
        UpdateUserDto,
        Paralelo,
        ParaleloWithTeacher,
        TeacherSummary,
        ParaleloStats,
        CreateParaleloDto,
        UpdateParaleloDto,
        Setting,
        SettingType,
        SettingResponse,
        GroupedSetting,
        UpdateSettingDto,
        BulkSettingsDto,
        BulkSettingItem,
        BulkSettingResult,
        InitializeResult,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and identity"),
        (name = "Users", description = "User management (admin only)"),
        (name = "Paralelos", description = "Class group management (admin only)"),
        (name = "Settings", description = "Application settings (admin only)")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
