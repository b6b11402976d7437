use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, CurrentUser, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod current_user;
mod require;
