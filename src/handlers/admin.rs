use axum::{
    extract::{Form, State},
    response::Redirect,
};
use axum_extra::extract::cookie::CookieJar;

use crate::dtos::admin_dtos::{CreateEngineForm, LoginForm};
use crate::errors::AppError;
use crate::middleware::{flash, session::SessionContext};
use crate::state::AppState;
use crate::views::notification::{Notification, NotificationColor};

fn back_home(
    state: &AppState,
    jar: CookieJar,
    notification: Notification,
) -> (CookieJar, Redirect) {
    let jar = flash::put(jar, &notification, state.sessions.secure());
    (jar, Redirect::to("/"))
}

fn failure_text(err: &AppError) -> String {
    match err {
        AppError::ValidationError(message) => message.clone(),
        other => other.to_string(),
    }
}

pub async fn create_engine(
    State(state): State<AppState>,
    session: SessionContext,
    jar: CookieJar,
    Form(form): Form<CreateEngineForm>,
) -> (CookieJar, Redirect) {
    if !session.is_signed_in() {
        tracing::warn!("Rejected engine creation from a signed-out visitor");
        return back_home(&state, jar, Notification::failure(AppError::Unauthorized.to_string()));
    }

    let new_engine = match form.into_new_engine() {
        Ok(new_engine) => new_engine,
        Err(e) => return back_home(&state, jar, Notification::failure(failure_text(&e))),
    };

    let name = new_engine.name.clone();
    let notification = match state.records.create_engine(new_engine).await {
        Ok(_) => Notification::new(
            NotificationColor::Blue,
            "Success",
            format!("Created new engine {}", name),
        ),
        Err(e) => {
            tracing::error!("❌ Failed to create engine '{}': {}", name, e);
            Notification::new(
                NotificationColor::Red,
                "Error",
                format!("Failed to create new engine {}: {}", name, e),
            )
        }
    };

    back_home(&state, jar, notification)
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> (CookieJar, Redirect) {
    // Shape checks never reach the identity provider
    if let Err(e) = form.check() {
        return back_home(&state, jar, Notification::failure(failure_text(&e)));
    }

    let user = match state.identity.sign_in(&form.email, &form.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Sign-in failed for {}: {}", form.email, e);
            return back_home(&state, jar, Notification::failure(failure_text(&e)));
        }
    };

    match state.sessions.issue(&user) {
        Ok(cookie) => {
            tracing::info!("🔐 Admin signed in: {}", user.uid);
            back_home(
                &state,
                jar.add(cookie),
                Notification::new(
                    NotificationColor::Green,
                    "Success",
                    format!("Logged in as Admin. uid: {}", user.uid),
                ),
            )
        }
        Err(e) => {
            tracing::error!("❌ Could not issue session: {}", e);
            back_home(&state, jar, Notification::failure(failure_text(&e)))
        }
    }
}

pub async fn logout(
    State(state): State<AppState>,
    session: SessionContext,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Some(admin) = session.admin() {
        tracing::info!("🔓 Admin signed out: {}", admin.uid);
    }

    let jar = jar.remove(state.sessions.cleared());
    back_home(
        &state,
        jar,
        Notification::new(NotificationColor::Yellow, "Success", "Logged Out"),
    )
}
