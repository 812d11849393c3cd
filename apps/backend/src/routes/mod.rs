use actix_web::web;

use crate::error::AppError;
use crate::errors::DomainError;
use crate::middleware::admin_gate::AdminGate;

pub mod about;
pub mod admin;
pub mod auth;
pub mod contact;
pub mod health;
pub mod projects;
pub mod skills;

/// Register every route. Mixed public/admin resources gate per handler
/// through the `AdminUser` extractor; `/api/admin` is gated as a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    cfg.configure(health::configure_routes);

    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/about").configure(about::configure_routes));
    cfg.service(web::scope("/api/skills").configure(skills::configure_routes));
    cfg.service(web::scope("/api/projects").configure(projects::configure_routes));
    cfg.service(web::scope("/api/contact").configure(contact::configure_routes));
    cfg.service(
        web::scope("/api/admin")
            .wrap(AdminGate)
            .configure(admin::configure_routes),
    );
}

/// Map a repository failure to a handler error, giving database faults a
/// per-operation client message.
pub(crate) fn db_context(message: &'static str) -> impl Fn(DomainError) -> AppError {
    move |e| AppError::from(e).context(message)
}

/// `None` for absent and whitespace-only strings.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
