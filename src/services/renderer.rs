//! Template rendering on top of the embedded assets.

use minijinja::{Environment, Value};

use crate::domain::AppError;

use super::assets;

pub fn build_template_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    for name in assets::ALL_TEMPLATES {
        env.add_template(name, assets::template_content(name)?).map_err(|e| {
            AppError::InternalError(format!("Failed to register template '{}': {}", name, e))
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| {
        AppError::InternalError(format!("Failed to load template '{}': {}", template_name, e))
    })?;

    template.render(ctx).map_err(|e| {
        AppError::InternalError(format!("Failed to render template '{}': {}", template_name, e))
    })
}
