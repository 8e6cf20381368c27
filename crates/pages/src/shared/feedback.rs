use tracing::error;
use user_admin_infra::{AdminContext, GatewayError};

/// Logs a failed call and tells the user about it.
///
/// Field messages from a server side validation failure are listed below the
/// main message.
pub(crate) fn surface_error(ctx: &AdminContext, message: &str, e: &GatewayError) {
    error!("{} Error: {:?}", message, e);

    let notice = match e {
        GatewayError::Validation(body) if !body.errors.is_empty() => {
            let details = body
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{}", message, details)
        }
        _ => message.to_string(),
    };
    ctx.dialogs.notify(&notice);
}
