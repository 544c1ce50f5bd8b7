use esgboard_core::{Capability, EsgError};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// On timeout this returns `EsgError::RequestTimeout("request")`; call sites
/// remap it to a more specific label as needed.
///
/// # Errors
/// `RequestTimeout` when `deadline` elapses before every task finishes.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, EsgError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}

/// Collapse a set of provider errors into a uniform `EsgError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<EsgError>,
    not_found_what: Option<String>,
) -> EsgError {
    if !attempted_any {
        return EsgError::unsupported(capability.as_str());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, EsgError::ProviderTimeout { .. }))
    {
        return EsgError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, EsgError::NotFound { .. }))
    {
        return EsgError::not_found(what);
    }
    EsgError::AllProvidersFailed(errors)
}
