/// Generate a router async method that orders providers for a target, filters
/// by capability, and calls a single-provider method.
///
/// Notes on `not_found` label:
/// - Pass a noun only (e.g., "esg", "news").
/// - The orchestrator formats the final error as "{label} for {target}".
#[macro_export]
macro_rules! esgboard_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $arg:ident : &$arg_ty:ty ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        route_key: $key:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "esgboard::router", skip(self, $arg), fields(key = %$key))
        )]
        ///
        /// # Errors
        /// Returns an error if no eligible provider succeeds or none support the capability.
        pub async fn $name(&self, $arg: &$arg_ty) -> Result<$ret, esgboard_core::EsgError> {
            self.fetch_single($key, $capability, $not_found, move |c| {
                c.$accessor()?;
                let owned = $arg.to_owned();
                Some(async move {
                    match c.$accessor() {
                        Some(p) => p.$call_name(&owned).await,
                        None => Err(esgboard_core::EsgError::connector(
                            c.name(),
                            concat!("missing ", $not_found, " capability during call"),
                        )),
                    }
                })
            })
            .await
            .map(|(v, _)| v)
        }
    };
}
