/// Implements [`axum::response::IntoResponse`] for an error type by rendering it as problem
/// details.
macro_rules! impl_into_response {
	($ty:ty) => {
		impl ::axum::response::IntoResponse for $ty
		{
			fn into_response(self) -> ::axum::response::Response
			{
				::axum::response::IntoResponse::into_response(
					::problem_details::AsProblemDetails::as_problem_details(&self),
				)
			}
		}
	};
}
