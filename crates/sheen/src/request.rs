//! Request entry points backed by the process-wide default manager

use sheen_core::{Decodable, JsonObject};
use sheen_transport::{
    Headers, HttpMethod, NetworkResult, RequestHandle, default_manager,
};

/// Perform a request and ignore the body
pub async fn request(
    method: HttpMethod,
    url: &str,
    parameters: Option<JsonObject>,
    headers: Option<Headers>,
) -> NetworkResult<()> {
    default_manager()?
        .request(method, url, parameters, headers)
        .await
}

/// Perform a request and decode the body into a `T`
pub async fn request_object<T: Decodable>(
    method: HttpMethod,
    url: &str,
    parameters: Option<JsonObject>,
    headers: Option<Headers>,
) -> NetworkResult<T> {
    default_manager()?
        .request_object(method, url, parameters, headers)
        .await
}

/// Perform a request and decode the body into a `Vec<T>`, dropping elements
/// that fail to decode
pub async fn request_array<T: Decodable>(
    method: HttpMethod,
    url: &str,
    parameters: Option<JsonObject>,
    headers: Option<Headers>,
) -> NetworkResult<Vec<T>> {
    default_manager()?
        .request_array(method, url, parameters, headers)
        .await
}

/// Completion-style [`request`]: `completion` fires once with the outcome
pub fn request_with<C>(
    method: HttpMethod,
    url: &str,
    parameters: Option<JsonObject>,
    headers: Option<Headers>,
    completion: C,
) -> NetworkResult<RequestHandle>
where
    C: FnOnce(NetworkResult<()>) + Send + 'static,
{
    let manager = default_manager()?;
    let spec = manager.build_request(method, url, parameters, headers);
    manager.dispatch(spec, completion)
}

/// Completion-style [`request_object`]
pub fn request_object_with<T, C>(
    method: HttpMethod,
    url: &str,
    parameters: Option<JsonObject>,
    headers: Option<Headers>,
    completion: C,
) -> NetworkResult<RequestHandle>
where
    T: Decodable + Send + 'static,
    C: FnOnce(NetworkResult<T>) + Send + 'static,
{
    let manager = default_manager()?;
    let spec = manager.build_request(method, url, parameters, headers);
    manager.dispatch_object(spec, completion)
}

/// Completion-style [`request_array`]
pub fn request_array_with<T, C>(
    method: HttpMethod,
    url: &str,
    parameters: Option<JsonObject>,
    headers: Option<Headers>,
    completion: C,
) -> NetworkResult<RequestHandle>
where
    T: Decodable + Send + 'static,
    C: FnOnce(NetworkResult<Vec<T>>) + Send + 'static,
{
    let manager = default_manager()?;
    let spec = manager.build_request(method, url, parameters, headers);
    manager.dispatch_array(spec, completion)
}
