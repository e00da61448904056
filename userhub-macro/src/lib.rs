use proc_macro::TokenStream;

mod controller;
mod http_methods;
mod injectable;
mod module;

/// Derive macro for making a provider resolvable from the DI container
///
/// Every field must be an `Arc<T>` (resolved by type) or an `Arc<dyn Trait>`
/// (resolved through a trait binding).
///
/// # Example
/// ```ignore
/// use userhub::prelude::*;
///
/// #[derive(Injectable)]
/// pub struct UserService {
///     repository: Arc<dyn UserRepository>,
///     sessions: Arc<SessionFactory>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

/// Attribute macro for defining a controller mounted under a base path
///
/// # Example
/// ```ignore
/// #[controller(path = "/users")]
/// pub struct UserController {
///     service: Arc<UserService>,
/// }
/// ```
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::controller_attribute(attr, item)
}

/// Attribute macro that turns the annotated methods of an impl block into
/// axum routes and generates a `router()` constructor.
///
/// Route paths are appended to the controller's base path, so
/// `#[controller(path = "/users")]` with `#[get("/{id}")]` serves `/users/{id}`.
///
/// # Example
/// ```ignore
/// #[routes(UserController)]
/// impl UserController {
///     #[get("/{id}")]
///     async fn get_one(&self, #[param] id: i32) -> Result<Json<User>, AppError> {
///         // ...
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn routes(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::routes_attribute(attr, item)
}

/// Attribute macro for defining a module with providers, controllers,
/// trait bindings and imported modules
///
/// # Example
/// ```ignore
/// #[module(
///     controllers = [UserController],
///     providers = [SeaOrmUserRepository, UserService],
///     bindings = [(dyn UserRepository => SeaOrmUserRepository)],
/// )]
/// pub struct UserModule;
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::module_attribute(attr, item)
}

/// HTTP GET method attribute for controller methods
#[proc_macro_attribute]
pub fn get(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute("GET", attr, item)
}

/// HTTP POST method attribute for controller methods
#[proc_macro_attribute]
pub fn post(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute("POST", attr, item)
}

/// HTTP DELETE method attribute for controller methods
#[proc_macro_attribute]
pub fn delete(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute("DELETE", attr, item)
}

/// HTTP PATCH method attribute for controller methods
#[proc_macro_attribute]
pub fn patch(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute("PATCH", attr, item)
}

/// Marks a handler parameter as the JSON request body (`axum::Json`).
/// Must be the last marked parameter.
#[proc_macro_attribute]
pub fn body(_attr: TokenStream, item: TokenStream) -> TokenStream {
    // Consumed by #[routes]
    item
}

/// Marks a handler parameter as a path parameter (`axum::extract::Path`)
#[proc_macro_attribute]
pub fn param(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}

/// Marks a handler parameter as the query string (`axum::extract::Query`)
#[proc_macro_attribute]
pub fn query(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}
