//! Domain entities, repository ports and the services built on them.
//!
//! Purpose: define the strongly typed records exchanged by the HTTP adapter
//! and the persistence adapters, and the use-cases that combine them.
//! Entities are plain data; drafts carry the validated field sets used to
//! create or replace records.
//!
//! Public surface:
//! - User, Acronym, Category and their drafts.
//! - UserId, AcronymId, CategoryId: storage-assigned identifiers.
//! - UserService, AcronymService, CategoryService: use-cases over the ports.
//! - Error, ErrorCode: API error payload and its stable code.
//! - TraceId: per-request correlation identifier.

pub mod acronym;
pub mod acronym_service;
pub mod category;
pub mod category_service;
pub mod error;
pub mod ids;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::acronym::{Acronym, AcronymDraft};
pub use self::acronym_service::{AcronymService, AcronymServicePorts};
pub use self::category::{Category, CategoryDraft};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{AcronymId, CategoryId, UserId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft};
pub use self::user_service::UserService;
pub use self::validation::DraftValidationError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use acronyms::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such acronym"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
