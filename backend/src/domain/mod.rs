//! Domain primitives, ports, and the movie aggregation service.
//!
//! Purpose: keep upstream classification, retry budgeting, and merge rules
//! free of HTTP and reqwest details. Adapters in `inbound` and `outbound`
//! translate at the edges.
//!
//! Public surface:
//! - `Movie`, `MovieInfo`, `Review`, `MovieId`: value types.
//! - `MovieService`: concurrent info + reviews aggregation.
//! - `RetryPolicy`, `RetrySleeper`: bounded exponential backoff.
//! - `TraceId`: request correlation identifier.

pub mod movie;
pub mod movie_service;
pub mod ports;
pub mod retry;
pub mod trace_id;

pub use self::movie::{Movie, MovieId, MovieInfo, MovieValidationError, Review};
pub use self::movie_service::MovieService;
pub use self::retry::{RetryPolicy, RetrySleeper, TokioSleeper};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
