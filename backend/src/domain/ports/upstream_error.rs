//! Classified failures of an upstream call.
//!
//! Adapters classify at the network boundary; the domain only asks whether an
//! error is worth retrying, which `is_retryable()` answers from the
//! `retryable` tags below. Turning a classification into an external status
//! code is the inbound HTTP adapter's job.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the info and reviews upstreams.
    pub enum UpstreamError {
        /// The upstream has no record for the requested movie.
        NotFound { movie_id: String } =>
            "upstream has no record for movie {movie_id}",
        /// The upstream rejected the request with a 4xx other than 404.
        ClientError { message: String, status: u16 } =>
            "upstream rejected request with status {status}: {message}",
        /// The upstream answered with a 5xx status.
        ServerError { message: String } =>
            "upstream server error: {message}"; retryable,
        /// No usable response: connection failure, timeout, or undecodable body.
        TransportFailure { message: String } =>
            "upstream transport failure: {message}"; retryable,
    }
}

#[cfg(test)]
mod tests {
    //! Classification coverage for upstream errors.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::not_found(UpstreamError::not_found("1"), false)]
    #[case::client(UpstreamError::client_error("bad", 400_u16), false)]
    #[case::server(UpstreamError::server_error("down"), true)]
    #[case::transport(UpstreamError::transport_failure("reset"), true)]
    fn retryable_set_is_server_and_transport(#[case] error: UpstreamError, #[case] expected: bool) {
        assert_eq!(error.is_retryable(), expected);
    }

    #[test]
    fn display_is_log_friendly() {
        let error = UpstreamError::client_error("movieInfo.year must be positive", 400_u16);
        assert_eq!(
            error.to_string(),
            "upstream rejected request with status 400: movieInfo.year must be positive"
        );
    }
}
