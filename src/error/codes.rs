/// Error code registry for multiplier
///
/// Error codes are organized by category:
/// - 1000-1999: Input errors (factor, value kind, batch argument)
/// - 9000-9999: Unexpected errors
pub struct ErrorCode;

impl ErrorCode {
    // Input errors (1000-1999)
    pub const INVALID_FACTOR: u16 = 1001;
    pub const UNSUPPORTED_TYPE: u16 = 1002;
    pub const INVALID_ARGUMENT: u16 = 1003;

    // Unexpected errors (9000-9999)
    pub const OVERFLOW: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::INVALID_FACTOR => "The factor was negative; factors must be zero or greater",
        ErrorCode::UNSUPPORTED_TYPE => "Only integers, floats and text can be transformed",
        ErrorCode::INVALID_ARGUMENT => "Batch input must be a list of values",
        ErrorCode::OVERFLOW => "The result could not be represented",
        _ => "Unknown error code",
    }
}
