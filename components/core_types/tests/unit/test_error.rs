//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_names() {
        assert_eq!(ErrorKind::Error.name(), "Error");
        assert_eq!(ErrorKind::TypeError.name(), "TypeError");
        assert_eq!(ErrorKind::URIError.to_string(), "URIError");
    }

    #[test]
    fn test_error_kind_copy() {
        let kind1 = ErrorKind::RangeError;
        let kind2 = kind1;
        assert_eq!(kind1, kind2);
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_js_error_display() {
        let error = JsError::new(ErrorKind::ReferenceError, "x is not defined");
        assert_eq!(error.to_string(), "ReferenceError: x is not defined");
    }

    #[test]
    fn test_js_error_helpers() {
        assert_eq!(JsError::type_error("t").kind, ErrorKind::TypeError);
        assert_eq!(JsError::range_error("r").kind, ErrorKind::RangeError);
        assert_eq!(JsError::syntax_error("s").kind, ErrorKind::SyntaxError);
    }

    #[test]
    fn test_js_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&JsError::type_error("boxed"));
    }
}
