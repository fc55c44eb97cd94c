use super::*;
use bike_api::Error as CoreError;

#[test]
fn test_error_conversion() {
    let err = Error::Parameter {
        name: "seed",
        reason: "invalid value",
    };
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "seed");
            assert_eq!(message, "invalid value");
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }

    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    assert_eq!(
        CoreError::from(err),
        CoreError::InvalidLength {
            context: "buffer",
            expected: 32,
            actual: 16,
        }
    );

    let err = Error::Processing {
        operation: "AES-CTR PRF",
        details: "AES invocation budget exhausted",
    };
    assert!(matches!(CoreError::from(err), CoreError::Other { context: "AES-CTR PRF", .. }));
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    assert_eq!(
        validate::parameter(false, "test", "should fail"),
        Err(Error::Parameter {
            name: "test",
            reason: "should fail",
        })
    );

    assert!(validate::length("buffer", 16, 16).is_ok());
    assert_eq!(
        validate::length("buffer", 15, 16),
        Err(Error::Length {
            context: "buffer",
            expected: 16,
            actual: 15,
        })
    );

    assert!(validate::processing(true, "op", "fine").is_ok());
    assert!(validate::processing(false, "op", "broken").is_err());
}
