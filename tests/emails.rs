#[macro_use]
mod cases;

use cases::EMAIL_CASES;
use pretty_assertions::assert_eq;
use tenet::{
    EmailOptions, EmailRule, ValidationError, render_error_to_string_no_color,
    validate_email_address, validate_email_address_with,
};

#[test]
fn email_case_table() {
    for case in EMAIL_CASES.iter() {
        let result = validate_email_address(&case.address);
        assert_eq!(
            result.is_ok(),
            case.accepted,
            "case {} ({:?}) gave {:?}",
            case.name,
            case.address,
            result
        );
    }
}

#[test]
fn accepted_addresses_keep_their_text() {
    for case in EMAIL_CASES.iter().filter(|case| case.accepted) {
        let valid = validate_email_address(&case.address).unwrap();
        assert_eq!(valid.as_str(), case.address);
        assert_eq!(validate_email_address(&valid).unwrap(), valid);
    }
}

#[test]
fn every_rejection_renders() {
    for case in EMAIL_CASES.iter().filter(|case| !case.accepted) {
        let err = validate_email_address(&case.address).unwrap_err();
        let output = render_error_to_string_no_color(&err);
        assert!(output.contains(err.code()), "case {}: {}", case.name, output);
    }
}

test_case!(
    simple_address,
    input: "abc@example.com",
    accepted: true,
);

test_case!(
    uppercase_ipv6_tag,
    input: "abc@[IPV6:::1]",
    accepted: true,
);

test_case!(
    unterminated_literal,
    input: "abc@[10.0.0.1",
    accepted: false,
);

test_case!(
    too_many_ipv6_groups,
    input: "abc@[IPv6:1:2:3:4::5:6:7]",
    error: "The address \"abc@[IPv6:1:2:3:4::5:6:7]\" is not RFC-5321 compliant: \
            IPv6 literal has 7 groups besides \"::\", at most 6 are allowed",
);

test_case!(
    long_label,
    input: &format!("abc@{}.org", "d".repeat(64)),
    error: format!(
        "The address \"abc@{0}.org\" is not RFC-5321 compliant: \
         domain label \"{0}\" is 64 octets long, the limit is 63",
        "d".repeat(64)
    ),
);

#[test]
fn syntax_errors_name_the_address() {
    let err = validate_email_address("abc@").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("The address \"abc@\" is not RFC-5321 compliant: expected "));
    assert!(matches!(
        err,
        ValidationError::NotAnEmailAddress {
            rule: EmailRule::Syntax { .. },
            ..
        }
    ));
}

#[test]
fn options_restrict_literals_and_length() {
    let strict = EmailOptions {
        allow_address_literals: false,
        max_address_len: 16,
        ..EmailOptions::default()
    };
    assert!(validate_email_address_with("abc@example.com", &strict).is_ok());
    assert!(validate_email_address_with("abc@[10.0.0.1]", &strict).is_err());

    let err = validate_email_address_with("abcdef@example.com", &strict).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NotAnEmailAddress {
            address: "abcdef@example.com".to_string(),
            rule: EmailRule::AddressTooLong {
                length: 18,
                max: 16
            },
        }
    );
}
