//! Accept/reject tables and limits for email address validation.

use super::*;
use crate::span::Span;
use crate::{format, test_utils};
use pretty_assertions::assert_eq;

fn rule_of(address: &str) -> EmailRule {
    match validate_email_address(address) {
        Err(ValidationError::NotAnEmailAddress { rule, .. }) => rule,
        Err(other) => panic!("unexpected error for {:?}: {:?}", address, other),
        Ok(_) => panic!("{:?} should have been rejected", address),
    }
}

#[test]
fn accepts_valid_addresses() {
    test_utils::init_test_logging();
    let valid = [
        "abc@example.com",
        "first.last@sub.example.co.uk",
        "x@y",
        "user+tag@example.com",
        "a!#$%&'*+-/=?^_`{|}~@example.com",
        "1234567890@123.example",
        "\"john doe\"@example.com",
        "\"a@b\"@example.com",
        "\"escaped\\\"quote\"@example.com",
        "\"\"@example.com",
        "abc@a-b.c--d.e",
        "abc@[127.0.0.1]",
        "abc@[IPv6:2001:db8::1]",
        "abc@[IPv6:::1]",
        "abc@[IPv6:::]",
        "abc@[IPv6:2001:db8:85a3:0:0:8a2e:370:7334]",
        "abc@[IPv6:::ffff:192.0.2.128]",
        "abc@[IPv6:1:2:3:4:5:6:10.0.0.1]",
        "abc@[ipv6:fe80::1]",
        "abc@[x400:c=us;a=;p=example]",
    ];
    for address in valid {
        let validated = validate_email_address(address)
            .unwrap_or_else(|e| panic!("{:?} should be valid: {}", address, e));
        assert_eq!(validated.as_str(), address);
    }
}

#[test]
fn rejects_syntax_errors() {
    let invalid = [
        "",
        "not-an-email",
        "abc@",
        "@example.com",
        "abc@@example.com",
        "abc@example..com",
        "abc@.example.com",
        "abc@example.com.",
        "abc@-example.com",
        "abc@example-.com",
        ".abc@example.com",
        "abc.@example.com",
        "a..b@example.com",
        "a b@example.com",
        "\"unterminated@example.com",
        "\"tab\there\"@example.com",
        "josé@example.com",
        "abc@exa_mple.com",
        "abc@[256.1.1.1]",
        "abc@[1.2.3]",
        "abc@[1.2.3.4.5]",
        "abc@[IPv6:1:2:3:4:5:6:7]",
        "abc@[IPv6:1:2:3:4:5:6:7:8:9]",
        "abc@[IPv6:12345::1]",
        "abc@[IPv6:1::2::3]",
        "abc@[IPv6:gggg::1]",
        "abc@[IPv6:::1.2.3.256]",
        "abc@[IPv6:zz]",
        "abc@[x400]",
        "abc@[x400:]",
        "abc@[x400:a[b]",
        "abc@[127.0.0.1",
        " abc@example.com",
        "abc@example.com ",
    ];
    for address in invalid {
        assert!(
            matches!(rule_of(address), EmailRule::Syntax { .. }),
            "{:?} should be a syntax error",
            address
        );
    }
}

#[test]
fn error_names_address_and_rule() {
    let err = validate_email_address("not-an-email").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("The address \"not-an-email\" is not RFC-5321 compliant: expected "));
    assert_eq!(err.input(), "not-an-email");
    assert_eq!(err.code(), "V101");
}

#[test]
fn syntax_error_points_into_the_input() {
    let address = "abc@exa_mple.com";
    let span = rule_of(address).span();
    assert!(span.0.start <= address.len());
    assert!(span.0.start >= "abc@exa".len());
}

#[test]
fn local_part_limit() {
    let at_limit = format!("{}@example.com", "a".repeat(64));
    assert!(validate_email_address(&at_limit).is_ok());

    let over = format!("{}@example.com", "a".repeat(65));
    assert_eq!(
        rule_of(&over),
        EmailRule::LocalPartTooLong {
            length: 65,
            max: 64,
            span: Span::new(0, 65),
        }
    );
}

#[test]
fn label_limit() {
    let label = "b".repeat(64);
    let address = format!("abc@{}.com", label);
    assert_eq!(
        rule_of(&address),
        EmailRule::LabelTooLong {
            label: label.clone(),
            length: 64,
            max: 63,
            span: Span::new(4, 68),
        }
    );

    let ok = format!("abc@{}.com", "b".repeat(63));
    assert!(validate_email_address(&ok).is_ok());
}

#[test]
fn domain_limit() {
    // 5 labels of 63 octets plus dots: 319 octets.
    let domain = vec!["c".repeat(63); 5].join(".");
    let address = format!("a@{}", domain);
    match rule_of(&address) {
        EmailRule::DomainTooLong { length, max, span } => {
            assert_eq!(length, 319);
            assert_eq!(max, 255);
            assert_eq!(span, Span::new(2, 321));
        }
        other => panic!("expected DomainTooLong, got {:?}", other),
    }
}

#[test]
fn address_limit() {
    // local part 64 + "@" + 190-octet domain = 255 octets.
    let domain = vec!["d".repeat(62); 3].join(".") + ".d";
    assert_eq!(domain.len(), 190);
    let address = format!("{}@{}", "e".repeat(64), domain);
    assert_eq!(
        rule_of(&address),
        EmailRule::AddressTooLong {
            length: 255,
            max: 254,
        }
    );
}

#[test]
fn ipv6_group_limits() {
    assert!(validate_email_address("abc@[IPv6:1:2:3::4:5:6]").is_ok());
    assert!(matches!(
        rule_of("abc@[IPv6:1:2:3:4::5:6:7]"),
        EmailRule::TooManyIpv6Groups { groups: 7, max: 6, .. }
    ));

    assert!(validate_email_address("abc@[IPv6:1:2::3:4:1.2.3.4]").is_ok());
    assert!(matches!(
        rule_of("abc@[IPv6:1:2:3::4:5:1.2.3.4]"),
        EmailRule::TooManyIpv6Groups { groups: 5, max: 4, .. }
    ));
}

#[test]
fn address_literals_can_be_disabled() {
    let options = EmailOptions {
        allow_address_literals: false,
        ..EmailOptions::default()
    };
    assert!(validate_email_address_with("abc@example.com", &options).is_ok());

    let err = validate_email_address_with("abc@[127.0.0.1]", &options).unwrap_err();
    match err {
        ValidationError::NotAnEmailAddress { rule, .. } => {
            assert_eq!(
                rule,
                EmailRule::AddressLiteralNotAllowed {
                    span: Span::new(4, 15)
                }
            );
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn custom_limits() {
    let options = EmailOptions {
        max_local_part_len: 3,
        ..EmailOptions::default()
    };
    assert!(validate_email_address_with("abc@example.com", &options).is_ok());
    assert!(validate_email_address_with("abcd@example.com", &options).is_err());
}

#[test]
fn local_part_and_domain_accessors() {
    let plain = validate_email_address("abc@example.com").unwrap();
    assert_eq!(plain.local_part(), "abc");
    assert_eq!(plain.domain(), "example.com");

    let quoted = validate_email_address("\"a@b\"@example.com").unwrap();
    assert_eq!(quoted.local_part(), "\"a@b\"");
    assert_eq!(quoted.domain(), "example.com");

    let literal = validate_email_address("x@[tag:a@b]").unwrap();
    assert_eq!(literal.local_part(), "x");
    assert_eq!(literal.domain(), "[tag:a@b]");
}
