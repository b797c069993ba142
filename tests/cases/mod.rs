#![allow(dead_code)]

use once_cell::sync::Lazy;

pub struct EmailCase {
    pub name: &'static str,
    pub address: String,
    pub accepted: bool,
}

fn case(name: &'static str, address: impl Into<String>, accepted: bool) -> EmailCase {
    EmailCase {
        name,
        address: address.into(),
        accepted,
    }
}

pub static EMAIL_CASES: Lazy<Vec<EmailCase>> = Lazy::new(|| {
    vec![
        case("plain", "abc@example.com", true),
        case("no_at_sign", "not-an-email", false),
        case("missing_domain", "abc@", false),
        case("missing_local_part", "@example.com", false),
        case("quoted_local_part", "\"john doe\"@example.com", true),
        case("quoted_at_sign", "\"a@b\"@example.com", true),
        case("ipv4_literal", "abc@[192.168.0.1]", true),
        case("ipv6_literal", "abc@[IPv6:2001:db8::1]", true),
        case("ipv6_embedded_ipv4", "abc@[IPv6:::ffff:10.0.0.1]", true),
        case("bad_ipv6_literal", "abc@[IPv6:2001:db8::zz]", false),
        case("ipv4_octet_out_of_range", "abc@[300.0.0.1]", false),
        case("general_literal", "abc@[x400:c=us]", true),
        case("hyphenated_labels", "abc@my-host.example-domain.org", true),
        case("label_ends_with_hyphen", "abc@host-.org", false),
        case("double_dot_local_part", "a..b@example.com", false),
        case("local_part_at_limit", format!("{}@x.org", "l".repeat(64)), true),
        case("local_part_over_limit", format!("{}@x.org", "l".repeat(65)), false),
        case("label_at_limit", format!("abc@{}.org", "d".repeat(63)), true),
        case("label_over_limit", format!("abc@{}.org", "d".repeat(64)), false),
        case(
            "address_over_limit",
            format!("{}@{}.org", "l".repeat(64), vec!["d".repeat(60); 4].join(".")),
            false,
        ),
    ]
});

pub struct DivisionCase {
    pub name: &'static str,
    pub dividend: f64,
    pub divisor: f64,
    pub quotient: Option<f64>,
}

pub static DIVISION_CASES: Lazy<Vec<DivisionCase>> = Lazy::new(|| {
    vec![
        DivisionCase {
            name: "half",
            dividend: 1.0,
            divisor: 2.0,
            quotient: Some(0.5),
        },
        DivisionCase {
            name: "negative",
            dividend: -9.0,
            divisor: 3.0,
            quotient: Some(-3.0),
        },
        DivisionCase {
            name: "zero_dividend",
            dividend: 0.0,
            divisor: 7.0,
            quotient: Some(0.0),
        },
        DivisionCase {
            name: "by_zero",
            dividend: 1.0,
            divisor: 0.0,
            quotient: None,
        },
        DivisionCase {
            name: "zero_by_zero",
            dividend: 0.0,
            divisor: 0.0,
            quotient: None,
        },
        DivisionCase {
            name: "overflow",
            dividend: f64::MAX,
            divisor: 0.5,
            quotient: None,
        },
    ]
});

/// Declare a test that validates `input` as an email address and checks
/// either acceptance or the exact error message.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, accepted: $accepted:expr $(,)?) => {
        #[test]
        fn $name() {
            let result = tenet::validate_email_address($input);
            assert_eq!(result.is_ok(), $accepted, "{:?} gave {:?}", $input, result);
        }
    };
    ($name:ident, input: $input:expr, error: $error:expr $(,)?) => {
        #[test]
        fn $name() {
            let err = tenet::validate_email_address($input).unwrap_err();
            pretty_assertions::assert_eq!(err.to_string(), $error);
        }
    };
}
