use crate::span::Span;
use crate::{String, ToString, Vec, format};

use super::email::Rule;

/// A validator rejected its input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("The number {value} is not an integer")]
    NotAnInteger { value: f64 },

    #[error("The address \"{address}\" is not RFC-5321 compliant: {rule}")]
    NotAnEmailAddress { address: String, rule: EmailRule },
}

impl ValidationError {
    /// Location of the offending part of the input, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ValidationError::NotAnInteger { .. } => None,
            ValidationError::NotAnEmailAddress { rule, .. } => Some(rule.span()),
        }
    }

    /// The rejected input as text.
    pub fn input(&self) -> String {
        match self {
            ValidationError::NotAnInteger { value } => value.to_string(),
            ValidationError::NotAnEmailAddress { address, .. } => address.clone(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NotAnInteger { .. } => "V001",
            ValidationError::NotAnEmailAddress { rule, .. } => rule.code(),
        }
    }
}

/// The part of the mailbox grammar or its limits that an address violates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailRule {
    #[error("expected {expected} at byte {}", .span.0.start)]
    Syntax { expected: String, span: Span },

    #[error("local part is {length} octets long, the limit is {max}")]
    LocalPartTooLong { length: usize, max: usize, span: Span },

    #[error("domain is {length} octets long, the limit is {max}")]
    DomainTooLong { length: usize, max: usize, span: Span },

    #[error("domain label \"{label}\" is {length} octets long, the limit is {max}")]
    LabelTooLong {
        label: String,
        length: usize,
        max: usize,
        span: Span,
    },

    #[error("address is {length} octets long, the limit is {max}")]
    AddressTooLong { length: usize, max: usize },

    #[error("IPv6 literal has {groups} groups besides \"::\", at most {max} are allowed")]
    TooManyIpv6Groups { groups: usize, max: usize, span: Span },

    #[error("address literals are not accepted")]
    AddressLiteralNotAllowed { span: Span },
}

impl EmailRule {
    pub fn span(&self) -> Span {
        match self {
            EmailRule::Syntax { span, .. }
            | EmailRule::LocalPartTooLong { span, .. }
            | EmailRule::DomainTooLong { span, .. }
            | EmailRule::LabelTooLong { span, .. }
            | EmailRule::TooManyIpv6Groups { span, .. }
            | EmailRule::AddressLiteralNotAllowed { span } => span.clone(),
            EmailRule::AddressTooLong { length, .. } => Span::new(0, *length),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EmailRule::Syntax { .. } => "V101",
            EmailRule::LocalPartTooLong { .. } => "V102",
            EmailRule::DomainTooLong { .. } => "V103",
            EmailRule::LabelTooLong { .. } => "V104",
            EmailRule::AddressTooLong { .. } => "V105",
            EmailRule::TooManyIpv6Groups { .. } => "V106",
            EmailRule::AddressLiteralNotAllowed { .. } => "V107",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            EmailRule::Syntax { .. } => {
                Some("a mailbox is `local-part@domain`, e.g. `abc@example.com`")
            }
            EmailRule::LabelTooLong { .. } => Some("split the label or shorten it"),
            EmailRule::TooManyIpv6Groups { .. } => {
                Some("an address with \"::\" must leave out at least two groups")
            }
            EmailRule::AddressLiteralNotAllowed { .. } => Some("use a domain name instead"),
            _ => None,
        }
    }
}

/// Convert a Pest error into a syntax rule violation.
pub(super) fn convert_pest_error(err: pest::error::Error<Rule>) -> EmailRule {
    use pest::error::{ErrorVariant, InputLocation};

    let span = match err.location {
        InputLocation::Pos(pos) => Span::at(pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };

    let expected = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => format_expected_rules(&positives),
        ErrorVariant::CustomError { message } => message,
    };

    EmailRule::Syntax { expected, span }
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();
    for rule in rules {
        let concept = describe_rule(*rule);
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "a valid mailbox".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

fn describe_rule(rule: Rule) -> &'static str {
    match rule {
        Rule::mailbox => "a mailbox",
        Rule::at_sign => "'@'",
        Rule::local_part | Rule::dot_string | Rule::atom => "a local part",
        Rule::quoted_string => "a quoted local part",
        Rule::quoted_pair => "an escaped character",
        Rule::domain_part | Rule::domain | Rule::sub_domain => "a domain",
        Rule::address_literal => "an address literal",
        Rule::ipv4_literal | Rule::snum => "an IPv4 address",
        Rule::ipv6_literal
        | Rule::ipv6_addr
        | Rule::ipv6_full
        | Rule::ipv6_comp
        | Rule::ipv6v4_full
        | Rule::ipv6v4_comp
        | Rule::h16 => "an IPv6 address",
        Rule::general_literal | Rule::standardized_tag => "a general address literal",
        Rule::EOI => "end of address",
        #[allow(unreachable_patterns)]
        _ => "a valid mailbox",
    }
}
