use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::error::{EmailRule, convert_pest_error};
use super::options::EmailOptions;
use crate::ToString;
use crate::span::Span;

#[derive(Parser)]
#[grammar = "validate/email.pest"]
pub struct MailboxParser;

/// Most explicit groups a compressed IPv6 literal may carry.
const MAX_IPV6_COMP_GROUPS: usize = 6;
/// Same, when the last 32 bits are written as an IPv4 address.
const MAX_IPV6V4_COMP_GROUPS: usize = 4;

/// Check `input` against the mailbox grammar, then against `options`.
pub(super) fn check_mailbox(input: &str, options: &EmailOptions) -> Result<(), EmailRule> {
    let pairs = MailboxParser::parse(Rule::mailbox, input).map_err(convert_pest_error)?;

    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::local_part => {
                check_length(&pair, options.max_local_part_len, |length, max, span| {
                    EmailRule::LocalPartTooLong { length, max, span }
                })?
            }
            Rule::domain => check_length(&pair, options.max_domain_len, |length, max, span| {
                EmailRule::DomainTooLong { length, max, span }
            })?,
            Rule::sub_domain => {
                let label = pair.as_str();
                if label.len() > options.max_label_len {
                    return Err(EmailRule::LabelTooLong {
                        label: label.to_string(),
                        length: label.len(),
                        max: options.max_label_len,
                        span: pair.as_span().into(),
                    });
                }
            }
            Rule::address_literal if !options.allow_address_literals => {
                return Err(EmailRule::AddressLiteralNotAllowed {
                    span: pair.as_span().into(),
                });
            }
            Rule::ipv6_comp => check_ipv6_groups(&pair, MAX_IPV6_COMP_GROUPS)?,
            Rule::ipv6v4_comp => check_ipv6_groups(&pair, MAX_IPV6V4_COMP_GROUPS)?,
            _ => {}
        }
    }

    if input.len() > options.max_address_len {
        return Err(EmailRule::AddressTooLong {
            length: input.len(),
            max: options.max_address_len,
        });
    }

    Ok(())
}

fn check_length(
    pair: &Pair<Rule>,
    max: usize,
    violation: impl FnOnce(usize, usize, Span) -> EmailRule,
) -> Result<(), EmailRule> {
    let length = pair.as_str().len();
    if length > max {
        return Err(violation(length, max, pair.as_span().into()));
    }
    Ok(())
}

fn check_ipv6_groups(pair: &Pair<Rule>, max: usize) -> Result<(), EmailRule> {
    let groups = pair
        .clone()
        .into_inner()
        .filter(|inner| inner.as_rule() == Rule::h16)
        .count();
    if groups > max {
        return Err(EmailRule::TooManyIpv6Groups {
            groups,
            max,
            span: pair.as_span().into(),
        });
    }
    Ok(())
}
