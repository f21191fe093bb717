//! Line oriented text encoding of descriptors.
//!
//! A descriptor is written as its components separated by single spaces,
//! with nothing else on the line. The number of components is not stored,
//! reader and writer have to agree on the descriptor type.

use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::{
    descriptors::MetricDescriptor,
    error::{DescriptorError, Result},
};

pub(crate) fn write_tokens<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read exactly `L` whitespace separated tokens into an array.
pub(crate) fn read_tokens<T, const L: usize>(text: &str) -> Result<[T; L]>
where
    T: FromStr + Copy + Default,
    T::Err: Display,
{
    read_tokens_checked(text, |_| Ok(()))
}

/// Like [`read_tokens`], but every parsed value must also pass `check`,
/// which returns the reason a value is refused.
pub(crate) fn read_tokens_checked<T, F, const L: usize>(text: &str, check: F) -> Result<[T; L]>
where
    T: FromStr + Copy + Default,
    T::Err: Display,
    F: Fn(&T) -> std::result::Result<(), &'static str>,
{
    let mut values = [T::default(); L];
    let mut tokens = text.split_ascii_whitespace();

    for (position, value) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| {
            debug!(expected = L, found = position, "descriptor text ended early");
            DescriptorError::InsufficientTokens {
                expected: L,
                found: position,
            }
        })?;

        *value = token.parse().map_err(|e: T::Err| {
            debug!(position, token, "unparsable descriptor token");
            DescriptorError::InvalidToken {
                position,
                token: token.to_owned(),
                reason: e.to_string(),
            }
        })?;

        check(&*value).map_err(|reason| {
            debug!(position, token, reason, "refused descriptor token");
            DescriptorError::InvalidToken {
                position,
                token: token.to_owned(),
                reason: reason.to_owned(),
            }
        })?;
    }

    if let Some(token) = tokens.next() {
        debug!(expected = L, token, "descriptor text has trailing tokens");
        return Err(DescriptorError::TrailingTokens {
            expected: L,
            position: L,
            token: token.to_owned(),
        });
    }

    Ok(values)
}

/// Parse one descriptor per line, skipping blank lines.
///
/// Errors carry the 1-based number of the offending line.
pub fn parse_lines<D: MetricDescriptor>(text: &str) -> Result<Vec<D>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| D::deserialize(line).map_err(|e| e.at_line(i + 1)))
        .collect()
}

/// Serialize each descriptor on its own `\n` terminated line.
pub fn write_lines<D: MetricDescriptor>(descriptors: &[D]) -> String {
    let mut out = String::new();
    for descriptor in descriptors {
        out.push_str(&descriptor.serialize());
        out.push('\n');
    }
    out
}
