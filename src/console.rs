//! Console-safe printing.
//!
//! Text is pushed through a legacy console encoding before it is written, so
//! characters the console cannot show come out as a replacement glyph instead
//! of garbage or a failed write.

use crate::error::DircatError;
use crate::options::DircatOptions;
use encoding_rs::{Encoding, EncoderResult, UTF_8};
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes text through an optional console encoding.
#[derive(Debug, Clone)]
pub struct SafePrinter {
    label: Option<String>,
    replacement: char,
}

impl SafePrinter {
    /// Transcodes through the encoding named by `label` (a WHATWG label such as
    /// `windows-1252` or `latin1`). Unknown labels make every call fall back to
    /// the original text.
    pub fn new(label: impl Into<String>, replacement: char) -> Self {
        Self {
            label: Some(label.into()),
            replacement,
        }
    }

    /// Uses the console encoding and replacement configured in `options`.
    pub fn from_options(options: &DircatOptions) -> Self {
        match &options.console_encoding {
            Some(label) => Self::new(label.clone(), options.replacement),
            None => Self::passthrough(),
        }
    }

    /// Writes text unchanged.
    pub fn passthrough() -> Self {
        Self {
            label: None,
            replacement: '?',
        }
    }

    /// Returns the text as the console will receive it.
    pub fn sanitize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(label) = self.label.as_deref() else {
            return Cow::Borrowed(text);
        };
        match transcode(text, label, self.replacement) {
            Ok(converted) => Cow::Owned(converted),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Printing untranscoded text: {}", _e);
                Cow::Borrowed(text)
            }
        }
    }

    /// Writes the sanitized text followed by a newline.
    pub fn println<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        writeln!(out, "{}", self.sanitize(text))
    }
}

/// Encodes `text` with the encoding named by `label`, replacing every
/// unmappable character with `replacement`, and decodes the result back.
pub fn transcode(text: &str, label: &str, replacement: char) -> Result<String, DircatError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DircatError::UnknownEncoding(label.to_string()))?;
    // UTF-16 labels encode to UTF-8 in encoding_rs.
    let output = encoding.output_encoding();
    if output == UTF_8 {
        return Ok(text.to_string());
    }

    let mut utf8 = [0u8; 4];
    let (encoded, _, unmappable) = output.encode(replacement.encode_utf8(&mut utf8));
    // A replacement the target cannot hold would come back as `&#NNNN;`.
    let fallback: &[u8] = if unmappable { b"?" } else { &encoded };

    let mut encoder = output.new_encoder();
    let mut bytes = Vec::with_capacity(text.len());
    let mut buffer = [0u8; 1024];
    let mut remaining = text;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut buffer, true);
        bytes.extend_from_slice(&buffer[..written]);
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => bytes.extend_from_slice(fallback),
        }
    }

    let (decoded, had_errors) = output.decode_without_bom_handling(&bytes);
    if had_errors {
        return Err(DircatError::Transcode(format!(
            "round trip through {} produced malformed output",
            output.name()
        )));
    }
    Ok(decoded.into_owned())
}
