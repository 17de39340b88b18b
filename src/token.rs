//! Scan-token generation and QR rendering.
//!
//! Both concerns sit behind traits: token generation so tests can use
//! predictable tokens, QR rendering because the encoder is a pure
//! external collaborator from the engine's point of view.

use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::{EngineError, EngineResult};

/// Produces opaque, unguessable scan tokens.
pub trait TokenGenerator: Send + Sync {
    /// Returns a fresh, globally unique token.
    fn generate(&self) -> String;
}

/// The default token generator, backed by UUIDv4 (122 bits of entropy
/// from the OS random source).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Renders a scan token into a scannable artifact.
pub trait QrEncoder: Send + Sync {
    /// Encodes the token into an image, returned as a self-contained
    /// document (SVG markup for the default encoder).
    fn encode(&self, token: &str) -> EngineResult<String>;
}

/// Renders tokens as SVG QR codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgQrEncoder;

impl QrEncoder for SvgQrEncoder {
    fn encode(&self, token: &str) -> EngineResult<String> {
        let code = QrCode::new(token).map_err(|e| EngineError::QrEncodingFailed {
            message: e.to_string(),
        })?;
        Ok(code
            .render::<svg::Color>()
            .min_dimensions(200, 200)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique() {
        let generator = UuidTokenGenerator;
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_token_parses_as_uuid() {
        let token = UuidTokenGenerator.generate();
        assert!(uuid::Uuid::parse_str(&token).is_ok());
    }

    #[test]
    fn test_svg_encoder_produces_svg_markup() {
        let svg = SvgQrEncoder
            .encode("3c6e0b8a-9c15-4b5f-9f1a-7d3b2c1a0e9d")
            .unwrap();
        assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
        assert!(svg.contains("</svg>"));
    }
}
