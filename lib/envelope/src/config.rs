//! Responder configuration types.

use envelope_core::{ContentType, Envelope, JsonRenderer, PrettyJsonRenderer, Renderer, Result};
use serde::Serialize;

/// Layout of rendered bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON on a single line.
    #[default]
    Compact,
    /// Indented JSON.
    Pretty {
        /// Indentation width in spaces.
        indent: usize,
    },
}

impl OutputFormat {
    /// Indented JSON with the default indentation width.
    #[must_use]
    pub const fn pretty() -> Self {
        Self::Pretty {
            indent: PrettyJsonRenderer::DEFAULT_INDENT,
        }
    }
}

impl Renderer for OutputFormat {
    fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String> {
        match *self {
            Self::Compact => JsonRenderer.render(envelope),
            Self::Pretty { indent } => PrettyJsonRenderer::with_indent(indent).render(envelope),
        }
    }
}

/// Renderer built from a [`ResponderConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfiguredRenderer {
    format: OutputFormat,
    content_type: ContentType,
}

impl ConfiguredRenderer {
    /// Layout of rendered bodies.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Renderer for ConfiguredRenderer {
    fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String> {
        self.format.render(envelope)
    }

    fn content_type(&self) -> ContentType {
        self.content_type
    }
}

/// Configuration for a [`crate::Responder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponderConfig {
    /// Layout of rendered bodies.
    pub format: OutputFormat,
    /// `Content-Type` announced for rendered bodies.
    pub content_type: ContentType,
}

impl ResponderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ResponderConfigBuilder {
        ResponderConfigBuilder::default()
    }

    /// Renderer applying this configuration.
    #[must_use]
    pub const fn renderer(&self) -> ConfiguredRenderer {
        ConfiguredRenderer {
            format: self.format,
            content_type: self.content_type,
        }
    }
}

/// Builder for [`ResponderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ResponderConfigBuilder {
    format: Option<OutputFormat>,
    content_type: Option<ContentType>,
}

impl ResponderConfigBuilder {
    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Render indented JSON with `indent` spaces.
    #[must_use]
    pub const fn pretty(self, indent: usize) -> Self {
        self.format(OutputFormat::Pretty { indent })
    }

    /// Set the content type.
    #[must_use]
    pub const fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ResponderConfig {
        let defaults = ResponderConfig::default();
        ResponderConfig {
            format: self.format.unwrap_or(defaults.format),
            content_type: self.content_type.unwrap_or(defaults.content_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> Envelope<'static, ()> {
        Envelope {
            success: true,
            status_code: 200,
            status_text: "OK",
            error_details: None,
            content: None,
        }
    }

    #[test]
    fn default_config() {
        let config = ResponderConfig::default();
        assert_eq!(config.format, OutputFormat::Compact);
        assert_eq!(config.content_type, ContentType::Json);
    }

    #[test]
    fn builder_overrides() {
        let config = ResponderConfig::builder()
            .pretty(2)
            .content_type(ContentType::JsonUtf8)
            .build();

        assert_eq!(config.format, OutputFormat::Pretty { indent: 2 });
        assert_eq!(config.content_type, ContentType::JsonUtf8);
        assert_eq!(config.renderer().content_type(), ContentType::JsonUtf8);
    }

    #[test]
    fn output_format_renders() {
        let compact = OutputFormat::Compact.render(&envelope()).expect("render");
        assert_eq!(
            compact,
            r#"{"success":true,"status_code":200,"status_text":"OK","error_details":null,"content":null}"#
        );

        let pretty = OutputFormat::pretty().render(&envelope()).expect("render");
        assert!(pretty.starts_with("{\n    \"success\": true,\n"));
    }
}
