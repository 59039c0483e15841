//! The tagged form: components as JSON or YAML values.
//!
//! A component is a single-key mapping from its kind tag to its absorbed
//! argument list. The first absorbed argument is the parameter dictionary;
//! nested components inside it use the same form.
//!
//! ```yaml
//! Frame:
//!   - displayable:
//!       Text:
//!         - data: hello
//!           bold: true
//!     title: Greeting
//!     box: heavy
//! ```
//!
//! Decoding validates shapes and types and reports errors that name the
//! kind and field. Unknown keys are ignored.

mod decode;
mod encode;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::component::{Component, ComponentKind};
use crate::error::{ResolveError, Result};

impl Component {
    /// Decodes one component from its kind and absorbed arguments.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use trellis::{Component, ComponentKind};
    /// use trellis::components::Text;
    ///
    /// let text = Component::from_absorbed(ComponentKind::Text, &[json!({"data": "hi"})]).unwrap();
    /// assert_eq!(text, Component::Text(Text::new("hi")));
    /// ```
    pub fn from_absorbed(kind: ComponentKind, absorbed: &[Value]) -> Result<Self> {
        decode::decode_component(kind, absorbed)
    }

    /// Decodes a component in tagged form.
    pub fn from_value(value: &Value) -> Result<Self> {
        decode::decode_value(value)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|e| ResolveError::Parse {
            format: "JSON",
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(source).map_err(|e| ResolveError::Parse {
            format: "YAML",
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Reads and decodes a YAML (or JSON, which is valid YAML) file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    /// Encodes this component in tagged form.
    pub fn to_value(&self) -> Value {
        encode::encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Frame, Text};

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
Frame:
  - displayable:
      Text:
        - data: hello
          bold: true
    title: Greeting
    box: heavy
"#;
        let component = Component::from_yaml(yaml).unwrap();
        let expected = Frame::new(Text::new("hello").bold(true))
            .title("Greeting")
            .box_name("heavy");
        assert_eq!(component, Component::Frame(expected));
    }

    #[test]
    fn test_from_json() {
        let component = Component::from_json(r#"{"Text": [{"data": "x"}]}"#).unwrap();
        assert_eq!(component, Component::Text(Text::new("x")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Component::from_json("{"),
            Err(ResolveError::Parse { format: "JSON", .. })
        ));
        assert!(matches!(
            Component::from_yaml("a: [b"),
            Err(ResolveError::Parse { format: "YAML", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Component::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ResolveError::Io(_)));
    }
}
