#![forbid(unsafe_code)]

//! JSON bridge between a page shim and the dock.
//!
//! [`parse_host_input`] turns one JSON-encoded DOM event into a
//! [`HostInput`]; [`encode_frame`] serializes a [`DockFrame`] for the page to
//! paint. Kinds the dock does not consume parse to `Ok(None)`.
//!
//! ```json
//! {"kind":"scroll","y":1300}
//! {"kind":"pointer_move","x":120.5,"y":812}
//! {"kind":"pointer_leave"}
//! {"kind":"resize","width":1280,"height":720}
//! {"kind":"activate","target":"projects"}
//! ```

use folio_core::event::Event;
use folio_dock::DockFrame;
use serde::Deserialize;

use crate::DockSession;

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
        }
    }
}

impl std::error::Error for InputParseError {}

/// A decoded host input.
#[derive(Debug, Clone, PartialEq)]
pub struct HostInput {
    pub event: Event,
    /// Page scroll offset carried by a scroll event, if the shim sent one.
    pub scroll_y: Option<f64>,
}

impl HostInput {
    fn event(event: Event) -> Self {
        Self {
            event,
            scroll_y: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawInput {
    kind: String,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    target: Option<String>,
}

/// Parse one JSON-encoded host event.
pub fn parse_host_input(json: &str) -> Result<Option<HostInput>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let input = match raw.kind.as_str() {
        "scroll" => HostInput {
            event: Event::Scroll,
            scroll_y: raw.y,
        },
        "pointer_move" => HostInput::event(Event::PointerMove {
            x: raw.x.ok_or(InputParseError::MissingField("x"))?,
            y: raw.y.unwrap_or(0.0),
        }),
        "pointer_leave" => HostInput::event(Event::PointerLeave),
        "resize" => HostInput::event(Event::Resize {
            width: raw.width.ok_or(InputParseError::MissingField("width"))?,
            height: raw.height.ok_or(InputParseError::MissingField("height"))?,
        }),
        "activate" => HostInput::event(Event::Activate {
            target: raw.target.ok_or(InputParseError::MissingField("target"))?,
        }),
        _ => return Ok(None),
    };
    Ok(Some(input))
}

/// Serialize a frame for the page.
pub fn encode_frame(frame: &DockFrame) -> Result<String, InputParseError> {
    serde_json::to_string(frame).map_err(|e| InputParseError::Json(e.to_string()))
}

impl DockSession {
    /// Parse and queue one JSON-encoded host event. Returns whether anything
    /// was queued.
    pub fn push_json(&mut self, json: &str) -> Result<bool, InputParseError> {
        let Some(input) = parse_host_input(json)? else {
            return Ok(false);
        };
        match input.scroll_y {
            Some(y) => self.user_scroll(y),
            None => self.push_event(input.event),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_dock::{Appearance, EntryKind, Icon, IconView};

    #[test]
    fn scroll_with_and_without_offset() {
        assert_eq!(
            parse_host_input(r#"{"kind":"scroll","y":1300}"#).unwrap(),
            Some(HostInput {
                event: Event::Scroll,
                scroll_y: Some(1300.0),
            })
        );
        assert_eq!(
            parse_host_input(r#"{"kind":"scroll"}"#).unwrap(),
            Some(HostInput::event(Event::Scroll))
        );
    }

    #[test]
    fn pointer_move() {
        let input = parse_host_input(r#"{"kind":"pointer_move","x":120.5,"y":812}"#)
            .unwrap()
            .unwrap();
        assert_eq!(input.event, Event::PointerMove { x: 120.5, y: 812.0 });
    }

    #[test]
    fn pointer_move_requires_x() {
        assert_eq!(
            parse_host_input(r#"{"kind":"pointer_move","y":3}"#),
            Err(InputParseError::MissingField("x"))
        );
    }

    #[test]
    fn pointer_leave() {
        let input = parse_host_input(r#"{"kind":"pointer_leave"}"#).unwrap().unwrap();
        assert_eq!(input.event, Event::PointerLeave);
    }

    #[test]
    fn resize_requires_both_dimensions() {
        assert_eq!(
            parse_host_input(r#"{"kind":"resize","width":800,"height":600}"#)
                .unwrap()
                .map(|i| i.event),
            Some(Event::Resize {
                width: 800.0,
                height: 600.0,
            })
        );
        assert_eq!(
            parse_host_input(r#"{"kind":"resize","width":800}"#),
            Err(InputParseError::MissingField("height"))
        );
    }

    #[test]
    fn activate() {
        let input = parse_host_input(r#"{"kind":"activate","target":"projects"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            input.event,
            Event::Activate {
                target: "projects".into(),
            }
        );
        assert_eq!(
            parse_host_input(r#"{"kind":"activate"}"#),
            Err(InputParseError::MissingField("target"))
        );
    }

    #[test]
    fn unknown_kind_is_ignored() {
        assert_eq!(parse_host_input(r#"{"kind":"keydown","key":"a"}"#), Ok(None));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_host_input("{not json"),
            Err(InputParseError::Json(_))
        ));
        assert!(matches!(
            parse_host_input(r#"{"x":1}"#),
            Err(InputParseError::Json(_))
        ));
    }

    #[test]
    fn frame_encodes_snake_case_appearance() {
        let frame = DockFrame {
            icons: vec![IconView {
                id: "hero".into(),
                label: "Home".into(),
                icon: Icon::Home,
                kind: EntryKind::Primary,
                width: 52.5,
                active: false,
                appearance: Appearance::NeutralHover,
                indicator: false,
                tooltip_visible: true,
            }],
            separator_after: None,
            active_section: "hero".into(),
            animating: true,
        };
        let json = encode_frame(&frame).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["icons"][0]["appearance"], "neutral_hover");
        assert_eq!(value["icons"][0]["width"], 52.5);
        assert_eq!(value["active_section"], "hero");
        assert_eq!(value["separator_after"], serde_json::Value::Null);
    }
}
