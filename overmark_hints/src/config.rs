// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation settings for hint overlays.

use std::fmt::Write as _;

/// Class names for the two binary presentation states.
///
/// A marker carries exactly one of `visible`/`hidden`; a wrapper carries exactly
/// one of `highlighted`/`plain`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HintClasses {
    /// Marker whose label still matches the typed text.
    pub visible: String,
    /// Marker whose label no longer matches.
    pub hidden: String,
    /// Wrapper around a still-matching candidate.
    pub highlighted: String,
    /// Wrapper around a candidate that no longer matches.
    pub plain: String,
}

impl Default for HintClasses {
    fn default() -> Self {
        Self {
            visible: "__golem-hint".into(),
            hidden: "__golem-hide".into(),
            highlighted: "__golem-highlight".into(),
            plain: String::new(),
        }
    }
}

/// Settings for [`HintMode`](crate::HintMode).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HintConfig {
    /// Tag of the label marker element.
    pub marker_tag: String,
    /// Tag of the highlight wrapper element.
    pub wrapper_tag: String,
    /// Presentation classes.
    pub classes: HintClasses,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            marker_tag: "div".into(),
            wrapper_tag: "span".into(),
            classes: HintClasses::default(),
        }
    }
}

impl HintConfig {
    /// CSS for the presentation classes, for the host to inject into each page.
    ///
    /// An empty class name gets no rule.
    pub fn stylesheet(&self) -> String {
        let c = &self.classes;
        let mut css = String::new();
        let mut rule = |class: &str, body: &str| {
            if !class.is_empty() {
                let _ = writeln!(css, ".{class} {{\n{body}}}");
            }
        };
        rule(
            &c.visible,
            "\tpadding: 1px;\n\
             \tborder: 1px solid rgba(0, 0, 0, 0.7);\n\
             \tbackground-color: rgba(255, 255, 255, 0.7);\n\
             \tposition: absolute;\n\
             \tfont: bold 9pt monospace;\n\
             \tcolor: rgba(0, 0, 0, 0.7);\n\
             \tz-index: 100000;\n",
        );
        rule(
            &c.highlighted,
            "\tbackground-color: rgba(255, 255, 0, 0.5);\n",
        );
        rule(&c.hidden, "\tdisplay: none;\n");
        rule(&c.plain, "");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_named_classes() {
        let css = HintConfig::default().stylesheet();
        assert!(css.contains(".__golem-hint {"), "{css}");
        assert!(css.contains("position: absolute;"), "{css}");
        assert!(css.contains(".__golem-hide {\n\tdisplay: none;\n}"), "{css}");
        assert!(css.contains(".__golem-highlight {"), "{css}");
        assert_eq!(css.matches('{').count(), 3, "the empty plain class has no rule");
    }

    #[test]
    fn custom_classes_flow_into_css() {
        let config = HintConfig {
            classes: HintClasses {
                plain: "om-plain".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.stylesheet().contains(".om-plain {\n}"));
    }
}
