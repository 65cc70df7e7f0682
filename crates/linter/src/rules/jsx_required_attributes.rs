//! jsx-required-attributes
//!
//! Require a marker attribute (such as `data-id`) on selected JSX elements.
//!
//! An element needs the attribute when its tag name is listed under
//! `tagNames`, or when it carries any of the props listed under
//! `attributeNames`. Both checks run independently, so one element can be
//! reported twice for the same attribute.

use indexmap::{IndexMap, IndexSet};
use oxc_ast::AstKind;
use oxc_span::Span;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
use crate::error::LintError;
use crate::utils::{collect_attributes, get_element_name, is_self_closing_element, opening_element};
use crate::{RuleCategory, RuleMeta};

const OPTIONS_TAG_NAMES: &str = "tagNames";
const OPTIONS_ATTRIBUTE_NAMES: &str = "attributeNames";

/// Message for an element whose tag name requires the attribute
pub fn tag_message(tag_name: &str, required_attribute: &str) -> String {
    format!("Element {} must have {} prop.", tag_name, required_attribute)
}

/// Message for an element whose props require the attribute
pub fn attribute_message(attribute_name: &str, required_attribute: &str) -> String {
    format!(
        "Element with prop {} must have {} prop.",
        attribute_name, required_attribute
    )
}

/// Which elements must carry one required attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAttributeOptions {
    /// Tag names that always need the attribute
    pub tag_names: IndexSet<String>,
    /// Props whose presence makes the attribute necessary
    pub attribute_names: IndexSet<String>,
}

impl RequiredAttributeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_attribute_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Read `{ tagNames, attributeNames }`, treating anything missing or
    /// malformed as empty and dropping non-string entries
    pub fn from_value(value: &Value) -> Self {
        Self {
            tag_names: string_set(value, OPTIONS_TAG_NAMES),
            attribute_names: string_set(value, OPTIONS_ATTRIBUTE_NAMES),
        }
    }
}

fn string_set(value: &Value, key: &str) -> IndexSet<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Required attributes in declaration order.
///
/// Written as a list of `[attribute, { tagNames, attributeNames }]` pairs.
/// Parsing never fails: entries that are not such a pair are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredAttributesConfig {
    requirements: IndexMap<String, RequiredAttributeOptions>,
}

impl RequiredAttributesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement. Empty names are ignored; a repeated name replaces
    /// the earlier options but keeps its position.
    pub fn require(mut self, attribute: impl Into<String>, options: RequiredAttributeOptions) -> Self {
        let attribute = attribute.into();
        if !attribute.is_empty() {
            self.requirements.insert(attribute, options);
        }
        self
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(args) => Self::from_rule_arguments(args),
            Value::Null => Self::default(),
            _ => {
                log::debug!(
                    "{}: rule arguments are not an array, no attributes required",
                    JsxRequiredAttributes::NAME
                );
                Self::default()
            }
        }
    }

    pub fn from_rule_arguments(args: &[Value]) -> Self {
        let mut config = Self::default();

        for (index, arg) in args.iter().enumerate() {
            match parse_requirement(arg) {
                Some((attribute, options)) => {
                    config.requirements.insert(attribute, options);
                }
                None => log::debug!(
                    "{}: ignoring rule argument {} ({})",
                    JsxRequiredAttributes::NAME,
                    index,
                    arg
                ),
            }
        }

        config
    }

    pub fn get(&self, attribute: &str) -> Option<&RequiredAttributeOptions> {
        self.requirements.get(attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RequiredAttributeOptions)> {
        self.requirements
            .iter()
            .map(|(attribute, options)| (attribute.as_str(), options))
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

fn parse_requirement(arg: &Value) -> Option<(String, RequiredAttributeOptions)> {
    let [attribute, options] = arg.as_array()?.as_slice() else {
        return None;
    };
    let attribute = attribute.as_str().filter(|name| !name.is_empty())?;
    Some((attribute.to_string(), RequiredAttributeOptions::from_value(options)))
}

impl Serialize for RequiredAttributesConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.requirements.iter())
    }
}

impl<'de> Deserialize<'de> for RequiredAttributesConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// jsx-required-attributes rule
#[derive(Debug, Clone)]
pub struct JsxRequiredAttributes {
    pub config: RequiredAttributesConfig,
    pub severity: DiagnosticSeverity,
}

impl Default for JsxRequiredAttributes {
    fn default() -> Self {
        Self {
            config: RequiredAttributesConfig::default(),
            severity: DiagnosticSeverity::Error,
        }
    }
}

impl RuleMeta for JsxRequiredAttributes {
    const NAME: &'static str = "jsx-required-attributes";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
    const DESCRIPTION: &'static str =
        "Specify an attribute which must exist for specified elements";
    const RATIONALE: &'static str =
        "Require specified elements to contain a specified attribute";
}

impl JsxRequiredAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RequiredAttributesConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// JSON schema of the rule arguments
    pub fn options_schema() -> Value {
        let string_array = json!({ "type": "array", "items": { "type": "string" } });
        json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    OPTIONS_TAG_NAMES: string_array.clone(),
                    OPTIONS_ATTRIBUTE_NAMES: string_array,
                }
            }
        })
    }

    pub fn option_examples() -> Value {
        json!([
            true,
            ["data-id", { OPTIONS_TAG_NAMES: ["a"], OPTIONS_ATTRIBUTE_NAMES: ["onClick"] }]
        ])
    }

    /// Check one opening tag.
    ///
    /// `tag` is a paired or self-closing `JSXElement`, or a `JSXOpeningElement`
    /// of a paired element; any other kind is an error.
    pub fn check<'a>(
        &self,
        tag: &AstKind<'a>,
        ctx: &LintContext<'a>,
    ) -> Result<Vec<Diagnostic>, LintError> {
        let mut diagnostics = Vec::new();

        let opening = opening_element(tag)?;
        // parsed sources never have an empty tag name; hand-built trees can
        let Some(tag_name) = get_element_name(opening).filter(|name| !name.is_empty()) else {
            return Ok(diagnostics);
        };
        let attributes = collect_attributes(tag)?;
        let self_closing = is_self_closing_element(tag);
        log::trace!("{}: checking <{}> at {}", Self::NAME, tag_name, opening.span.start);

        for (required, options) in self.config.iter() {
            if attributes.contains_key(required) {
                continue;
            }

            let fix = || {
                missing_attribute_fix(
                    opening.span,
                    ctx.span_text(opening.span),
                    self_closing,
                    required,
                )
            };

            if options.tag_names.contains(tag_name.as_str()) {
                diagnostics.push(
                    Diagnostic::new(Self::NAME, opening.span, tag_message(&tag_name, required))
                        .with_severity(self.severity)
                        .with_fix(fix()),
                );
            }

            if let Some(trigger) = options
                .attribute_names
                .iter()
                .find(|name| attributes.contains_key(name.as_str()))
            {
                diagnostics.push(
                    Diagnostic::new(Self::NAME, opening.span, attribute_message(trigger, required))
                        .with_severity(self.severity)
                        .with_fix(fix()),
                );
            }
        }

        Ok(diagnostics)
    }
}

/// Insert ` {attribute}=""` right before the closing delimiter of a tag.
///
/// `tag_text` is the source of the opening tag covered by `tag_span`. The
/// insertion goes before `>` of a paired tag and before `/>` of a
/// self-closing one, or before the space in front of `/>` when there is one.
pub fn missing_attribute_fix(tag_span: Span, tag_text: &str, self_closing: bool, attribute: &str) -> Fix {
    let mut offset = tag_span.end - 1;

    if self_closing {
        offset = tag_span.end - 2;

        let bytes = tag_text.as_bytes();
        if bytes.len() >= 3 && bytes[bytes.len() - 3] == b' ' {
            offset = tag_span.end - 3;
        }
    }

    Fix::insert(offset, format!(" {}=\"\"", attribute))
        .with_message(format!("Add empty `{}` prop", attribute))
}
