//! Node classification and attribute extraction for JSX opening tags

use oxc_ast::ast::{
    JSXAttribute, JSXAttributeItem, JSXAttributeName, JSXElementName,
    JSXMemberExpressionObject, JSXOpeningElement,
};
use oxc_ast::AstKind;
use rustc_hash::FxHashMap;

use crate::error::LintError;

/// Named attributes of one opening tag, keyed by attribute name
pub type AttributeDictionary<'a> = FxHashMap<String, &'a JSXAttribute<'a>>;

/// `<a>...</a>`
pub fn is_paired_element(kind: &AstKind) -> bool {
    matches!(kind, AstKind::JSXElement(element) if element.closing_element.is_some())
}

/// `<a />`
pub fn is_self_closing_element(kind: &AstKind) -> bool {
    matches!(kind, AstKind::JSXElement(element) if element.closing_element.is_none())
}

/// The `<a>` half of a paired element.
///
/// oxc gives self-closing elements an opening element too; those are
/// classified through their parent element instead.
pub fn is_opening_element(kind: &AstKind) -> bool {
    matches!(kind, AstKind::JSXOpeningElement(_))
}

pub fn is_attribute(kind: &AstKind) -> bool {
    matches!(kind, AstKind::JSXAttribute(_))
}

/// Resolve the opening tag of a paired element, a self-closing element or
/// an opening element
pub fn opening_element<'a>(kind: &AstKind<'a>) -> Result<&'a JSXOpeningElement<'a>, LintError> {
    match *kind {
        AstKind::JSXElement(element) => Ok(&*element.opening_element),
        AstKind::JSXOpeningElement(opening) => Ok(opening),
        other => Err(LintError::InvalidNodeKind {
            found: format!("{:?}", other.ty()),
        }),
    }
}

/// Build the attribute dictionary of an opening tag.
///
/// Spread attributes are not expanded, so a prop passed only through
/// `{...props}` is absent from the result.
pub fn collect_attributes<'a>(kind: &AstKind<'a>) -> Result<AttributeDictionary<'a>, LintError> {
    let opening = opening_element(kind)?;
    let mut attributes = AttributeDictionary::default();

    for item in &opening.attributes {
        let JSXAttributeItem::Attribute(attr) = item else {
            continue;
        };
        attributes.insert(attribute_name(attr), &**attr);
    }

    Ok(attributes)
}

/// Get the name of an attribute, `namespace:name` for namespaced ones
pub fn attribute_name(attr: &JSXAttribute) -> String {
    match &attr.name {
        JSXAttributeName::Identifier(ident) => ident.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
    }
}

/// Get the name of a JSX element as written in the source
pub fn get_element_name(element: &JSXOpeningElement) -> Option<String> {
    match &element.name {
        JSXElementName::Identifier(ident) => Some(ident.name.to_string()),
        JSXElementName::IdentifierReference(ident) => Some(ident.name.to_string()),
        JSXElementName::NamespacedName(ns) => {
            Some(format!("{}:{}", ns.namespace.name, ns.name.name))
        }
        JSXElementName::MemberExpression(member) => {
            let mut parts = vec![member.property.name.to_string()];
            let mut current = &member.object;
            loop {
                match current {
                    JSXMemberExpressionObject::IdentifierReference(ident) => {
                        parts.push(ident.name.to_string());
                        break;
                    }
                    JSXMemberExpressionObject::MemberExpression(inner) => {
                        parts.push(inner.property.name.to_string());
                        current = &inner.object;
                    }
                    JSXMemberExpressionObject::ThisExpression(_) => {
                        parts.push("this".to_string());
                        break;
                    }
                }
            }
            parts.reverse();
            Some(parts.join("."))
        }
        JSXElementName::ThisExpression(_) => Some("this".to_string()),
    }
}
