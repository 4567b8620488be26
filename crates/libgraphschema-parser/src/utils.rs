//! Helpers for consumers of filter and order definitions.

use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::ObjectValue;
use crate::visitor::visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitError;
use crate::visitor::VisitorTable;
use indexmap::IndexSet;

/// Collects the names of the `$variables` referenced anywhere in `values`,
/// without duplicates, in order of first appearance.
///
/// Fails only if the walk over a value fails.
///
/// ```rust
/// use libgraphschema_parser::ast::Value;
///
/// let Value::Object(value) = libgraphschema_parser::parse_value(
///     "{node: {age: {gt: $min, lt: $max}, name: {eq: $min}}}",
/// ).unwrap() else { panic!() };
/// assert_eq!(
///     libgraphschema_parser::extract_variables_from_object_values(&[value]).unwrap(),
///     vec!["min".to_string(), "max".to_string()],
/// );
/// ```
pub fn extract_variables_from_object_values(values: &[ObjectValue]) -> Result<Vec<String>, VisitError> {
    let mut variables = IndexSet::new();
    let mut collector = VisitorTable::new().on_enter(NodeKind::Variable, |node, _ctx| {
        if let Node::Variable(variable) = node {
            variables.insert(variable.name.value.clone());
        }
        VisitAction::Skip
    });
    for value in values {
        visit(value.clone(), &mut collector)?;
    }
    drop(collector);
    Ok(variables.into_iter().collect())
}
