/// Implements `Deserialize` for an enum whose variants each wrap the node
/// struct of the same kind. The JSON object's `kind` selects the variant; a
/// missing or unlisted `kind` fails with `Invalid AST Node: <json>`.
macro_rules! deserialize_by_kind {
    ($target:ident { $($variant:ident($node:ident)),* $(,)? }) => {
        impl<'de> serde::Deserialize<'de> for $crate::ast::$target {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use serde::de::Error as _;
                let value = <serde_json::Value as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                match $crate::ast::NodeKind::of_json(&value) {
                    $(
                        Some($crate::ast::NodeKind::$node) => {
                            <$crate::ast::$node as serde::Deserialize>::deserialize(value)
                                .map($crate::ast::$target::$variant)
                                .map_err(D::Error::custom)
                        },
                    )*
                    _ => Err(D::Error::custom(format!("Invalid AST Node: {value}"))),
                }
            }
        }
    };
}

pub(crate) use deserialize_by_kind;
