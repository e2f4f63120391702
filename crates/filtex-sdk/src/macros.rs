//! Template macros
//!
//! Stand-ins for tagged template literals: the literal text and the values
//! are written side by side and turned into a [`Template`](crate::Template).

/// Parse one expression from literal text and its values.
///
/// Exactly one value is accepted; `expr!("age gt")` and
/// `expr!("age bt", 1, 2)` fail with an arity error.
///
/// ```rust
/// use filtex_sdk::{expr, Operator};
///
/// let expression = expr!("status not_eq", "closed")?;
/// assert_eq!(expression.operator(), Operator::Eq);
/// assert!(expression.is_negated());
/// # Ok::<(), filtex_sdk::ParseError>(())
/// ```
#[macro_export]
macro_rules! expr {
    ($text:expr $(, $value:expr)* $(,)?) => {
        $crate::ExpressionParser::parse(
            $crate::Template::<$crate::Value>::literal($text) $(.value($value))*
        )
    };
}

/// Assemble a group. String literals are literal text (`"and"`, `"or"`),
/// anything else is interpolated as an expression or a raw [`Value`](crate::Value).
/// Numeric and boolean literals count as interpolated values.
///
/// ```rust
/// use filtex_sdk::{expr, group, LogicalGroupOp};
///
/// let group = group![expr!("a eq", 1)?, "or", expr!("b eq", 2)?]?;
/// assert_eq!(group.op(), LogicalGroupOp::Any);
/// # Ok::<(), filtex_sdk::SdkError>(())
/// ```
#[macro_export]
macro_rules! group {
    (@piece $template:expr ;) => {
        $crate::GroupParser::parse($template)
    };
    (@piece $template:expr ; $text:literal $(, $($rest:tt)*)?) => {
        $crate::group!(@piece $crate::LiteralPiece::append($text, $template) ; $($($rest)*)?)
    };
    (@piece $template:expr ; $value:expr $(, $($rest:tt)*)?) => {
        $crate::group!(@piece ($template).value($value) ; $($($rest)*)?)
    };
    ($($pieces:tt)*) => {
        $crate::group!(@piece $crate::Template::<$crate::Fragment>::new() ; $($pieces)*)
    };
}

/// Build a parameter set from expressions and groups.
///
/// ```rust
/// use filtex_sdk::{expr, params};
///
/// let params = params![expr!("age gt", 18)?, expr!("name sw", "A")?];
/// assert_eq!(params.len(), 2);
/// assert!(params![].is_empty());
/// # Ok::<(), filtex_sdk::ParseError>(())
/// ```
#[macro_export]
macro_rules! params {
    ($($item:expr),* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::ParameterItem> =
            ::std::vec![$($crate::ParameterItem::from($item)),*];
        $crate::ParameterBuilder::build(items)
    }};
}

use crate::{Fragment, Template, Value};

/// How a literal token lands in a `group!` template
#[doc(hidden)]
pub trait LiteralPiece {
    fn append(self, template: Template<Fragment>) -> Template<Fragment>;
}

impl LiteralPiece for &str {
    fn append(self, template: Template<Fragment>) -> Template<Fragment> {
        template.text(self)
    }
}

macro_rules! impl_value_piece {
    ($($t:ty),*) => {
        $(
            impl LiteralPiece for $t {
                fn append(self, template: Template<Fragment>) -> Template<Fragment> {
                    template.value(Value::from(self))
                }
            }
        )*
    };
}

impl_value_piece!(bool, i32, i64, u32, u64, f64);
