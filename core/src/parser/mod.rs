mod descent;
mod parsed_expr;
mod syntax;

pub use descent::{parse, parse_tokens, parse_with_options};

pub use parsed_expr::{Expr, ParsedExpr};
pub use syntax::BinaryOp;
