use sea_orm::{
    ColumnTrait,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};

const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself so user input matches literally
/// inside a `LIKE` pattern.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match: `LOWER(col) LIKE '%needle%' ESCAPE '\'`.
///
/// Portable across Postgres and SQLite (no `ILIKE`). SQLite's `LOWER()` only
/// folds ASCII, so on SQLite non-ASCII letters match case-sensitively
/// (`"émile"` does not find `"Émile"`). When the needle has non-ASCII capitals
/// a second pattern with only ASCII folded is OR-ed in, so typing the stored
/// spelling still matches there.
pub fn icontains<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    let folded = needle.to_lowercase();
    let ascii_folded = needle.to_ascii_lowercase();
    let expr = lower_like(col, &folded);
    if ascii_folded == folded {
        expr
    } else {
        expr.or(lower_like(col, &ascii_folded))
    }
}

fn lower_like<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(needle));
    Expr::expr(Func::lower(Expr::col((col.entity_name(), col))))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}
