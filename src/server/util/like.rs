use sea_orm::sea_query::LikeExpr;

/// `LIKE` pattern matching `value` anywhere in a column.
///
/// `%`, `_` and `\` in the input are escaped so user search text only ever matches
/// literally.
pub fn contains(value: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape(value))).escape('\\')
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_wildcards() {
        assert_eq!(escape("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape("Lu Bu"), "Lu Bu");
    }
}
