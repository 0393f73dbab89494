use crate::sql::enums::sql_dialect::SqlDialect;
use crate::sql::structs::statement_builder::StatementBuilder;
use regex::Regex;
use serde_json::{Map, Value};

/// Wraps an INSERT or UPDATE so DB2 echoes the identifier of every affected row.
pub fn select_from_final_table(id: &str, sql: &str) -> String {
    format!("SELECT {} FROM FINAL TABLE ({})", StatementBuilder::escape_name(id), sql)
}

/// Wraps a DELETE so DB2 echoes the identifier of every row before removal.
pub fn select_from_old_table(id: &str, sql: &str) -> String {
    format!("SELECT {} FROM OLD TABLE ({})", StatementBuilder::escape_name(id), sql)
}

/// Rewrites MySQL-style `LIMIT n` / `OFFSET m` in raw SQL into the DB2 for i
/// `OFFSET m ROWS FETCH FIRST n ROWS ONLY` form. An `OFFSET m ROWS` that is
/// already in DB2 form is left alone, so the rewrite is idempotent.
pub fn rewrite_paging(sql: &str, limit_re: &Regex, offset_re: &Regex) -> String {
    let limit = limit_re.captures(sql).and_then(|captures| {
        let whole = captures.get(0)?;
        let value = captures.get(1)?.as_str().parse::<u64>().ok()?;
        Some((whole.range(), value))
    });
    let offset = offset_re.captures_iter(sql).find_map(|captures| {
        let whole = captures.get(0)?;
        let rest = sql[whole.end()..].trim_start();
        if rest.get(..3).is_some_and(|word| word.eq_ignore_ascii_case("ROW")) {
            return None;
        }
        let value = captures.get(1)?.as_str().parse::<u64>().ok()?;
        Some((whole.range(), value))
    });

    if limit.is_none() && offset.is_none() {
        return sql.to_string();
    }

    let mut ranges: Vec<std::ops::Range<usize>> = limit
        .iter()
        .map(|(range, _)| range.clone())
        .chain(offset.iter().map(|(range, _)| range.clone()))
        .collect();
    ranges.sort_by(|a, b| b.start.cmp(&a.start));

    let mut rewritten = sql.to_string();
    for range in ranges {
        rewritten.replace_range(range, "");
    }
    let rewritten = rewritten.trim_end();

    let clause = SqlDialect::db2i.paging_clause(limit.map(|(_, value)| value), offset.map(|(_, value)| value));
    format!("{} {}", rewritten, clause)
}

/// Looks a column up by exact name, then case-insensitively (DB2 folds unquoted names to upper case).
pub fn row_value<'a>(row: &'a Map<String, Value>, column: &str) -> Option<&'a Value> {
    row.get(column).or_else(|| {
        row.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    })
}

/// Reads a `COUNT(*)` value. Some drivers hand DECIMAL/BIGINT results back as text.
pub fn count_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
