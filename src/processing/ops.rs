//! Table operations used while processing raw files.
use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::{
    error::Error,
    table::{Row, Table, Value},
};

/// Key of `row` over `columns`. Absent columns are an error.
fn key(row: &Row, columns: &[&str]) -> Result<String, Error> {
    let values: Vec<&Value> = columns
        .iter()
        .map(|c| row.get(c).ok_or_else(|| Error::MissingColumn(c.to_string())))
        .collect::<Result<_, _>>()?;
    Ok(values.iter().join("\u{1f}"))
}

/// Inner join of `left` and `right` on `left.left_key == right.right_key`.
///
/// Left row order is kept, a left row matching several right rows is repeated once per match.
/// On column name clashes (including the key when both sides share its name), left values are kept.
pub fn join_tables(
    left: Table,
    left_key: &str,
    right: &Table,
    right_key: &str,
) -> Result<Table, Error> {
    let mut index: HashMap<String, Vec<&Row>> = HashMap::new();
    for row in right.rows() {
        index.entry(key(row, &[right_key])?).or_default().push(row);
    }

    let mut joined = Table::default();
    for row in left.into_rows() {
        let Some(matches) = index.get(&key(&row, &[left_key])?) else {
            continue;
        };
        for other in matches {
            let mut merged = row.clone();
            for column in other.columns() {
                if merged.get(column).is_some() {
                    continue;
                }
                if let Some(value) = other.get(column) {
                    merged.insert(column, value.clone());
                }
            }
            joined.push(merged);
        }
    }
    debug!("joined {} rows", joined.len());
    Ok(joined)
}

/// Group rows by `by` and average every other column.
///
/// Groups are in first-seen order. Non-numeric and empty cells are left out of the means,
/// a column with no numeric cell in a group is [Value::Null] for that group.
pub fn group_mean(table: &Table, by: &str) -> Result<Table, Error> {
    let columns: Vec<String> = table
        .header()
        .into_iter()
        .filter(|c| c != by)
        .collect();

    // key -> (key value, per column (sum, count))
    let mut groups: Vec<(Value, Vec<(f64, usize)>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in table.rows() {
        let k = key(row, &[by])?;
        let pos = *positions.entry(k).or_insert_with(|| {
            groups.push((
                row.get(by).cloned().unwrap_or(Value::Null),
                vec![(0.0, 0); columns.len()],
            ));
            groups.len() - 1
        });
        for (acc, column) in groups[pos].1.iter_mut().zip(&columns) {
            if let Some(x) = row.get(column).and_then(Value::as_f64) {
                acc.0 += x;
                acc.1 += 1;
            }
        }
    }

    let rows = groups
        .into_iter()
        .map(|(k, sums)| {
            let mut row = Row::new();
            row.insert(by, k);
            for (column, (sum, count)) in columns.iter().zip(sums) {
                let mean = if count == 0 {
                    Value::Null
                } else {
                    Value::Float(sum / count as f64)
                };
                row.insert(column.as_str(), mean);
            }
            row
        })
        .collect();

    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(data: &str) -> Table {
        Table::from_reader(data.as_bytes(), b',').unwrap()
    }

    #[test]
    fn join() {
        let left = table("rev_id,comment\n1,first\n2,second\n3,third\n");
        let right = table("rev_id,aggression\n3,True\n1,False\n");
        let joined = join_tables(left, "rev_id", &right, "rev_id").unwrap();

        assert_eq!(joined.len(), 2);
        assert_eq!(joined.header(), vec!["rev_id", "comment", "aggression"]);
        assert_eq!(joined.rows()[0].get("comment"), Some(&Value::from("first")));
        assert_eq!(joined.rows()[0].get("aggression"), Some(&Value::Bool(false)));
        assert_eq!(joined.rows()[1].get("comment"), Some(&Value::from("third")));
        assert_eq!(joined.rows()[1].get("aggression"), Some(&Value::Bool(true)));
    }

    #[test]
    fn join_missing_key() {
        let left = table("a,b\n1,2\n");
        let right = table("rev_id,c\n1,2\n");
        let res = join_tables(left, "rev_id", &right, "rev_id");
        assert!(matches!(res, Err(Error::MissingColumn(c)) if c == "rev_id"));
    }

    #[test]
    fn mean_by_group() {
        let t = table(
            "rev_id,worker_id,aggression,aggression_score\n\
             1,10,1,-1\n\
             2,11,0,0\n\
             1,12,0,1\n\
             1,13,1,-2\n",
        );
        let means = group_mean(&t, "rev_id").unwrap();
        assert_eq!(means.len(), 2);

        let first = &means.rows()[0];
        assert_eq!(first.get("rev_id"), Some(&Value::Int(1)));
        let aggression = first.get("aggression").and_then(Value::as_f64).unwrap();
        assert!((aggression - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            first.get("aggression_score").and_then(Value::as_f64),
            Some(-2.0 / 3.0)
        );
        assert_eq!(means.rows()[1].get("aggression"), Some(&Value::Float(0.0)));
    }
}
