/*! Label translation

Rewrites dataset specific label names into a shared vocabulary.
A [Translation] maps a raw label to zero, one or many canonical labels. Unknown labels are kept as is.
!*/
use std::collections::HashMap;

use crate::{
    error::Error,
    table::{Labels, Row, Table},
};

/// raw label -> canonical labels
pub type Translation = HashMap<String, Vec<String>>;

/// Translate the labels of a single row.
///
/// Expansions are spliced in label order, labels missing from `translation` pass through unchanged.
/// Fails with [Error::MissingLabels] if the row has no labels.
pub fn translate_row(mut row: Row, translation: &Translation) -> Result<Row, Error> {
    let labels = row.take_labels().ok_or(Error::MissingLabels)?;
    let translated: Labels = labels
        .into_iter()
        .flat_map(|label| match translation.get(&label) {
            Some(mapped) => mapped.clone(),
            None => vec![label],
        })
        .collect();
    row.set_labels(translated);
    Ok(row)
}

/// Translate every row of `table`.
pub fn translate_table(table: Table, translation: &Translation) -> Result<Table, Error> {
    table.try_map_rows(|row| translate_row(row, translation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(entries: Vec<(&str, Vec<&str>)>) -> Translation {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
            .collect()
    }

    fn labelled(labels: &[&str]) -> Row {
        let mut row = Row::new();
        row.set_text("t");
        row.set_labels(labels.iter().copied().collect());
        row
    }

    #[test]
    fn expands_in_order() {
        let t = translation(vec![("hate", vec!["abusive", "severe"])]);
        let row = translate_row(labelled(&["hate", "none"]), &t).unwrap();
        assert_eq!(
            row.labels().unwrap().as_slice(),
            &["abusive", "severe", "none"]
        );
        assert_eq!(row.text(), Some("t"));
    }

    #[test]
    fn unmapped_pass_through() {
        let t = translation(vec![("other", vec!["x"])]);
        let row = translate_row(labelled(&["a", "b"]), &t).unwrap();
        assert_eq!(row.labels().unwrap().as_slice(), &["a", "b"]);
    }

    #[test]
    fn map_to_nothing() {
        let t = translation(vec![("noHate", vec![]), ("hate", vec!["hate"])]);
        let row = translate_row(labelled(&["noHate"]), &t).unwrap();
        assert!(row.labels().unwrap().is_empty());
    }

    #[test]
    fn empty_translation_is_identity() {
        let row = labelled(&["hate", "none"]);
        let translated = translate_row(row.clone(), &Translation::new()).unwrap();
        assert_eq!(translated, row);
    }

    #[test]
    fn missing_labels() {
        let res = translate_row(Row::new(), &Translation::new());
        assert!(matches!(res, Err(Error::MissingLabels)));
    }

    #[test]
    fn table() {
        let t = translation(vec![("a", vec!["x", "y"])]);
        let table = Table::new(vec![labelled(&["a"]), labelled(&["b", "a"])]);
        let table = translate_table(table, &t).unwrap();
        assert_eq!(table.rows()[0].labels().unwrap().as_slice(), &["x", "y"]);
        assert_eq!(
            table.rows()[1].labels().unwrap().as_slice(),
            &["b", "x", "y"]
        );
    }
}
