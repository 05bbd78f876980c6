//! Input validation checks.

use crate::error::{McdaError, Result};
use crate::io::{read_table, Table};
use crate::problem::{DecisionProblem, Impact};
use std::path::Path;
use tracing::debug;

/// Validates a raw table together with the weights and impacts strings.
///
/// Checks run in a fixed order and the first violation is returned:
///
/// 1. at least one data row ([`McdaError::InputUnreadable`])
/// 2. at least three columns ([`McdaError::InsufficientColumns`])
/// 3. every criterion cell is a finite number ([`McdaError::NonNumericCriterion`])
/// 4. weights parse as positive numbers ([`McdaError::InvalidWeightFormat`])
/// 5. impacts are `+` or `-` ([`McdaError::InvalidImpactSymbol`])
/// 6. one weight and one impact per criterion ([`McdaError::ArityMismatch`])
///
/// # Examples
///
/// ```
/// use u_topsis::io::read_table_from_reader;
/// use u_topsis::validate::validate;
///
/// let table = read_table_from_reader("Fund,P1,P2\nF1,0.8,0.6\nF2,0.7,0.9\n".as_bytes()).unwrap();
/// let problem = validate(&table, "1,2", "+,-").unwrap();
/// assert_eq!(problem.criterion_count(), 2);
/// ```
pub fn validate(table: &Table, weights_spec: &str, impacts_spec: &str) -> Result<DecisionProblem> {
    if table.row_count() == 0 {
        return Err(McdaError::InputUnreadable("table has no data rows".into()));
    }

    let columns = table.column_count();
    if columns < 3 {
        return Err(McdaError::InsufficientColumns { found: columns });
    }

    let criteria: Vec<String> = table.headers()[1..]
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut labels = Vec::with_capacity(table.row_count());
    let mut matrix = Vec::with_capacity(table.row_count());
    for (i, row) in table.rows().iter().enumerate() {
        labels.push(row[0].clone());
        let values = row[1..]
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                parse_criterion(cell).ok_or_else(|| McdaError::NonNumericCriterion {
                    column: criteria[j].clone(),
                    row: i + 1,
                    value: cell.clone(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        matrix.push(values);
    }

    let weights = parse_weights(weights_spec)?;
    let impacts = parse_impacts(impacts_spec)?;

    let expected = columns - 1;
    if weights.len() != expected || impacts.len() != expected {
        return Err(McdaError::ArityMismatch {
            expected,
            weights: weights.len(),
            impacts: impacts.len(),
        });
    }

    debug!(
        alternatives = matrix.len(),
        criteria = expected,
        "input validated"
    );
    DecisionProblem::new(labels, criteria, matrix, weights, impacts)
}

/// Reads `path` as CSV and validates it.
pub fn validate_file<P: AsRef<Path>>(
    path: P,
    weights_spec: &str,
    impacts_spec: &str,
) -> Result<(Table, DecisionProblem)> {
    let table = read_table(path)?;
    let problem = validate(&table, weights_spec, impacts_spec)?;
    Ok((table, problem))
}

/// Parses a comma-separated list of positive, finite weights.
pub fn parse_weights(spec: &str) -> Result<Vec<f64>> {
    spec.split(',')
        .map(|token| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(w) if w.is_finite() && w > 0.0 => Ok(w),
                _ => Err(McdaError::InvalidWeightFormat(token.to_string())),
            }
        })
        .collect()
}

/// Parses a comma-separated list of `+` / `-` symbols.
pub fn parse_impacts(spec: &str) -> Result<Vec<Impact>> {
    spec.split(',').map(str::parse).collect()
}

fn parse_criterion(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_table_from_reader;

    const PHONES: &str = "Model,Price,Storage,Camera,Looks\n\
                          M1,250,16,12,5\n\
                          M2,200,16,8,3\n\
                          M3,300,32,16,4\n\
                          M4,275,32,8,4\n";

    fn table(data: &str) -> Table {
        read_table_from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_valid_input() {
        let problem = validate(&table(PHONES), "1,1,1,2", "+,+,-,+").unwrap();
        assert_eq!(problem.alternative_count(), 4);
        assert_eq!(problem.labels()[2], "M3");
        assert_eq!(problem.criteria(), &["Price", "Storage", "Camera", "Looks"]);
        assert_eq!(problem.matrix()[3], vec![275.0, 32.0, 8.0, 4.0]);
        assert_eq!(problem.weights(), &[1.0, 1.0, 1.0, 2.0]);
        assert_eq!(
            problem.impacts(),
            &[Impact::Benefit, Impact::Benefit, Impact::Cost, Impact::Benefit]
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        let problem = validate(&table("A,x,y\nr1, 1.5 ,2\n"), " 0.5 , 2", " + ,-").unwrap();
        assert_eq!(problem.matrix()[0], vec![1.5, 2.0]);
        assert_eq!(problem.weights(), &[0.5, 2.0]);
    }

    #[test]
    fn test_criterion_names_trimmed() {
        let problem = validate(&table("A, x ,y \nr1,1,2\n"), "1,1", "+,+").unwrap();
        assert_eq!(problem.criteria(), &["x", "y"]);
    }

    #[test]
    fn test_two_columns_rejected() {
        let err = validate(&table("Model,Price\nM1,250\n"), "1", "+").unwrap_err();
        assert!(matches!(err, McdaError::InsufficientColumns { found: 2 }));
    }

    #[test]
    fn test_no_rows_rejected() {
        let err = validate(&table("Model,Price,Storage\n"), "1,1", "+,+").unwrap_err();
        assert!(matches!(err, McdaError::InputUnreadable(_)));
    }

    #[test]
    fn test_non_numeric_cell_identified() {
        let data = "Model,Price,Storage\nM1,250,16\nM2,cheap,32\n";
        let err = validate(&table(data), "1,1", "+,+").unwrap_err();
        match err {
            McdaError::NonNumericCriterion { column, row, value } => {
                assert_eq!(column, "Price");
                assert_eq!(row, 2);
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nan_and_empty_cells_rejected() {
        for cell in ["NaN", "inf", ""] {
            let data = format!("Model,Price,Storage\nM1,{cell},16\n");
            let err = validate(&table(&data), "1,1", "+,+").unwrap_err();
            assert!(
                matches!(err, McdaError::NonNumericCriterion { .. }),
                "cell {cell:?}"
            );
        }
    }

    #[test]
    fn test_numeric_check_precedes_weights() {
        let data = "Model,Price,Storage\nM1,abc,16\n";
        let err = validate(&table(data), "oops", "x").unwrap_err();
        assert!(matches!(err, McdaError::NonNumericCriterion { .. }));
    }

    #[test]
    fn test_bad_weights() {
        for spec in ["1,a,1,1", "1,,1,1", "1,-1,1,1", "1,0,1,1", ""] {
            let err = validate(&table(PHONES), spec, "+,+,-,+").unwrap_err();
            assert!(matches!(err, McdaError::InvalidWeightFormat(_)), "spec {spec:?}");
        }
    }

    #[test]
    fn test_bad_impact_symbol() {
        let data = "Model,Price,Storage,Camera\nM1,1,2,3\n";
        let err = validate(&table(data), "1,1,1", "+,x,-").unwrap_err();
        match err {
            McdaError::InvalidImpactSymbol(tok) => assert_eq!(tok, "x"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_impact_symbol_precedes_arity() {
        let err = validate(&table(PHONES), "1,1", "+,*").unwrap_err();
        assert!(matches!(err, McdaError::InvalidImpactSymbol(_)));
    }

    #[test]
    fn test_arity_mismatch() {
        let data = "Model,Price,Storage,Camera\nM1,1,2,3\n";
        let err = validate(&table(data), "1,2", "+,+,-").unwrap_err();
        assert!(matches!(
            err,
            McdaError::ArityMismatch {
                expected: 3,
                weights: 2,
                impacts: 3
            }
        ));

        let err = validate(&table(data), "1,2,3", "+,+,-,-").unwrap_err();
        assert!(matches!(err, McdaError::ArityMismatch { impacts: 4, .. }));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_weights("0.25,0.25").unwrap(), vec![0.25, 0.25]);
        assert_eq!(
            parse_impacts("-,+").unwrap(),
            vec![Impact::Cost, Impact::Benefit]
        );
        assert!(parse_impacts("+,").is_err());
    }
}
