//! Import of XFoil and XFLR5 polar files.
//!
//! These files carry a free-form header with the analysis conditions
//! (`Re = 0.070 e 6`) followed by a whitespace-separated table whose first
//! three columns are angle of attack in degrees, CL, and CD. Everything
//! after the third column is ignored.

use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, Ratio},
    ratio::ratio,
};

use super::{Airfoil, Polar, PolarError, PolarPoint};

/// Errors that can occur while importing XFoil polar files.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XfoilImportError {
    /// No `Re =` entry was found in the file header.
    #[error("no Reynolds number found in polar file header")]
    MissingReynolds,

    /// The `Re =` entry could not be parsed as a number.
    #[error("unparseable Reynolds number in polar file header: {text:?}")]
    InvalidReynolds { text: String },

    /// No coefficient table was found after the header.
    #[error("no coefficient table found in polar file")]
    MissingTable,

    /// A table row did not contain three parseable numbers.
    #[error("unparseable table row in polar file: {line:?}")]
    InvalidRow { line: String },

    /// The parsed data violated a polar invariant.
    #[error(transparent)]
    Polar(#[from] PolarError),
}

/// Parses the contents of a single XFoil polar file.
///
/// Rows are sorted by angle of attack before validation, so files written
/// by a sweep that crossed zero out of order still import cleanly.
///
/// # Errors
///
/// Returns an error if the header carries no Reynolds number, the table is
/// missing or malformed, or the parsed samples violate a polar invariant
/// (for example duplicate angles of attack).
pub fn import_xfoil_polar(text: &str) -> Result<Polar, XfoilImportError> {
    let reynolds = parse_reynolds(text)?;

    let mut points = Vec::new();
    let mut in_table = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if !in_table {
            in_table = is_table_rule(trimmed);
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }
        points.push(parse_row(trimmed)?);
    }
    if points.is_empty() {
        return Err(XfoilImportError::MissingTable);
    }

    points.sort_by(|a, b| a.alpha.partial_cmp(&b.alpha).unwrap_or(std::cmp::Ordering::Equal));
    Ok(Polar::new(Ratio::new::<ratio>(reynolds), points)?)
}

/// Parses several XFoil polar files into one [`Airfoil`].
///
/// Files may arrive in any order; the polars are sorted by Reynolds number.
///
/// # Errors
///
/// Returns an error if any file fails to import or two files share the same
/// Reynolds number.
pub fn import_xfoil_polars<'a, I>(files: I) -> Result<Airfoil, XfoilImportError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut polars = files
        .into_iter()
        .map(import_xfoil_polar)
        .collect::<Result<Vec<_>, _>>()?;
    polars.sort_by(|a, b| {
        a.reynolds
            .partial_cmp(&b.reynolds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(Airfoil::new(polars)?)
}

/// Extracts the Reynolds number from the header.
///
/// XFoil writes a split mantissa/exponent form (`Re = 0.070 e 6`); plain
/// numbers are accepted too.
fn parse_reynolds(text: &str) -> Result<f64, XfoilImportError> {
    let line = text
        .lines()
        .find(|line| line.contains("Re ="))
        .ok_or(XfoilImportError::MissingReynolds)?;

    let after = &line[line.find("Re =").unwrap_or(0) + 4..];
    // Stop at the next labelled entry (XFoil puts `Ncrit = ...` after Re).
    let field = after.split('=').next().unwrap_or(after);
    let field = field.trim_end_matches(|c: char| c.is_alphabetic() || c.is_whitespace());

    let compact: String = field.chars().filter(|c| !c.is_whitespace()).collect();
    let value = if let Some((mantissa, exponent)) = compact.split_once('e') {
        let m: f64 = mantissa
            .parse()
            .map_err(|_| XfoilImportError::InvalidReynolds { text: compact.clone() })?;
        let e: i32 = exponent
            .parse()
            .map_err(|_| XfoilImportError::InvalidReynolds { text: compact.clone() })?;
        m * 10f64.powi(e)
    } else {
        compact
            .parse()
            .map_err(|_| XfoilImportError::InvalidReynolds { text: compact.clone() })?
    };
    Ok(value)
}

/// A run of dashes separates the column headers from the data rows.
fn is_table_rule(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '-' || c.is_whitespace())
}

fn parse_row(line: &str) -> Result<PolarPoint, XfoilImportError> {
    let mut columns = line.split_whitespace().map(str::parse::<f64>);
    match (columns.next(), columns.next(), columns.next()) {
        (Some(Ok(alpha)), Some(Ok(cl)), Some(Ok(cd))) => {
            Ok(PolarPoint::new(Angle::new::<degree>(alpha), cl, cd))
        }
        _ => Err(XfoilImportError::InvalidRow {
            line: line.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
 XFOIL         Version 6.99

 Calculated polar for: NACA 4412

 1 1 Reynolds number fixed          Mach number fixed

 xtrf =   1.000 (top)        1.000 (bottom)
 Mach =   0.000     Re =     0.070 e 6     Ncrit =   9.000

   alpha    CL        CD       CDp       CM    Top_Xtr  Bot_Xtr
  ------- -------- --------- --------- -------- -------- --------
   0.000   0.4651   0.01174   0.00648  -0.1005   0.8627   1.0000
  -2.000   0.2431   0.01144   0.00553  -0.1005   0.9186   1.0000
   2.000   0.6929   0.01282   0.00758  -0.1021   0.7881   1.0000
";

    #[test]
    fn imports_a_polar_and_sorts_rows() {
        let polar = import_xfoil_polar(SAMPLE).unwrap();

        assert_relative_eq!(polar.reynolds().get::<ratio>(), 70_000.0);

        let points = polar.points();
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0].alpha.get::<degree>(), -2.0);
        assert_relative_eq!(points[0].cl.get::<ratio>(), 0.2431);
        assert_relative_eq!(points[2].cd.get::<ratio>(), 0.01282);
    }

    #[test]
    fn accepts_a_plain_reynolds_number() {
        let text = SAMPLE.replace("0.070 e 6", "70000");
        let polar = import_xfoil_polar(&text).unwrap();
        assert_relative_eq!(polar.reynolds().get::<ratio>(), 70_000.0);
    }

    #[test]
    fn rejects_a_file_without_reynolds() {
        let text = SAMPLE.replace("Re =", "R  :");
        assert_eq!(
            import_xfoil_polar(&text),
            Err(XfoilImportError::MissingReynolds)
        );
    }

    #[test]
    fn rejects_a_file_without_a_table() {
        let header_only: String = SAMPLE
            .lines()
            .take_while(|line| !is_table_rule(line.trim()))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(
            import_xfoil_polar(&header_only),
            Err(XfoilImportError::MissingTable)
        );
    }

    #[test]
    fn rejects_a_malformed_row() {
        let text = SAMPLE.replace("0.6929", "six");
        assert!(matches!(
            import_xfoil_polar(&text),
            Err(XfoilImportError::InvalidRow { .. })
        ));
    }

    #[test]
    fn combines_files_into_an_airfoil() {
        let low = SAMPLE.to_owned();
        let high = SAMPLE.replace("0.070 e 6", "0.140 e 6");

        // Out-of-order input still lands sorted by Reynolds number.
        let airfoil = import_xfoil_polars([high.as_str(), low.as_str()]).unwrap();
        let reynolds: Vec<f64> = airfoil
            .polars()
            .iter()
            .map(|p| p.reynolds().get::<ratio>())
            .collect();
        assert_relative_eq!(reynolds[0], 70_000.0);
        assert_relative_eq!(reynolds[1], 140_000.0);
    }

    #[test]
    fn duplicate_reynolds_numbers_are_rejected() {
        assert_eq!(
            import_xfoil_polars([SAMPLE, SAMPLE]),
            Err(XfoilImportError::Polar(PolarError::ReynoldsOrder { index: 1 }))
        );
    }
}
