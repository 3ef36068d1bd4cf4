use crate::error::Error;
use crate::model::{chain::HpChain, point::LatticePoint, polarity::Polarity};
use std::io::BufRead;

/// Reads an HP lattice model from a line-based text stream.
///
/// Coordinate lines (`x,y,z`, integers) are consumed until the first
/// blank line; the single line after the separator is the label token.
/// EOF before any blank line yields an uncolored model with empty
/// labels. The raw parse is returned as-is; pairing between points and
/// labels is checked separately by [`HpChain::validate`].
pub fn read_chain<R: BufRead>(reader: R) -> Result<HpChain, Error> {
    let mut points = Vec::new();
    let mut labels = Vec::new();

    let mut lines = reader.lines().enumerate();
    while let Some((idx, line)) = lines.next() {
        let line = line?;
        let line_no = idx + 1;

        if line.trim().is_empty() {
            let (label_idx, label_line) = lines
                .next()
                .ok_or(Error::MissingLabelLine { line: line_no })?;
            labels = parse_labels(&label_line?, label_idx + 1)?;
            break;
        }

        points.push(parse_coordinate(&line, line_no)?);
    }

    Ok(HpChain::new(points, labels))
}

fn parse_coordinate(line: &str, line_no: usize) -> Result<LatticePoint, Error> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(Error::malformed(
            line_no,
            format!(
                "expected 3 comma-separated integers, found {} field(s)",
                fields.len()
            ),
        ));
    }

    let axis = |field: &str, name: &str| {
        field.trim().parse::<i32>().map_err(|_| {
            Error::malformed(
                line_no,
                format!("invalid {} coordinate '{}'", name, field.trim()),
            )
        })
    };

    Ok(LatticePoint::new(
        axis(fields[0], "x")?,
        axis(fields[1], "y")?,
        axis(fields[2], "z")?,
    ))
}

fn parse_labels(line: &str, line_no: usize) -> Result<Vec<Polarity>, Error> {
    // The label line carries a single token; a stray comma-separated
    // remainder is ignored, matching the input format.
    let token = line.split(',').next().unwrap_or("").trim();
    token
        .chars()
        .map(|c| Polarity::from_char(c).ok_or(Error::InvalidLabel { ch: c, line: line_no }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pt(x: i32, y: i32, z: i32) -> LatticePoint {
        LatticePoint::new(x, y, z)
    }

    fn parse(input: &str) -> Result<HpChain, Error> {
        read_chain(Cursor::new(input))
    }

    #[test]
    fn parses_coordinates_and_labels() {
        let chain = parse("1,2,3\n4,5,6\n\nHP\n").unwrap();
        assert_eq!(chain.points, vec![pt(1, 2, 3), pt(4, 5, 6)]);
        assert_eq!(
            chain.labels,
            vec![Polarity::Hydrophobic, Polarity::Polar]
        );
    }

    #[test]
    fn missing_blank_line_means_uncolored() {
        let chain = parse("1,2,3\n4,5,6\n").unwrap();
        assert_eq!(chain.points, vec![pt(1, 2, 3), pt(4, 5, 6)]);
        assert!(chain.labels.is_empty());
    }

    #[test]
    fn accepts_negative_coordinates() {
        let chain = parse("-1,0,2\n0,-3,-4\n").unwrap();
        assert_eq!(chain.points, vec![pt(-1, 0, 2), pt(0, -3, -4)]);
    }

    #[test]
    fn normalizes_label_case() {
        let chain = parse("0,0,0\n0,0,1\n\nh\n").unwrap();
        assert_eq!(chain.labels, vec![Polarity::Hydrophobic]);
    }

    #[test]
    fn empty_input_is_an_empty_model() {
        let chain = parse("").unwrap();
        assert!(chain.points.is_empty());
        assert!(chain.labels.is_empty());
    }

    #[test]
    fn rejects_two_field_line() {
        let err = parse("1,2\n").unwrap_err();
        match err {
            Error::MalformedCoordinate { line, details } => {
                assert_eq!(line, 1);
                assert!(details.contains("2 field(s)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_integer_field() {
        let err = parse("1,2,3\n4,five,6\n").unwrap_err();
        match err {
            Error::MalformedCoordinate { line, details } => {
                assert_eq!(line, 2);
                assert!(details.contains("'five'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_label_character() {
        let err = parse("0,0,0\n0,0,1\n\nHX\n").unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { ch: 'X', line: 4 }));
    }

    #[test]
    fn rejects_blank_separator_at_eof() {
        let err = parse("1,2,3\n4,5,6\n\n").unwrap_err();
        assert!(matches!(err, Error::MissingLabelLine { line: 3 }));
    }

    #[test]
    fn label_count_is_half_the_point_count() {
        let chain = parse("0,0,0\n0,0,1\n1,0,0\n1,0,1\n\nHP\n").unwrap();
        chain.validate().unwrap();
        assert_eq!(chain.labels.len(), chain.points.len() / 2);
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = "0,0,0\n0,0,1\n1,0,0\n1,0,1\n\nph\n";
        let first = parse(input).unwrap();
        let second = parse(input).unwrap();
        assert_eq!(first, second);
    }
}
