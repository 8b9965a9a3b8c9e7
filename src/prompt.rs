use std::io::{self, BufRead, Write};

use crate::report::{Dimension, Direction};

const DIMENSION_MENU: &str = "\nWhat data would you like to see?\n1. Day of Week\n2. Month\n3. Time\n4. Borough\n5. Zip Code\n6. Vehicle Type\n";
const DIRECTION_MENU: &str =
    "\nWould you like to see the most safe or most dangerous?\n1. Most Safe\n2. Dangerous\n";

/// Walks the user through both menus and returns a validated selection.
/// Invalid input re-prompts forever; the only failure is the input stream
/// closing mid-prompt.
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(Dimension, Direction)> {
    let dimension = prompt_dimension(input, output)?;
    let direction = prompt_direction(input, output)?;
    Ok((dimension, direction))
}

pub fn prompt_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Dimension> {
    loop {
        writeln!(output, "{DIMENSION_MENU}")?;
        let token = read_token(input, output)?;
        match Dimension::from_token(&token) {
            Some(dimension) => return Ok(dimension),
            None => writeln!(output, "\nPlease enter a number between 1 and 6")?,
        }
    }
}

pub fn prompt_direction<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Direction> {
    loop {
        writeln!(output, "{DIRECTION_MENU}")?;
        let token = read_token(input, output)?;
        match Direction::from_token(&token) {
            Some(direction) => return Ok(direction),
            None => writeln!(output, "\nPlease enter 1 or 2")?,
        }
    }
}

fn read_token<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, ">> ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a selection was made",
        ));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn invalid_dimension_tokens_reprompt_until_valid() {
        let mut input = Cursor::new("9\nx\n3\n");
        let mut output = Vec::new();
        let dimension = prompt_dimension(&mut input, &mut output).unwrap();
        assert_eq!(dimension, Dimension::Time);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text.matches("Please enter a number between 1 and 6").count(),
            2
        );
        assert_eq!(text.matches("What data would you like to see?").count(), 3);
    }

    #[test]
    fn first_valid_token_is_accepted() {
        let mut input = Cursor::new("4\n");
        let mut output = Vec::new();
        let dimension = prompt_dimension(&mut input, &mut output).unwrap();
        assert_eq!(dimension, Dimension::Borough);

        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("Please enter"));
    }

    #[test]
    fn direction_menu_rejects_out_of_range_tokens() {
        let mut input = Cursor::new("0\n2\n");
        let mut output = Vec::new();
        let direction = prompt_direction(&mut input, &mut output).unwrap();
        assert_eq!(direction, Direction::MostDangerous);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please enter 1 or 2").count(), 1);
    }

    #[test]
    fn selection_consumes_both_menus_in_order() {
        let mut input = Cursor::new("1\n1\n");
        let mut output = Vec::new();
        let (dimension, direction) = prompt_selection(&mut input, &mut output).unwrap();
        assert_eq!(dimension, Dimension::DayOfWeek);
        assert_eq!(direction, Direction::MostSafe);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut input = Cursor::new("  5 \n");
        let mut output = Vec::new();
        let dimension = prompt_dimension(&mut input, &mut output).unwrap();
        assert_eq!(dimension, Dimension::ZipCode);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt_dimension(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
