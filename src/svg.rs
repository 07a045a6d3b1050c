// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-command text, for debugging and golden tests.
//!
//! A path is written as its segments separated by single spaces, each being
//! a command letter followed by its arguments, in the style of SVG path data:
//!
//! ```text
//! M x,y
//! L x,y
//! Q cx,cy x,y
//! C c1x,c1y c2x,c2y x,y
//! A rx,ry x_rotation large_arc,sweep x,y
//! ```
//!
//! Coordinates are written in full precision, so reading the text back gives
//! the same segments. Arcs are written in endpoint form and resolved again on
//! reading, which reproduces their center form up to rounding. When reading,
//! `H x`, `V y` and a bare `Z` are also accepted, with the meaning of
//! [`Path::horizontal_line_to`], [`Path::vertical_line_to`] and
//! [`Path::close`].

use core::fmt;
use core::str::FromStr;

use crate::{Path, Point, Segment};

use self::parser::ArcTo;

/// An error which can be returned when reading a path from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathParseError {
    /// A number or flag was expected.
    Wrong,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// Encountered an unknown command letter.
    UnknownCommand(char),
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathParseError::Wrong => write!(f, "Unable to parse a number"),
            PathParseError::UnexpectedEof => write!(f, "Unexpected EOF"),
            PathParseError::UnknownCommand(letter) => write!(f, "Unknown command, \"{letter}\""),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathParseError {}

impl FromStr for Path {
    type Err = PathParseError;

    /// Read a path from its text form.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command letter, for arguments that are
    /// not numbers (or `0`/`1` flags), and for input ending mid-command.
    fn from_str(input: &str) -> Result<Path, PathParseError> {
        let mut path = Path::new();
        let mut input = input.trim_start();
        while let Some(letter) = input.chars().next() {
            let args = &input[letter.len_utf8()..];
            let rest = match letter {
                'M' => parser::coordinate_pair(args).map(|(rest, p)| {
                    path.move_to(p);
                    rest
                }),
                'L' => parser::coordinate_pair(args).map(|(rest, p)| {
                    path.line_to(p);
                    rest
                }),
                'H' => parser::coordinate(args).map(|(rest, x)| {
                    path.horizontal_line_to(x);
                    rest
                }),
                'V' => parser::coordinate(args).map(|(rest, y)| {
                    path.vertical_line_to(y);
                    rest
                }),
                'Q' => parser::quadto(args).map(|(rest, (p1, p2))| {
                    path.quadratic_bezier_curve_to(p1, p2);
                    rest
                }),
                'C' => parser::curveto(args).map(|(rest, (p1, p2, p3))| {
                    path.cubic_bezier_curve_to(p1, p2, p3);
                    rest
                }),
                'A' => parser::arcto(args).map(|(rest, arc)| {
                    let ArcTo {
                        radii,
                        x_rotation,
                        large_arc,
                        sweep,
                        to,
                    } = arc;
                    path.elliptical_arc_to(to, radii, x_rotation, large_arc, sweep);
                    rest
                }),
                'Z' => {
                    path.close();
                    Ok(args)
                }
                _ => return Err(PathParseError::UnknownCommand(letter)),
            };
            input = rest.map_err(parser::to_error)?.trim_start();
        }
        Ok(path)
    }
}

mod parser {
    use crate::{Point, Vec2};
    use nom::{
        branch::alt,
        character::complete::{char, multispace0},
        combinator::{opt, value},
        number::complete::double,
        sequence::preceded,
        IResult,
    };

    use super::PathParseError;

    /// Arguments of an arc command.
    pub(super) struct ArcTo {
        pub(super) radii: Vec2,
        pub(super) x_rotation: f64,
        pub(super) large_arc: bool,
        pub(super) sweep: bool,
        pub(super) to: Point,
    }

    pub(super) fn to_error(err: nom::Err<nom::error::Error<&str>>) -> PathParseError {
        match err {
            nom::Err::Incomplete(_) => PathParseError::UnexpectedEof,
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                if e.input.trim().is_empty() {
                    PathParseError::UnexpectedEof
                } else {
                    PathParseError::Wrong
                }
            }
        }
    }

    pub(super) fn arcto(input: &str) -> IResult<&str, ArcTo> {
        let (input, radii) = coordinate_pair(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, x_rotation) = double(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, large_arc) = flag(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, sweep) = flag(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, to) = coordinate_pair(input)?;
        Ok((
            input,
            ArcTo {
                radii: radii.to_vec2(),
                x_rotation,
                large_arc,
                sweep,
                to,
            },
        ))
    }

    pub(super) fn quadto(input: &str) -> IResult<&str, (Point, Point)> {
        let (input, ctrl) = coordinate_pair(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, to) = coordinate_pair(input)?;
        Ok((input, (ctrl, to)))
    }

    pub(super) fn curveto(input: &str) -> IResult<&str, (Point, Point, Point)> {
        let (input, ctrl1) = coordinate_pair(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, ctrl2) = coordinate_pair(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, to) = coordinate_pair(input)?;
        Ok((input, (ctrl1, ctrl2, to)))
    }

    pub(super) fn coordinate_pair(input: &str) -> IResult<&str, Point> {
        let (input, x) = coordinate(input)?;
        let (input, _) = comma_or_ws(input)?;
        let (input, y) = double(input)?;
        Ok((input, Point { x, y }))
    }

    pub(super) fn coordinate(input: &str) -> IResult<&str, f64> {
        preceded(multispace0, double)(input)
    }

    fn flag(input: &str) -> IResult<&str, bool> {
        alt((value(true, char('1')), value(false, char('0'))))(input)
    }

    fn comma_or_ws(input: &str) -> IResult<&str, ()> {
        let (input, _) = multispace0(input)?;
        let (input, _) = opt(char(','))(input)?;
        let (input, _) = multispace0(input)?;
        Ok((input, ()))
    }
}

// Stringify

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.segments().iter();
        if let Some(segment) = iter.next() {
            write!(f, "{segment}")?;
        }
        for segment in iter {
            write!(f, " {segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::MoveTo(p) => {
                write!(f, "M")?;
                write_point(p, f)
            }
            Segment::LineTo(p) => {
                write!(f, "L")?;
                write_point(p, f)
            }
            Segment::QuadTo(p1, p2) => {
                write!(f, "Q")?;
                write_point(p1, f)?;
                write!(f, " ")?;
                write_point(p2, f)
            }
            Segment::CurveTo(p1, p2, p3) => {
                write!(f, "C")?;
                write_point(p1, f)?;
                write!(f, " ")?;
                write_point(p2, f)?;
                write!(f, " ")?;
                write_point(p3, f)
            }
            Segment::ArcTo(arc) => {
                write!(
                    f,
                    "A{},{} {} {},{} ",
                    arc.radii.x,
                    arc.radii.y,
                    arc.x_rotation,
                    u8::from(arc.large_arc),
                    u8::from(arc.sweep),
                )?;
                write_point(&arc.to, f)
            }
        }
    }
}

fn write_point(Point { x, y }: &Point, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{x},{y}")
}
