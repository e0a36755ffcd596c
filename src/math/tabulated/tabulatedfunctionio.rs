use std::io::{
    Read,
    Write
};

use thiserror::Error;
use tracing::debug;

use crate::math::function::functionerror::FunctionError;
use crate::math::function::functionpoint::FunctionPoint;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctions::TabulatedFunctions;

// ─────────────────────────────────────────────────────────────────────────────
// Point streams
// ─────────────────────────────────────────────────────────────────────────────
//
// Binary: big-endian i32 point count, then (x, y) as big-endian f64 pairs.
// Text:   whitespace separated tokens, point count then x0 y0 x1 y1 ...
//
// Writers flush but never close the stream. Readers build the result through
// the factory of the given context.

#[derive(Debug, Error)]
pub enum TabulatedFunctionIOError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error("malformed point stream: {0}")]
    MalformedStream(String),

    #[error(transparent)]
    FunctionError(#[from] FunctionError)
}

pub fn output_tabulated_function<W>(function: &dyn TabulatedFunction,
                                    out: &mut W) -> Result<(), TabulatedFunctionIOError> where
    W: Write {
    let count = i32::try_from(function.points_count())
        .map_err(|_| TabulatedFunctionIOError::MalformedStream(
            format!("{} points do not fit the count field", function.points_count())
        ))?;
    out.write_all(&count.to_be_bytes())?;
    for point in function.points() {
        out.write_all(&point.x().to_be_bytes())?;
        out.write_all(&point.y().to_be_bytes())?;
    }
    out.flush()?;
    Ok(())
}

pub fn input_tabulated_function<R>(context: &TabulatedFunctions,
                                   input: &mut R) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionIOError> where
    R: Read {
    let mut count_bytes = [0u8; 4];
    input.read_exact(&mut count_bytes)?;
    let count = i32::from_be_bytes(count_bytes);
    let count = usize::try_from(count)
        .map_err(|_| TabulatedFunctionIOError::MalformedStream(format!("negative point count {count}")))?;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    let mut value_bytes = [0u8; 8];
    for _ in 0..count {
        input.read_exact(&mut value_bytes)?;
        let x = f64::from_be_bytes(value_bytes);
        input.read_exact(&mut value_bytes)?;
        let y = f64::from_be_bytes(value_bytes);
        points.push(FunctionPoint::new(x, y));
    }
    debug!(count, "read binary point stream");
    Ok(context.create_tabulated_function_from_points(&points)?)
}

pub fn write_tabulated_function<W>(function: &dyn TabulatedFunction,
                                   out: &mut W) -> Result<(), TabulatedFunctionIOError> where
    W: Write {
    write!(out, "{}", function.points_count())?;
    for point in function.points() {
        write!(out, " {} {}", point.x(), point.y())?;
    }
    out.flush()?;
    Ok(())
}

pub fn read_tabulated_function<R>(context: &TabulatedFunctions,
                                  input: &mut R) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionIOError> where
    R: Read {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let count = next_number(&mut tokens, "point count")?;
    if !(count >= 0.0) || count.fract() != 0.0 || count > i32::MAX as f64 {
        return Err(TabulatedFunctionIOError::MalformedStream(format!("invalid point count {count}")));
    }
    let count = count as usize;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let x = next_number(&mut tokens, "x coordinate")?;
        let y = next_number(&mut tokens, "y coordinate")?;
        points.push(FunctionPoint::new(x, y));
    }
    debug!(count, "read text point stream");
    Ok(context.create_tabulated_function_from_points(&points)?)
}

fn next_number<'a, I>(tokens: &mut I, what: &str) -> Result<f64, TabulatedFunctionIOError> where
    I: Iterator<Item = &'a str> {
    let token = tokens
        .next()
        .ok_or_else(|| TabulatedFunctionIOError::MalformedStream(format!("expected {what}, found end of stream")))?;
    token
        .parse::<f64>()
        .map_err(|_| TabulatedFunctionIOError::MalformedStream(format!("expected {what}, found '{token}'")))
}
