// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use errors::*;` to get the `Result` typedef and the `bail!` style helpers.
use error_chain::*;

error_chain! {

    errors {
        /// Degenerate or inconsistent maze setup, e.g. zero rows or columns.
        Configuration(reason: String) {
            description("invalid maze configuration")
            display("invalid maze configuration: {}", reason)
        }

        /// A matrix accessor was given a coordinate outside its bounds.
        IndexOutOfBounds(row: usize, col: usize, rows: usize, cols: usize) {
            description("matrix index out of bounds")
            display("index ({}, {}) is outside of a {}x{} matrix", row, col, rows, cols)
        }
    }

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }
}

/// Shorthand for failing with a `Configuration` error.
pub fn configuration_error<T, S: Into<String>>(reason: S) -> Result<T> {
    Err(ErrorKind::Configuration(reason.into()).into())
}
