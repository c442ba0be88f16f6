// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cover::Cover, implicant::MatrixDisplayFormat};
use std::{borrow::Cow, fmt};

impl fmt::Debug for Cover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cover")
            .field(&format_args!(
                "{}",
                self.matrix_display().with_cube_separator(", ", false)
            ))
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    format: MatrixDisplayFormat,
    cube_separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            format: MatrixDisplayFormat::default(),
            cube_separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_cube_separator(
        mut self,
        separator: impl Into<Cow<'a, str>>,
        print_last: bool,
    ) -> Self {
        self.cube_separator = (separator.into(), print_last);
        self
    }
}

impl<'a> fmt::Display for CoverMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cube_count = self.cover.cube_count();
        for (elem_ix, elem) in self.cover.elements().iter().enumerate() {
            write!(f, "{}", elem.matrix_display().with_format(self.format))?;

            let (cube_separator, print_last) = &self.cube_separator;
            if *print_last || elem_ix < cube_count - 1 {
                write!(f, "{}", cube_separator)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implicant::Implicant;

    #[test]
    fn test_matrix_display() {
        let cover = Cover::new(
            3,
            [
                Implicant::from_numeric(&[1, 1, 2]).unwrap(),
                Implicant::from_numeric(&[0, 2, 0]).unwrap(),
            ],
        );
        assert_eq!(cover.matrix_display().to_string(), "0-0\n11-\n");
        assert_eq!(
            cover
                .matrix_display()
                .with_format(MatrixDisplayFormat::Numeric)
                .with_cube_separator(" | ", false)
                .to_string(),
            "020 | 112"
        );
        assert_eq!(format!("{:?}", cover), "Cover(0-0, 11-)");
        assert_eq!(format!("{:?}", Cover::empty(3)), "Cover()");
    }
}
