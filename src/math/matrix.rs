//! Determinants and inverses of fixed 2x2 / 3x3 matrices.
//!
//! Matrices are plain row-major arrays addressed as `m[row][col]`. Dimension is
//! tiny and fixed, so the formulas are evaluated directly:
//!
//! - `det2 = m00*m11 - m01*m10`
//! - `det3` is cofactor expansion along row 0 with signs `+ - +`
//! - `inverse3[r][c] = (-1)^(r+c) * det2(minor(m, c, r)) / det3` (adjugate)
//!
//! Inversion always writes into a fresh array, so the input can never alias the
//! output.

use crate::error::NumericError;

/// Row-major 2x2 matrix.
pub type Matrix2 = [[f64; 2]; 2];

/// Row-major 3x3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

pub type Vector3 = [f64; 3];

pub const IDENTITY_3X3: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

pub fn determinant_2x2(m: &Matrix2) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// 2x2 minor of `m` with `row` and `col` removed.
pub fn minor_3x3(m: &Matrix3, row: usize, col: usize) -> Matrix2 {
    let mut out = [[0.0; 2]; 2];
    let rows = (0..3).filter(|&r| r != row);
    for (i, r) in rows.enumerate() {
        let cols = (0..3).filter(|&c| c != col);
        for (j, c) in cols.enumerate() {
            out[i][j] = m[r][c];
        }
    }
    out
}

pub fn determinant_3x3(m: &Matrix3) -> f64 {
    let term_a = m[0][0] * determinant_2x2(&minor_3x3(m, 0, 0));
    let term_b = m[0][1] * determinant_2x2(&minor_3x3(m, 0, 1));
    let term_c = m[0][2] * determinant_2x2(&minor_3x3(m, 0, 2));
    term_a - term_b + term_c
}

/// Inverse of a 3x3 matrix via the adjugate.
///
/// No singularity check: a zero determinant yields infinities/NaNs under
/// IEEE-754 division. Use [`try_inverse_3x3`] to reject singular input.
pub fn inverse_3x3(m: &Matrix3) -> Matrix3 {
    adjugate_over(m, determinant_3x3(m))
}

/// Inverse of a 3x3 matrix, failing with `SingularMatrix` when the
/// determinant is zero or non-finite.
pub fn try_inverse_3x3(m: &Matrix3) -> Result<Matrix3, NumericError> {
    let determinant = determinant_3x3(m);
    if determinant == 0.0 || !determinant.is_finite() {
        return Err(NumericError::SingularMatrix { determinant });
    }
    Ok(adjugate_over(m, determinant))
}

fn adjugate_over(m: &Matrix3, determinant: f64) -> Matrix3 {
    let mut inverse = [[0.0; 3]; 3];
    for (row, out_row) in inverse.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            // Transposed minor: delete row `col`, column `row`.
            let cofactor = determinant_2x2(&minor_3x3(m, col, row));
            let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
            *cell = sign * cofactor / determinant;
        }
    }
    inverse
}

pub fn mul_3x3(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

pub fn mul_vec_3x3(m: &Matrix3, v: &Vector3) -> Vector3 {
    let mut out = [0.0; 3];
    for (i, cell) in out.iter_mut().enumerate() {
        *cell = m[i].iter().zip(v).map(|(a, b)| a * b).sum();
    }
    out
}

/// Render a matrix one row per line as `[ c0, c1, ... ]`, each cell `%8.3f`.
///
/// Matches the debug layout `[ ... ]` with cells right-aligned in 8 columns.
pub fn format_matrix<const C: usize>(m: &[[f64; C]]) -> String {
    let mut out = String::new();
    for row in m {
        out.push('[');
        for (col, value) in row.iter().enumerate() {
            if col != 0 {
                out.push(',');
            }
            out.push_str(&format!(" {value:8.3}"));
        }
        out.push_str(" ]\n");
    }
    out
}

pub fn print_matrix<const C: usize>(m: &[[f64; C]]) {
    print!("{}", format_matrix(m));
}
