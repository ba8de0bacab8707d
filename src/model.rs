use crate::problem::{Expression, RelationalSign, Restriction, SignRestriction, GTE_STR};

use log::{info, trace};
use serde::Serialize;

use std::collections::BTreeSet;

/// Dense numeric form of a linear program, in minimization form.
///
/// Every column index refers to `variables`, which is sorted. Row `i` of
/// `matrix`, `vector_m[i]` and `vector_sign[i]` together describe restriction
/// `i` in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub variables: Vec<String>,
    pub matrix: nalgebra::DMatrix<f64>,
    pub vector_m: nalgebra::DVector<f64>,
    pub vector_n: nalgebra::DVector<f64>,
    pub vector_sign: Vec<RelationalSign>,
    pub binary_vector_n: Vec<u8>,
}

impl Model {
    pub fn assemble(
        objective: &Expression,
        restrictions: &[Restriction],
        sign_restrictions: &[SignRestriction],
    ) -> Self {
        let restricted: BTreeSet<&str> = sign_restrictions
            .iter()
            .map(|sign_restriction| sign_restriction.variable.as_str())
            .collect();

        let mut names: BTreeSet<&str> = objective.variables().collect();

        for restriction in restrictions {
            names.extend(restriction.expression.variables());
        }

        names.extend(restricted.iter().copied());

        let variables: Vec<String> = names.into_iter().map(str::to_string).collect();

        let m = restrictions.len();
        let n = variables.len();

        let mut matrix = nalgebra::DMatrix::zeros(m, n);
        let mut vector_m = nalgebra::DVector::zeros(m);
        let mut vector_sign = Vec::with_capacity(m);

        for (i, restriction) in restrictions.iter().enumerate() {
            for (j, var) in variables.iter().enumerate() {
                if let Some(coeff) = restriction.expression.coeff(var) {
                    matrix[(i, j)] = coeff;
                }
            }

            vector_m[i] = restriction.bound;
            vector_sign.push(restriction.sign);
        }

        let vector_n = nalgebra::DVector::from_iterator(
            n,
            variables
                .iter()
                .map(|var| objective.coeff(var).unwrap_or(0.)),
        );

        let binary_vector_n = variables
            .iter()
            .map(|var| u8::from(restricted.contains(var.as_str())))
            .collect();

        let model = Model {
            variables,
            matrix,
            vector_m,
            vector_n,
            vector_sign,
            binary_vector_n,
        };

        info!(
            "assembled model with {} restrictions and {} variables",
            model.rows(),
            model.cols()
        );

        trace!("\n{}", model);

        model
    }

    /// Number of restrictions.
    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of variables.
    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelRecord<'a> {
    variables: &'a [String],
    matrix: Vec<Vec<f64>>,
    vector_m: &'a [f64],
    vector_n: &'a [f64],
    vector_sign: &'a [RelationalSign],
    binary_vector_n: &'a [u8],
}

impl Serialize for Model {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let matrix = self
            .matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();

        ModelRecord {
            variables: &self.variables,
            matrix,
            vector_m: self.vector_m.as_slice(),
            vector_n: self.vector_n.as_slice(),
            vector_sign: &self.vector_sign,
            binary_vector_n: &self.binary_vector_n,
        }
        .serialize(serializer)
    }
}

impl Model {
    fn display_row<'a>(
        &self,
        f: &mut std::fmt::Formatter,
        coeffs: impl Iterator<Item = &'a f64>,
    ) -> std::fmt::Result {
        let mut empty = true;

        for (coeff, var) in coeffs.zip(&self.variables) {
            if *coeff == 0. {
                continue;
            }

            write!(
                f,
                "{} {} {} ",
                if *coeff > 0. { "+" } else { "-" },
                coeff.abs(),
                var
            )?;

            empty = false;
        }

        if empty {
            write!(f, "0 ")?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "minimize")?;
        self.display_row(f, self.vector_n.iter())?;

        writeln!(f, "\n\nsubject to")?;

        for (i, row) in self.matrix.row_iter().enumerate() {
            self.display_row(f, row.iter())?;
            writeln!(f, "{} {}", self.vector_sign[i], self.vector_m[i])?;
        }

        writeln!(f, "\nwith the bounds")?;

        for (var, &restricted) in self.variables.iter().zip(&self.binary_vector_n) {
            if restricted == 1 {
                writeln!(f, "{} {} 0", var, GTE_STR)?;
            } else {
                writeln!(f, "{} free", var)?;
            }
        }

        Ok(())
    }
}
