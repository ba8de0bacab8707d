use std::collections::BTreeMap;

pub(crate) const LTE_STR: &str = "\u{2264}";
pub(crate) const EQ_STR: &str = "\u{003D}";
pub(crate) const GTE_STR: &str = "\u{2265}";

/// One signed, possibly scaled, occurrence of a variable inside an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub variable: String,
    pub coefficient: f64,
    /// Cursor position right after the variable name.
    pub end: usize,
}

/// A linear expression with one coefficient per variable.
///
/// Repeated occurrences of a variable are folded together and a coefficient
/// that sums to exactly zero is removed, so `coefficients` never holds `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    pub coefficients: BTreeMap<String, f64>,
    pub end: usize,
}

impl Expression {
    pub fn coeff(&self, variable: &str) -> Option<f64> {
        self.coefficients.get(variable).copied()
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coefficients.keys().map(String::as_str)
    }

    pub(crate) fn accumulate(&mut self, variable: String, coefficient: f64) {
        let total = self.coeff(&variable).unwrap_or(0.) + coefficient;

        //exact comparison, sums like 0.1 + 0.2 - 0.3 leave a residue behind
        if total == 0. {
            self.coefficients.remove(&variable);
        } else {
            self.coefficients.insert(variable, total);
        }
    }

    pub(crate) fn negate(&mut self) {
        for coeff in self.coefficients.values_mut() {
            *coeff = -*coeff;
        }
    }
}

/// Relation between the left and right hand side of a restriction.
///
/// The discriminants are the codes the downstream solver expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum RelationalSign {
    LessOrEqual = 1,
    Equal = 0,
    GreaterOrEqual = -1,
}

impl RelationalSign {
    pub fn code(self) -> i8 {
        self as i8
    }
}

impl serde::Serialize for RelationalSign {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

impl std::fmt::Display for RelationalSign {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RelationalSign::LessOrEqual => write!(f, "{}", LTE_STR),
            RelationalSign::Equal => write!(f, "{}", EQ_STR),
            RelationalSign::GreaterOrEqual => write!(f, "{}", GTE_STR),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    pub expression: Expression,
    pub sign: RelationalSign,
    pub bound: f64,
}

/// States that `variable` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignRestriction {
    pub variable: String,
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }

        for (i, (var, coeff)) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(
                f,
                "{} {} {}",
                if *coeff >= 0. { "+" } else { "-" },
                coeff.abs(),
                var
            )?;
        }

        Ok(())
    }
}

impl std::fmt::Display for Restriction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.expression, self.sign, self.bound)
    }
}

impl std::fmt::Display for SignRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} 0", self.variable, GTE_STR)
    }
}
