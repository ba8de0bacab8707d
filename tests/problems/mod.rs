use lptext::RelationalSign::*;
use lptext::*;

pub fn assert_model(
    result: &Result<Model, CompileError>,
    variables: &[&str],
    matrix: &[&[f64]],
    vector_m: &[f64],
    vector_n: &[f64],
    vector_sign: &[RelationalSign],
    binary_vector_n: &[u8],
) {
    let model = match result {
        Ok(model) => model,
        Err(e) => panic!("compilation failed: {}", e),
    };

    assert_eq!(model.variables, variables);
    assert_eq!(model.rows(), matrix.len(), "rows");
    assert_eq!(model.cols(), variables.len(), "cols");

    for (i, row) in matrix.iter().enumerate() {
        let actual: Vec<f64> = model.matrix.row(i).iter().copied().collect();
        assert_eq!(&actual, row, "row {}", i);
    }

    assert_eq!(model.vector_m.as_slice(), vector_m, "vector_m");
    assert_eq!(model.vector_n.as_slice(), vector_n, "vector_n");
    assert_eq!(model.vector_sign, vector_sign, "vector_sign");
    assert_eq!(model.binary_vector_n, binary_vector_n, "binary_vector_n");
}

pub fn assert_parse_error(
    result: &Result<Model, CompileError>,
    expected_line: usize,
    expected_kind: ParseErrorKind,
) {
    match result {
        Err(CompileError::Statement {
            line_number,
            source,
            ..
        }) => {
            assert_eq!(*line_number, expected_line, "{}", source);
            assert_eq!(source.kind, expected_kind, "{}", source);
        }

        _ => panic!("not a parse error: {:?}", result),
    }
}

pub struct TestProblem {
    pub text: &'static str,
    pub check_result: Box<dyn FnOnce(Result<Model, CompileError>)>,
}

impl TestProblem {
    fn new<F: FnOnce(Result<Model, CompileError>) + 'static>(
        text: &'static str,
        check_result: F,
    ) -> Self {
        Self {
            text,
            check_result: Box::new(check_result),
        }
    }
}

pub fn canonical_two_variables() -> TestProblem {
    let text = "min x + y\nx + y <= 4\nx - y = 0\n\nx >= 0\ny >= 0\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x", "y"],
            &[&[1., 1.], &[1., -1.]],
            &[4., 0.],
            &[1., 1.],
            &[LessOrEqual, Equal],
            &[1, 1],
        )
    })
}

pub fn maximize_is_negated() -> TestProblem {
    let text = "max 3x1 + 2x2\n2x1 + x2 <= 18\n2x1 + 3x2 <= 42\n3x1 + x2 <= 24\n\nx1 >= 0\nx2 >= 0\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x1", "x2"],
            &[&[2., 1.], &[2., 3.], &[3., 1.]],
            &[18., 42., 24.],
            &[-3., -2.],
            &[LessOrEqual, LessOrEqual, LessOrEqual],
            &[1, 1],
        )
    })
}

//what a user types at the prompts, including stray spaces
pub fn interactive_transcript() -> TestProblem {
    let text = "  max  5a + 4b + 3c \n2a + 3b + c <= 5\n 4a + b + 2c <= 11 \n3a + 4b + 2c <= 8\n  \n a >= 0\nb >= 0\nc>=0\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["a", "b", "c"],
            &[&[2., 3., 1.], &[4., 1., 2.], &[3., 4., 2.]],
            &[5., 11., 8.],
            &[-5., -4., -3.],
            &[LessOrEqual, LessOrEqual, LessOrEqual],
            &[1, 1, 1],
        )
    })
}

pub fn variables_sorted_bytewise() -> TestProblem {
    let text = "min x10 + x2 + X\nx2 + x10 >= 1\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["X", "x10", "x2"],
            &[&[0., 1., 1.]],
            &[1.],
            &[1., 1., 1.],
            &[GreaterOrEqual],
            &[0, 0, 0],
        )
    })
}

pub fn restriction_missing_variables() -> TestProblem {
    let text = "min x + y + z\nx <= 1\ny = 2\nz >= 3\n\nx >= 0\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x", "y", "z"],
            &[&[1., 0., 0.], &[0., 1., 0.], &[0., 0., 1.]],
            &[1., 2., 3.],
            &[1., 1., 1.],
            &[LessOrEqual, Equal, GreaterOrEqual],
            &[1, 0, 0],
        )
    })
}

pub fn sign_restriction_only_variable() -> TestProblem {
    let text = "max y\ny <= 2\n\nslack >= 0\ny >= 0\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["slack", "y"],
            &[&[0., 1.]],
            &[2.],
            &[0., -1.],
            &[LessOrEqual],
            &[1, 1],
        )
    })
}

pub fn unrestricted_variables() -> TestProblem {
    let text = "min x - y\nx + y >= -1\n\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x", "y"],
            &[&[1., 1.]],
            &[-1.],
            &[1., -1.],
            &[GreaterOrEqual],
            &[0, 0],
        )
    })
}

pub fn cancelled_objective_variable() -> TestProblem {
    let text = "min x + y - x\nx + y <= 1\nx - x + y >= 0\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x", "y"],
            &[&[1., 1.], &[0., 1.]],
            &[1., 0.],
            &[0., 1.],
            &[LessOrEqual, GreaterOrEqual],
            &[0, 0],
        )
    })
}

pub fn coefficient_forms() -> TestProblem {
    let text = "min 2*a - .5b + +c\n-a + 3*b - -2c <= 1.5\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["a", "b", "c"],
            &[&[-1., 3., 2.]],
            &[1.5],
            &[2., -0.5, 1.],
            &[LessOrEqual],
            &[0, 0, 0],
        )
    })
}

pub fn strict_inequalities() -> TestProblem {
    let text = "min x\nx < 5\nx > 1\n\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x"],
            &[&[1.], &[1.]],
            &[5., 1.],
            &[1.],
            &[LessOrEqual, GreaterOrEqual],
            &[0],
        )
    })
}

pub fn no_restrictions() -> TestProblem {
    let text = "max x\n\nx >= 0\n";

    TestProblem::new(text, |result| {
        assert_model(&result, &["x"], &[], &[], &[-1.], &[], &[1])
    })
}

pub fn crlf_line_endings() -> TestProblem {
    let text = "min x + y\r\nx + y <= 4\r\n\r\nx >= 0\r\n\r\n";

    TestProblem::new(text, |result| {
        assert_model(
            &result,
            &["x", "y"],
            &[&[1., 1.]],
            &[4.],
            &[1., 1.],
            &[LessOrEqual],
            &[1, 0],
        )
    })
}

pub fn missing_direction_keyword() -> TestProblem {
    let text = "3x + 2y\nx <= 1\n\n";

    TestProblem::new(text, |result| {
        assert_parse_error(&result, 1, ParseErrorKind::MissingDirectionKeyword)
    })
}

pub fn invalid_variable() -> TestProblem {
    let text = "min x\nx + 2 <= 1\n\n";

    TestProblem::new(text, |result| {
        assert_parse_error(&result, 2, ParseErrorKind::InvalidVariable)
    })
}

pub fn missing_relational_sign() -> TestProblem {
    let text = "min x\nx <= 1\nx 4\n\n";

    TestProblem::new(text, |result| {
        assert_parse_error(&result, 3, ParseErrorKind::MissingRelationalSign)
    })
}

pub fn invalid_bound() -> TestProblem {
    let text = "min x\nx <= y\n\n";

    TestProblem::new(text, |result| {
        assert_parse_error(&result, 2, ParseErrorKind::InvalidBound)
    })
}

pub fn non_positive_sign_restriction() -> TestProblem {
    let text = "min x\nx >= -4\n\nx <= 0\n\n";

    TestProblem::new(text, |result| {
        assert_parse_error(&result, 4, ParseErrorKind::InvalidSignRestriction)
    })
}

pub fn free_sign_restriction() -> TestProblem {
    let text = "min x\n\nx = 0\n\n";

    TestProblem::new(text, |result| {
        assert_parse_error(&result, 3, ParseErrorKind::InvalidSignRestriction)
    })
}

pub fn empty_input() -> TestProblem {
    TestProblem::new("", |result| match result {
        Err(CompileError::MissingObjective) => (),
        _ => panic!("expected a missing objective: {:?}", result),
    })
}
