use treeplan_core::{OptimizerError, OptimizerErrorCode, Vertex};
use rstest::rstest;

#[rstest]
#[case(OptimizerError::EmptyRequiredSet, OptimizerErrorCode::EmptyRequiredSet, "OPTIMIZER_EMPTY_REQUIRED_SET")]
#[case(
    OptimizerError::UnknownVertex { vertex: Vertex::new(4) },
    OptimizerErrorCode::UnknownVertex,
    "OPTIMIZER_UNKNOWN_VERTEX",
)]
#[case(
    OptimizerError::InvalidRoundBudget { got: 0 },
    OptimizerErrorCode::InvalidRoundBudget,
    "OPTIMIZER_INVALID_ROUND_BUDGET",
)]
#[case(
    OptimizerError::RoundBudgetExhausted { rounds: 3 },
    OptimizerErrorCode::RoundBudgetExhausted,
    "OPTIMIZER_ROUND_BUDGET_EXHAUSTED",
)]
#[case(
    OptimizerError::Disconnected { components: 2 },
    OptimizerErrorCode::Disconnected,
    "OPTIMIZER_DISCONNECTED",
)]
#[case(
    OptimizerError::InvariantViolation { invariant: "test", vertex: Vertex::new(1) },
    OptimizerErrorCode::InvariantViolation,
    "OPTIMIZER_INVARIANT_VIOLATION",
)]
fn returns_expected_optimizer_code(
    #[case] error: OptimizerError,
    #[case] expected: OptimizerErrorCode,
    #[case] stable: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), stable);
    assert_eq!(expected.to_string(), stable);
}

#[rstest]
#[case(OptimizerError::EmptyRequiredSet, "at least one required vertex must be supplied")]
#[case(
    OptimizerError::UnknownVertex { vertex: Vertex::new(17) },
    "required vertex 17 is not present in the graph",
)]
#[case(
    OptimizerError::Disconnected { components: 3 },
    "required vertices span 3 disconnected components",
)]
fn renders_human_readable_messages(#[case] error: OptimizerError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn only_disconnection_counts_as_disconnected() {
    assert!(OptimizerError::Disconnected { components: 2 }.is_disconnected());
    assert!(!OptimizerError::EmptyRequiredSet.is_disconnected());
}
