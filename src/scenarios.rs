//! Fixed inputs with their exactly expected output.

use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub input: Vec<i32>,
    pub expected: Vec<i32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("scenario `{name}` failed: expected {expected:?}, got {actual:?}")]
    Mismatch {
        name: &'static str,
        expected: Vec<i32>,
        actual: Vec<i32>,
    },
}

static SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    let descending = (1..=20).rev().collect::<Vec<i32>>();

    vec![
        Scenario {
            name: "empty",
            input: vec![],
            expected: vec![],
        },
        Scenario {
            name: "single",
            input: vec![2],
            expected: vec![2],
        },
        Scenario {
            name: "duplicates",
            input: vec![5, 1, 67, 5, 2, 3, 1, 1, 1, 322],
            expected: vec![1, 1, 1, 1, 2, 3, 5, 5, 67, 322],
        },
        Scenario {
            name: "negative",
            input: vec![2, -2],
            expected: vec![-2, 2],
        },
        Scenario {
            name: "descending",
            input: descending.clone(),
            expected: (1..=20).collect(),
        },
        Scenario {
            name: "descending_twice",
            input: descending.iter().chain(descending.iter()).copied().collect(),
            expected: (1..=20).flat_map(|x| [x, x]).collect(),
        },
    ]
});

pub fn scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

/// Runs `sort_fn` on every scenario and returns how many passed, or the first mismatch.
pub fn verify<F>(mut sort_fn: F) -> Result<usize, ScenarioError>
where
    F: FnMut(Vec<i32>) -> Vec<i32>,
{
    for scenario in scenarios() {
        let actual = sort_fn(scenario.input.clone());

        if actual != scenario.expected {
            return Err(ScenarioError::Mismatch {
                name: scenario.name,
                expected: scenario.expected.clone(),
                actual,
            });
        }

        tracing::debug!(scenario = scenario.name, len = actual.len(), "scenario ok");
    }

    Ok(scenarios().len())
}
