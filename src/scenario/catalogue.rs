use crate::{
    Error, Result,
    api::ProbeRequest,
    config::ChecksConfig,
    contract::FieldExpectation,
};
use serde_json::json;
use std::{fmt, str::FromStr};

pub const HEALTH_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    Health,
    MalformedBody,
    WrongType,
    MissingField,
    QueryParam,
    PathParam,
    NestedField,
    NoServerErrors,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 8] = [
        Self::Health,
        Self::MalformedBody,
        Self::WrongType,
        Self::MissingField,
        Self::QueryParam,
        Self::PathParam,
        Self::NestedField,
        Self::NoServerErrors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::MalformedBody => "malformed-body",
            Self::WrongType => "wrong-type",
            Self::MissingField => "missing-field",
            Self::QueryParam => "query-param",
            Self::PathParam => "path-param",
            Self::NestedField => "nested-field",
            Self::NoServerErrors => "no-server-errors",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|id| id.as_str()).collect();
                Error::config(format!(
                    "Unknown scenario '{}'. Known scenarios: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// Status below 400; the body preview is printed.
    Reachable,
    /// Status 422 with the given field in the error envelope.
    Validation(FieldExpectation),
    /// Every probe answers below 500.
    NoServerError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: &'static str,
    pub requests: Vec<ProbeRequest>,
    pub expectation: Expectation,
}

impl Scenario {
    fn single(
        id: ScenarioId,
        title: &'static str,
        request: ProbeRequest,
        expectation: Expectation,
    ) -> Self {
        Self {
            id,
            title,
            requests: vec![request],
            expectation,
        }
    }
}

/// The six scenarios every run performs, in order.
pub fn core_suite() -> Vec<Scenario> {
    vec![
        Scenario::single(
            ScenarioId::Health,
            "Health check",
            ProbeRequest::get("/"),
            Expectation::Reachable,
        ),
        Scenario::single(
            ScenarioId::MalformedBody,
            "Invalid JSON -> field=body",
            ProbeRequest::post_raw("/test", "invalid json"),
            Expectation::Validation(FieldExpectation::first("body")),
        ),
        Scenario::single(
            ScenarioId::WrongType,
            "Wrong field type -> field=age",
            ProbeRequest::post_json("/test-model", json!({"name": "Jonas", "age": "x"})),
            Expectation::Validation(FieldExpectation::any("age")),
        ),
        Scenario::single(
            ScenarioId::MissingField,
            "Missing required field -> field=name",
            ProbeRequest::post_json("/test-model", json!({"age": 30})),
            Expectation::Validation(FieldExpectation::any("name")),
        ),
        Scenario::single(
            ScenarioId::QueryParam,
            "Query param error -> field=query.limit",
            ProbeRequest::get("/users/123?limit=abc"),
            Expectation::Validation(FieldExpectation::any("query.limit")),
        ),
        Scenario::single(
            ScenarioId::PathParam,
            "Path param error -> field=path.user_id",
            ProbeRequest::get("/users/not_an_int?limit=10"),
            Expectation::Validation(FieldExpectation::any("path.user_id")),
        ),
    ]
}

pub fn extended_suite() -> Vec<Scenario> {
    vec![
        Scenario::single(
            ScenarioId::NestedField,
            "Nested field error -> field=items.0.name",
            ProbeRequest::post_json(
                "/test-model",
                json!({"name": "Jonas", "age": 30, "items": [{}]}),
            ),
            Expectation::Validation(FieldExpectation::any("items.0.name")),
        ),
        Scenario {
            id: ScenarioId::NoServerErrors,
            title: "Invalid inputs never produce 5xx",
            requests: vec![
                ProbeRequest::post_raw("/test", "invalid json"),
                ProbeRequest::post_json("/test-model", json!({"age": "not_a_number"})),
                ProbeRequest::get("/users/not_an_int?limit=abc"),
            ],
            expectation: Expectation::NoServerError,
        },
    ]
}

/// Builds the ordered run plan for the given check settings.
pub fn plan(checks: &ChecksConfig) -> Result<Vec<Scenario>> {
    let skipped = checks
        .skip
        .iter()
        .map(|s| s.parse::<ScenarioId>())
        .collect::<Result<Vec<_>>>()?;

    let mut scenarios = core_suite();
    if checks.extended {
        scenarios.extend(extended_suite());
    }
    scenarios.retain(|s| !skipped.contains(&s.id));

    Ok(scenarios)
}
