use super::catalogue::{Expectation, HEALTH_PREVIEW_CHARS, Scenario, ScenarioId};
use crate::{
    Error, Result,
    api::{ApiClient, ProbeRequest},
    contract::{FieldExpectation, check_validation_response},
};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, error, info};

pub const PASS_LINE: &str = "OK: smoke test passed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub passed: Vec<ScenarioId>,
    pub requests_sent: usize,
}

/// Runs scenarios one after another and stops at the first violation.
///
/// Diagnostics for each step go to `out`: a numbered banner, then the body
/// preview (health) or the pretty-printed JSON body (validation steps).
pub struct Runner<C, W> {
    client: C,
    out: W,
    strict: bool,
}

impl<C: ApiClient, W: Write> Runner<C, W> {
    pub fn new(client: C, out: W, strict: bool) -> Self {
        Self {
            client,
            out,
            strict,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self, scenarios: &[Scenario]) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (index, scenario) in scenarios.iter().enumerate() {
            writeln!(self.out, "{}) {}", index + 1, scenario.title)?;
            info!("Running scenario {}", scenario.id);

            if let Err(e) = self.run_scenario(scenario, &mut report).await {
                error!("Scenario {} failed: {}", scenario.id, e);
                return Err(e);
            }

            report.passed.push(scenario.id);
        }

        writeln!(self.out, "{}", PASS_LINE)?;
        info!(
            "All {} scenarios passed ({} requests)",
            report.passed.len(),
            report.requests_sent
        );

        Ok(report)
    }

    async fn run_scenario(&mut self, scenario: &Scenario, report: &mut RunReport) -> Result<()> {
        match &scenario.expectation {
            Expectation::Reachable => {
                let request = single_request(scenario)?;
                self.check_reachable(scenario.id, request, report).await
            }
            Expectation::Validation(expectation) => {
                let request = single_request(scenario)?;
                self.check_validation(scenario.id, request, expectation, report)
                    .await
            }
            Expectation::NoServerError => {
                for request in &scenario.requests {
                    self.check_no_server_error(scenario.id, request, report)
                        .await?;
                }
                Ok(())
            }
        }
    }

    async fn check_reachable(
        &mut self,
        id: ScenarioId,
        request: &ProbeRequest,
        report: &mut RunReport,
    ) -> Result<()> {
        let response = self.client.send(request).await?;
        report.requests_sent += 1;

        if response.status >= 400 {
            return Err(Error::violation(
                id.as_str(),
                format!("{} returned status {}", request, response.status),
            ));
        }

        writeln!(self.out, "{}", response.preview(HEALTH_PREVIEW_CHARS))?;
        Ok(())
    }

    async fn check_validation(
        &mut self,
        id: ScenarioId,
        request: &ProbeRequest,
        expectation: &FieldExpectation,
        report: &mut RunReport,
    ) -> Result<()> {
        let response = self.client.send(request).await?;
        report.requests_sent += 1;

        match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => writeln!(self.out, "{}", serde_json::to_string_pretty(&value)?)?,
            Err(_) => writeln!(self.out, "{}", response.body)?,
        }

        let envelope = check_validation_response(&response, expectation, self.strict)
            .map_err(|reason| Error::violation(id.as_str(), reason))?;

        debug!("{} satisfied {} (fields: {:?})", request, expectation, envelope.fields());
        Ok(())
    }

    async fn check_no_server_error(
        &mut self,
        id: ScenarioId,
        request: &ProbeRequest,
        report: &mut RunReport,
    ) -> Result<()> {
        let response = self.client.send(request).await?;
        report.requests_sent += 1;

        writeln!(self.out, "{} -> {}", request, response.status)?;

        if response.status >= 500 {
            return Err(Error::violation(
                id.as_str(),
                format!("{} returned server error {}", request, response.status),
            ));
        }
        Ok(())
    }
}

fn single_request(scenario: &Scenario) -> Result<&ProbeRequest> {
    match scenario.requests.as_slice() {
        [request] => Ok(request),
        other => Err(Error::config(format!(
            "Scenario {} expects exactly one request, has {}",
            scenario.id,
            other.len()
        ))),
    }
}
