//! State of the free-range simulator: one model over one domain.

use crate::analysis::{Analysis, analyze};
use crate::error::ModelError;
use crate::format::equation;
use crate::model::{DataPoint, Domain, FunctionFamily, ModelParams};
use crate::report::ReportTable;
use crate::sampler::{SamplerSettings, evaluate_at, sample_simulator};

#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    model: ModelParams,
    domain: Domain,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            model: ModelParams::default_for(FunctionFamily::Linear),
            domain: Domain::default(),
        }
    }
}

impl Simulator {
    pub fn new(model: ModelParams, domain: Domain) -> Result<Self, ModelError> {
        domain.validate()?;
        Ok(Self { model, domain })
    }

    pub fn model(&self) -> &ModelParams {
        &self.model
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn family(&self) -> FunctionFamily {
        self.model.family()
    }

    /// Switch family, starting from that family's default parameters.
    /// Switching to the current family keeps the parameters.
    pub fn switch_family(&mut self, family: FunctionFamily) {
        if family != self.model.family() {
            self.model = ModelParams::default_for(family);
        }
    }

    pub fn set_model(&mut self, model: ModelParams) {
        self.model = model;
    }

    pub fn set_domain(&mut self, domain: Domain) -> Result<(), ModelError> {
        domain.validate()?;
        self.domain = domain;
        Ok(())
    }

    pub fn sample(&self) -> Result<Vec<DataPoint>, ModelError> {
        sample_simulator(&self.model, &self.domain)
    }

    pub fn evaluate_at(&self, x: f64) -> Option<DataPoint> {
        evaluate_at(&self.model, x, SamplerSettings::SIMULATOR.decimals)
    }

    pub fn analysis(&self) -> Analysis {
        analyze(&self.model)
    }

    pub fn equation(&self) -> String {
        equation(&self.model)
    }

    pub fn report(&self, name: &str) -> Result<ReportTable, ModelError> {
        let points = self.sample()?;
        Ok(ReportTable::for_simulation(name, &self.model, &points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearParams, QuadraticParams};

    #[test]
    fn test_switch_family_resets_params() {
        let mut sim = Simulator::default();
        sim.set_model(ModelParams::Linear(LinearParams::new(5.0, 5.0)));

        sim.switch_family(FunctionFamily::Linear);
        assert_eq!(sim.model(), &ModelParams::Linear(LinearParams::new(5.0, 5.0)));

        sim.switch_family(FunctionFamily::Quadratic);
        assert_eq!(
            sim.model(),
            &ModelParams::Quadratic(QuadraticParams::new(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_rejects_invalid_domain() {
        let mut sim = Simulator::default();
        assert!(sim.set_domain(Domain::new(0.0, 1.0, 0.0)).is_err());
        assert_eq!(sim.domain(), &Domain::default());
    }
}
