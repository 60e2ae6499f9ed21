use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DiseaseError {
    #[error(
        "disease periods must satisfy latent < incubation < recovery \
         (got latent_mu={latent}, incubation_mu={incubation}, recovery_mu={recovery})"
    )]
    UnsortedPeriods { latent: f64, incubation: f64, recovery: f64 },

    #[error(
        "rounded disease periods must satisfy 1 <= latent < incubation < recovery \
         (got {latent}, {incubation}, {recovery})"
    )]
    DegeneratePeriods { latent: f64, incubation: f64, recovery: f64 },

    #[error("{name} must be finite and non-negative (got {value})")]
    InvalidSigma { name: &'static str, value: f64 },

    #[error("{name} exceeds the limit of {max} ticks (got {value})", max = crate::MAX_PERIOD_TICKS)]
    PeriodTooLong { name: &'static str, value: f64 },

    #[error("{name} is zero after a noisy period, so its fixed value can be overtaken")]
    FixedAfterNoisy { name: &'static str },
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;
