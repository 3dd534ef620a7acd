use thiserror::Error;

/// Feil som kan stoppe en kjøring. Per-food lookup-feil hører IKKE hjemme her:
/// de absorberes lokalt i nutrition-modulen som manglende verdier.
#[derive(Debug, Error)]
pub enum FuelError {
    #[error("missing nutrition API key (set FDC_API_KEY)")]
    MissingApiKey,

    #[error("dataset fetch failed: {0}")]
    DatasetFetch(String),

    #[error("dataset parse: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown workout type label {0:?} (expected Strength, HIIT, Cardio or Yoga)")]
    UnknownWorkoutType(String),

    #[error("food catalog invariant violated: {0}")]
    Catalog(String),

    #[error("not enough usable rows for {0}")]
    EmptyTable(&'static str),

    #[error("model fit failed: {0}")]
    Modeling(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let err = FuelError::UnknownWorkoutType("Crossfit".to_string());
        assert_eq!(
            err.to_string(),
            "unknown workout type label \"Crossfit\" (expected Strength, HIIT, Cardio or Yoga)"
        );

        let err = FuelError::MissingApiKey;
        assert!(err.to_string().contains("FDC_API_KEY"));

        let err = FuelError::EmptyTable("linear regression");
        assert!(err.to_string().contains("linear regression"));
    }
}
