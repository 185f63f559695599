use crate::model::ratings::Domain;

#[derive(Debug, Clone, PartialEq)]
pub struct DomainFiltered {
    pub values: Vec<f64>,
    pub dropped: usize,
}

/// Drops samples outside `domain`. NaN never survives a closed domain.
pub fn filter_domain(values: &[f64], domain: Domain) -> DomainFiltered {
    let kept = values
        .iter()
        .copied()
        .filter(|&v| domain.contains(v))
        .collect::<Vec<_>>();
    DomainFiltered {
        dropped: values.len() - kept.len(),
        values: kept,
    }
}
