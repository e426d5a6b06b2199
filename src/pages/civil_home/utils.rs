use crate::api::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationFilter {
    #[default]
    All,
    Unpaid,
    Paid,
}

impl ViolationFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ViolationFilter::All => "All",
            ViolationFilter::Unpaid => "Unpaid",
            ViolationFilter::Paid => "Paid",
        }
    }

    pub fn matches(&self, violation: &Violation) -> bool {
        match self {
            ViolationFilter::All => true,
            ViolationFilter::Unpaid => !violation.paid,
            ViolationFilter::Paid => violation.paid,
        }
    }
}

pub fn apply_filter(violations: &[Violation], filter: ViolationFilter) -> Vec<Violation> {
    violations
        .iter()
        .filter(|v| filter.matches(v))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViolationSummary {
    pub total: usize,
    pub unpaid: usize,
    pub paid: usize,
    /// Sum of fines still owed, not of all fines ever issued.
    pub outstanding_amount: f64,
}

pub fn summarize(violations: &[Violation]) -> ViolationSummary {
    let unpaid: Vec<&Violation> = violations.iter().filter(|v| !v.paid).collect();
    ViolationSummary {
        total: violations.len(),
        unpaid: unpaid.len(),
        paid: violations.len() - unpaid.len(),
        outstanding_amount: unpaid.iter().map(|v| v.fine_amount).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(id: &str, paid: bool, fine: f64) -> Violation {
        Violation {
            id: id.into(),
            license_plate: "01234-116-16".into(),
            violation_type: "speeding".into(),
            location: "RN5, Alger".into(),
            violation_date: "2025-03-14T09:30".into(),
            fine_amount: fine,
            paid,
            payment_date: None,
            insurance_policy: None,
            notes: None,
            officer_id: None,
        }
    }

    #[test]
    fn filters_partition_the_list() {
        let all = vec![
            violation("v1", false, 5000.0),
            violation("v2", true, 3000.0),
            violation("v3", false, 2000.0),
        ];
        assert_eq!(apply_filter(&all, ViolationFilter::All).len(), 3);
        assert_eq!(apply_filter(&all, ViolationFilter::Unpaid).len(), 2);
        assert_eq!(apply_filter(&all, ViolationFilter::Paid).len(), 1);
    }

    #[test]
    fn summary_counts_and_sums_only_unpaid_fines() {
        let all = vec![
            violation("v1", false, 5000.0),
            violation("v2", true, 3000.0),
            violation("v3", false, 2000.0),
        ];
        let summary = summarize(&all);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.unpaid, 2);
        assert_eq!(summary.paid, 1);
        assert_eq!(summary.outstanding_amount, 7000.0);
    }

    #[test]
    fn empty_list_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.outstanding_amount, 0.0);
    }
}
